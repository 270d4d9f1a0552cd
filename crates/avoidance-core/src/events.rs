//! Alerts emitted at the end of an update cycle.

use serde::{Deserialize, Serialize};

use crate::assessment::DomainConditions;
use crate::enums::{AlertTag, Urgency};

/// Crew-facing alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub tag: AlertTag,
    pub message: String,
    pub urgency: Urgency,
    pub recommended_action: String,
    /// Domain snapshot, present on weather/terrain escalation alerts only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<DomainConditions>,
}
