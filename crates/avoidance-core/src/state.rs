//! Update-cycle envelope: what goes in and what comes out.

use serde::{Deserialize, Serialize};

use crate::assessment::{CollisionAssessment, TerrainAssessment, WeatherAssessment};
use crate::events::Alert;
use crate::inputs::{TerrainInput, TrackReport, WeatherInput};

/// Opaque classifier output, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectInfo {
    #[serde(rename = "type")]
    pub object_type: String,
    pub confidence: f64,
}

impl Default for ObjectInfo {
    fn default() -> Self {
        Self {
            object_type: "unknown".to_string(),
            confidence: 1.0,
        }
    }
}

/// Display summary of a resolved track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub identifier: Option<String>,
    pub flight_level: String,
    pub speed_category: String,
    pub heading_cardinal: String,
}

/// Everything needed for one update cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateFrame {
    pub ownship: TrackReport,
    pub intruder: TrackReport,
    pub ownship_info: ObjectInfo,
    pub intruder_info: ObjectInfo,
    pub weather: Option<WeatherInput>,
    pub terrain: Option<TerrainInput>,
    /// Seconds since the epoch, as stamped by ingestion.
    pub timestamp: f64,
}

/// Output of one update cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    pub ownship_info: ObjectInfo,
    pub intruder_info: ObjectInfo,
    pub ownship_track: TrackSummary,
    pub intruder_track: TrackSummary,
    /// Fused collision assessment.
    pub risk_assessment: CollisionAssessment,
    pub weather_assessment: Option<WeatherAssessment>,
    pub terrain_assessment: Option<TerrainAssessment>,
    /// Collision alert first, then weather alerts, then terrain alerts.
    pub alerts: Vec<Alert>,
    pub timestamp: f64,
}
