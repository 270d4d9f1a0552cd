//! Enumeration types used throughout the decision layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk severity shared by collision, weather and terrain assessments.
///
/// Variant order is the severity order: `None < Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "NONE",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert urgency shown to the crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "LOW",
            Urgency::Medium => "MEDIUM",
            Urgency::High => "HIGH",
            Urgency::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertTag {
    /// Resolution advisory: evasive action required.
    #[serde(rename = "RA")]
    ResolutionAdvisory,
    /// Traffic alert: prepare for evasive action.
    #[serde(rename = "TA")]
    TrafficAlert,
    #[serde(rename = "ADVISORY")]
    Advisory,
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "WEATHER_ALERT")]
    WeatherAlert,
    #[serde(rename = "WEATHER_ADVISORY")]
    WeatherAdvisory,
    #[serde(rename = "TERRAIN_ALERT")]
    TerrainAlert,
    #[serde(rename = "TERRAIN_ADVISORY")]
    TerrainAdvisory,
}

impl AlertTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertTag::ResolutionAdvisory => "RA",
            AlertTag::TrafficAlert => "TA",
            AlertTag::Advisory => "ADVISORY",
            AlertTag::Info => "INFO",
            AlertTag::WeatherAlert => "WEATHER_ALERT",
            AlertTag::WeatherAdvisory => "WEATHER_ADVISORY",
            AlertTag::TerrainAlert => "TERRAIN_ALERT",
            AlertTag::TerrainAdvisory => "TERRAIN_ADVISORY",
        }
    }
}

impl fmt::Display for AlertTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environmental risk domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Weather,
    Terrain,
}

/// Which direction of a raw metric is more dangerous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Larger values are worse (wind, slope). Compared with `>`.
    HigherIsWorse,
    /// Smaller values are worse (visibility, clearance). Compared with `<`.
    LowerIsWorse,
}
