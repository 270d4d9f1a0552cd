//! Engine configuration: every threshold table the decision layer reads.
//!
//! A configuration is validated once and then shared immutably between
//! update cycles. Missing JSON fields fall back to the defaults in
//! [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Severity;
use crate::error::ConfigError;

/// Complete configuration for one engine instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub prediction: PredictionConfig,
    pub separation: SeparationThresholds,
    pub weather: WeatherConfig,
    pub terrain: TerrainConfig,
    pub fusion: FusionConfig,
}

/// Trajectory extrapolation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Prediction horizon (seconds).
    pub horizon_secs: f64,
    /// Samples per trajectory.
    pub steps: usize,
    /// Speed at which the speed factor saturates.
    pub high_speed_threshold: f64,
    /// Altitude normalisation (feet).
    pub max_altitude_norm: f64,
    /// Range normalisation (meters).
    pub max_range_norm: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            horizon_secs: PREDICTION_HORIZON_SECS,
            steps: PREDICTION_STEPS,
            high_speed_threshold: HIGH_SPEED_THRESHOLD,
            max_altitude_norm: MAX_ALTITUDE_NORM,
            max_range_norm: MAX_RANGE_NORM,
        }
    }
}

/// Minimum-separation bands (meters). A distance strictly below a band
/// falls into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparationThresholds {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for SeparationThresholds {
    fn default() -> Self {
        Self {
            critical: SEPARATION_CRITICAL,
            high: SEPARATION_HIGH,
            medium: SEPARATION_MEDIUM,
            low: SEPARATION_LOW,
        }
    }
}

/// Four-tier threshold ladder for one raw metric.
///
/// `tiers` is ordered critical, high, medium, low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ladder {
    pub tiers: [f64; 4],
    pub severity: Severity,
}

impl Ladder {
    pub const fn higher_is_worse(tiers: [f64; 4]) -> Self {
        Self {
            tiers,
            severity: Severity::HigherIsWorse,
        }
    }

    pub const fn lower_is_worse(tiers: [f64; 4]) -> Self {
        Self {
            tiers,
            severity: Severity::LowerIsWorse,
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.tiers.iter().any(|t| !t.is_finite()) {
            return Err(ConfigError::Unordered(name));
        }
        let ordered = self.tiers.windows(2).all(|w| match self.severity {
            Severity::HigherIsWorse => w[0] > w[1],
            Severity::LowerIsWorse => w[0] < w[1],
        });
        if ordered {
            Ok(())
        } else {
            Err(ConfigError::Unordered(name))
        }
    }
}

/// Weather metric ladders. Turbulence, icing and lightning are already
/// [0, 1] indices and are not laddered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub visibility: Ladder,
    pub precipitation: Ladder,
    pub wind: Ladder,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            visibility: Ladder::lower_is_worse(VISIBILITY_TIERS),
            precipitation: Ladder::higher_is_worse(PRECIPITATION_TIERS),
            wind: Ladder::higher_is_worse(WIND_TIERS),
        }
    }
}

/// Terrain metric ladders and obstacle normalisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub clearance: Ladder,
    pub slope: Ladder,
    pub roughness: Ladder,
    /// Distance at which an obstacle stops contributing (meters).
    pub obstacle_distance_norm: f64,
    /// Height at which an obstacle's height factor saturates (feet).
    pub obstacle_height_norm: f64,
    /// Obstacle score when the obstacle list is empty.
    pub obstacle_baseline: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            clearance: Ladder::lower_is_worse(CLEARANCE_TIERS),
            slope: Ladder::higher_is_worse(SLOPE_TIERS),
            roughness: Ladder::higher_is_worse(ROUGHNESS_TIERS),
            obstacle_distance_norm: OBSTACLE_DISTANCE_NORM,
            obstacle_height_norm: OBSTACLE_HEIGHT_NORM,
            obstacle_baseline: OBSTACLE_BASELINE_SCORE,
        }
    }
}

/// Two-tier separation scaling driven by one environmental factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTiers {
    pub severe_cut: f64,
    pub severe: f64,
    pub moderate_cut: f64,
    pub moderate: f64,
}

impl ScaleTiers {
    /// Multiplier for a factor value. 1.0 below the moderate cut.
    pub fn multiplier(&self, factor: f64) -> f64 {
        if factor >= self.severe_cut {
            self.severe
        } else if factor >= self.moderate_cut {
            self.moderate
        } else {
            1.0
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        for cut in [self.severe_cut, self.moderate_cut] {
            if !(cut > 0.0 && cut <= 1.0) {
                return Err(ConfigError::CutPoint(name));
            }
        }
        if self.moderate_cut >= self.severe_cut {
            return Err(ConfigError::Unordered(name));
        }
        if !(self.moderate >= 1.0 && self.severe >= 1.0) {
            return Err(ConfigError::Multiplier(name));
        }
        Ok(())
    }
}

/// Separation-margin scaling applied during fusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Keyed on the weather visibility factor.
    pub weather_visibility: ScaleTiers,
    /// Keyed on the terrain clearance factor.
    pub terrain_clearance: ScaleTiers,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            weather_visibility: ScaleTiers {
                severe_cut: SCALE_SEVERE_CUT,
                severe: WEATHER_SCALE_SEVERE,
                moderate_cut: SCALE_MODERATE_CUT,
                moderate: WEATHER_SCALE_MODERATE,
            },
            terrain_clearance: ScaleTiers {
                severe_cut: SCALE_SEVERE_CUT,
                severe: TERRAIN_SCALE_SEVERE,
                moderate_cut: SCALE_MODERATE_CUT,
                moderate: TERRAIN_SCALE_MODERATE,
            },
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every table for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.prediction;
        positive("prediction.horizon_secs", p.horizon_secs)?;
        if p.steps < 1 {
            return Err(ConfigError::NonPositive("prediction.steps"));
        }
        positive("prediction.high_speed_threshold", p.high_speed_threshold)?;
        positive("prediction.max_altitude_norm", p.max_altitude_norm)?;
        positive("prediction.max_range_norm", p.max_range_norm)?;

        let s = &self.separation;
        positive("separation.critical", s.critical)?;
        if !(s.critical < s.high && s.high < s.medium && s.medium < s.low && s.low.is_finite()) {
            return Err(ConfigError::Unordered("separation"));
        }

        self.weather.visibility.validate("weather.visibility")?;
        self.weather.precipitation.validate("weather.precipitation")?;
        self.weather.wind.validate("weather.wind")?;

        let t = &self.terrain;
        t.clearance.validate("terrain.clearance")?;
        t.slope.validate("terrain.slope")?;
        t.roughness.validate("terrain.roughness")?;
        positive("terrain.obstacle_distance_norm", t.obstacle_distance_norm)?;
        positive("terrain.obstacle_height_norm", t.obstacle_height_norm)?;
        if !(t.obstacle_baseline > 0.0 && t.obstacle_baseline <= 1.0) {
            return Err(ConfigError::CutPoint("terrain.obstacle_baseline"));
        }

        self.fusion
            .weather_visibility
            .validate("fusion.weather_visibility")?;
        self.fusion
            .terrain_clearance
            .validate("fusion.terrain_clearance")?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive(name))
    }
}
