//! Trajectory, separation and risk assessment records.
//!
//! Records are produced fresh by each stage of an update cycle and never
//! mutated afterwards; fusion builds a new [`CollisionAssessment`] rather
//! than editing the one it was given.

use serde::{Deserialize, Serialize};

use crate::enums::{Domain, RiskLevel};
use crate::types::Vector3;

/// Per-sample risk factors for one trajectory, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub speed: f64,
    pub altitude: f64,
    pub proximity: f64,
}

/// Risk factors of a separation sample: elementwise max of both sides plus
/// the mean of all six input scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeparationFactors {
    pub speed: f64,
    pub altitude: f64,
    pub proximity: f64,
    pub combined_risk: f64,
}

impl SeparationFactors {
    pub fn combine(a: &RiskFactors, b: &RiskFactors) -> Self {
        Self {
            speed: a.speed.max(b.speed),
            altitude: a.altitude.max(b.altitude),
            proximity: a.proximity.max(b.proximity),
            combined_risk: (a.speed + a.altitude + a.proximity + b.speed + b.altitude + b.proximity)
                / 6.0,
        }
    }
}

/// One predicted state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub position: Vector3,
    pub velocity: Vector3,
    /// Seconds from the start of the prediction.
    pub time_offset: f64,
    pub confidence: f64,
    pub risk_factors: RiskFactors,
}

/// Predicted trajectory: evenly spaced samples over `[0, horizon)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
    time_step: f64,
}

impl Trajectory {
    pub fn new(samples: Vec<TrajectorySample>, time_step: f64) -> Self {
        Self { samples, time_step }
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Spacing between consecutive samples (seconds).
    pub fn time_step(&self) -> f64 {
        self.time_step
    }
}

/// Distance between two trajectories at one time offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparationSample {
    /// Meters.
    pub distance: f64,
    pub risk_factors: SeparationFactors,
    /// Weakest-link confidence of the two sides.
    pub confidence: f64,
    pub time_offset: f64,
}

/// Traffic collision assessment for one ownship/intruder pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionAssessment {
    pub level: RiskLevel,
    /// Required separation margin (meters). Starts as the predicted minimum
    /// separation and is only ever scaled up by fusion.
    pub min_separation: f64,
    /// Seconds until the closest point of approach.
    pub time_to_closest: f64,
    pub confidence: f64,
    pub risk_factors: SeparationFactors,
    /// Product of every fusion multiplier applied so far.
    pub separation_scale: f64,
    pub separation_history: Vec<SeparationSample>,
    pub ownship_trajectory: Trajectory,
    pub intruder_trajectory: Trajectory,
}

/// Per-metric weather scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherFactors {
    pub visibility: f64,
    pub precipitation: f64,
    pub wind: f64,
    pub turbulence: f64,
    pub icing: f64,
    pub lightning: f64,
}

impl WeatherFactors {
    /// Scores in declaration order.
    pub fn values(&self) -> [f64; 6] {
        [
            self.visibility,
            self.precipitation,
            self.wind,
            self.turbulence,
            self.icing,
            self.lightning,
        ]
    }
}

/// Weather snapshot attached to assessments and alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub visibility: f64,
    pub precipitation: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub cloud_ceiling: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAssessment {
    pub level: RiskLevel,
    /// Mean of the per-metric scores.
    pub risk_score: f64,
    pub risk_factors: WeatherFactors,
    pub recommendations: Vec<String>,
    pub conditions: WeatherConditions,
}

/// Per-metric terrain scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainFactors {
    pub clearance: f64,
    pub slope: f64,
    pub roughness: f64,
    pub obstacles: f64,
}

impl TerrainFactors {
    /// Scores in declaration order.
    pub fn values(&self) -> [f64; 4] {
        [self.clearance, self.slope, self.roughness, self.obstacles]
    }
}

/// Terrain snapshot attached to assessments and alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConditions {
    pub altitude: f64,
    pub terrain_elevation: f64,
    pub clearance: f64,
    pub slope: f64,
    pub terrain_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainAssessment {
    pub level: RiskLevel,
    pub risk_score: f64,
    pub risk_factors: TerrainFactors,
    pub recommendations: Vec<String>,
    pub conditions: TerrainConditions,
}

/// Domain snapshot carried by escalation alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "domain", rename_all = "lowercase")]
pub enum DomainConditions {
    Weather(WeatherConditions),
    Terrain(TerrainConditions),
}

/// Common view over weather and terrain assessments.
pub trait DomainAssessment {
    fn domain(&self) -> Domain;
    fn level(&self) -> RiskLevel;
    fn risk_score(&self) -> f64;
    fn recommendations(&self) -> &[String];
    fn conditions(&self) -> DomainConditions;
}

impl DomainAssessment for WeatherAssessment {
    fn domain(&self) -> Domain {
        Domain::Weather
    }

    fn level(&self) -> RiskLevel {
        self.level
    }

    fn risk_score(&self) -> f64 {
        self.risk_score
    }

    fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    fn conditions(&self) -> DomainConditions {
        DomainConditions::Weather(self.conditions.clone())
    }
}

impl DomainAssessment for TerrainAssessment {
    fn domain(&self) -> Domain {
        Domain::Terrain
    }

    fn level(&self) -> RiskLevel {
        self.level
    }

    fn risk_score(&self) -> f64 {
        self.risk_score
    }

    fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    fn conditions(&self) -> DomainConditions {
        DomainConditions::Terrain(self.conditions.clone())
    }
}
