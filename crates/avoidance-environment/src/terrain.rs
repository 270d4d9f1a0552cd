//! Terrain risk: clearance, slope, roughness and reported obstacles.

use tracing::debug;

use avoidance_core::assessment::{TerrainAssessment, TerrainConditions, TerrainFactors};
use avoidance_core::config::TerrainConfig;
use avoidance_core::inputs::{Obstacle, TerrainInput};
use avoidance_core::types::saturating_ratio;

use crate::ladder::{self, LevelAdvice, MetricAdvice};

const CLEARANCE: MetricAdvice = MetricAdvice {
    critical: "IMMEDIATE CLIMB REQUIRED - Critical terrain clearance",
    caution: "Maintain increased altitude - Low terrain clearance",
};

const SLOPE: MetricAdvice = MetricAdvice {
    critical: "Avoid steep terrain areas - Critical slope detected",
    caution: "Exercise caution - Significant terrain slope",
};

const ROUGHNESS: MetricAdvice = MetricAdvice {
    critical: "Maintain increased separation - Rough terrain",
    caution: "Exercise caution - Moderate terrain roughness",
};

const OBSTACLES: MetricAdvice = MetricAdvice {
    critical: "Multiple obstacles detected - Maintain maximum clearance",
    caution: "Obstacles present - Maintain increased separation",
};

const CLOSING: LevelAdvice = LevelAdvice {
    critical: "TERRAIN TERRAIN PULL UP - Immediate action required",
    high: "Increase terrain clearance and prepare for possible diversion",
    medium: "Monitor terrain proximity and maintain safe clearance",
};

/// Note for the reported terrain type, if it has one.
fn terrain_type_note(terrain_type: &str) -> Option<&'static str> {
    let tag = terrain_type.trim().to_ascii_lowercase();
    if tag.starts_with("mountain") {
        Some("Mountainous terrain - Maintain increased vigilance")
    } else if tag == "valley" {
        Some("Valley terrain - Monitor terrain clearance")
    } else {
        None
    }
}

/// Scores terrain context.
#[derive(Debug, Clone, Default)]
pub struct TerrainRiskAssessor {
    config: TerrainConfig,
}

impl TerrainRiskAssessor {
    pub fn new(config: TerrainConfig) -> Self {
        Self { config }
    }

    /// Worst single obstacle: mean of its distance and height factors.
    ///
    /// An empty list scores the configured baseline.
    pub fn obstacle_risk(&self, obstacles: &[Obstacle], terrain_elevation: f64) -> f64 {
        if obstacles.is_empty() {
            return self.config.obstacle_baseline;
        }
        obstacles.iter().fold(0.0, |risk: f64, obstacle| {
            let distance_factor =
                1.0 - saturating_ratio(obstacle.distance, self.config.obstacle_distance_norm);
            let height_factor = saturating_ratio(
                obstacle.height_above(terrain_elevation),
                self.config.obstacle_height_norm,
            );
            risk.max((distance_factor + height_factor) / 2.0)
        })
    }

    pub fn factors(&self, terrain: &TerrainInput) -> TerrainFactors {
        TerrainFactors {
            clearance: ladder::score(&self.config.clearance, terrain.terrain_clearance),
            slope: ladder::score(&self.config.slope, terrain.terrain_slope),
            roughness: ladder::score(&self.config.roughness, terrain.terrain_roughness),
            obstacles: self.obstacle_risk(&terrain.terrain_obstacles, terrain.terrain_elevation),
        }
    }

    pub fn assess(&self, terrain: &TerrainInput) -> TerrainAssessment {
        let factors = self.factors(terrain);
        let risk_score = ladder::mean(&factors.values());
        let level = ladder::level_for_score(risk_score);

        let mut recommendations = Vec::new();
        let advice = [
            (factors.clearance, &CLEARANCE),
            (factors.slope, &SLOPE),
            (factors.roughness, &ROUGHNESS),
            (factors.obstacles, &OBSTACLES),
        ];
        for (score, metric) in advice {
            ladder::advise(score, metric, &mut recommendations);
        }
        if let Some(note) = terrain_type_note(&terrain.terrain_type) {
            recommendations.push(note.to_string());
        }
        if let Some(closing) = ladder::closing_advice(level, &CLOSING) {
            recommendations.push(closing.to_string());
        }

        debug!(risk_score, %level, count = recommendations.len(), "terrain assessed");

        TerrainAssessment {
            level,
            risk_score,
            risk_factors: factors,
            recommendations,
            conditions: TerrainConditions {
                altitude: terrain.aircraft_altitude,
                terrain_elevation: terrain.terrain_elevation,
                clearance: terrain.terrain_clearance,
                slope: terrain.terrain_slope,
                terrain_type: terrain.terrain_type.clone(),
            },
        }
    }
}
