//! Escalation-only fusion of collision risk with environmental risk.
//!
//! Each source produces a new `CollisionAssessment`; the input record is
//! consumed, never edited in place. Weather is applied before terrain.

use tracing::debug;

use avoidance_core::assessment::{CollisionAssessment, TerrainAssessment, WeatherAssessment};
use avoidance_core::config::{FusionConfig, ScaleTiers};
use avoidance_core::enums::{Domain, RiskLevel};

/// Raise `current` to match a CRITICAL or HIGH source. Never lowers.
pub fn escalate(current: RiskLevel, source: RiskLevel) -> RiskLevel {
    match source {
        RiskLevel::Critical => RiskLevel::Critical,
        RiskLevel::High if current != RiskLevel::Critical => RiskLevel::High,
        _ => current,
    }
}

/// Combines a collision assessment with optional weather and terrain input.
#[derive(Debug, Clone, Default)]
pub struct RiskFusionCoordinator {
    config: FusionConfig,
}

impl RiskFusionCoordinator {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    /// Fold weather, then terrain, into the collision assessment.
    pub fn fuse(
        &self,
        collision: CollisionAssessment,
        weather: Option<&WeatherAssessment>,
        terrain: Option<&TerrainAssessment>,
    ) -> CollisionAssessment {
        let fused = match weather {
            Some(w) => self.apply_weather(collision, w),
            None => collision,
        };
        match terrain {
            Some(t) => self.apply_terrain(fused, t),
            None => fused,
        }
    }

    pub fn apply_weather(
        &self,
        fused: CollisionAssessment,
        weather: &WeatherAssessment,
    ) -> CollisionAssessment {
        apply_source(
            fused,
            Domain::Weather,
            weather.level,
            &self.config.weather_visibility,
            weather.risk_factors.visibility,
        )
    }

    pub fn apply_terrain(
        &self,
        fused: CollisionAssessment,
        terrain: &TerrainAssessment,
    ) -> CollisionAssessment {
        apply_source(
            fused,
            Domain::Terrain,
            terrain.level,
            &self.config.terrain_clearance,
            terrain.risk_factors.clearance,
        )
    }
}

fn apply_source(
    fused: CollisionAssessment,
    domain: Domain,
    source_level: RiskLevel,
    tiers: &ScaleTiers,
    factor: f64,
) -> CollisionAssessment {
    let level = escalate(fused.level, source_level);
    let multiplier = tiers.multiplier(factor);

    if level != fused.level || multiplier > 1.0 {
        debug!(
            ?domain,
            from = %fused.level,
            to = %level,
            multiplier,
            "fusion adjusted collision assessment"
        );
    }

    CollisionAssessment {
        level,
        min_separation: fused.min_separation * multiplier,
        separation_scale: fused.separation_scale * multiplier,
        ..fused
    }
}
