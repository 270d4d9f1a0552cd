//! Per-cycle orchestration.

use rayon::prelude::*;
use tracing::{info, warn};

use avoidance_core::config::EngineConfig;
use avoidance_core::error::{AvoidanceError, ConfigError};
use avoidance_core::inputs::resolve_pair;
use avoidance_core::state::{FusionResult, TrackSummary, UpdateFrame};
use avoidance_core::types::{cardinal_heading, flight_level_label, speed_category, TrackState};
use avoidance_environment::{TerrainRiskAssessor, WeatherRiskAssessor};
use avoidance_predict::CollisionRiskAssessor;

use crate::alerts;
use crate::fusion::RiskFusionCoordinator;

/// Runs complete update cycles against a fixed configuration.
///
/// Holds no per-cycle state, so one engine can serve any number of threads.
#[derive(Debug, Clone)]
pub struct AvoidanceEngine {
    collision: CollisionRiskAssessor,
    weather: WeatherRiskAssessor,
    terrain: TerrainRiskAssessor,
    fusion: RiskFusionCoordinator,
}

impl AvoidanceEngine {
    /// Validate `config` and build the assessors from it.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            collision: CollisionRiskAssessor::new(config.prediction, config.separation),
            weather: WeatherRiskAssessor::new(config.weather),
            terrain: TerrainRiskAssessor::new(config.terrain),
            fusion: RiskFusionCoordinator::new(config.fusion),
        })
    }

    /// One full cycle: resolve, assess, fuse, alert.
    pub fn process_update(&self, frame: &UpdateFrame) -> Result<FusionResult, AvoidanceError> {
        let (ownship, intruder) = resolve_pair(&frame.ownship, &frame.intruder).map_err(|e| {
            warn!(timestamp = frame.timestamp, error = %e, "update frame rejected");
            e
        })?;

        let collision = self.collision.assess(&ownship, &intruder).map_err(|e| {
            warn!(timestamp = frame.timestamp, error = %e, "collision assessment failed");
            e
        })?;

        let weather = frame.weather.as_ref().map(|w| self.weather.assess(w));
        let terrain = frame.terrain.as_ref().map(|t| self.terrain.assess(t));

        let fused = self
            .fusion
            .fuse(collision, weather.as_ref(), terrain.as_ref());
        let alerts = alerts::generate_alerts(&fused, weather.as_ref(), terrain.as_ref());

        info!(
            timestamp = frame.timestamp,
            level = %fused.level,
            min_separation = fused.min_separation,
            time_to_closest = fused.time_to_closest,
            alerts = alerts.len(),
            "update processed"
        );

        Ok(FusionResult {
            ownship_info: frame.ownship_info.clone(),
            intruder_info: frame.intruder_info.clone(),
            ownship_track: summarize(frame.ownship.identifier.clone(), &ownship),
            intruder_track: summarize(frame.intruder.identifier.clone(), &intruder),
            risk_assessment: fused,
            weather_assessment: weather,
            terrain_assessment: terrain,
            alerts,
            timestamp: frame.timestamp,
        })
    }

    /// Process independent frames in parallel on the rayon pool.
    ///
    /// Results are returned in input order; one rejected frame does not
    /// affect the others.
    pub fn process_batch(&self, frames: &[UpdateFrame]) -> Vec<Result<FusionResult, AvoidanceError>> {
        frames
            .par_iter()
            .map(|frame| self.process_update(frame))
            .collect()
    }
}

fn summarize(identifier: Option<String>, track: &TrackState) -> TrackSummary {
    TrackSummary {
        identifier,
        flight_level: flight_level_label(track.position.z),
        speed_category: speed_category(track.velocity.horizontal_magnitude()).to_string(),
        heading_cardinal: cardinal_heading(track.velocity.heading_deg()).to_string(),
    }
}
