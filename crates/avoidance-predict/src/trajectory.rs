//! Constant-velocity trajectory extrapolation.

use glam::DVec3;
use tracing::debug;

use avoidance_core::assessment::{RiskFactors, Trajectory, TrajectorySample};
use avoidance_core::config::PredictionConfig;
use avoidance_core::error::AvoidanceError;
use avoidance_core::types::{clamp_unit, saturating_ratio, TrackState, Vector3};

/// Extrapolates a single track over a fixed horizon.
#[derive(Debug, Clone)]
pub struct TrajectoryPredictor {
    config: PredictionConfig,
}

impl TrajectoryPredictor {
    pub fn new(config: PredictionConfig) -> Self {
        Self { config }
    }

    /// Predict a track with the configured horizon and step count.
    pub fn predict_track(&self, track: &TrackState) -> Result<Trajectory, AvoidanceError> {
        self.predict(
            track.position,
            track.velocity,
            self.config.horizon_secs,
            self.config.steps,
            track.confidence,
        )
    }

    /// Extrapolate `steps` samples spaced `horizon / steps` apart.
    ///
    /// The position advances by `v * dt` before each sample is recorded, so
    /// sample `i` holds `p0 + v * (i + 1) * dt` and the last one reaches the
    /// horizon. Its time offset and confidence are taken at `t = i * dt`,
    /// with confidence decaying linearly towards zero at the horizon.
    ///
    /// A position that overflows to a non-finite value rejects the whole
    /// trajectory.
    pub fn predict(
        &self,
        position: Vector3,
        velocity: Vector3,
        horizon: f64,
        steps: usize,
        initial_confidence: f64,
    ) -> Result<Trajectory, AvoidanceError> {
        if steps < 1 {
            return Err(AvoidanceError::InvalidArgument(format!(
                "steps must be at least 1, got {steps}"
            )));
        }
        if !(horizon > 0.0 && horizon.is_finite()) {
            return Err(AvoidanceError::InvalidArgument(format!(
                "horizon must be positive, got {horizon}"
            )));
        }

        let dt = horizon / steps as f64;
        let start = DVec3::from(position);
        let vel = DVec3::from(velocity);
        let initial_confidence = clamp_unit(initial_confidence);

        let samples = (0..steps)
            .map(|i| {
                let t = i as f64 * dt;
                let pos = start + vel * ((i + 1) as f64 * dt);
                if !pos.is_finite() {
                    return Err(AvoidanceError::NumericDegeneracy { field: "trajectory" });
                }
                Ok(TrajectorySample {
                    position: pos.into(),
                    velocity,
                    time_offset: t,
                    confidence: (initial_confidence * (1.0 - t / horizon)).max(0.0),
                    risk_factors: self.risk_factors(pos, vel),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(steps, dt, speed = vel.length(), "trajectory predicted");
        Ok(Trajectory::new(samples, dt))
    }

    /// Speed, altitude and proximity factors, each clamped to [0, 1].
    pub fn risk_factors(&self, position: DVec3, velocity: DVec3) -> RiskFactors {
        RiskFactors {
            speed: saturating_ratio(velocity.length(), self.config.high_speed_threshold),
            altitude: 1.0 - saturating_ratio(position.z, self.config.max_altitude_norm),
            proximity: 1.0 - saturating_ratio(position.length(), self.config.max_range_norm),
        }
    }
}

impl Default for TrajectoryPredictor {
    fn default() -> Self {
        Self::new(PredictionConfig::default())
    }
}
