//! Traffic collision risk: classify the predicted minimum separation.

use tracing::debug;

use avoidance_core::assessment::CollisionAssessment;
use avoidance_core::config::{PredictionConfig, SeparationThresholds};
use avoidance_core::enums::RiskLevel;
use avoidance_core::error::AvoidanceError;
use avoidance_core::types::TrackState;

use crate::separation;
use crate::trajectory::TrajectoryPredictor;

/// Predicts both tracks and classifies their closest approach.
#[derive(Debug, Clone)]
pub struct CollisionRiskAssessor {
    predictor: TrajectoryPredictor,
    thresholds: SeparationThresholds,
}

impl CollisionRiskAssessor {
    pub fn new(prediction: PredictionConfig, thresholds: SeparationThresholds) -> Self {
        Self {
            predictor: TrajectoryPredictor::new(prediction),
            thresholds,
        }
    }

    /// Map a separation distance to a risk level. Every band is strict `<`.
    pub fn classify(&self, distance: f64) -> RiskLevel {
        let t = &self.thresholds;
        if distance < t.critical {
            RiskLevel::Critical
        } else if distance < t.high {
            RiskLevel::High
        } else if distance < t.medium {
            RiskLevel::Medium
        } else if distance < t.low {
            RiskLevel::Low
        } else {
            RiskLevel::None
        }
    }

    /// Full collision assessment for one ownship/intruder pair.
    pub fn assess(
        &self,
        ownship: &TrackState,
        intruder: &TrackState,
    ) -> Result<CollisionAssessment, AvoidanceError> {
        let ownship_trajectory = self.predictor.predict_track(ownship)?;
        let intruder_trajectory = self.predictor.predict_track(intruder)?;
        let history = separation::analyze(&ownship_trajectory, &intruder_trajectory)?;

        let (index, closest) = separation::find_minimum(&history)
            .map(|(i, s)| (i, *s))
            .ok_or_else(|| AvoidanceError::InvalidArgument("empty separation history".into()))?;
        let level = self.classify(closest.distance);

        debug!(
            index,
            distance = closest.distance,
            time_to_closest = closest.time_offset,
            %level,
            "closest approach"
        );

        Ok(CollisionAssessment {
            level,
            min_separation: closest.distance,
            time_to_closest: closest.time_offset,
            confidence: closest.confidence,
            risk_factors: closest.risk_factors,
            separation_scale: 1.0,
            separation_history: history,
            ownship_trajectory,
            intruder_trajectory,
        })
    }
}

impl Default for CollisionRiskAssessor {
    fn default() -> Self {
        Self::new(PredictionConfig::default(), SeparationThresholds::default())
    }
}
