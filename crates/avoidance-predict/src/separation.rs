//! Sample-by-sample separation between two predicted trajectories.

use avoidance_core::assessment::{SeparationFactors, SeparationSample, Trajectory};
use avoidance_core::constants::TIME_ALIGNMENT_TOLERANCE;
use avoidance_core::error::AvoidanceError;

/// Compare two time-aligned trajectories.
///
/// Both trajectories must have the same length and the same time offsets.
/// A distance that overflows is rejected as `NumericDegeneracy`.
pub fn analyze(
    traj_a: &Trajectory,
    traj_b: &Trajectory,
) -> Result<Vec<SeparationSample>, AvoidanceError> {
    if traj_a.len() != traj_b.len() {
        return Err(AvoidanceError::InvalidArgument(format!(
            "trajectory lengths differ: {} vs {}",
            traj_a.len(),
            traj_b.len()
        )));
    }

    traj_a
        .samples()
        .iter()
        .zip(traj_b.samples())
        .enumerate()
        .map(|(i, (a, b))| {
            if (a.time_offset - b.time_offset).abs() > TIME_ALIGNMENT_TOLERANCE {
                return Err(AvoidanceError::InvalidArgument(format!(
                    "trajectories not time-aligned at sample {i}: {} vs {}",
                    a.time_offset, b.time_offset
                )));
            }
            let distance = a.position.distance_to(&b.position);
            if !distance.is_finite() {
                return Err(AvoidanceError::NumericDegeneracy { field: "separation" });
            }
            Ok(SeparationSample {
                distance,
                risk_factors: SeparationFactors::combine(&a.risk_factors, &b.risk_factors),
                confidence: a.confidence.min(b.confidence),
                time_offset: a.time_offset,
            })
        })
        .collect()
}

/// Sample with the smallest distance. Ties go to the earliest index.
///
/// Samples with a non-finite distance are never selected.
pub fn find_minimum(samples: &[SeparationSample]) -> Option<(usize, &SeparationSample)> {
    samples
        .iter()
        .enumerate()
        .filter(|(_, sample)| sample.distance.is_finite())
        .fold(None, |best, (i, sample)| match best {
            Some((_, current)) if sample.distance >= current.distance => best,
            _ => Some((i, sample)),
        })
}
