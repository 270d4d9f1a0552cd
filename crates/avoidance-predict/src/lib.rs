//! Trajectory prediction and traffic separation analysis.
//!
//! Pure functions over plain data: constant-velocity extrapolation,
//! sample-by-sample separation, and minimum-separation risk classification.

pub mod collision;
pub mod separation;
pub mod trajectory;

pub use avoidance_core as core;
pub use collision::CollisionRiskAssessor;
pub use trajectory::TrajectoryPredictor;

#[cfg(test)]
mod tests;
