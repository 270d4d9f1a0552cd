//! Core types and definitions for the collision-avoidance decision layer.
//!
//! This crate defines the vocabulary shared across all other crates:
//! kinematic types, risk levels, assessment records, alerts, configuration
//! and the error taxonomy. It contains no prediction or scoring logic.

pub mod assessment;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod inputs;
pub mod projection;
pub mod state;
pub mod types;

pub use error::{AvoidanceError, ConfigError};

#[cfg(test)]
mod tests;
