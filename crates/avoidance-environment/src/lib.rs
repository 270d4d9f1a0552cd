//! Environmental risk scoring for weather and terrain.
//!
//! Both domains share one pattern: every raw metric goes through a
//! four-tier ladder to a discrete score, the mean score picks the risk
//! level, and recommendations are emitted in a fixed metric order.

pub mod ladder;
pub mod terrain;
pub mod weather;

pub use avoidance_core as core;
pub use terrain::TerrainRiskAssessor;
pub use weather::WeatherRiskAssessor;
