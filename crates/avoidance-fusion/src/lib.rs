//! Risk fusion, alert generation and the per-cycle engine.
//!
//! `AvoidanceEngine` turns one `UpdateFrame` into one `FusionResult`:
//! collision assessment, optional weather and terrain assessments,
//! escalation-only fusion, then a ranked alert list. Stateless between
//! cycles; safe to share across threads.

pub mod alerts;
pub mod engine;
pub mod fusion;

pub use avoidance_core as core;
pub use engine::AvoidanceEngine;
pub use fusion::RiskFusionCoordinator;
