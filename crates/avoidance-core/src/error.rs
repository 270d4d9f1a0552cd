//! Error taxonomy.

/// Errors raised while processing a single update cycle.
///
/// None of these are fatal to the engine: the offending update is rejected
/// and the next one is processed normally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AvoidanceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value that cannot be saturated to a defined number (NaN, infinity).
    #[error("non-finite value in {field}")]
    NumericDegeneracy { field: &'static str },

    /// A required track field was absent at the ingestion boundary.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// One track was reported geodetically and the other in local coordinates.
    #[error("ownship and intruder use different position frames")]
    MixedFrames,
}

/// Errors in threshold configuration. Fatal at construction time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("{0} thresholds are not strictly ordered")]
    Unordered(&'static str),

    #[error("{0} must be a multiplier of at least 1.0")]
    Multiplier(&'static str),

    #[error("{0} must lie in (0, 1]")]
    CutPoint(&'static str),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
