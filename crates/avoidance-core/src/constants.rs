//! Default thresholds and tuning parameters.
//!
//! Every value here is the default for a field of `EngineConfig`; the engine
//! never reads these directly once a configuration has been built.

// --- Trajectory prediction ---

/// Prediction horizon in seconds.
pub const PREDICTION_HORIZON_SECS: f64 = 60.0;

/// Number of samples per predicted trajectory.
pub const PREDICTION_STEPS: usize = 60;

/// Speed at which the speed risk factor saturates (knot-equivalent units).
pub const HIGH_SPEED_THRESHOLD: f64 = 400.0;

/// Speed category boundary: medium.
pub const MEDIUM_SPEED_THRESHOLD: f64 = 250.0;

/// Altitude normalisation for the altitude risk factor (feet).
pub const MAX_ALTITUDE_NORM: f64 = 50_000.0;

/// Range normalisation for the proximity risk factor (meters).
pub const MAX_RANGE_NORM: f64 = 5_000.0;

/// Tolerance when checking that two trajectories share time offsets (seconds).
pub const TIME_ALIGNMENT_TOLERANCE: f64 = 1e-9;

// --- Separation classification (meters, strict `<`) ---

pub const SEPARATION_CRITICAL: f64 = 300.0;
pub const SEPARATION_HIGH: f64 = 500.0;
pub const SEPARATION_MEDIUM: f64 = 1_000.0;
pub const SEPARATION_LOW: f64 = 2_000.0;

// --- Discretised metric scores ---

pub const SCORE_CRITICAL: f64 = 1.0;
pub const SCORE_HIGH: f64 = 0.8;
pub const SCORE_MEDIUM: f64 = 0.6;
pub const SCORE_LOW: f64 = 0.4;
pub const SCORE_MINIMAL: f64 = 0.2;

/// Score at or above which a metric gets its critical recommendation.
pub const RECOMMEND_CRITICAL_SCORE: f64 = 0.8;

/// Score at or above which a metric gets its caution recommendation.
pub const RECOMMEND_CAUTION_SCORE: f64 = 0.6;

// --- Weather ladders ---

/// Visibility tiers (meters, lower is worse).
pub const VISIBILITY_TIERS: [f64; 4] = [1_000.0, 3_000.0, 5_000.0, 8_000.0];

/// Precipitation tiers (mm/h, higher is worse).
pub const PRECIPITATION_TIERS: [f64; 4] = [10.0, 5.0, 2.0, 0.5];

/// Wind tiers (knots, higher is worse).
pub const WIND_TIERS: [f64; 4] = [50.0, 35.0, 25.0, 15.0];

// --- Weather sentinels for absent fields ---

pub const DEFAULT_VISIBILITY: f64 = 10_000.0;
pub const DEFAULT_CLOUD_CEILING: f64 = 10_000.0;

// --- Terrain ladders ---

/// Terrain clearance tiers (feet, lower is worse).
pub const CLEARANCE_TIERS: [f64; 4] = [500.0, 1_000.0, 2_000.0, 3_000.0];

/// Terrain slope tiers (degrees, higher is worse).
pub const SLOPE_TIERS: [f64; 4] = [45.0, 30.0, 15.0, 5.0];

/// Terrain roughness tiers (index, higher is worse).
pub const ROUGHNESS_TIERS: [f64; 4] = [0.8, 0.6, 0.4, 0.2];

/// Obstacle distance at which the distance factor reaches zero (meters).
pub const OBSTACLE_DISTANCE_NORM: f64 = 5_000.0;

/// Obstacle height at which the height factor saturates (feet).
pub const OBSTACLE_HEIGHT_NORM: f64 = 1_000.0;

/// Obstacle score when no obstacles are reported.
pub const OBSTACLE_BASELINE_SCORE: f64 = 0.2;

/// Terrain clearance assumed when none is reported (feet).
pub const DEFAULT_TERRAIN_CLEARANCE: f64 = 10_000.0;

// --- Fusion separation scaling ---

pub const WEATHER_SCALE_SEVERE: f64 = 1.5;
pub const WEATHER_SCALE_MODERATE: f64 = 1.2;
pub const TERRAIN_SCALE_SEVERE: f64 = 2.0;
pub const TERRAIN_SCALE_MODERATE: f64 = 1.5;

/// Factor at or above which the severe multiplier applies.
pub const SCALE_SEVERE_CUT: f64 = 0.8;

/// Factor at or above which the moderate multiplier applies.
pub const SCALE_MODERATE_CUT: f64 = 0.6;

// --- Display ---

/// Altitude at and above which flight levels are reported (feet).
pub const TRANSITION_ALTITUDE_FT: f64 = 18_000.0;
