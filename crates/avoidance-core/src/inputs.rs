//! Per-cycle inputs as they arrive from the ingestion layer.
//!
//! Every field is optional on the wire. Weather and terrain fields fall back
//! to benign sentinels; track fields are required and are checked in
//! [`resolve_pair`].

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::AvoidanceError;
use crate::projection::GeoProjection;
use crate::types::{clamp_unit, TrackState, Vector3};

/// Geodetic position: degrees and altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub altitude: f64,
}

/// Normalised track record for one aircraft.
///
/// Position is either local (`position`) or geodetic (`geo`). Velocity is
/// either a vector or ground `speed` + `heading` (degrees from North) with
/// an optional `vertical_rate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackReport {
    pub identifier: Option<String>,
    pub position: Option<Vector3>,
    pub geo: Option<GeoPoint>,
    pub velocity: Option<Vector3>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub vertical_rate: Option<f64>,
    pub classification_confidence: Option<f64>,
}

impl TrackReport {
    /// Local-frame report with an explicit velocity vector.
    pub fn local(position: Vector3, velocity: Vector3) -> Self {
        Self {
            position: Some(position),
            velocity: Some(velocity),
            ..Default::default()
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.classification_confidence = Some(confidence);
        self
    }

    /// Resolve into a [`TrackState`]. Geodetic reports need a projection.
    pub fn resolve(&self, projection: Option<&GeoProjection>) -> Result<TrackState, AvoidanceError> {
        let position = match (self.position, self.geo, projection) {
            (Some(p), _, _) => p,
            (None, Some(g), Some(proj)) => proj.to_local(g.lat, g.lon, g.altitude),
            (None, Some(_), None) => return Err(AvoidanceError::MixedFrames),
            (None, None, _) => return Err(AvoidanceError::MissingField("position")),
        };
        if !position.is_finite() {
            return Err(AvoidanceError::NumericDegeneracy { field: "position" });
        }

        let velocity = match (self.velocity, self.speed, self.heading) {
            (Some(v), _, _) => v,
            (None, Some(speed), Some(heading)) => {
                Vector3::from_speed_heading(speed, heading, self.vertical_rate.unwrap_or(0.0))
            }
            (None, Some(_), None) => return Err(AvoidanceError::MissingField("heading")),
            (None, None, _) => return Err(AvoidanceError::MissingField("velocity")),
        };
        if !velocity.is_finite() {
            return Err(AvoidanceError::NumericDegeneracy { field: "velocity" });
        }

        Ok(TrackState::new(
            position,
            velocity,
            clamp_unit(self.classification_confidence.unwrap_or(1.0)),
        ))
    }
}

/// Resolve ownship and intruder into one local frame.
///
/// When the ownship is geodetic the frame is centred on it, and the intruder
/// must be geodetic as well. A local ownship requires a local intruder.
pub fn resolve_pair(
    ownship: &TrackReport,
    intruder: &TrackReport,
) -> Result<(TrackState, TrackState), AvoidanceError> {
    let projection = match (ownship.position, ownship.geo) {
        (None, Some(g)) => {
            if intruder.geo.is_none() && intruder.position.is_some() {
                return Err(AvoidanceError::MixedFrames);
            }
            Some(GeoProjection::new(g.lat, g.lon))
        }
        _ => None,
    };
    let own = ownship.resolve(projection.as_ref())?;
    let intr = intruder.resolve(projection.as_ref())?;
    Ok((own, intr))
}

/// Weather observation. Absent fields take benign defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherInput {
    /// Meters.
    pub visibility: f64,
    /// mm/h.
    pub precipitation_rate: f64,
    /// Meters.
    pub cloud_ceiling: f64,
    /// Knots.
    pub wind_speed: f64,
    /// Degrees.
    pub wind_direction: f64,
    pub turbulence_index: f64,
    pub icing_potential: f64,
    pub lightning_activity: f64,
}

impl Default for WeatherInput {
    fn default() -> Self {
        Self {
            visibility: DEFAULT_VISIBILITY,
            precipitation_rate: 0.0,
            cloud_ceiling: DEFAULT_CLOUD_CEILING,
            wind_speed: 0.0,
            wind_direction: 0.0,
            turbulence_index: 0.0,
            icing_potential: 0.0,
            lightning_activity: 0.0,
        }
    }
}

/// A reported terrain obstacle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Obstacle top elevation (feet).
    #[serde(default)]
    pub elevation: f64,
    /// Distance from the aircraft (meters).
    pub distance: f64,
    /// Height above surrounding terrain (feet), when reported directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Obstacle {
    /// Height above the surrounding terrain, never negative.
    pub fn height_above(&self, terrain_elevation: f64) -> f64 {
        self.height
            .unwrap_or(self.elevation - terrain_elevation)
            .max(0.0)
    }
}

/// Terrain context around the aircraft. Absent fields take benign defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainInput {
    /// Feet.
    pub aircraft_altitude: f64,
    /// Feet.
    pub terrain_elevation: f64,
    /// Degrees.
    pub terrain_slope: f64,
    /// Meters.
    pub distance_to_terrain: f64,
    pub terrain_type: String,
    pub terrain_roughness: f64,
    pub terrain_obstacles: Vec<Obstacle>,
    /// Feet.
    pub terrain_clearance: f64,
}

impl Default for TerrainInput {
    fn default() -> Self {
        Self {
            aircraft_altitude: 0.0,
            terrain_elevation: 0.0,
            terrain_slope: 0.0,
            distance_to_terrain: f64::MAX,
            terrain_type: "unknown".to_string(),
            terrain_roughness: 0.0,
            terrain_obstacles: Vec::new(),
            terrain_clearance: DEFAULT_TERRAIN_CLEARANCE,
        }
    }
}
