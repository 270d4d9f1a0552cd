//! Fundamental kinematic types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_SPEED_THRESHOLD, MEDIUM_SPEED_THRESHOLD, TRANSITION_ALTITUDE_FT};

/// 3D vector in local space. Used for both positions (meters) and velocities.
/// x = East, y = North, z = Up (altitude).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a velocity from ground speed and heading.
    ///
    /// Heading is in degrees clockwise from North; `vertical_rate` becomes z.
    pub fn from_speed_heading(speed: f64, heading_deg: f64, vertical_rate: f64) -> Self {
        let heading = heading_deg.to_radians();
        Self::new(
            speed * heading.sin(),
            speed * heading.cos(),
            vertical_rate,
        )
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        DVec3::from(*self).length()
    }

    /// Length of the horizontal (x, y) component.
    pub fn horizontal_magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance to another point.
    pub fn distance_to(&self, other: &Vector3) -> f64 {
        DVec3::from(*self).distance(DVec3::from(*other))
    }

    /// Heading in degrees clockwise from North, in [0, 360).
    pub fn heading_deg(&self) -> f64 {
        self.x.atan2(self.y).to_degrees().rem_euclid(360.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

/// Instantaneous kinematic state of one aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackState {
    pub position: Vector3,
    pub velocity: Vector3,
    /// Classifier confidence in [0, 1].
    pub confidence: f64,
}

impl TrackState {
    pub fn new(position: Vector3, velocity: Vector3, confidence: f64) -> Self {
        Self {
            position,
            velocity,
            confidence: clamp_unit(confidence),
        }
    }
}

/// Clamp into [0, 1]. NaN maps to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// `numerator / denominator` clamped into [0, 1].
///
/// A zero or non-finite denominator, or a non-finite quotient, saturates to 1.0
/// instead of producing NaN or infinity.
pub fn saturating_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 || !denominator.is_finite() {
        return 1.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Flight-level label: `FL330` at or above the transition altitude, `9500ft` below.
pub fn flight_level_label(altitude_ft: f64) -> String {
    if altitude_ft >= TRANSITION_ALTITUDE_FT {
        format!("FL{}", (altitude_ft / 100.0) as i64)
    } else {
        format!("{}ft", altitude_ft as i64)
    }
}

/// Coarse speed category used on track displays.
pub fn speed_category(speed: f64) -> &'static str {
    if speed >= HIGH_SPEED_THRESHOLD {
        "high"
    } else if speed >= MEDIUM_SPEED_THRESHOLD {
        "medium"
    } else {
        "low"
    }
}

/// 8-point cardinal direction for a heading in degrees.
pub fn cardinal_heading(heading_deg: f64) -> &'static str {
    const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let index = (heading_deg.rem_euclid(360.0) / 45.0).round() as usize % 8;
    DIRECTIONS[index]
}
