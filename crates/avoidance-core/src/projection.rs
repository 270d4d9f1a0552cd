//! Local tangent-plane projection for geodetic track reports.
//!
//! Equirectangular projection centred on a reference point (normally the
//! ownship). Accurate to well under 0.1% across TCAS ranges.

use crate::types::Vector3;

/// Meters per degree of latitude.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Projection anchored at a reference latitude/longitude.
///
/// The reference maps to local x = 0, y = 0. Altitude passes through as z.
#[derive(Debug, Clone, Copy)]
pub struct GeoProjection {
    ref_lat: f64,
    ref_lon: f64,
    cos_ref_lat: f64,
}

impl GeoProjection {
    /// Centre a projection at the given lat/lon (degrees).
    pub fn new(ref_lat: f64, ref_lon: f64) -> Self {
        Self {
            ref_lat,
            ref_lon,
            cos_ref_lat: ref_lat.to_radians().cos(),
        }
    }

    /// Project lat/lon (degrees) and altitude into local space.
    pub fn to_local(&self, lat: f64, lon: f64, altitude: f64) -> Vector3 {
        let x = (lon - self.ref_lon) * METERS_PER_DEGREE * self.cos_ref_lat;
        let y = (lat - self.ref_lat) * METERS_PER_DEGREE;
        Vector3::new(x, y, altitude)
    }
}
