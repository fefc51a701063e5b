//! Geographic coordinates and geodesic utilities.
//!
//! Decomposition only needs two primitives from geodesy: translating a
//! coordinate by a north/east distance and measuring the great-circle
//! distance between two coordinates. Both sit behind the [`Geodesy`] trait so
//! hosts can plug in an ellipsoidal model; [`HaversineGeodesy`] is the
//! spherical default.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a new geographic coordinate
    ///
    /// # Returns
    /// * `Ok(GeoCoordinate)` - Valid coordinate
    /// * `Err(CoreError::InvalidCoordinate)` - Out of range or not finite
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::InvalidCoordinate(format!(
                "Latitude must be between -90 and 90, got {}",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::InvalidCoordinate(format!(
                "Longitude must be between -180 and 180, got {}",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.latitude, self.longitude)
    }
}

/// Geodesic model used to lay out grids.
pub trait Geodesy: Send + Sync {
    /// Translate `from` by `north_m` meters north and `east_m` meters east.
    /// Negative values move south and west.
    fn offset(&self, from: &GeoCoordinate, north_m: f64, east_m: f64) -> GeoCoordinate;

    /// Great-circle distance between two coordinates in meters
    fn distance_m(&self, a: &GeoCoordinate, b: &GeoCoordinate) -> f64;

    /// Move `from` north by `meters`
    fn offset_north(&self, from: &GeoCoordinate, meters: f64) -> GeoCoordinate {
        self.offset(from, meters, 0.0)
    }

    /// Move `from` south by `meters`
    fn offset_south(&self, from: &GeoCoordinate, meters: f64) -> GeoCoordinate {
        self.offset(from, -meters, 0.0)
    }

    /// Move `from` east by `meters`
    fn offset_east(&self, from: &GeoCoordinate, meters: f64) -> GeoCoordinate {
        self.offset(from, 0.0, meters)
    }

    /// Move `from` west by `meters`
    fn offset_west(&self, from: &GeoCoordinate, meters: f64) -> GeoCoordinate {
        self.offset(from, 0.0, -meters)
    }
}

/// Spherical Earth model: haversine distances and local tangent offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineGeodesy;

impl Geodesy for HaversineGeodesy {
    fn offset(&self, from: &GeoCoordinate, north_m: f64, east_m: f64) -> GeoCoordinate {
        let latitude = from.latitude + (north_m / EARTH_RADIUS_M).to_degrees();
        let mid_latitude = (from.latitude + latitude) / 2.0;
        let lon_scale = EARTH_RADIUS_M * mid_latitude.to_radians().cos();
        let longitude = from.longitude + (east_m / lon_scale).to_degrees();

        normalize(latitude, longitude)
    }

    fn distance_m(&self, a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
        let lat1_rad = a.latitude.to_radians();
        let lat2_rad = b.latitude.to_radians();
        let delta_lat = (b.latitude - a.latitude).to_radians();
        let delta_lon = (b.longitude - a.longitude).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        EARTH_RADIUS_M * c
    }
}

/// Fold a raw translation result back into the valid coordinate range.
///
/// Latitude past a pole reflects back and moves to the opposite meridian;
/// longitude wraps across the antimeridian into `[-180, 180)`.
fn normalize(mut latitude: f64, mut longitude: f64) -> GeoCoordinate {
    if latitude > 90.0 {
        latitude = 180.0 - latitude;
        longitude += 180.0;
    } else if latitude < -90.0 {
        latitude = -180.0 - latitude;
        longitude += 180.0;
    }
    if !(-180.0..=180.0).contains(&longitude) {
        longitude = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    }

    GeoCoordinate {
        latitude,
        longitude,
    }
}

/// Round `value` up to two decimal places (centimeter precision for meters).
pub fn ceil_centi(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}
