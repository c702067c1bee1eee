//! The datum transforms between WGS-84, GCJ-02 and BD-09.
//!
//! All functions are total: coordinates outside of China, and non-finite input, pass through unchanged.

use crate::{Coordinate, LatLonBounds};

mod bd09;
mod gcj02;
mod inverse;

pub use inverse::MAX_INVERSE_ITERATIONS;
pub use inverse::gcj02_to_wgs84;

/// Envelope in which GCJ-02 offsets are applied.
/// Points near the border but outside China can still fall inside it and get an offset.
pub const CHINA_BOUNDS: LatLonBounds =
    LatLonBounds::from_corners(Coordinate::latlon(0.8293, 72.004), Coordinate::latlon(55.8271, 137.8347));

/// Returns true when no GCJ-02 offset applies to the (WGS-84) coordinate.
/// Non-finite coordinates are considered out of China.
pub fn is_out_of_china(coord: Coordinate) -> bool {
    !CHINA_BOUNDS.contains(coord)
}

/// WGS-84 to GCJ-02
///
/// Coordinates outside of China are returned unchanged.
/// The transform is not idempotent: converting an already converted coordinate shifts it again.
pub fn to_gcj02(coord: Coordinate) -> Coordinate {
    if is_out_of_china(coord) {
        return coord;
    }

    let (d_lat, d_lng) = gcj02::offset(coord);
    Coordinate::latlon(coord.latitude + d_lat, coord.longitude + d_lng)
}

/// GCJ-02 to BD-09
///
/// Expects a GCJ-02 coordinate, no bounds check is performed.
/// Non-finite input is returned unchanged.
pub fn to_bd09(coord: Coordinate) -> Coordinate {
    if !coord.latitude.is_finite() || !coord.longitude.is_finite() {
        return coord;
    }

    bd09::from_gcj02(coord)
}

/// BD-09 to GCJ-02 (closed form approximation, accurate to about 1e-6 degrees)
pub fn from_bd09(coord: Coordinate) -> Coordinate {
    if !coord.latitude.is_finite() || !coord.longitude.is_finite() {
        return coord;
    }

    bd09::to_gcj02(coord)
}
