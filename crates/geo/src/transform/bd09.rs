use std::f64::consts::PI;

use crate::Coordinate;

const X_PI: f64 = PI * 3000.0 / 180.0;
const LNG_SHIFT: f64 = 0.0065;
const LAT_SHIFT: f64 = 0.006;

pub(super) fn from_gcj02(coord: Coordinate) -> Coordinate {
    let x = coord.longitude;
    let y = coord.latitude;
    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();

    Coordinate::latlon(z * theta.sin() + LAT_SHIFT, z * theta.cos() + LNG_SHIFT)
}

pub(super) fn to_gcj02(coord: Coordinate) -> Coordinate {
    let x = coord.longitude - LNG_SHIFT;
    let y = coord.latitude - LAT_SHIFT;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();

    Coordinate::latlon(z * theta.sin(), z * theta.cos())
}
