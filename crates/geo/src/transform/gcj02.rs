use std::f64::consts::PI;

use crate::Coordinate;

/// Semi-major axis of the Krasovsky 1940 ellipsoid
const A: f64 = 6378245.0;
/// Eccentricity squared of the Krasovsky 1940 ellipsoid
const EE: f64 = 0.006_693_421_622_965_943_23;

// Empirical series of the GCJ-02 definition.

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// The (latitude, longitude) offset in degrees that GCJ-02 adds to a WGS-84 coordinate
pub(super) fn offset(coord: Coordinate) -> (f64, f64) {
    let x = coord.longitude - 105.0;
    let y = coord.latitude - 35.0;

    let d_lat = transform_lat(x, y);
    let d_lng = transform_lng(x, y);

    let rad_lat = coord.latitude / 180.0 * PI;
    let magic = rad_lat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    let d_lng = (d_lng * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI);

    (d_lat, d_lng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn series_at_origin() {
        // at (105, 35) all sine terms vanish
        assert_abs_diff_eq!(transform_lat(0.0, 0.0), -100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(transform_lng(0.0, 0.0), 300.0, epsilon = 1e-12);
    }

    #[test]
    fn offset_is_small() {
        let (d_lat, d_lng) = offset(Coordinate::latlon(39.9042, 116.4074));
        assert_abs_diff_eq!(d_lat, 0.0014033431650684, epsilon = 1e-9);
        assert_abs_diff_eq!(d_lng, 0.0062422537880, epsilon = 1e-9);
    }
}
