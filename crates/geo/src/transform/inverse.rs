use crate::Coordinate;

use super::{is_out_of_china, to_gcj02};

/// Upper bound on the fixed point iterations of [`gcj02_to_wgs84`].
pub const MAX_INVERSE_ITERATIONS: usize = 3;

/// Stop iterating once the forward transform of the guess lands this close (degrees, ~0.1m) to the target.
const CONVERGENCE_THRESHOLD: f64 = 1e-6;

/// GCJ-02 to WGS-84
///
/// There is no closed form inverse, the WGS-84 position is found by fixed point iteration on [`to_gcj02`].
/// Coordinates outside of China are returned unchanged.
pub fn gcj02_to_wgs84(target: Coordinate) -> Coordinate {
    if is_out_of_china(target) {
        return target;
    }

    let mut guess = target;
    for _ in 0..MAX_INVERSE_ITERATIONS {
        let (d_lat, d_lng) = to_gcj02(guess).delta(target);
        guess = Coordinate::latlon(guess.latitude - d_lat, guess.longitude - d_lng);

        if d_lat.abs() < CONVERGENCE_THRESHOLD && d_lng.abs() < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    guess
}
