use approx::{AbsDiffEq, RelativeEq};

use crate::Point;

/// A geographic position in decimal degrees.
///
/// A coordinate carries no datum of its own, the caller keeps track of which datum it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn latlon(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// Both components are finite and inside the geographic range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Per axis offset `self - other` as (latitude, longitude)
    pub fn delta(&self, other: Coordinate) -> (f64, f64) {
        (self.latitude - other.latitude, self.longitude - other.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

impl From<Point> for Coordinate {
    fn from(point: Point) -> Self {
        Coordinate::latlon(point.y(), point.x())
    }
}

impl From<Coordinate> for Point {
    fn from(coord: Coordinate) -> Self {
        Point::new(coord.longitude, coord.latitude)
    }
}

impl AbsDiffEq for Coordinate {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.latitude, &other.latitude, epsilon) && f64::abs_diff_eq(&self.longitude, &other.longitude, epsilon)
    }
}

impl RelativeEq for Coordinate {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        f64::relative_eq(&self.latitude, &other.latitude, epsilon, max_relative)
            && f64::relative_eq(&self.longitude, &other.longitude, epsilon, max_relative)
    }
}
