use crate::Coordinate;

/// Axis aligned bounding box in geographic coordinates (inclusive edges)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLonBounds {
    southwest: Coordinate,
    northeast: Coordinate,
}

impl LatLonBounds {
    pub const fn from_corners(southwest: Coordinate, northeast: Coordinate) -> Self {
        LatLonBounds { southwest, northeast }
    }

    /// The smallest bounds containing both coordinates
    pub fn hull(coord1: Coordinate, coord2: Coordinate) -> Self {
        LatLonBounds {
            southwest: Coordinate::latlon(coord1.latitude.min(coord2.latitude), coord1.longitude.min(coord2.longitude)),
            northeast: Coordinate::latlon(coord1.latitude.max(coord2.latitude), coord1.longitude.max(coord2.longitude)),
        }
    }

    pub fn southwest(&self) -> Coordinate {
        self.southwest
    }

    pub fn northeast(&self) -> Coordinate {
        self.northeast
    }

    /// NaN components are never contained.
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.southwest.latitude..=self.northeast.latitude).contains(&coord.latitude)
            && (self.southwest.longitude..=self.northeast.longitude).contains(&coord.longitude)
    }
}
