use crate::Coordinate;
use crate::Datum;
use crate::Point;
use crate::transform::{self, is_out_of_china};

/// Transforms coordinates between two of the datums used by Chinese map providers.
///
/// GCJ-02 and BD-09 offsets only exist inside China, coordinates outside of it are returned unchanged
/// regardless of the datum pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateTransformer {
    source: Datum,
    target: Datum,
}

impl CoordinateTransformer {
    pub fn new(source: Datum, target: Datum) -> Self {
        CoordinateTransformer { source, target }
    }

    pub fn source_datum(&self) -> Datum {
        self.source
    }

    pub fn target_datum(&self) -> Datum {
        self.target
    }

    /// The transformer performing the opposite conversion
    pub fn inverse(&self) -> Self {
        CoordinateTransformer::new(self.target, self.source)
    }

    pub fn transform_coordinate(&self, coord: Coordinate) -> Coordinate {
        if self.source == self.target || !coord.is_valid() || is_out_of_china(coord) {
            return coord;
        }

        match (self.source, self.target) {
            (Datum::Wgs84, Datum::Gcj02) => transform::to_gcj02(coord),
            (Datum::Wgs84, Datum::Bd09) => transform::to_bd09(transform::to_gcj02(coord)),
            (Datum::Gcj02, Datum::Wgs84) => transform::gcj02_to_wgs84(coord),
            (Datum::Gcj02, Datum::Bd09) => transform::to_bd09(coord),
            (Datum::Bd09, Datum::Gcj02) => transform::from_bd09(coord),
            (Datum::Bd09, Datum::Wgs84) => transform::gcj02_to_wgs84(transform::from_bd09(coord)),
            _ => coord,
        }
    }

    pub fn transform_coordinate_in_place(&self, coord: &mut Coordinate) {
        *coord = self.transform_coordinate(*coord);
    }

    /// Points use x for longitude and y for latitude
    pub fn transform_point(&self, point: Point) -> Point {
        self.transform_coordinate(point.into()).into()
    }

    pub fn transform_point_in_place(&self, point: &mut Point) {
        *point = self.transform_point(*point);
    }

    pub fn transform_points_in_place(&self, points: &mut [Point]) {
        for point in points.iter_mut() {
            self.transform_point_in_place(point);
        }
    }
}
