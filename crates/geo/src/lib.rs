#![warn(clippy::unwrap_used)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Conversion between the WGS-84, GCJ-02 and BD-09 datums used by Chinese map providers.
//!
//! The transforms themselves live in [`transform`], the provider policy that decides which of
//! them applies lives in [`provider`], and [`markers`] applies that policy to loosely shaped
//! marker records.

pub type Result<T = ()> = std::result::Result<T, Error>;

mod coordinate;
mod coordinatetransformer;
mod datum;
mod error;
mod latlonbounds;
pub mod markers;
pub mod provider;
mod settings;
pub mod transform;

#[cfg(test)]
mod testutils;

#[doc(inline)]
pub use coordinate::Coordinate;
#[doc(inline)]
pub use coordinatetransformer::CoordinateTransformer;
#[doc(inline)]
pub use datum::Datum;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use latlonbounds::LatLonBounds;
#[doc(inline)]
pub use markers::{convert_markers, restore_markers};
#[doc(inline)]
pub use provider::{ConversionResult, Provider, convert, needs_conversion, to_wgs84};
#[doc(inline)]
pub use settings::MapSettings;
#[doc(inline)]
pub use transform::{from_bd09, is_out_of_china, to_bd09, to_gcj02};

pub type Point<T = f64> = geo_types::Point<T>;
