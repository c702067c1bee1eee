//! Coordinate conversion for Chinese map providers.
//!
//! Re-exports the [`chinageo`] crate, which holds the datum transforms, the provider policy and the marker conversion.

#[doc(inline)]
pub use chinageo::*;

pub use chinageo as geo;
