//! Map provider policy: which datum a map backend expects, and converting WGS-84 data into it.

use std::convert::Infallible;
use std::str::FromStr;

use crate::{
    Coordinate, Datum,
    transform::{self, is_out_of_china},
};

/// The map rendering backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "&'static str"))]
pub enum Provider {
    None,
    #[default]
    Auto,
    Google,
    Osm,
    Amap,
    Baidu,
    Tencent,
    Tianditu,
}

/// Configuration token and target datum of every provider, indexed by the `Provider` discriminant.
/// This table is the only place where the provider to datum association is defined.
const PROVIDER_TABLE: [(Provider, &str, Datum); 8] = [
    (Provider::None, "none", Datum::Wgs84),
    (Provider::Auto, "auto", Datum::Wgs84),
    (Provider::Google, "google", Datum::Wgs84),
    (Provider::Osm, "osm", Datum::Wgs84),
    (Provider::Amap, "amap", Datum::Gcj02),
    (Provider::Baidu, "baidu", Datum::Bd09),
    (Provider::Tencent, "tencent", Datum::Gcj02),
    (Provider::Tianditu, "tianditu", Datum::Gcj02),
];

impl Provider {
    pub const ALL: [Provider; 8] = [
        Provider::None,
        Provider::Auto,
        Provider::Google,
        Provider::Osm,
        Provider::Amap,
        Provider::Baidu,
        Provider::Tencent,
        Provider::Tianditu,
    ];

    /// Parses a configuration token (case sensitive).
    /// Unrecognized tokens fall back to `Auto`, which performs no conversion.
    pub fn from_token(token: &str) -> Provider {
        match PROVIDER_TABLE.iter().find(|(_, name, _)| *name == token) {
            Some((provider, _, _)) => *provider,
            None => {
                log::debug!("Unrecognized map provider '{token}', using 'auto'");
                Provider::Auto
            }
        }
    }

    pub fn token(self) -> &'static str {
        PROVIDER_TABLE[self as usize].1
    }

    /// The datum the provider's tiles are rendered in
    pub fn target_datum(self) -> Datum {
        PROVIDER_TABLE[self as usize].2
    }

    pub fn needs_conversion(self) -> bool {
        self.target_datum() != Datum::Wgs84
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl From<&str> for Provider {
    fn from(token: &str) -> Self {
        Provider::from_token(token)
    }
}

impl From<String> for Provider {
    fn from(token: String) -> Self {
        Provider::from_token(&token)
    }
}

impl From<Provider> for &'static str {
    fn from(provider: Provider) -> Self {
        provider.token()
    }
}

impl FromStr for Provider {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Provider::from_token(s))
    }
}

/// A converted coordinate together with the WGS-84 input it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionResult {
    pub converted: Coordinate,
    pub datum: Datum,
    pub original: Coordinate,
}

impl ConversionResult {
    fn unchanged(coord: Coordinate) -> Self {
        ConversionResult {
            converted: coord,
            datum: Datum::Wgs84,
            original: coord,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.converted != self.original
    }
}

/// True when coordinates must be converted before they are shown on the provider's map.
/// Accepts a `Provider` or a configuration token.
pub fn needs_conversion(provider: impl Into<Provider>) -> bool {
    provider.into().needs_conversion()
}

/// Converts a WGS-84 coordinate into the datum expected by the provider.
///
/// Invalid coordinates (non-finite or out of range) and coordinates outside of China are returned unchanged.
pub fn convert(provider: Provider, coord: Coordinate) -> ConversionResult {
    if !coord.is_valid() || is_out_of_china(coord) {
        return ConversionResult::unchanged(coord);
    }

    let converted = match provider.target_datum() {
        Datum::Wgs84 => coord,
        Datum::Gcj02 => transform::to_gcj02(coord),
        Datum::Bd09 => transform::to_bd09(transform::to_gcj02(coord)),
    };

    ConversionResult {
        converted,
        datum: provider.target_datum(),
        original: coord,
    }
}

/// Converts a coordinate in the provider's datum back to WGS-84,
/// e.g. after a user moved a marker on a GCJ-02 map.
pub fn to_wgs84(coord: Coordinate, provider: Provider) -> Coordinate {
    if !coord.is_valid() || is_out_of_china(coord) {
        return coord;
    }

    match provider.target_datum() {
        Datum::Wgs84 => coord,
        Datum::Gcj02 => transform::gcj02_to_wgs84(coord),
        Datum::Bd09 => transform::gcj02_to_wgs84(transform::from_bd09(coord)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{BEIJING, BRUSSELS, SHANGHAI};
    use approx::assert_abs_diff_eq;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for (index, (provider, _, _)) in PROVIDER_TABLE.iter().enumerate() {
            assert_eq!(*provider as usize, index);
            assert_eq!(Provider::ALL[index], *provider);
        }
    }

    #[test]
    fn target_datums() {
        assert_eq!(Provider::None.target_datum(), Datum::Wgs84);
        assert_eq!(Provider::Auto.target_datum(), Datum::Wgs84);
        assert_eq!(Provider::Google.target_datum(), Datum::Wgs84);
        assert_eq!(Provider::Osm.target_datum(), Datum::Wgs84);
        assert_eq!(Provider::Amap.target_datum(), Datum::Gcj02);
        assert_eq!(Provider::Tencent.target_datum(), Datum::Gcj02);
        assert_eq!(Provider::Tianditu.target_datum(), Datum::Gcj02);
        assert_eq!(Provider::Baidu.target_datum(), Datum::Bd09);
    }

    #[test]
    fn tokens() {
        for provider in Provider::ALL {
            assert_eq!(Provider::from_token(provider.token()), provider);
            assert_eq!(provider.to_string(), provider.token());
        }

        assert_eq!(Provider::from_token("AMAP"), Provider::Auto);
        assert_eq!(Provider::from_token("mapbox"), Provider::Auto);
        assert_eq!(Provider::from_token(""), Provider::Auto);
        assert_eq!("baidu".parse::<Provider>(), Ok(Provider::Baidu));
    }

    #[test]
    fn conversion_needed() {
        for token in ["none", "auto", "google", "osm", "bing", "Amap"] {
            assert!(!needs_conversion(token), "{token}");
        }

        for token in ["amap", "baidu", "tencent", "tianditu"] {
            assert!(needs_conversion(token), "{token}");
        }

        assert!(needs_conversion(Provider::Amap));
        assert!(!needs_conversion(Provider::Osm));
    }

    #[test]
    fn convert_dispatches_on_datum() {
        let res = convert(Provider::Osm, BEIJING);
        assert_eq!(res.converted, BEIJING);
        assert_eq!(res.datum, Datum::Wgs84);
        assert!(!res.is_changed());

        for provider in [Provider::Amap, Provider::Tencent, Provider::Tianditu] {
            let res = convert(provider, BEIJING);
            assert_eq!(res.original, BEIJING);
            assert_eq!(res.converted, transform::to_gcj02(BEIJING));
            assert_eq!(res.datum, Datum::Gcj02);
        }

        let res = convert(Provider::Baidu, BEIJING);
        assert_eq!(res.original, BEIJING);
        assert_eq!(res.datum, Datum::Bd09);
        assert_abs_diff_eq!(res.converted, Coordinate::latlon(39.91186533561899, 116.42004633029816), epsilon = 1e-9);
    }

    #[test]
    fn convert_passes_invalid_input_through() {
        for coord in [
            Coordinate::latlon(f64::NAN, 116.4074),
            Coordinate::latlon(39.9042, f64::INFINITY),
            Coordinate::latlon(91.0, 116.4074),
            Coordinate::latlon(39.9042, 181.0),
        ] {
            let res = convert(Provider::Baidu, coord);
            assert_eq!(res.converted.longitude.to_bits(), coord.longitude.to_bits());
            assert_eq!(res.converted.latitude.to_bits(), coord.latitude.to_bits());
        }
    }

    #[test]
    fn baidu_leaves_coordinates_outside_china_alone() {
        let res = convert(Provider::Baidu, BRUSSELS);
        assert_eq!(res.converted, BRUSSELS);
        assert_eq!(to_wgs84(BRUSSELS, Provider::Baidu), BRUSSELS);
    }

    #[test]
    fn round_trip_per_provider() {
        for provider in Provider::ALL {
            for coord in [BEIJING, SHANGHAI] {
                let res = convert(provider, coord);
                assert_abs_diff_eq!(to_wgs84(res.converted, provider), coord, epsilon = 1e-5);
            }
        }

        assert_abs_diff_eq!(to_wgs84(transform::to_gcj02(BEIJING), Provider::Amap), BEIJING, epsilon = 1e-7);
    }
}
