//! Provider conversion for marker records as they travel between storage and the map front end.
//!
//! Records are JSON objects whose coordinates can appear under several field names:
//! `lat`/`lng`, `latitude`/`longitude`, the compact `lt`/`ln` used by marker listings,
//! or nested as `position.lat`/`position.lng`.
//! Every converted pair is annotated with `original_<field>` siblings holding the WGS-84 input.
//! Everything else on a record is left untouched.

use serde_json::{Map, Value};

use crate::{
    ConversionResult, Coordinate, Provider,
    provider::{self, to_wgs84},
};

/// (latitude, longitude) field names recognized on the top level of a record
pub const FIELD_PAIRS: [(&str, &str); 3] = [("lat", "lng"), ("latitude", "longitude"), ("lt", "ln")];

/// Sub object holding a `lat`/`lng` pair
pub const POSITION_FIELD: &str = "position";

pub const ORIGINAL_PREFIX: &str = "original_";

fn original_key(key: &str) -> String {
    format!("{ORIGINAL_PREFIX}{key}")
}

/// Numbers and numeric strings are accepted, anything else is not a coordinate value.
fn coordinate_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(num) => num.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// The pair stored under the given keys, if both are present and form a valid coordinate
fn read_pair(object: &Map<String, Value>, lat_key: &str, lng_key: &str) -> Option<Coordinate> {
    let lat = coordinate_value(object.get(lat_key)?)?;
    let lng = coordinate_value(object.get(lng_key)?)?;

    let coord = Coordinate::latlon(lat, lng);
    coord.is_valid().then_some(coord)
}

fn write_pair(object: &mut Map<String, Value>, lat_key: &str, lng_key: &str, coord: Coordinate) {
    object.insert(lat_key.to_string(), Value::from(coord.latitude));
    object.insert(lng_key.to_string(), Value::from(coord.longitude));
}

/// Calls `cb` with the object and key names of every recognized pair location on the record
fn for_each_pair<F>(record: &mut Map<String, Value>, mut cb: F) -> bool
where
    F: FnMut(&mut Map<String, Value>, &str, &str) -> bool,
{
    let mut modified = false;
    for (lat_key, lng_key) in FIELD_PAIRS {
        modified |= cb(record, lat_key, lng_key);
    }

    if let Some(Value::Object(position)) = record.get_mut(POSITION_FIELD) {
        modified |= cb(position, "lat", "lng");
    }

    modified
}

fn convert_pair(provider: Provider, object: &mut Map<String, Value>, lat_key: &str, lng_key: &str) -> bool {
    let Some(coord) = read_pair(object, lat_key, lng_key) else {
        return false;
    };

    let res = provider::convert(provider, coord);
    log::trace!("{provider}: {lat_key}/{lng_key} {} -> {}", res.original, res.converted);

    write_pair(object, lat_key, lng_key, res.converted);
    object.insert(original_key(lat_key), Value::from(res.original.latitude));
    object.insert(original_key(lng_key), Value::from(res.original.longitude));
    true
}

fn restore_pair(provider: Provider, object: &mut Map<String, Value>, lat_key: &str, lng_key: &str) -> bool {
    let Some(coord) = read_pair(object, lat_key, lng_key) else {
        return false;
    };

    let wgs = to_wgs84(coord, provider);
    log::trace!("{provider}: {lat_key}/{lng_key} {coord} -> {wgs} (WGS84)");

    write_pair(object, lat_key, lng_key, wgs);
    object.remove(&original_key(lat_key));
    object.remove(&original_key(lng_key));
    true
}

/// Converts the coordinates of a single record in place.
/// Returns true if at least one coordinate pair was converted.
/// Records that are not JSON objects are ignored.
pub fn convert_marker(provider: Provider, record: &mut Value) -> bool {
    match record {
        Value::Object(object) => for_each_pair(object, |obj, lat_key, lng_key| convert_pair(provider, obj, lat_key, lng_key)),
        _ => false,
    }
}

/// Converts the WGS-84 coordinates of all records into the datum of the provider.
///
/// When the provider needs no conversion the records are returned as is.
pub fn convert_markers(provider: Provider, mut records: Vec<Value>) -> Vec<Value> {
    if !provider.needs_conversion() || records.is_empty() {
        return records;
    }

    let mut converted = 0;
    for record in records.iter_mut() {
        if convert_marker(provider, record) {
            converted += 1;
        }
    }

    log::debug!("Converted {converted}/{} markers to {} for '{provider}'", records.len(), provider.target_datum());
    records
}

/// Converts the coordinates of a single record from the provider datum back to WGS-84
/// and drops the `original_*` annotations of the restored pairs.
/// The current field values are used, so positions moved by the user are preserved.
pub fn restore_marker(provider: Provider, record: &mut Value) -> bool {
    match record {
        Value::Object(object) => for_each_pair(object, |obj, lat_key, lng_key| restore_pair(provider, obj, lat_key, lng_key)),
        _ => false,
    }
}

/// Inverse of [`convert_markers`], to be applied before edited records are stored.
pub fn restore_markers(provider: Provider, mut records: Vec<Value>) -> Vec<Value> {
    if !provider.needs_conversion() || records.is_empty() {
        return records;
    }

    let mut restored = 0;
    for record in records.iter_mut() {
        if restore_marker(provider, record) {
            restored += 1;
        }
    }

    log::debug!("Restored {restored}/{} markers from {} for '{provider}'", records.len(), provider.target_datum());
    records
}

/// Converts plain coordinates, one result per input in the same order.
pub fn convert_coordinates(provider: Provider, coords: &[Coordinate]) -> Vec<ConversionResult> {
    coords.iter().map(|coord| provider::convert(provider, *coord)).collect()
}
