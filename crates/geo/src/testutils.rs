use serde_json::{Value, json};

use crate::Coordinate;

pub const BEIJING: Coordinate = Coordinate::latlon(39.9042, 116.4074);
pub const SHANGHAI: Coordinate = Coordinate::latlon(31.2304, 121.4737);
pub const SHENZHEN: Coordinate = Coordinate::latlon(22.5431, 114.0579);
pub const WUHAN: Coordinate = Coordinate::latlon(30.593354, 114.304569);
pub const BRUSSELS: Coordinate = Coordinate::latlon(50.8503, 4.3517);

/// Markers in every field naming scheme the marker conversion recognizes, plus one without coordinates
pub fn mixed_markers() -> Vec<Value> {
    vec![
        json!({ "id": 1, "title": "Forbidden City", "lat": BEIJING.latitude, "lng": BEIJING.longitude }),
        json!({ "id": 2, "title": "The Bund", "latitude": SHANGHAI.latitude, "longitude": SHANGHAI.longitude }),
        json!({ "m": "3", "lt": SHENZHEN.latitude, "ln": SHENZHEN.longitude, "i": "pin.png" }),
        json!({ "id": 4, "title": "No location", "content": "<p>text</p>" }),
    ]
}

pub fn coordinate_field(record: &Value, key: &str) -> f64 {
    record[key]
        .as_f64()
        .unwrap_or_else(|| panic!("Field '{key}' is not a number in {record}"))
}
