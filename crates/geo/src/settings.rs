use bon::bon;

use crate::{Coordinate, Provider, provider};

const DEFAULT_MAPS_API: &str = "google";

fn default_maps_api() -> String {
    DEFAULT_MAPS_API.to_string()
}

/// The map related site settings that decide which provider is active.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSettings {
    #[cfg_attr(feature = "serde", serde(default = "default_maps_api"))]
    maps_api: String,
    #[cfg_attr(feature = "serde", serde(default))]
    google_maps_api_key: Option<String>,
}

impl Default for MapSettings {
    fn default() -> Self {
        MapSettings {
            maps_api: default_maps_api(),
            google_maps_api_key: None,
        }
    }
}

#[bon]
impl MapSettings {
    #[builder]
    pub fn new(maps_api: Option<&str>, #[builder(into)] google_maps_api_key: Option<String>) -> Self {
        Self {
            maps_api: maps_api.unwrap_or(DEFAULT_MAPS_API).to_string(),
            google_maps_api_key,
        }
    }
}

impl MapSettings {
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(feature = "serde")]
    pub fn from_json_file(path: &std::path::Path) -> crate::Result<Self> {
        if !path.is_file() {
            return Err(crate::Error::InvalidPath(path.to_path_buf()));
        }

        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// The configured provider token, as stored
    pub fn maps_api(&self) -> &str {
        &self.maps_api
    }

    fn has_google_key(&self) -> bool {
        self.google_maps_api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }

    /// The provider that will actually render the maps.
    ///
    /// Google (and auto, which prefers Google) fall back to OpenStreetMap when no Google API key is configured.
    /// Unrecognized tokens resolve to `Provider::Auto`.
    pub fn active_provider(&self) -> Provider {
        if matches!(self.maps_api.as_str(), "google" | "auto") && !self.has_google_key() {
            log::debug!("No Google Maps API key configured, '{}' falls back to 'osm'", self.maps_api);
            return Provider::Osm;
        }

        Provider::from_token(&self.maps_api)
    }

    pub fn needs_conversion(&self) -> bool {
        self.active_provider().needs_conversion()
    }

    /// Converts the default map center for display on the active provider.
    /// A zero latitude or longitude marks an unset center and is returned as is.
    pub fn convert_center(&self, center: Coordinate) -> Coordinate {
        if center.latitude == 0.0 || center.longitude == 0.0 {
            return center;
        }

        provider::convert(self.active_provider(), center).converted
    }
}
