//! View configuration: default viewport, base tile layer and fetch policy.
//!
//! Hosts may override any subset of the keys with a JSON object; missing keys
//! keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default center of the map (Mombasa).
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: -4.0435,
    lng: 39.6682,
};

/// Default zoom level of the map.
pub const DEFAULT_ZOOM: u8 = 12;

/// OpenStreetMap tile URL template.
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution shown on the base tile layer.
pub const DEFAULT_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Configuration for a single map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial viewport center
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: u8,
    /// Tile layer URL template (`{s}`, `{z}`, `{x}`, `{y}` placeholders)
    pub tile_url: String,
    /// Attribution string for the tile layer
    pub attribution: String,
    /// Ask the record store to drop records without coordinates up front
    pub prefilter_geolocated: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            prefilter_geolocated: true,
        }
    }
}

impl MapConfig {
    /// Parse a host-provided JSON override.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
