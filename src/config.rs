//! App Configuration
//!
//! Settings baked in from `config/app.json` at compile time.

use serde::Deserialize;
use waste_domain::{FillBand, LatLng, Viewport, MAX_ZOOM};

const EMBEDDED_CONFIG: &str = include_str!("../config/app.json");

/// Top-level app configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub map: MapConfig,
}

/// Dashboard map settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
    /// Tile URL template with `{s}`, `{z}`, `{x}`, `{y}`
    pub tile_url: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
    /// Marker image URL with a `{color}` placeholder
    pub marker_icon_url: String,
    pub marker_shadow_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(40.730610, -73.935242),
            zoom: 12,
            width: 560,
            height: 400,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            attribution: "© OpenStreetMap contributors".to_string(),
            marker_icon_url: "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-{color}.png".to_string(),
            marker_shadow_url: "https://cdnjs.cloudflare.com/ajax/libs/leaflet/0.7.7/images/marker-shadow.png".to_string(),
        }
    }
}

impl MapConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            center: self.center,
            zoom: self.zoom,
            width: self.width,
            height: self.height,
        }
    }

    pub fn marker_icon(&self, band: FillBand) -> String {
        self.marker_icon_url.replace("{color}", band.color())
    }
}

impl AppConfig {
    /// Parse a config, clamping the map zoom to the published tile range
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        if config.map.zoom > MAX_ZOOM {
            log::warn!("[CONFIG] Map zoom {} is past {}, clamping", config.map.zoom, MAX_ZOOM);
            config.map.zoom = MAX_ZOOM;
        }
        Ok(config)
    }

    /// Parse the embedded config, falling back to defaults
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] Invalid config/app.json, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
