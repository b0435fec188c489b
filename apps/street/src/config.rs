use std::str::FromStr;

use log::LevelFilter;

use crate::geo::MapSettings;

pub const DEFAULT_DATASET_URL: &str = "data/people.json";
pub const DEFAULT_ATLAS_URL: &str = "https://cdn.jsdelivr.net/npm/world-atlas@2/countries-110m.json";
pub const DEFAULT_ATLAS_OBJECT: &str = "countries";

/// Page configuration: data locations, map geometry and log level.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dataset_url: String,
    pub atlas_url: String,
    pub atlas_object: String,
    pub map: MapSettings,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            atlas_url: DEFAULT_ATLAS_URL.to_string(),
            atlas_object: DEFAULT_ATLAS_OBJECT.to_string(),
            map: MapSettings::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Applies overrides found through `lookup`, keyed by e.g. `dataset-url`.
    ///
    /// Values that fail to parse keep the current setting.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("dataset-url") {
            self.dataset_url = url;
        }
        if let Some(url) = lookup("atlas-url") {
            self.atlas_url = url;
        }
        if let Some(object) = lookup("atlas-object") {
            self.atlas_object = object;
        }
        if let Some(width) = parse_override(&lookup, "map-width") {
            self.map.width = width;
        }
        if let Some(height) = parse_override(&lookup, "map-height") {
            self.map.height = height;
        }
        if let Some(scale) = parse_override(&lookup, "map-scale") {
            self.map.scale = scale;
        }
        if let Some(level) = parse_override(&lookup, "log-level") {
            self.log_level = level;
        }
        self
    }
}

fn parse_override<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {key} override '{raw}'");
            None
        }
    }
}
