use super::path::{planar_centroid, project_rings, svg_path};
use super::projection::Mercator;
use super::topology::Feature;

pub const NEUTRAL_FILL: &str = "#ccc";
pub const HIGHLIGHT_FILL: &str = "#e74c3c";
pub const BORDER_STROKE: &str = "#fff";
pub const MARKER_FILL: &str = "red";
pub const MARKER_RADIUS: f64 = 3.0;

/// Display names that differ from the atlas' country names.
pub const COUNTRY_ALIASES: [(&str, &str); 3] = [
    ("United States", "United States of America"),
    ("Czech Republic", "Czechia"),
    ("South Korea", "South Korea"),
];

pub fn atlas_name(country: &str) -> &str {
    COUNTRY_ALIASES
        .iter()
        .find(|(display, _)| *display == country)
        .map_or(country, |&(_, atlas)| atlas)
}

/// Size and projection of the popup map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            scale: 90.0,
        }
    }
}

impl MapSettings {
    pub fn projection(&self) -> Mercator {
        Mercator::new(self.scale, (self.width / 2.0, self.height / 1.5))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapShape {
    pub name: String,
    pub path: String,
    pub highlighted: bool,
}

impl MapShape {
    pub const fn fill(&self) -> &'static str {
        if self.highlighted {
            HIGHLIGHT_FILL
        } else {
            NEUTRAL_FILL
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapMarker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Every country outline plus a marker on the selected one.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<MapShape>,
    pub marker: Option<MapMarker>,
}

impl MapView {
    pub fn build(features: &[Feature], country: &str, settings: &MapSettings) -> Self {
        let projection = settings.projection();
        let target = atlas_name(country);
        let mut marker = None;

        let shapes = features
            .iter()
            .map(|feature| {
                let rings = feature
                    .polygons
                    .iter()
                    .flat_map(|polygon| project_rings(&projection, polygon))
                    .collect::<Vec<_>>();
                let highlighted = feature.name == target;
                if highlighted && marker.is_none() {
                    marker = planar_centroid(&rings).map(|(x, y)| MapMarker {
                        x,
                        y,
                        radius: MARKER_RADIUS,
                    });
                }
                MapShape {
                    name: feature.name.clone(),
                    path: svg_path(&rings),
                    highlighted,
                }
            })
            .collect();

        if marker.is_none() {
            log::debug!("no atlas boundary named '{target}'");
        }

        Self {
            width: settings.width,
            height: settings.height,
            shapes,
            marker,
        }
    }
}
