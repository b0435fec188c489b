//! World-map pipeline for the popup: TopoJSON → projected SVG shapes.

pub mod map;
pub mod path;
pub mod projection;
pub mod topology;

pub use map::{atlas_name, MapMarker, MapSettings, MapShape, MapView};
pub use projection::Mercator;
pub use topology::{Feature, GeoPoint, Topology};
