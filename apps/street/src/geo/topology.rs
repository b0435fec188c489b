use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Result, StreetError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub const fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

pub type Ring = Vec<GeoPoint>;
pub type Polygon = Vec<Ring>;

/// A named boundary: one or more polygons, each an outer ring plus holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub polygons: Vec<Polygon>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ArcRefs {
    Line(Vec<i64>),
    Polygon(Vec<Vec<i64>>),
    MultiPolygon(Vec<Vec<Vec<i64>>>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopoGeometry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub arcs: Option<ArcRefs>,
    #[serde(default)]
    pub geometries: Vec<TopoGeometry>,
    #[serde(default)]
    pub properties: Option<Properties>,
}

impl TopoGeometry {
    fn name(&self) -> String {
        self.properties
            .as_ref()
            .and_then(|properties| properties.name.clone())
            .unwrap_or_default()
    }

    /// Arc references grouped per polygon, then per ring.
    fn polygon_refs(&self) -> Vec<&[Vec<i64>]> {
        match (self.kind.as_deref(), &self.arcs) {
            (Some("Polygon"), Some(ArcRefs::Polygon(rings))) => vec![rings.as_slice()],
            (Some("MultiPolygon"), Some(ArcRefs::MultiPolygon(polygons))) => {
                polygons.iter().map(Vec::as_slice).collect()
            }
            (kind, _) => {
                log::debug!("skipping {kind:?} geometry '{}'", self.name());
                Vec::new()
            }
        }
    }
}

/// A decoded TopoJSON document.
#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub objects: HashMap<String, TopoGeometry>,
    pub arcs: Vec<Vec<Vec<f64>>>,
}

impl Topology {
    pub fn from_json_str(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(StreetError::Topology)
    }

    /// Expands the polygon geometries of `object` into features.
    pub fn features(&self, object: &str) -> Result<Vec<Feature>> {
        let root = self
            .objects
            .get(object)
            .ok_or_else(|| StreetError::MissingObject(object.to_string()))?;
        let arcs = self.decode_arcs();

        let geometries = if root.kind.as_deref() == Some("GeometryCollection") {
            root.geometries.iter().collect::<Vec<_>>()
        } else {
            vec![root]
        };

        geometries
            .into_iter()
            .map(|geometry| -> Result<Feature> {
                let polygons = geometry
                    .polygon_refs()
                    .into_iter()
                    .map(|rings| {
                        rings
                            .iter()
                            .map(|refs| stitch_ring(&arcs, refs))
                            .collect::<Result<Polygon>>()
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Feature {
                    name: geometry.name(),
                    polygons,
                })
            })
            .collect()
    }

    /// Absolute coordinates for every arc, undoing delta quantization.
    fn decode_arcs(&self) -> Vec<Vec<GeoPoint>> {
        self.arcs
            .iter()
            .map(|arc| {
                let mut x = 0.0;
                let mut y = 0.0;
                arc.iter()
                    .filter_map(|position| match position.as_slice() {
                        [dx, dy, ..] => Some((*dx, *dy)),
                        _ => None,
                    })
                    .map(|(px, py)| match self.transform {
                        Some(transform) => {
                            x += px;
                            y += py;
                            GeoPoint::new(
                                x.mul_add(transform.scale[0], transform.translate[0]),
                                y.mul_add(transform.scale[1], transform.translate[1]),
                            )
                        }
                        None => GeoPoint::new(px, py),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Joins arcs into one ring; a negative reference `i` is arc `!i` reversed.
fn stitch_ring(arcs: &[Vec<GeoPoint>], refs: &[i64]) -> Result<Ring> {
    let mut ring: Ring = Vec::new();
    for &reference in refs {
        let reversed = reference < 0;
        let position = if reversed { !reference } else { reference };
        let arc = usize::try_from(position)
            .ok()
            .and_then(|position| arcs.get(position))
            .ok_or(StreetError::ArcOutOfRange {
                index: reference,
                len: arcs.len(),
            })?;

        // Consecutive arcs share an endpoint.
        if !ring.is_empty() {
            ring.pop();
        }
        if reversed {
            ring.extend(arc.iter().rev());
        } else {
            ring.extend(arc.iter());
        }
    }
    Ok(ring)
}
