use std::fmt::Write;

use super::projection::Mercator;
use super::topology::GeoPoint;

pub type ScreenPoint = (f64, f64);

/// Shifts longitudes by whole turns so no step in the ring exceeds 180°.
pub fn unwrap_longitudes(ring: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut offset = 0.0;
    let mut previous: Option<f64> = None;
    ring.iter()
        .map(|point| {
            if let Some(previous) = previous {
                let step = point.lon_deg - previous;
                if step > 180.0 {
                    offset -= 360.0;
                } else if step < -180.0 {
                    offset += 360.0;
                }
            }
            previous = Some(point.lon_deg);
            GeoPoint::new(point.lon_deg + offset, point.lat_deg)
        })
        .collect()
}

pub fn project_rings(projection: &Mercator, rings: &[Vec<GeoPoint>]) -> Vec<Vec<ScreenPoint>> {
    rings
        .iter()
        .map(|ring| {
            unwrap_longitudes(ring)
                .into_iter()
                .map(|point| projection.project(point))
                .collect()
        })
        .collect()
}

/// SVG path data with one closed subpath per ring.
pub fn svg_path(rings: &[Vec<ScreenPoint>]) -> String {
    let mut data = String::new();
    for ring in rings.iter().filter(|ring| ring.len() > 1) {
        for (index, (x, y)) in ring.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            let _ = write!(data, "{command}{x:.1},{y:.1}");
        }
        data.push('Z');
    }
    data
}

/// Area-weighted centroid; holes wound the other way subtract.
///
/// Degenerate (zero-area) input falls back to the mean of its vertices.
pub fn planar_centroid(rings: &[Vec<ScreenPoint>]) -> Option<ScreenPoint> {
    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;

    for ring in rings {
        for (index, &(x0, y0)) in ring.iter().enumerate() {
            let (x1, y1) = ring[(index + 1) % ring.len()];
            let cross = x0.mul_add(y1, -(x1 * y0));
            area += cross;
            cx += (x0 + x1) * cross;
            cy += (y0 + y1) * cross;
        }
    }

    if area.abs() > f64::EPSILON {
        return Some((cx / (3.0 * area), cy / (3.0 * area)));
    }

    let points = rings.iter().flatten().collect::<Vec<_>>();
    if points.is_empty() {
        return None;
    }
    let count = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &&(x, y)| (sx + x, sy + y));
    Some((sum_x / count, sum_y / count))
}
