//! Ray-casting containment tests.
//!
//! Points use `x` = longitude and `y` = latitude. Points lying exactly on an
//! edge or vertex may land on either side; province borders are approximate
//! so that is acceptable.

use geo::{Coord, LineString, Polygon};

use crate::models::RegionGeometry;

/// Added to the edge height in the crossing formula so horizontal edges
/// never divide by zero.
pub const EDGE_EPSILON: f64 = 1e-12;

/// Even-odd test: cast a ray toward +x and count edge crossings.
///
/// The ring is treated as closed whether or not its last point repeats the first.
pub fn point_in_ring(point: Coord<f64>, ring: &LineString<f64>) -> bool {
    let Some(mut prev) = ring.0.last() else {
        return false;
    };

    let mut inside = false;
    for current in &ring.0 {
        // Edge straddles the ray's height
        if (current.y > point.y) != (prev.y > point.y) {
            let x_cross = (prev.x - current.x) * (point.y - current.y)
                / (prev.y - current.y + EDGE_EPSILON)
                + current.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        prev = current;
    }

    inside
}

/// Inside the exterior ring and inside none of the holes.
pub fn point_in_polygon(point: Coord<f64>, polygon: &Polygon<f64>) -> bool {
    if !point_in_ring(point, polygon.exterior()) {
        return false;
    }
    !polygon
        .interiors()
        .iter()
        .any(|hole| point_in_ring(point, hole))
}

/// Dispatch on the geometry variant. Unsupported shapes contain nothing.
pub fn point_in_geometry(point: Coord<f64>, geometry: &RegionGeometry) -> bool {
    match geometry {
        RegionGeometry::Polygon(polygon) => point_in_polygon(point, polygon),
        RegionGeometry::MultiPolygon(multi) => {
            multi.iter().any(|polygon| point_in_polygon(point, polygon))
        }
        RegionGeometry::Unsupported(_) => false,
    }
}
