//! Point-in-Polygon (PIP) province lookup.
//!
//! Loads province boundaries from GeoJSON and resolves a point to a single
//! province, using reference centers to settle overlapping boundaries.

mod boundary;
mod centroids;
pub mod geometry;
mod service;

pub use boundary::{load_regions, parse_regions};
pub use centroids::CentroidTable;
pub use geometry::{point_in_geometry, point_in_polygon, point_in_ring};
pub use service::{MissingCentroid, RegionResolver};
