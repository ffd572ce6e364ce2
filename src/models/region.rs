//! Named regions and their shapes.

use geo::{MultiPolygon, Polygon};

/// Shape of one region.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
    /// Any other GeoJSON geometry type (or none at all). Contains nothing.
    Unsupported(String),
}

impl RegionGeometry {
    pub fn is_supported(&self) -> bool {
        !matches!(self, RegionGeometry::Unsupported(_))
    }
}

/// A province boundary loaded from the region dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub geometry: RegionGeometry,
}

impl Region {
    pub fn new(name: impl Into<String>, geometry: RegionGeometry) -> Self {
        Self {
            name: name.into(),
            geometry,
        }
    }
}
