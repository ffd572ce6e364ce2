//! Region lookup for a single point.

use geo::Coord;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::geometry::point_in_geometry;
use super::CentroidTable;
use crate::models::{Region, UNKNOWN_REGION};

/// How to rank a containing region that has no entry in the centroid table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCentroid {
    /// Use the query point itself as the centroid. The distance is always
    /// zero, so such a region beats every registered candidate.
    #[default]
    QueryPoint,
    /// Treat the distance as infinite so registered candidates always win.
    Infinite,
}

/// Point-in-polygon lookup over a fixed set of regions.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    regions: Vec<Region>,
    centroids: CentroidTable,
    missing_centroid: MissingCentroid,
}

impl RegionResolver {
    pub fn new(regions: Vec<Region>, centroids: CentroidTable) -> Self {
        Self {
            regions,
            centroids,
            missing_centroid: MissingCentroid::default(),
        }
    }

    pub fn with_missing_centroid(mut self, policy: MissingCentroid) -> Self {
        self.missing_centroid = policy;
        self
    }

    /// All regions containing the point, in load order
    pub fn candidates(&self, point: Coord<f64>) -> Vec<&Region> {
        self.regions
            .iter()
            .filter(|region| point_in_geometry(point, &region.geometry))
            .collect()
    }

    /// Name of the region containing `point`, or `"Unknown"`.
    ///
    /// When several regions contain the point the one whose centroid is
    /// nearest wins; equal distances go to the earliest region.
    pub fn resolve(&self, point: Coord<f64>) -> &str {
        let candidates = self.candidates(point);

        if candidates.len() > 1 {
            debug!(
                "Point ({}, {}) claimed by {} regions: {:?}",
                point.x,
                point.y,
                candidates.len(),
                candidates.iter().map(|r| r.name.as_str()).collect::<Vec<_>>()
            );
        }

        let mut best: Option<(&Region, f64)> = None;
        for region in candidates {
            let distance = self.centroid_distance(region, point);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((region, distance)),
            }
        }

        best.map_or(UNKNOWN_REGION, |(region, _)| region.name.as_str())
    }

    /// Straight Euclidean distance from `point` to the region's reference center.
    fn centroid_distance(&self, region: &Region, point: Coord<f64>) -> f64 {
        match (self.centroids.get(&region.name), self.missing_centroid) {
            (Some(center), _) => (center.x - point.x).hypot(center.y - point.y),
            (None, MissingCentroid::QueryPoint) => 0.0,
            (None, MissingCentroid::Infinite) => f64::INFINITY,
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn centroids(&self) -> &CentroidTable {
        &self.centroids
    }

    pub fn missing_centroid(&self) -> MissingCentroid {
        self.missing_centroid
    }
}
