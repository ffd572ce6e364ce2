//! Provincer - assigns provinces to incident records by point-in-polygon lookup
//!
//! This library provides the geometry, resolution and document rewriting used by
//! the `annotate` binary.

pub mod annotator;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod pip;
pub mod pipeline;

pub use annotator::{annotate, Annotation};
pub use config::Config;
pub use error::{Error, Result};
pub use models::{AnnotatedIncident, Incident, Region, RegionGeometry, UNKNOWN_REGION};
pub use pip::{CentroidTable, MissingCentroid, RegionResolver};
