//! Core data models for province annotation.

pub mod incident;
pub mod region;

pub use incident::{AnnotatedIncident, Coordinates, Incident, IncidentId, Unresolved};
pub use region::{Region, RegionGeometry};

/// Label given to incidents that no region contains.
pub const UNKNOWN_REGION: &str = "Unknown";
