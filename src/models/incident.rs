//! Incident records as they appear in the host document.

use std::fmt;

use geo::Coord;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Incident identifier. Documents use both numeric and string ids; anything
/// else is carried through as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncidentId {
    Int(i64),
    Text(String),
    Other(Value),
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentId::Int(id) => write!(f, "{}", id),
            IncidentId::Text(id) => write!(f, "{}", id),
            IncidentId::Other(id) => write!(f, "{}", id),
        }
    }
}

/// Stored `[lat, lon]` pair.
///
/// Kept as JSON numbers so that `35` and `35.0` survive a rewrite unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinates([Number; 2]);

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        Some(Self([Number::from_f64(lat)?, Number::from_f64(lon)?]))
    }

    pub fn lat(&self) -> f64 {
        self.0[0].as_f64().unwrap_or(f64::NAN)
    }

    pub fn lon(&self) -> f64 {
        self.0[1].as_f64().unwrap_or(f64::NAN)
    }

    /// Convert to the geometry convention: longitude is `x`, latitude is `y`.
    ///
    /// Records store latitude first, so the axes are swapped here.
    pub fn to_point(&self) -> Coord<f64> {
        Coord {
            x: self.lon(),
            y: self.lat(),
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0[0], self.0[1])
    }
}

/// Incident as parsed from the document. Every field except `province` is required.
///
/// Only `coords` is interpreted; the other fields keep whatever JSON the
/// document holds and are written back as they came.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    pub verified: Value,
    pub desc: Value,
    pub desc_fa: Value,
    pub coords: Coordinates,
    #[serde(default)]
    pub province: Option<Value>,
    pub link: Value,
    pub date: Value,
    pub size: Value,
    pub alt: Value,
}

impl Incident {
    /// Build the annotated copy of this incident. `self` is left untouched.
    pub fn annotated(&self, province: impl Into<String>) -> AnnotatedIncident {
        AnnotatedIncident {
            id: self.id.clone(),
            verified: self.verified.clone(),
            desc: self.desc.clone(),
            desc_fa: self.desc_fa.clone(),
            coords: self.coords.clone(),
            province: province.into(),
            link: self.link.clone(),
            date: self.date.clone(),
            size: self.size.clone(),
            alt: self.alt.clone(),
        }
    }
}

/// Incident with its province assigned.
///
/// Field order here is the serialized order and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedIncident {
    pub id: IncidentId,
    pub verified: Value,
    pub desc: Value,
    pub desc_fa: Value,
    pub coords: Coordinates,
    pub province: String,
    pub link: Value,
    pub date: Value,
    pub size: Value,
    pub alt: Value,
}

/// An incident no region claimed.
#[derive(Debug, Clone, PartialEq)]
pub struct Unresolved {
    pub id: IncidentId,
    pub coords: Coordinates,
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.coords)
    }
}
