//! Province boundary loading from a GeoJSON FeatureCollection.

use std::fs;
use std::path::Path;

use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{Region, RegionGeometry, UNKNOWN_REGION};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

type Position = Vec<f64>;

/// Read and parse the region dataset at `path`.
pub fn load_regions(path: &Path) -> Result<Vec<Region>> {
    info!("Loading regions from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let regions = parse_regions(&content)?;

    let unsupported = regions
        .iter()
        .filter(|r| !r.geometry.is_supported())
        .count();
    info!(
        "Loaded {} regions ({} with unsupported geometry)",
        regions.len(),
        unsupported
    );

    Ok(regions)
}

/// Parse a FeatureCollection into regions, keeping feature order.
///
/// Features whose geometry is neither Polygon nor MultiPolygon are kept as
/// [`RegionGeometry::Unsupported`]; coordinates that cannot be read are an error.
pub fn parse_regions(json: &str) -> Result<Vec<Region>> {
    let collection: FeatureCollection =
        serde_json::from_str(json).map_err(|e| Error::MalformedGeometry(e.to_string()))?;

    collection
        .features
        .into_iter()
        .map(|feature| -> Result<Region> {
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| props.get("name"))
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_REGION)
                .to_string();

            let geometry = match feature.geometry {
                Some(raw) => convert_geometry(&name, raw)?,
                None => RegionGeometry::Unsupported("null".to_string()),
            };

            if let RegionGeometry::Unsupported(kind) = &geometry {
                warn!("Region {} has unsupported geometry type {}", name, kind);
            }

            Ok(Region::new(name, geometry))
        })
        .collect()
}

fn convert_geometry(name: &str, raw: RawGeometry) -> Result<RegionGeometry> {
    let RawGeometry { kind, coordinates } = raw;
    let malformed =
        |e: serde_json::Error| Error::MalformedGeometry(format!("{} ({}): {}", name, kind, e));

    match kind.as_str() {
        "Polygon" => {
            let rings: Vec<Vec<Position>> =
                serde_json::from_value(coordinates).map_err(malformed)?;
            Ok(RegionGeometry::Polygon(to_polygon(name, rings)?))
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Vec<Position>>> =
                serde_json::from_value(coordinates).map_err(malformed)?;
            let polygons = polygons
                .into_iter()
                .map(|rings| to_polygon(name, rings))
                .collect::<Result<Vec<_>>>()?;
            Ok(RegionGeometry::MultiPolygon(MultiPolygon::new(polygons)))
        }
        other => Ok(RegionGeometry::Unsupported(other.to_string())),
    }
}

/// First ring is the outer boundary, the rest are holes.
fn to_polygon(name: &str, rings: Vec<Vec<Position>>) -> Result<Polygon<f64>> {
    let mut rings = rings
        .into_iter()
        .map(|ring| to_ring(name, ring))
        .collect::<Result<Vec<_>>>()?;

    if rings.is_empty() {
        return Err(Error::MalformedGeometry(format!(
            "{}: polygon has no rings",
            name
        )));
    }

    let exterior = rings.remove(0);
    Ok(Polygon::new(exterior, rings))
}

fn to_ring(name: &str, positions: Vec<Position>) -> Result<LineString<f64>> {
    positions
        .into_iter()
        .map(|position| match position.as_slice() {
            // Longitude first; any altitude is dropped
            [lon, lat, ..] => Ok(Coord { x: *lon, y: *lat }),
            _ => Err(Error::MalformedGeometry(format!(
                "{}: position needs at least two ordinates, got {:?}",
                name, position
            ))),
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}
