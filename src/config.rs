use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::pip::{CentroidTable, MissingCentroid};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "provincer.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Host document rewritten in place
    pub document: PathBuf,
    /// GeoJSON FeatureCollection of province boundaries
    pub regions: PathBuf,
    pub missing_centroid: MissingCentroid,
    /// Use only the `centroids` table below instead of extending the built-in one
    pub replace_centroids: bool,
    /// Record indentation for blocks whose existing indentation cannot be read
    pub record_indent: String,
    /// Variable names of the incident arrays, rewritten in this order
    pub blocks: Vec<String>,
    /// Extra region centers, `name = [lat, lon]`
    pub centroids: BTreeMap<String, [f64; 2]>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: PathBuf::from("index.html"),
            regions: PathBuf::from("data/iran-provinces.geojson"),
            missing_centroid: MissingCentroid::default(),
            replace_centroids: false,
            record_indent: " ".repeat(16),
            blocks: vec![
                "verifiedIncidents".to_string(),
                "unverifiedIncidents".to_string(),
            ],
            centroids: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`Config::load_from_file`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.blocks.is_empty() {
            return Err(Error::Config("at least one block is required".to_string()));
        }
        for (i, name) in self.blocks.iter().enumerate() {
            if self.blocks[..i].contains(name) {
                return Err(Error::Config(format!("block {} listed twice", name)));
            }
        }
        for (name, [lat, lon]) in &self.centroids {
            if !lat.is_finite() || !lon.is_finite() {
                return Err(Error::Config(format!("centroid for {} is not finite", name)));
            }
        }
        Ok(())
    }

    /// Built-in province centers merged with (or replaced by) the configured ones.
    pub fn centroid_table(&self) -> CentroidTable {
        let mut table = if self.replace_centroids {
            CentroidTable::new()
        } else {
            CentroidTable::iran_provinces()
        };
        for (name, [lat, lon]) in &self.centroids {
            table.insert(name.clone(), *lat, *lon);
        }
        table
    }
}
