//! End-to-end run: load regions, rewrite every incident block, save.

use std::fs;

use tracing::{info, warn};

use crate::annotator::annotate;
use crate::config::Config;
use crate::document::{extract_block, render_block, splice};
use crate::error::{Error, Result};
use crate::models::Unresolved;
use crate::pip::{load_regions, RegionResolver};

/// Outcome of rewriting one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rewrite {
    pub document: String,
    /// Unresolved incidents of every block, in block order
    pub unresolved: Vec<Unresolved>,
    pub incidents: usize,
}

/// Summary of a [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub incidents: usize,
    pub unresolved: Vec<Unresolved>,
    /// Whether the new text differs from what was on disk
    pub changed: bool,
    pub written: bool,
}

/// Annotate every configured block of `document` and return the new text.
///
/// All blocks are extracted from the original text before anything is
/// replaced; a missing or malformed block fails the whole rewrite.
pub fn rewrite_document(
    document: &str,
    config: &Config,
    resolver: &RegionResolver,
) -> Result<Rewrite> {
    let blocks = config
        .blocks
        .iter()
        .map(|name| extract_block(document, name))
        .collect::<Result<Vec<_>>>()?;

    let mut rewrite = Rewrite::default();
    let mut edits = Vec::with_capacity(blocks.len());

    for block in &blocks {
        info!("Annotating {} ({} incidents)", block.name, block.incidents.len());
        let annotation = annotate(&block.incidents, resolver);
        edits.push(render_block(block, &annotation.incidents, &config.record_indent)?);
        rewrite.incidents += annotation.incidents.len();
        rewrite.unresolved.extend(annotation.unresolved);
    }

    rewrite.document = splice(document, edits)?;
    Ok(rewrite)
}

/// Run the whole batch described by `config`.
///
/// The document is only written after every block was rewritten, and not at
/// all when `dry_run` is set.
pub fn run(config: &Config, dry_run: bool) -> Result<RunReport> {
    let regions = load_regions(&config.regions)?;
    let resolver = RegionResolver::new(regions, config.centroid_table())
        .with_missing_centroid(config.missing_centroid);
    info!(
        "Resolving against {} regions with {} province centers",
        resolver.regions().len(),
        resolver.centroids().len()
    );
    if resolver.centroids().is_empty() {
        warn!("No province centers configured, overlaps resolve to the first region");
    }

    info!("Reading {}", config.document.display());
    let original =
        fs::read_to_string(&config.document).map_err(|e| Error::io(&config.document, e))?;

    let rewrite = rewrite_document(&original, config, &resolver)?;
    let changed = rewrite.document != original;

    let written = !dry_run;
    if written {
        fs::write(&config.document, &rewrite.document)
            .map_err(|e| Error::io(&config.document, e))?;
        info!(
            "Wrote {} ({})",
            config.document.display(),
            if changed { "changed" } else { "unchanged" }
        );
    } else {
        info!("Dry run, {} not written", config.document.display());
    }

    Ok(RunReport {
        incidents: rewrite.incidents,
        unresolved: rewrite.unresolved,
        changed,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncidentId;
    use std::path::Path;
    use tempfile::TempDir;

    const REGIONS: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"name": "Tehran"},
         "geometry": {"type": "Polygon", "coordinates": [[[51, 35], [52, 35], [52, 36], [51, 36], [51, 35]]]}},
        {"type": "Feature", "properties": {"name": "Isfahan"},
         "geometry": {"type": "MultiPolygon", "coordinates": [[[[50, 31], [53, 31], [53, 34], [50, 34], [50, 31]]]]}},
        {"type": "Feature", "properties": {"name": "Border"},
         "geometry": {"type": "LineString", "coordinates": [[44, 25], [63, 40]]}}
    ]}"#;

    const DOCUMENT: &str = "<script>\n    const verifiedIncidents = useMemo(() => [\n        {\"id\": 1, \"verified\": true, \"desc\": \"Blast\", \"desc_fa\": \"انفجار\", \"coords\": [35.5, 51.5], \"link\": \"https://x/1\", \"date\": \"2025-06-13\", \"size\": \"large\", \"alt\": \"blast\"},\n        {\"id\": 2, \"verified\": true, \"desc\": \"Fire\", \"desc_fa\": \"آتش\", \"coords\": [32.6, 51.6], \"province\": \"Tehran\", \"link\": \"https://x/2\", \"date\": \"2025-06-14\", \"size\": \"small\", \"alt\": \"fire\"}\n    ], []);\n    const unverifiedIncidents = useMemo(() => [\n        {\"id\": 3, \"verified\": false, \"desc\": \"Sea\", \"desc_fa\": \"دریا\", \"coords\": [0, 0], \"link\": \"https://x/3\", \"date\": \"2025-06-15\", \"size\": \"small\", \"alt\": \"sea\", \"extra\": 1}\n    ], []);\n</script>\n";

    fn workspace(document: &str) -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), document).unwrap();
        fs::write(dir.path().join("provinces.geojson"), REGIONS).unwrap();
        let config = Config {
            document: dir.path().join("index.html"),
            regions: dir.path().join("provinces.geojson"),
            ..Config::default()
        };
        (dir, config)
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_run_annotates_and_writes() {
        let (_dir, config) = workspace(DOCUMENT);
        let report = run(&config, false).unwrap();

        assert_eq!(report.incidents, 3);
        assert!(report.changed);
        assert!(report.written);
        assert_eq!(report.unresolved.len(), 1);
        assert_eq!(report.unresolved[0].id, IncidentId::Int(3));
        assert_eq!(report.unresolved[0].to_string(), "3: [0, 0]");

        let written = read(&config.document);
        assert!(written.contains(r#""coords": [35.5, 51.5], "province": "Tehran", "link""#));
        assert!(written.contains(r#""coords": [32.6, 51.6], "province": "Isfahan", "link""#));
        assert!(written.contains(r#""coords": [0, 0], "province": "Unknown", "link""#));
        assert!(!written.contains("extra"));
        assert!(written.starts_with("<script>\n    const verifiedIncidents"));
        assert!(written.ends_with("    ], []);\n</script>\n"));
    }

    #[test]
    fn test_second_run_is_stable() {
        let (_dir, config) = workspace(DOCUMENT);
        run(&config, false).unwrap();
        let first = read(&config.document);

        let report = run(&config, false).unwrap();
        assert!(!report.changed);
        assert_eq!(read(&config.document), first);
    }

    #[test]
    fn test_dry_run_leaves_document() {
        let (_dir, config) = workspace(DOCUMENT);
        let report = run(&config, true).unwrap();
        assert!(report.changed);
        assert!(!report.written);
        assert_eq!(read(&config.document), DOCUMENT);
    }

    #[test]
    fn test_missing_block_aborts_before_write() {
        let document = DOCUMENT.replace("unverifiedIncidents", "pendingIncidents");
        let (_dir, config) = workspace(&document);
        let err = run(&config, false).unwrap_err();
        assert!(matches!(err, Error::PatternNotFound(name) if name == "unverifiedIncidents"));
        assert_eq!(read(&config.document), document);
    }

    #[test]
    fn test_missing_field_aborts_before_write() {
        let document = DOCUMENT.replace(", \"size\": \"large\"", "");
        let (_dir, config) = workspace(&document);
        let err = run(&config, false).unwrap_err();
        assert!(matches!(err, Error::MalformedIncidents { .. }));
        assert_eq!(read(&config.document), document);
    }

    #[test]
    fn test_malformed_regions_abort() {
        let (dir, config) = workspace(DOCUMENT);
        fs::write(dir.path().join("provinces.geojson"), "{\"features\": [").unwrap();
        let err = run(&config, false).unwrap_err();
        assert!(matches!(err, Error::MalformedGeometry(_)));
        assert_eq!(read(&config.document), DOCUMENT);
    }

    #[test]
    fn test_missing_document_is_an_io_error() {
        let (dir, config) = workspace(DOCUMENT);
        fs::remove_file(dir.path().join("index.html")).unwrap();
        assert!(matches!(run(&config, false), Err(Error::Io { .. })));
    }
}
