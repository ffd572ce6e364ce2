//! Locating incident arrays inside the host document.

use std::ops::Range;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Incident;

/// One incident array found in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentBlock {
    /// Variable name, e.g. `verifiedIncidents`
    pub name: String,
    /// Byte range of the array contents, between `[` and the closing line
    pub span: Range<usize>,
    pub incidents: Vec<Incident>,
    /// Leading whitespace of the first record line, if the block has one
    pub indent: Option<String>,
}

/// Regex matching `const <name> = useMemo(() => [ ... ], []);`.
///
/// Capture group 1 is the array contents up to (not including) the newline
/// before the closing bracket.
pub fn block_pattern(name: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?s)const {} = useMemo\(\(\) => \[(.*?)\n\s*\], \[\]\);",
        regex::escape(name)
    );
    Ok(Regex::new(&pattern)?)
}

/// Find and parse the block called `name`.
pub fn extract_block(document: &str, name: &str) -> Result<IncidentBlock> {
    let pattern = block_pattern(name)?;
    let contents = pattern
        .captures(document)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| Error::PatternNotFound(name.to_string()))?;

    let text = contents.as_str();
    let incidents = parse_incidents(name, text)?;

    debug!(
        "Block {} spans bytes {}..{} with {} incidents",
        name,
        contents.start(),
        contents.end(),
        incidents.len()
    );

    Ok(IncidentBlock {
        name: name.to_string(),
        span: contents.range(),
        incidents,
        indent: record_indent(text),
    })
}

fn parse_incidents(name: &str, text: &str) -> Result<Vec<Incident>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&format!("[{}]", trimmed)).map_err(|source| Error::MalformedIncidents {
        block: name.to_string(),
        source,
    })
}

/// Indentation of the first non-blank line that follows a newline.
fn record_indent(text: &str) -> Option<String> {
    text.split('\n')
        .skip(1)
        .find(|line| !line.trim().is_empty())
        .map(|line| {
            line.chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect()
        })
}
