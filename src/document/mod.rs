//! Host document handling.
//!
//! Two phases: [`extract_block`] finds an incident array and returns its
//! records with the byte span they occupy, and [`splice`] writes new text
//! over those spans. Neither knows anything about provinces.

mod extract;
mod format;
mod splice;

use std::ops::Range;

pub use extract::{block_pattern, extract_block, IncidentBlock};
pub use format::{format_block, to_spaced_string, SpacedFormatter};
pub use splice::splice;

use crate::error::Result;
use crate::models::AnnotatedIncident;

/// Replacement text for `block`, keeping the block's own record indentation.
pub fn render_block(
    block: &IncidentBlock,
    incidents: &[AnnotatedIncident],
    default_indent: &str,
) -> Result<(Range<usize>, String)> {
    let indent = block.indent.as_deref().unwrap_or(default_indent);
    Ok((block.span.clone(), format_block(incidents, indent)?))
}
