//! Serialization of annotated incidents back into document text.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::error::Result;
use crate::models::AnnotatedIncident;

/// Single-line JSON with `", "` between items and `": "` after keys.
///
/// This is the spelling already used in the documents, so records that do
/// not change are written back byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize any value with [`SpacedFormatter`]. Non-ASCII text is written as-is.
pub fn to_spaced_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Array contents for a block: one indented record per line, comma separated.
///
/// The text starts with a newline and ends right after the last record, so
/// the closing bracket line of the original document stays in place. No
/// records gives an empty string.
pub fn format_block(incidents: &[AnnotatedIncident], indent: &str) -> Result<String> {
    if incidents.is_empty() {
        return Ok(String::new());
    }

    let lines = incidents
        .iter()
        .map(|incident| -> Result<String> {
            Ok(format!("{}{}", indent, to_spaced_string(incident)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("\n{}", lines.join(",\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, IncidentId};
    use serde_json::{json, Value};

    fn record(id: i64, desc: &str) -> AnnotatedIncident {
        AnnotatedIncident {
            id: IncidentId::Int(id),
            verified: Value::Bool(false),
            desc: Value::from(desc),
            desc_fa: Value::from("پالایشگاه"),
            coords: Coordinates::new(27.18, 56.27).unwrap(),
            province: "Hormozgan".to_string(),
            link: Value::from("https://t.me/x/1"),
            date: Value::from("2025-06-15"),
            size: Value::from("small"),
            alt: Value::from("refinery"),
        }
    }

    #[test]
    fn test_spaced_separators() {
        let value = json!({"a": [1, 2.5, "x"], "b": {"c": null}});
        assert_eq!(
            to_spaced_string(&value).unwrap(),
            r#"{"a": [1, 2.5, "x"], "b": {"c": null}}"#
        );
    }

    #[test]
    fn test_record_line() {
        let line = to_spaced_string(&record(5, "Refinery \"hit\"\nlate")).unwrap();
        assert_eq!(
            line,
            r#"{"id": 5, "verified": false, "desc": "Refinery \"hit\"\nlate", "desc_fa": "پالایشگاه", "coords": [27.18, 56.27], "province": "Hormozgan", "link": "https://t.me/x/1", "date": "2025-06-15", "size": "small", "alt": "refinery"}"#
        );
    }

    #[test]
    fn test_format_block_layout() {
        let text = format_block(&[record(1, "a"), record(2, "b")], "    ").unwrap();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("    {\"id\": 1"));
        assert!(lines[1].ends_with("},"));
        assert!(lines[2].starts_with("    {\"id\": 2"));
        assert!(lines[2].ends_with('}'));
    }

    #[test]
    fn test_format_empty_block() {
        assert_eq!(format_block(&[], "    ").unwrap(), "");
    }
}
