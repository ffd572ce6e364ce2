//! Replacing byte ranges of the document.

use std::ops::Range;

use crate::error::{Error, Result};

/// Replace each span of `document` with its new text.
///
/// Spans refer to the original document and may be given in any order, but
/// must not overlap. Bytes outside the spans are copied unchanged.
pub fn splice(document: &str, mut edits: Vec<(Range<usize>, String)>) -> Result<String> {
    edits.sort_by_key(|(span, _)| span.start);

    let mut output = String::with_capacity(document.len());
    let mut cursor = 0;

    for (span, replacement) in edits {
        if span.start < cursor || span.end < span.start {
            return Err(Error::InvalidSpans);
        }
        let kept = document.get(cursor..span.start).ok_or(Error::InvalidSpans)?;
        output.push_str(kept);
        output.push_str(&replacement);
        cursor = span.end;
    }

    let tail = document.get(cursor..).ok_or(Error::InvalidSpans)?;
    output.push_str(tail);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_multiple_spans() {
        let doc = "alpha [one] beta [two] gamma";
        let out = splice(
            doc,
            vec![(18..21, "2".to_string()), (7..10, "1".to_string())],
        )
        .unwrap();
        assert_eq!(out, "alpha [1] beta [2] gamma");
    }

    #[test]
    fn test_splice_empty_span_inserts() {
        let out = splice("[]", vec![(1..1, "x".to_string())]).unwrap();
        assert_eq!(out, "[x]");
    }

    #[test]
    fn test_no_edits_returns_document() {
        assert_eq!(splice("unchanged", vec![]).unwrap(), "unchanged");
    }

    #[test]
    fn test_overlapping_spans_rejected() {
        let err = splice("abcdef", vec![(0..3, "x".into()), (2..4, "y".into())]).unwrap_err();
        assert!(matches!(err, Error::InvalidSpans));
    }

    #[test]
    fn test_out_of_bounds_span_rejected() {
        let err = splice("abc", vec![(2..10, "x".into())]).unwrap_err();
        assert!(matches!(err, Error::InvalidSpans));
    }
}
