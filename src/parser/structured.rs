//! Structured manifest parser.
//!
//! Every non-blank line is a self-contained JSON object:
//!
//! ```text
//! {"name": "Play@2x_BTN", "x": 320, "y": 240, "width": 120, "height": 40, "index": 3}
//! ```
//!
//! There is no header line. Names are sanitized on the way in.

use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::ident::sanitize;

use super::types::{Placement, StructuredEntry};

#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    index: i64,
}

/// Parse a structured manifest into entries, in manifest order.
pub fn parse_structured(source: &str) -> Result<Vec<StructuredEntry>> {
    let mut entries = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        entries.push(parse_record(line, idx + 1)?);
    }

    Ok(entries)
}

fn parse_record(line: &str, line_no: usize) -> Result<StructuredEntry> {
    let record: RawRecord = serde_json::from_str(line).map_err(|e| ConvertError::Parse {
        line: line_no,
        message: format!("malformed record: {}", e),
        help: Some(
            "Each line needs name, x, y, width, height and index fields".to_string(),
        ),
    })?;

    if record.width < 0.0 || record.height < 0.0 {
        return Err(ConvertError::Parse {
            line: line_no,
            message: format!(
                "size must not be negative, got {}x{}",
                record.width, record.height
            ),
            help: None,
        });
    }

    let name = sanitize(&record.name);
    if name.is_empty() {
        return Err(ConvertError::Parse {
            line: line_no,
            message: format!("asset name '{}' is empty after sanitizing", record.name),
            help: None,
        });
    }

    Ok(StructuredEntry {
        name,
        placement: Placement::new(record.x, record.y, record.width, record.height),
        index: record.index,
        line: line_no,
    })
}
