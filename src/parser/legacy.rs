//! Legacy free-text manifest parser.
//!
//! The first non-blank line is a header and is ignored. Every other
//! non-blank line reads `<name>: <tokens...>` where the tokens are separated
//! by single spaces and positions 2, 3, 5 and 7 hold the center x, center y,
//! width and height, each wrapped in bracket or unit decoration.

use crate::error::{ConvertError, Result};

use super::types::{LegacyEntry, Placement};

/// Minimum number of tokens after the colon.
const MIN_TOKENS: usize = 8;

const X_TOKEN: usize = 2;
const Y_TOKEN: usize = 3;
const WIDTH_TOKEN: usize = 5;
const HEIGHT_TOKEN: usize = 7;

/// Parse a legacy manifest into entries, in manifest order.
pub fn parse_legacy(source: &str) -> Result<Vec<LegacyEntry>> {
    let mut entries = Vec::new();
    let mut seen_header = false;

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if !seen_header {
            seen_header = true;
            continue;
        }
        entries.push(parse_line(line, idx + 1)?);
    }

    Ok(entries)
}

/// Layer names may contain spaces; they become `-`.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().replace(' ', "-")
}

fn parse_line(line: &str, line_no: usize) -> Result<LegacyEntry> {
    let (raw_name, rest) = line.split_once(':').ok_or_else(|| ConvertError::Parse {
        line: line_no,
        message: "expected '<name>: <position and size>'".to_string(),
        help: Some("Legacy manifest lines start with the layer name followed by a colon".to_string()),
    })?;

    let name = normalize_name(raw_name);
    if name.is_empty() {
        return Err(ConvertError::Parse {
            line: line_no,
            message: "asset name is empty".to_string(),
            help: None,
        });
    }

    let tokens: Vec<&str> = rest.trim().split(' ').collect();
    if tokens.len() < MIN_TOKENS {
        return Err(ConvertError::Parse {
            line: line_no,
            message: format!(
                "expected at least {} space-separated tokens after '{}:', found {}",
                MIN_TOKENS,
                name,
                tokens.len()
            ),
            help: Some("Re-export the cut infos; the line looks truncated".to_string()),
        });
    }

    let center_x = numeric_token(tokens[X_TOKEN], "x", line_no)?;
    let center_y = numeric_token(tokens[Y_TOKEN], "y", line_no)?;
    let width = size_token(tokens[WIDTH_TOKEN], "width", line_no)?;
    let height = size_token(tokens[HEIGHT_TOKEN], "height", line_no)?;

    Ok(LegacyEntry {
        name,
        placement: Placement::new(center_x, center_y, width, height),
        line: line_no,
    })
}

/// Strip bracket and unit decoration around a number:
/// `(640,` → `640`, `360px)` → `360`, `1280px,` → `1280`.
fn strip_decoration(token: &str) -> &str {
    token
        .trim_start_matches(|c: char| !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.')))
        .trim_end_matches(|c: char| !(c.is_ascii_digit() || c == '.'))
}

fn numeric_token(token: &str, field: &str, line_no: usize) -> Result<f64> {
    let core = strip_decoration(token);
    match core.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConvertError::Parse {
            line: line_no,
            message: format!("could not read {} from token '{}'", field, token),
            help: None,
        }),
    }
}

fn size_token(token: &str, field: &str, line_no: usize) -> Result<f64> {
    let value = numeric_token(token, field, line_no)?;
    if value < 0.0 {
        return Err(ConvertError::Parse {
            line: line_no,
            message: format!("{} must not be negative, got {}", field, value),
            help: None,
        });
    }
    Ok(value)
}
