//! Manifest parsers.
//!
//! The slicing plugin writes `exported_assets_info.txt` in one of two
//! dialects:
//! - legacy free text: a header line, then `<name>: <decorated tokens>`
//! - structured: one JSON record per line, with an explicit stacking index
//!
//! # Usage
//!
//! ```ignore
//! use slicepage::parser::{parse_manifest, DialectChoice};
//!
//! let source = std::fs::read_to_string("assets/exported_assets_info.txt")?;
//! let manifest = parse_manifest(&source, DialectChoice::Auto)?;
//! println!("{} assets ({} dialect)", manifest.len(), manifest.dialect());
//! ```

mod legacy;
mod structured;
pub mod types;

pub use legacy::{normalize_name, parse_legacy};
pub use structured::parse_structured;
pub use types::{Dialect, DialectChoice, LegacyEntry, Manifest, Placement, StructuredEntry};

use crate::error::Result;

/// Sniff the dialect from the first non-blank line.
pub fn detect_dialect(source: &str) -> Dialect {
    let first = source.lines().map(str::trim).find(|line| !line.is_empty());
    match first {
        Some(line) if line.starts_with('{') => Dialect::Structured,
        _ => Dialect::Legacy,
    }
}

/// Parse manifest text in the requested (or detected) dialect.
pub fn parse_manifest(source: &str, choice: DialectChoice) -> Result<Manifest> {
    let dialect = match choice {
        DialectChoice::Auto => detect_dialect(source),
        DialectChoice::Legacy => Dialect::Legacy,
        DialectChoice::Structured => Dialect::Structured,
    };

    match dialect {
        Dialect::Legacy => Ok(Manifest::Legacy(parse_legacy(source)?)),
        Dialect::Structured => Ok(Manifest::Structured(parse_structured(source)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: &str = "Exported from layout.psd\nlogo: at pos (10, 20px) w: 5px, h: 5px,\n";
    const STRUCTURED: &str =
        "{\"name\": \"logo\", \"x\": 10, \"y\": 20, \"width\": 5, \"height\": 5, \"index\": 0}\n";

    #[test]
    fn test_detect_dialect() {
        assert_eq!(detect_dialect(LEGACY), Dialect::Legacy);
        assert_eq!(detect_dialect(STRUCTURED), Dialect::Structured);
        assert_eq!(detect_dialect("\n\n   {\"name\": 1}"), Dialect::Structured);
        assert_eq!(detect_dialect(""), Dialect::Legacy);
    }

    #[test]
    fn test_parse_manifest_auto() {
        let legacy = parse_manifest(LEGACY, DialectChoice::Auto).unwrap();
        assert_eq!(legacy.dialect(), Dialect::Legacy);
        assert_eq!(legacy.len(), 1);

        let structured = parse_manifest(STRUCTURED, DialectChoice::Auto).unwrap();
        assert_eq!(structured.dialect(), Dialect::Structured);
        assert_eq!(structured.len(), 1);
    }

    #[test]
    fn test_explicit_choice_overrides_detection() {
        // A structured line read as legacy is just a header.
        let manifest = parse_manifest(STRUCTURED, DialectChoice::Legacy).unwrap();
        assert_eq!(manifest.dialect(), Dialect::Legacy);
        assert!(manifest.is_empty());

        assert!(parse_manifest(LEGACY, DialectChoice::Structured).is_err());
    }
}
