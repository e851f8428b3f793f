//! Types produced by the manifest parsers.

use std::fmt;

use serde::Deserialize;

/// Declared geometry of one asset in the source composition.
///
/// Coordinates are the asset's center; width and height are the extents the
/// slicing tool reported, which may differ from the exported image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    pub fn new(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center_y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center_y + self.height / 2.0
    }
}

/// One line of a legacy free-text manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyEntry {
    /// Layer name with interior spaces replaced by `-`.
    pub name: String,
    pub placement: Placement,
    /// 1-indexed source line, for diagnostics.
    pub line: usize,
}

/// One record of a line-delimited structured manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredEntry {
    /// Layer name reduced to `[A-Za-z0-9_]`.
    pub name: String,
    pub placement: Placement,
    /// Explicit stacking index; larger values paint in front.
    pub index: i64,
    pub line: usize,
}

/// Manifest dialect, known after detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Legacy,
    Structured,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Legacy => write!(f, "legacy"),
            Dialect::Structured => write!(f, "structured"),
        }
    }
}

/// Dialect requested by the user; `Auto` sniffs the manifest content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DialectChoice {
    #[default]
    Auto,
    Legacy,
    Structured,
}

/// A parsed manifest, tagged by dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum Manifest {
    Legacy(Vec<LegacyEntry>),
    Structured(Vec<StructuredEntry>),
}

impl Manifest {
    pub fn dialect(&self) -> Dialect {
        match self {
            Manifest::Legacy(_) => Dialect::Legacy,
            Manifest::Structured(_) => Dialect::Structured,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Manifest::Legacy(entries) => entries.len(),
            Manifest::Structured(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared placements in manifest order.
    pub fn placements(&self) -> Vec<Placement> {
        match self {
            Manifest::Legacy(entries) => entries.iter().map(|e| e.placement).collect(),
            Manifest::Structured(entries) => entries.iter().map(|e| e.placement).collect(),
        }
    }
}
