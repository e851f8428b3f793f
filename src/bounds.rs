//! Global bounding box of all declared asset extents.
//!
//! The box's top-left becomes the page origin and its size the canvas size.

use crate::error::{ConvertError, Result};
use crate::parser::Placement;

/// Running min/max over asset extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }
}

/// Pixel size of the page container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds of a set of placements.
    pub fn from_placements<'a>(placements: impl IntoIterator<Item = &'a Placement>) -> Self {
        let mut bounds = Self::new();
        for placement in placements {
            bounds.include(placement);
        }
        bounds
    }

    /// Grow the box to cover a placement's declared extent.
    pub fn include(&mut self, placement: &Placement) {
        self.min_x = self.min_x.min(placement.left());
        self.max_x = self.max_x.max(placement.right());
        self.min_y = self.min_y.min(placement.top());
        self.max_y = self.max_y.max(placement.bottom());
    }

    /// True until the first placement is included.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Canvas size, failing when no assets were seen or the box is degenerate.
    pub fn canvas(&self) -> Result<Canvas> {
        if self.is_empty() {
            return Err(ConvertError::Layout {
                message: "the manifest lists no assets".to_string(),
                help: Some(
                    "Export at least one layer; a manifest with only a header produces no page"
                        .to_string(),
                ),
            });
        }

        let width = self.max_x - self.min_x;
        let height = self.max_y - self.min_y;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConvertError::Layout {
                message: format!("bounding box has no area ({}x{})", width, height),
                help: Some("Check that the declared asset sizes are not all zero".to_string()),
            });
        }

        Ok(Canvas { width, height })
    }

    /// Top-left of a `width`×`height` box centered where `placement` is,
    /// in canvas coordinates.
    pub fn top_left(&self, placement: &Placement, width: f64, height: f64) -> (f64, f64) {
        let x = placement.center_x - self.min_x - width / 2.0;
        let y = placement.center_y - self.min_y - height / 2.0;
        (x, y)
    }
}
