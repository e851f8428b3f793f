//! Rendering module for slicepage.
//!
//! Turns placed assets and the canvas size into a self-contained HTML
//! document referencing the sibling image files.

mod html;

pub use html::{element, render_page, style_rules, PlacedAsset};
