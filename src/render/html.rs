//! HTML/CSS page output.
//!
//! One `#id` rule per asset (plus a `:hover` rule for buttons) and one
//! absolutely positioned `div` per asset inside a canvas-sized container.
//! File names are interpolated as-is; inputs are trusted local exports.

use crate::bounds::Canvas;

/// An asset ready to be written into the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedAsset {
    /// Normalized manifest name.
    pub name: String,
    /// Markup identifier.
    pub id: String,
    /// Default image file name.
    pub normal: String,
    /// Hover image file name, buttons only.
    pub pressed: Option<String>,
    pub width: f64,
    pub height: f64,
    /// Top-left in canvas coordinates.
    pub left: f64,
    pub top: f64,
    /// Explicit stacking value, structured manifests only.
    pub z_index: Option<i64>,
}

impl PlacedAsset {
    pub fn is_button(&self) -> bool {
        self.pressed.is_some()
    }
}

/// Render the full document. `assets` must already be in paint order.
pub fn render_page(canvas: &Canvas, assets: &[PlacedAsset], title: Option<&str>) -> String {
    let mut html = String::new();

    html.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    if let Some(title) = title {
        html.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    }

    html.push_str("<style type=\"text/css\">\n");
    for asset in assets {
        html.push_str(&style_rules(asset));
    }
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&format!(
        "<div style=\"position: relative; width: {}; height: {};\">\n",
        px(canvas.width),
        px(canvas.height)
    ));
    for asset in assets {
        html.push_str(&element(asset));
    }
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

/// The `#id` rule and, for buttons, the `#id:hover` rule.
pub fn style_rules(asset: &PlacedAsset) -> String {
    let size = format!("{} {}", px(asset.width), px(asset.height));

    let mut rules = match asset.z_index {
        Some(z) => format!(
            "#{} {{ background: url('{}'); background-size: {}; z-index: {}; }}\n",
            asset.id, asset.normal, size, z
        ),
        None => format!(
            "#{} {{ background: url('{}'); background-size: {}; }}\n",
            asset.id, asset.normal, size
        ),
    };

    if let Some(pressed) = &asset.pressed {
        rules.push_str(&format!(
            "#{}:hover {{ background: url('{}'); background-size: {}; }}\n",
            asset.id, pressed, size
        ));
    }

    rules
}

/// The positioned `div` for one asset.
pub fn element(asset: &PlacedAsset) -> String {
    format!(
        "<div id=\"{}\" style=\"position: absolute; width: {}; height: {}; left: {}; top: {};\"></div>\n",
        asset.id,
        px(asset.width),
        px(asset.height),
        px(asset.left),
        px(asset.top)
    )
}

/// Shortest round-trip formatting, so `5.0` prints as `5px`.
fn px(value: f64) -> String {
    format!("{}px", value)
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
