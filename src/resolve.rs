//! Asset resolution: manifest name → image files → render size.
//!
//! Plain assets use `<name>*.png`. Names ending in `_BTN` are buttons and
//! need both `<name>.normal*.png` and `<name>.pressed*.png`; the pressed
//! image becomes the hover state.

use std::path::Path;

use crate::discovery::{AssetListing, NamePattern};
use crate::error::{ConvertError, Result};
use crate::output::Printer;
use crate::parser::Placement;

/// Name suffix marking a button asset.
pub const BUTTON_SUFFIX: &str = "_BTN";

/// Largest relative width mismatch for which the real image size is kept.
const MAX_WIDTH_DEVIATION: f64 = 0.5;

/// Image files found for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImages {
    /// File name (relative to the assets folder) of the default image.
    pub normal: String,
    /// File name of the hover image, buttons only.
    pub pressed: Option<String>,
    /// Pixel size of the default image.
    pub width: u32,
    pub height: u32,
}

pub fn is_button(name: &str) -> bool {
    name.ends_with(BUTTON_SUFFIX)
}

/// Find the image files for `name` and read the default image's size.
pub fn resolve_images(listing: &AssetListing, name: &str, printer: &Printer) -> Result<ResolvedImages> {
    let (normal, pressed) = if is_button(name) {
        let normal = first_match(listing, name, &NamePattern::normal(name), printer)?;
        let pressed = first_match(listing, name, &NamePattern::pressed(name), printer)?;
        (normal, Some(pressed))
    } else {
        (first_match(listing, name, &NamePattern::plain(name), printer)?, None)
    };

    let (width, height) = read_dimensions(&listing.folder().join(&normal))?;

    Ok(ResolvedImages {
        normal,
        pressed,
        width,
        height,
    })
}

fn first_match(
    listing: &AssetListing,
    name: &str,
    pattern: &NamePattern,
    printer: &Printer,
) -> Result<String> {
    let candidates = listing.matching(pattern);

    let Some(first) = candidates.first() else {
        return Err(ConvertError::MissingAsset {
            name: name.to_string(),
            pattern: pattern.to_string(),
            folder: listing.folder().to_path_buf(),
        });
    };

    if candidates.len() > 1 {
        printer.warning(
            "Ambiguous",
            &format!(
                "{} files match {}, using {}",
                candidates.len(),
                pattern,
                first
            ),
        );
    }

    Ok(first.to_string())
}

/// Pixel dimensions of an image, decoding only its header.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|e| ConvertError::Image {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Render size for a legacy asset.
///
/// The exported image size is preferred; the declared bounds win only when
/// the widths disagree by more than half the image width.
pub fn reconcile_size(declared: &Placement, image: (u32, u32)) -> (f64, f64) {
    let image_width = f64::from(image.0);
    let image_height = f64::from(image.1);

    if image_width == 0.0 {
        return (declared.width, declared.height);
    }

    let deviation = ((image_width - declared.width) / image_width).abs();
    if deviation <= MAX_WIDTH_DEVIATION {
        (image_width, image_height)
    } else {
        (declared.width, declared.height)
    }
}
