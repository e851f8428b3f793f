//! In-memory conversion: manifest → resolved assets → HTML.
//!
//! Nothing is written here; the page only reaches disk once every asset
//! has been resolved and the whole document rendered.

use std::collections::HashMap;
use std::path::Path;

use crate::bounds::{Bounds, Canvas};
use crate::discovery::{self, AssetListing, MANIFEST_FILENAME};
use crate::error::{ConvertError, Result};
use crate::ident;
use crate::output::{plural, Printer};
use crate::parser::{self, Dialect, DialectChoice, Manifest, Placement};
use crate::render::{render_page, PlacedAsset};
use crate::resolve::{reconcile_size, resolve_images, ResolvedImages};

/// A fully rendered page and the layout it was built from.
#[derive(Debug, Clone)]
pub struct BuiltPage {
    pub html: String,
    pub dialect: Dialect,
    pub canvas: Canvas,
    /// Assets in paint order.
    pub assets: Vec<PlacedAsset>,
}

/// Convert the assets folder into an HTML document.
pub fn build_page(
    folder: &Path,
    dialect: DialectChoice,
    title: Option<&str>,
    printer: &Printer,
) -> Result<BuiltPage> {
    let manifest_path = discovery::locate_manifest(folder)?;
    let source = discovery::read_manifest(&manifest_path)?;
    let manifest = parser::parse_manifest(&source, dialect)?;

    printer.status(
        "Reading",
        &format!(
            "{} ({} dialect, {})",
            MANIFEST_FILENAME,
            manifest.dialect(),
            plural(manifest.len(), "asset", "assets")
        ),
    );

    let bounds = Bounds::from_placements(&manifest.placements());
    let canvas = bounds.canvas()?;
    check_unique_identifiers(&manifest)?;

    let listing = AssetListing::scan(folder)?;
    printer.status(
        "Resolving",
        &format!(
            "{} against {}",
            plural(manifest.len(), "asset", "assets"),
            plural(listing.len(), "image", "images")
        ),
    );

    let assets = place_assets(&manifest, &bounds, &listing, printer)?;
    let html = render_page(&canvas, &assets, title);

    Ok(BuiltPage {
        html,
        dialect: manifest.dialect(),
        canvas,
        assets,
    })
}

/// Markup identifier for an asset name under the given dialect.
pub fn identifier(dialect: Dialect, name: &str) -> String {
    match dialect {
        Dialect::Legacy => ident::hashed(name),
        Dialect::Structured => ident::sanitize(name),
    }
}

/// Two assets sharing an identifier would share one style rule; refuse.
fn check_unique_identifiers(manifest: &Manifest) -> Result<()> {
    let dialect = manifest.dialect();
    let names: Vec<&str> = match manifest {
        Manifest::Legacy(entries) => entries.iter().map(|e| e.name.as_str()).collect(),
        Manifest::Structured(entries) => entries.iter().map(|e| e.name.as_str()).collect(),
    };

    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in names {
        let id = identifier(dialect, name);
        if seen.insert(id.clone(), name).is_some() {
            return Err(ConvertError::DuplicateAsset {
                name: name.to_string(),
                identifier: id,
            });
        }
    }

    Ok(())
}

/// Resolve every entry (in manifest order) and lay it out in paint order.
///
/// Legacy manifests list the front-most layer first, so they paint in
/// reverse. Structured manifests paint in file order and carry their depth
/// as `z-index`.
fn place_assets(
    manifest: &Manifest,
    bounds: &Bounds,
    listing: &AssetListing,
    printer: &Printer,
) -> Result<Vec<PlacedAsset>> {
    match manifest {
        Manifest::Legacy(entries) => {
            let mut assets = Vec::with_capacity(entries.len());
            for entry in entries {
                let images = resolve_images(listing, &entry.name, printer)?;
                let (width, height) = reconcile_size(&entry.placement, (images.width, images.height));
                if width != f64::from(images.width) || height != f64::from(images.height) {
                    printer.verbose(
                        "Resized",
                        &format!(
                            "{}: image is {}x{} but bounds say {}x{}, using bounds",
                            entry.name, images.width, images.height, width, height
                        ),
                    );
                }
                assets.push(place(
                    &entry.name,
                    identifier(Dialect::Legacy, &entry.name),
                    images,
                    &entry.placement,
                    (width, height),
                    None,
                    bounds,
                    printer,
                ));
            }
            assets.reverse();
            Ok(assets)
        }
        Manifest::Structured(entries) => {
            let mut assets = Vec::with_capacity(entries.len());
            for entry in entries {
                let images = resolve_images(listing, &entry.name, printer)?;
                let size = (f64::from(images.width), f64::from(images.height));
                assets.push(place(
                    &entry.name,
                    identifier(Dialect::Structured, &entry.name),
                    images,
                    &entry.placement,
                    size,
                    Some(entry.index),
                    bounds,
                    printer,
                ));
            }
            Ok(assets)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn place(
    name: &str,
    id: String,
    images: ResolvedImages,
    placement: &Placement,
    (width, height): (f64, f64),
    z_index: Option<i64>,
    bounds: &Bounds,
    printer: &Printer,
) -> PlacedAsset {
    let (left, top) = bounds.top_left(placement, width, height);

    if printer.is_verbose() {
        let files = match &images.pressed {
            Some(pressed) => format!("{} + {}", images.normal, pressed),
            None => images.normal.clone(),
        };
        printer.verbose(
            "Resolved",
            &format!("{} -> {} ({}x{} at {}, {})", name, files, width, height, left, top),
        );
    }

    PlacedAsset {
        name: name.to_string(),
        id,
        normal: images.normal,
        pressed: images.pressed,
        width,
        height,
        left,
        top,
        z_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "Cut infos";

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        image::RgbaImage::new(width, height)
            .save(dir.join(name))
            .unwrap();
    }

    fn write_manifest(dir: &Path, content: &str) {
        fs::write(dir.join(MANIFEST_FILENAME), content).unwrap();
    }

    /// Pull `<prop>: <n>px` out of an element's inline style.
    fn style_value(element_style: &str, prop: &str) -> f64 {
        let key = format!("{}: ", prop);
        let start = element_style.find(&key).unwrap() + key.len();
        let rest = &element_style[start..];
        let end = rest.find("px").unwrap();
        rest[..end].parse().unwrap()
    }

    fn element_style<'a>(html: &'a str, id: &str) -> &'a str {
        let marker = format!("<div id=\"{}\" style=\"", id);
        let start = html.find(&marker).unwrap() + marker.len();
        let rest = &html[start..];
        &rest[..rest.find('"').unwrap()]
    }

    #[test]
    fn test_single_legacy_asset() {
        let dir = tempdir().unwrap();
        write_manifest(
            dir.path(),
            &format!("{HEADER}\nicon: at pos (10, 20px) w: 5px, h: 5px,\n"),
        );
        write_png(dir.path(), "icon.png", 5, 5);

        let page = build_page(dir.path(), DialectChoice::Auto, None, &Printer::quiet()).unwrap();

        assert_eq!(page.dialect, Dialect::Legacy);
        assert_eq!(page.canvas, Canvas { width: 5.0, height: 5.0 });
        assert_eq!(page.assets.len(), 1);
        assert_eq!((page.assets[0].left, page.assets[0].top), (0.0, 0.0));
        assert_eq!(page.html.matches("<div id=").count(), 1);
        assert!(page.html.contains("width: 5px; height: 5px;"));
        assert!(page.html.contains(&format!("#{} {{", ident::hashed("icon"))));
    }

    #[test]
    fn test_legacy_paints_in_reverse() {
        let dir = tempdir().unwrap();
        write_manifest(
            dir.path(),
            &format!(
                "{HEADER}\nfront: at pos (5, 5px) w: 2px, h: 2px,\nback: at pos (5, 5px) w: 10px, h: 10px,\n"
            ),
        );
        write_png(dir.path(), "front.png", 2, 2);
        write_png(dir.path(), "back.png", 10, 10);

        let page = build_page(dir.path(), DialectChoice::Auto, None, &Printer::quiet()).unwrap();
        let names: Vec<&str> = page.assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["back", "front"]);

        let back = page.html.find(&ident::hashed("back")).unwrap();
        let front = page.html.find(&ident::hashed("front")).unwrap();
        assert!(back < front);
    }

    #[test]
    fn test_legacy_size_heuristic() {
        let dir = tempdir().unwrap();
        write_manifest(
            dir.path(),
            &format!(
                "{HEADER}\nclose: at pos (50, 50px) w: 100px, h: 100px,\nfar: at pos (50, 50px) w: 40px, h: 30px,\n"
            ),
        );
        write_png(dir.path(), "close.png", 98, 97);
        write_png(dir.path(), "far.png", 10, 10);

        let page = build_page(dir.path(), DialectChoice::Auto, None, &Printer::quiet()).unwrap();
        let close = page.assets.iter().find(|a| a.name == "close").unwrap();
        let far = page.assets.iter().find(|a| a.name == "far").unwrap();

        assert_eq!((close.width, close.height), (98.0, 97.0));
        assert_eq!((far.width, far.height), (40.0, 30.0));
    }

    #[test]
    fn test_structured_overlapping_assets() {
        let dir = tempdir().unwrap();
        write_manifest(
            dir.path(),
            "{\"name\": \"panel\", \"x\": 20, \"y\": 10, \"width\": 40, \"height\": 20, \"index\": 0}\n\
             {\"name\": \"badge@2x\", \"x\": 35, \"y\": 5, \"width\": 10, \"height\": 10, \"index\": 1}\n",
        );
        write_png(dir.path(), "panel.png", 40, 20);
        write_png(dir.path(), "badge2x.png", 10, 10);

        let page = build_page(dir.path(), DialectChoice::Auto, None, &Printer::quiet()).unwrap();

        assert_eq!(page.dialect, Dialect::Structured);
        assert_eq!(page.canvas, Canvas { width: 40.0, height: 20.0 });
        assert!(page.html.contains("#panel { background: url('panel.png'); background-size: 40px 20px; z-index: 0; }"));
        assert!(page.html.contains("#badge2x { background: url('badge2x.png'); background-size: 10px 10px; z-index: 1; }"));

        let panel = element_style(&page.html, "panel");
        assert_eq!(style_value(panel, "left"), 0.0);
        assert_eq!(style_value(panel, "top"), 0.0);

        let badge = element_style(&page.html, "badge2x");
        assert_eq!(style_value(badge, "left"), 30.0);
        assert_eq!(style_value(badge, "top"), 0.0);

        // forward order
        assert!(page.html.find("#panel {").unwrap() < page.html.find("#badge2x {").unwrap());
    }

    #[test]
    fn test_structured_uses_image_size() {
        let dir = tempdir().unwrap();
        write_manifest(
            dir.path(),
            "{\"name\": \"bg\", \"x\": 0, \"y\": 0, \"width\": 400, \"height\": 300, \"index\": 0}\n",
        );
        write_png(dir.path(), "bg.png", 4, 3);

        let page = build_page(dir.path(), DialectChoice::Auto, None, &Printer::quiet()).unwrap();
        assert_eq!((page.assets[0].width, page.assets[0].height), (4.0, 3.0));
        assert_eq!(page.canvas, Canvas { width: 400.0, height: 300.0 });
    }

    #[test]
    fn test_emitted_values_round_trip() {
        let dir = tempdir().unwrap();
        write_manifest(
            dir.path(),
            &format!(
                "{HEADER}\na: at pos (10.3, 20.7px) w: 7px, h: 3px,\nb_BTN: at pos (-4.1, 3.3px) w: 30px, h: 9px,\n"
            ),
        );
        write_png(dir.path(), "a.png", 7, 3);
        write_png(dir.path(), "b_BTN.normal.png", 11, 9);
        write_png(dir.path(), "b_BTN.pressed.png", 11, 9);

        let page = build_page(dir.path(), DialectChoice::Auto, None, &Printer::quiet()).unwrap();

        for asset in &page.assets {
            let style = element_style(&page.html, &asset.id);
            assert_eq!(style_value(style, "width"), asset.width);
            assert_eq!(style_value(style, "height"), asset.height);
            assert_eq!(style_value(style, "left"), asset.left);
            assert_eq!(style_value(style, "top"), asset.top);
        }

        // b_BTN: image 11 vs declared 30 deviates by more than half → declared bounds
        let button = page.assets.iter().find(|a| a.name == "b_BTN").unwrap();
        assert_eq!((button.width, button.height), (30.0, 9.0));
        assert_eq!(page.html.matches(&format!("#{}", button.id)).count(), 2);
        assert_eq!(page.html.matches(":hover").count(), 1);
    }

    #[test]
    fn test_empty_manifest_is_layout_error() {
        let dir = tempdir().unwrap();
        write_manifest(dir.path(), &format!("{HEADER}\n\n"));

        assert!(matches!(
            build_page(dir.path(), DialectChoice::Auto, None, &Printer::quiet()),
            Err(ConvertError::Layout { .. })
        ));
    }

    #[test]
    fn test_button_without_pressed_image() {
        let dir = tempdir().unwrap();
        write_manifest(
            dir.path(),
            &format!("{HEADER}\nGo_BTN: at pos (1, 1px) w: 2px, h: 2px,\n"),
        );
        write_png(dir.path(), "Go_BTN.normal.png", 2, 2);

        assert!(matches!(
            build_page(dir.path(), DialectChoice::Auto, None, &Printer::quiet()),
            Err(ConvertError::MissingAsset { .. })
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let dir = tempdir().unwrap();
        write_manifest(
            dir.path(),
            "{\"name\": \"a b\", \"x\": 0, \"y\": 0, \"width\": 1, \"height\": 1, \"index\": 0}\n\
             {\"name\": \"a_b\", \"x\": 0, \"y\": 0, \"width\": 1, \"height\": 1, \"index\": 1}\n",
        );

        match build_page(dir.path(), DialectChoice::Auto, None, &Printer::quiet()) {
            Err(ConvertError::DuplicateAsset { name, identifier }) => {
                assert_eq!(name, "a_b");
                assert_eq!(identifier, "a_b");
            }
            other => panic!("expected DuplicateAsset, got {other:?}"),
        }
    }

    #[test]
    fn test_identifier_per_dialect() {
        assert_eq!(identifier(Dialect::Structured, "Play_BTN"), "Play_BTN");
        assert_eq!(identifier(Dialect::Legacy, "Play_BTN"), ident::hashed("Play_BTN"));
    }
}
