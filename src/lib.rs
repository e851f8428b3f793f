//! slicepage - rebuild a sliced image-editor layout as a web page
//!
//! Reads the asset manifest an image-editor slicing plugin writes next to
//! its exported PNGs and produces a static HTML/CSS page placing every
//! asset where it sat in the original composition, with hover images for
//! buttons.

pub mod bounds;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod ident;
pub mod launch;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod resolve;

pub use bounds::{Bounds, Canvas};
pub use discovery::{AssetListing, NamePattern, Settings, MANIFEST_FILENAME};
pub use error::{ConvertError, Result};
pub use parser::{parse_manifest, Dialect, DialectChoice, Manifest, Placement};
pub use pipeline::{build_page, BuiltPage};
pub use render::{render_page, PlacedAsset};
pub use resolve::{reconcile_size, resolve_images, ResolvedImages};
