//! Locating the inputs inside an assets folder.
//!
//! An assets folder holds the manifest written by the slicing plugin, the
//! exported PNG images and, optionally, a `slicepage.yaml` settings file.

mod scanner;
mod settings;

use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

pub use scanner::{AssetListing, NamePattern};
pub use settings::{validate_output_name, Settings};

/// The name of the manifest file written by the slicing plugin.
pub const MANIFEST_FILENAME: &str = "exported_assets_info.txt";

/// The name of the optional settings file.
pub const SETTINGS_FILENAME: &str = "slicepage.yaml";

/// Path to the manifest, or `ManifestNotFound` if the folder has none.
pub fn locate_manifest(folder: &Path) -> Result<PathBuf> {
    let path = folder.join(MANIFEST_FILENAME);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ConvertError::ManifestNotFound {
            folder: folder.to_path_buf(),
        })
    }
}

/// Read the manifest text.
pub fn read_manifest(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read manifest: {}", e),
    })
}

/// Load `slicepage.yaml` from the folder, or defaults if it is absent.
pub fn load_settings(folder: &Path) -> Result<Settings> {
    let path = folder.join(SETTINGS_FILENAME);
    if path.exists() {
        Settings::load(&path)
    } else {
        Ok(Settings::default())
    }
}
