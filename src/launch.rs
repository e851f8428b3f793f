//! Writing the page and handing it to the system viewer.

use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

/// Write the rendered document. Failure here is fatal.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write page: {}", e),
    })
}

/// Ask the default browser to open the page. Does not wait for it.
pub fn open_in_viewer(path: &Path) -> std::io::Result<()> {
    let absolute = viewer_path(path)?;
    webbrowser::open(&absolute.to_string_lossy())
}

/// Plain absolute path for the browser. Unlike `canonicalize`, this never
/// yields a `\\?\` verbatim path on Windows.
fn viewer_path(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    if !absolute.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", absolute.display()),
        ));
    }
    Ok(absolute)
}
