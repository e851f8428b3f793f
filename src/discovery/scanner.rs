//! Assets folder listing and file-name pattern matching.
//!
//! The folder is read once, sorted by file name, so "first match" is the
//! lexicographically smallest candidate on every platform.

use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ConvertError, Result};

const IMAGE_EXTENSION: &str = ".png";

/// A `<prefix>*.png` file-name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    prefix: String,
}

impl NamePattern {
    /// `<name>*.png`
    pub fn plain(name: &str) -> Self {
        Self {
            prefix: name.to_string(),
        }
    }

    /// `<name>.normal*.png`
    pub fn normal(name: &str) -> Self {
        Self {
            prefix: format!("{}.normal", name),
        }
    }

    /// `<name>.pressed*.png`
    pub fn pressed(name: &str) -> Self {
        Self {
            prefix: format!("{}.pressed", name),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name.len() >= self.prefix.len() + IMAGE_EXTENSION.len()
            && file_name.starts_with(&self.prefix)
            && file_name.ends_with(IMAGE_EXTENSION)
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.prefix, IMAGE_EXTENSION)
    }
}

/// PNG files directly inside the assets folder, sorted by name.
#[derive(Debug, Clone, Default)]
pub struct AssetListing {
    folder: PathBuf,
    files: Vec<String>,
}

impl AssetListing {
    /// List the PNG files in `folder` (not recursive).
    pub fn scan(folder: &Path) -> Result<Self> {
        let mut files = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ConvertError::Io {
                path: folder.to_path_buf(),
                message: format!("Failed to list assets folder: {}", e),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            // Non UTF-8 names can't be referenced from the page anyway
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(IMAGE_EXTENSION) {
                    files.push(name.to_string());
                }
            }
        }

        Ok(Self {
            folder: folder.to_path_buf(),
            files,
        })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// All file names matching `pattern`, in sorted order.
    pub fn matching(&self, pattern: &NamePattern) -> Vec<&str> {
        self.files
            .iter()
            .filter(|name| pattern.matches(name))
            .map(String::as_str)
            .collect()
    }
}
