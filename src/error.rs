use miette::Diagnostic;
use thiserror::Error;

use std::path::PathBuf;

/// Main error type for slicepage operations
#[derive(Error, Diagnostic, Debug)]
pub enum ConvertError {
    #[error("Did not find exported_assets_info.txt in {}", .folder.display())]
    #[diagnostic(
        code(slicepage::manifest_not_found),
        help("Run the slicing plugin with \"Export Cut Infos\" enabled and point slicepage at its output folder")
    )]
    ManifestNotFound { folder: PathBuf },

    #[error("IO error with {}: {message}", .path.display())]
    #[diagnostic(code(slicepage::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error on line {line}: {message}")]
    #[diagnostic(code(slicepage::parse))]
    Parse {
        line: usize,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("No image found for asset '{name}' (looked for {pattern} in {})", .folder.display())]
    #[diagnostic(
        code(slicepage::missing_asset),
        help("Every manifest entry needs a matching PNG next to the manifest; buttons (names ending in _BTN) need both .normal and .pressed images")
    )]
    MissingAsset {
        name: String,
        pattern: String,
        folder: PathBuf,
    },

    #[error("Failed to read image {}: {message}", .path.display())]
    #[diagnostic(code(slicepage::image))]
    Image { path: PathBuf, message: String },

    #[error("Layout error: {message}")]
    #[diagnostic(code(slicepage::layout))]
    Layout {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Asset name '{name}' is used more than once (identifier '{identifier}')")]
    #[diagnostic(
        code(slicepage::duplicate_asset),
        help("Rename one of the layers so every exported asset has a unique name")
    )]
    DuplicateAsset { name: String, identifier: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(slicepage::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
