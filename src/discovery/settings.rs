//! Per-folder settings (slicepage.yaml).
//!
//! Optional file next to the manifest. Every field has a default, and CLI
//! flags take precedence over whatever the file says.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::parser::DialectChoice;

/// Settings loaded from slicepage.yaml.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// File name of the generated page, written inside the assets folder.
    pub output: String,

    /// Open the page in the default viewer after writing it.
    pub open: bool,

    /// Manifest dialect; `auto` sniffs the file.
    pub dialect: DialectChoice,

    /// Optional `<title>` for the page.
    pub title: Option<String>,
}

fn default_output() -> String {
    "webpage.html".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: default_output(),
            open: true,
            dialect: DialectChoice::Auto,
            title: None,
        }
    }
}

impl Settings {
    /// Load settings from a slicepage.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConvertError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as null, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Settings = serde_yaml::from_str(content).map_err(|e| ConvertError::Config {
            message: format!("Invalid settings: {}", e),
            help: Some("Check slicepage.yaml syntax".to_string()),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// The page must sit next to the images it references.
    pub fn validate(&self) -> Result<()> {
        validate_output_name(&self.output)
    }
}

/// Reject output names that would leave the assets folder.
pub fn validate_output_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');

    if bad {
        return Err(ConvertError::Config {
            message: format!("Invalid output file name '{}'", name),
            help: Some(
                "Use a bare file name such as webpage.html; the page is always written into the assets folder"
                    .to_string(),
            ),
        });
    }
    Ok(())
}
