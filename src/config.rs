//! Conversion options.
//!
//! Options are read from a JSON file. Every field is optional; missing fields
//! take the defaults below, which reproduce the classic C# example block.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConvertError, Result};

const CONFIG_DIR: &str = "xmldoc2md";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Bold label printed above each example block
    pub example_label: String,
    /// Info string of the fenced code block
    pub example_language: String,
    /// Subtracted from the first line's indentation before de-indenting
    pub example_indent_offset: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            example_label: "C# Example".to_string(),
            example_language: "c#".to_string(),
            example_indent_offset: 0,
        }
    }
}

impl ConvertOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConvertError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading options");
        let json = fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Load from `path`, or from the user config file when present, or defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
