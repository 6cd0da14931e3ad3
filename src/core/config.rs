//! User settings read from `settings.json` in the config directory.
//!
//! A missing file means defaults. Settings are never written back.

use crate::core::classifier::DisplayMode;
use crate::core::diff_refs::DiffSupport;
use crate::core::dirs::get_config_directory;
use crate::core::error::{GitStagerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

const DEFAULT_BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "pdf", "zip", "gz", "tar", "7z", "jar",
    "exe", "dll", "so", "dylib", "o", "a", "class", "pyc", "wasm", "doc", "docx", "xls", "xlsx",
    "ppt", "pptx",
];

fn default_binary_extensions() -> Vec<String> {
    DEFAULT_BINARY_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Show one unified list of tracked changes instead of three sections
    #[serde(default)]
    pub simple_staging: bool,

    /// Extensions the diff view cannot render
    #[serde(default = "default_binary_extensions")]
    pub binary_extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simple_staging: false,
            binary_extensions: default_binary_extensions(),
        }
    }
}

impl Settings {
    pub fn settings_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(SETTINGS_FILE))
    }

    /// Load settings from the config directory, falling back to defaults
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GitStagerError::settings_read_failed(path, e))?;
        let settings = serde_json::from_str(&content)
            .map_err(|e| GitStagerError::settings_parse_failed(path, e))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.simple_staging {
            DisplayMode::Simple
        } else {
            DisplayMode::Detailed
        }
    }

    pub fn diff_support(&self) -> DiffSupport {
        DiffSupport::new(self.binary_extensions.iter().map(String::as_str))
    }
}
