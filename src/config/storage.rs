//! Configuration Storage
//!
//! This module loads the optional settings file that can override the
//! target path, the class marker and the injected directive.

use crate::error::{PatchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file name
const CONFIG_FILE: &str = "config.toml";

/// Directory name under the platform config directory
const APP_DIR: &str = "settings-patch";

/// Installed chromadb configuration module, relative to the working directory
pub const DEFAULT_TARGET_PATH: &str = ".venv/lib/python3.12/site-packages/chromadb/config.py";

/// Header of the class both utilities operate on
pub const DEFAULT_CLASS_MARKER: &str = "class Settings(BaseSettings)";

/// Directive that makes the Settings model ignore unknown fields
pub const DEFAULT_DIRECTIVE: &str = r#"    model_config = {"extra": "ignore"}"#;

/// Persistent configuration data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// File rewritten by both utilities
    pub target_path: PathBuf,
    /// Prefix of the trimmed line that opens the class region
    pub class_marker: String,
    /// Line inserted after the class header
    pub directive: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
            class_marker: DEFAULT_CLASS_MARKER.to_string(),
            directive: DEFAULT_DIRECTIVE.to_string(),
        }
    }
}

impl PatchConfig {
    /// Get the configuration file path
    pub fn config_file() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            PatchError::Config("Could not find configuration directory".to_string())
        })?;

        Ok(config_dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from the platform config directory
    ///
    /// Falls back to the built-in defaults when no directory or file exists.
    pub fn load() -> Result<Self> {
        match Self::config_file() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loaded settings from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Returns true if the target is the built-in chromadb config module
    pub fn is_default_target(&self) -> bool {
        self.target_path == Path::new(DEFAULT_TARGET_PATH)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| PatchError::Config(format!("Failed to parse config file: {}", e)))
    }
}
