//! Error types for settings-patch
//!
//! This module defines the error types used by the patching utilities.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for settings-patch
pub type Result<T> = std::result::Result<T, PatchError>;

/// Main error type for settings-patch
#[derive(Error, Debug)]
pub enum PatchError {
    /// The target file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The patched content could not be written back
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}
