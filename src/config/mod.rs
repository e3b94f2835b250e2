//! Configuration module
//!
//! This module holds the target file location and the fixed strings
//! the utilities match and insert.

pub mod storage;

// Re-exports
pub use storage::{PatchConfig, DEFAULT_CLASS_MARKER, DEFAULT_DIRECTIVE, DEFAULT_TARGET_PATH};
