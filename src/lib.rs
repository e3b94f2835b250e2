//! settings-patch Library
//!
//! Line-based patchers for the chromadb `Settings` class. The binaries in
//! src/bin/ wrap [`patch::annotate_file`] and [`patch::inject_file`].

pub mod cli;
pub mod config;
pub mod error;
pub mod patch;
