//! Read-transform-write shell around the pure patchers
//!
//! Each call performs one blocking read and one blocking write of the
//! target path. The write overwrites the file in place; no backup is kept.

use super::annotator::{annotate, Annotated};
use super::injector::{inject, Injected};
use crate::config::PatchConfig;
use crate::error::{PatchError, Result};
use std::fs;
use std::path::Path;

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_source(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Annotate the Settings fields of the configured target file
pub fn annotate_file(config: &PatchConfig) -> Result<Annotated> {
    let path = config.target_path.as_path();
    log::info!("Annotating {}", path.display());

    let source = read_source(path)?;
    let annotated = annotate(&source, &config.class_marker);
    write_source(path, &annotated.text)?;

    if !annotated.marker_found {
        log::warn!("Marker `{}` not found in {}", config.class_marker, path.display());
    }

    log::info!(
        "Annotated {} field(s){}",
        annotated.annotations.len(),
        if annotated.import_added { ", added Any import" } else { "" }
    );
    Ok(annotated)
}

/// Inject the configured directive into the target file
pub fn inject_file(config: &PatchConfig) -> Result<Injected> {
    let path = config.target_path.as_path();
    log::info!("Injecting config directive into {}", path.display());

    let source = read_source(path)?;
    let injected = inject(&source, &config.class_marker, &config.directive);
    write_source(path, &injected.text)?;

    match injected.inserted_at {
        Some(line) => log::info!("Inserted directive at line {}", line),
        None => log::warn!("Marker `{}` not found in {}", config.class_marker, path.display()),
    }
    Ok(injected)
}
