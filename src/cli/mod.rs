//! CLI module
//!
//! Shared plumbing for the two argument-free binaries.

pub mod report;

use crate::config::{PatchConfig, DEFAULT_TARGET_PATH};
use anyhow::{Context, Result};

/// Initialise logging with an `info` default filter
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Load settings, falling back to built-in defaults
///
/// Logs where the settings came from and which file will be overwritten.
pub fn load_config() -> Result<PatchConfig> {
    let config = PatchConfig::load().context("Failed to load settings-patch configuration")?;

    match PatchConfig::config_file() {
        Ok(path) if path.exists() => log::info!("Using settings file {}", path.display()),
        _ => log::info!("No settings file found, using built-in defaults"),
    }
    log::info!("Target file: {}", config.target_path.display());
    if !config.is_default_target() {
        log::warn!(
            "Target overridden by settings file (default is {})",
            DEFAULT_TARGET_PATH
        );
    }

    Ok(config)
}
