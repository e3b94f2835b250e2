// inject-settings-config: make the Settings model ignore unknown fields
//
// Inserts the model_config directive into the configured chromadb config module.

use anyhow::{Context, Result};
use settings_patch::cli::{self, report};
use settings_patch::patch;

fn main() -> Result<()> {
    cli::init_logging();

    let config = cli::load_config()?;
    let injected = patch::inject_file(&config)
        .with_context(|| format!("Failed to inject directive into {}", config.target_path.display()))?;

    println!("{}", report::inject_summary(&config.target_path, &injected));

    Ok(())
}
