// annotate-settings: add type annotations to bare Settings fields
//
// Rewrites the configured chromadb config module in place.

use anyhow::{Context, Result};
use settings_patch::cli::{self, report};
use settings_patch::patch;

fn main() -> Result<()> {
    cli::init_logging();

    let config = cli::load_config()?;
    let annotated = patch::annotate_file(&config)
        .with_context(|| format!("Failed to annotate {}", config.target_path.display()))?;

    if !annotated.annotations.is_empty() {
        println!("{}", report::annotation_table(&annotated.annotations));
    }
    println!("{}", report::annotate_summary(&config.target_path, &annotated));

    Ok(())
}
