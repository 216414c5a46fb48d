//! Parse command - CONTENT.md to data/en.json and data/zh.json

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use homepage_core::Language;
use homepage_generator::Builder;

use super::{Overrides, load_config};

/// Run the parse command.
pub fn run(config_path: &Path, overrides: &Overrides) -> Result<()> {
    let config = load_config(config_path, overrides)?;
    let content_path = config.content_path();
    let data_dir = config.data_dir();
    tracing::info!(?content_path, ?data_dir, "Parsing content");

    let stats = Builder::new(config)
        .parse_to_json()
        .wrap_err_with(|| format!("Failed to parse {}", content_path.display()))?;

    for lang in [Language::En, Language::Zh] {
        println!("✓ Generated {}", data_dir.join(lang.data_file()).display());
    }
    println!("  Projects: {}", stats.projects);

    Ok(())
}
