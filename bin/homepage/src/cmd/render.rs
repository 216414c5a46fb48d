//! Render command - data/*.json to index.html and index-en.html

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use homepage_core::Language;
use homepage_generator::Builder;

use super::{Overrides, load_config};

/// Run the render command.
///
/// Fails when either JSON artifact is missing; nothing is written then.
pub fn run(config_path: &Path, overrides: &Overrides) -> Result<()> {
    let config = load_config(config_path, overrides)?;
    let output = config.output_dir();
    tracing::info!(data_dir = ?config.data_dir(), ?output, "Rendering pages");

    let stats = Builder::new(config).render().wrap_err("Render failed")?;

    for lang in Language::ALL {
        println!("✓ Generated {}", output.join(lang.page_file()).display());
    }
    if stats.sitemap {
        println!("✓ Generated {}", output.join("sitemap.xml").display());
    }

    Ok(())
}
