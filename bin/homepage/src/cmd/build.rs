//! Build command - parse CONTENT.md, write JSON and render both pages

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use homepage_generator::Builder;

use super::{Overrides, load_config};

/// Run the build command.
pub fn run(config_path: &Path, overrides: &Overrides) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?overrides, "Starting build");

    let config = load_config(config_path, overrides)?;
    let output = config.output_dir();
    let data_dir = config.data_dir();

    let stats = Builder::new(config).build().wrap_err("Build failed")?;
    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Data files: {} ({})", stats.data_files, data_dir.display());
    println!("  Pages:      {}", stats.pages);
    println!("  Projects:   {}", stats.projects);
    println!("  Sitemap:    {}", if stats.sitemap { "yes" } else { "no" });
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
