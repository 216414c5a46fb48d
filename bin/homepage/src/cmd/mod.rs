//! CLI command implementations.

pub mod build;
pub mod check;
pub mod new;
pub mod parse;
pub mod render;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use homepage_core::Config;

/// Path and URL overrides shared by `build`, `parse` and `render`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Overrides {
    /// Content file to parse (default: build.content_file)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Directory for en.json / zh.json (default: build.data_dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory for the HTML pages (default: build.output_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override site base URL (e.g., https://example.com)
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Overrides {
    /// Apply the overrides that were given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(content) = &self.content {
            config.build.content_file = content.display().to_string();
        }
        if let Some(data_dir) = &self.data_dir {
            config.build.data_dir = data_dir.display().to_string();
        }
        if let Some(output) = &self.output {
            config.build.output_dir = output.display().to_string();
        }
        if let Some(base_url) = &self.base_url {
            tracing::info!(base_url, "Overriding site base URL from CLI");
            config.site.base_url = base_url.clone();
        }
    }
}

/// Load `config_path` (defaults when the file is absent, `HOMEPAGE__*`
/// environment overrides on top), apply CLI overrides and validate.
pub fn load_config(config_path: &Path, overrides: &Overrides) -> Result<Config> {
    let mut config =
        Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    overrides.apply(&mut config);
    config.validate().wrap_err("Invalid configuration")?;

    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_only_given_values() {
        let mut config = Config::default();
        let overrides = Overrides {
            output: Some(PathBuf::from("public")),
            base_url: Some("https://example.com".to_string()),
            ..Default::default()
        };

        overrides.apply(&mut config);

        assert_eq!(config.build.output_dir, "public");
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.build.content_file, "CONTENT.md");
        assert_eq!(config.build.data_dir, "data");
    }

    #[test]
    fn test_load_config_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("homepage.toml"), &Overrides::default()).unwrap();
        assert_eq!(config.site.base_url, "https://gmij.win");
    }

    #[test]
    fn test_load_config_rejects_empty_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = Overrides {
            base_url: Some(String::new()),
            ..Default::default()
        };
        assert!(load_config(&dir.path().join("homepage.toml"), &overrides).is_err());
    }
}
