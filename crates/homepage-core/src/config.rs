//! Generator configuration.
//!
//! Every setting has a default, so running without a configuration file
//! produces the stock site layout (`CONTENT.md` -> `data/` -> `.`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    language::Language,
};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Structured data describing the site owner.
    #[serde(default)]
    pub person: PersonConfig,

    /// Input and output locations.
    #[serde(default)]
    pub build: BuildConfig,

    /// Sitemap settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public URL of the site without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Author for the `<meta name="author">` tag.
    #[serde(default = "default_author")]
    pub author: String,

    /// Open Graph site name.
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Footer copyright, used when the content file has none.
    #[serde(default = "default_copyright")]
    pub copyright: String,
}

/// Schema.org `Person` fields for the JSON-LD block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonConfig {
    #[serde(default = "default_author")]
    pub name: String,

    /// Defaults to `site.base_url` when empty.
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_job_title")]
    pub job_title: String,

    #[serde(default = "default_person_description")]
    pub description: String,

    #[serde(default = "default_knows_about")]
    pub knows_about: Vec<String>,

    #[serde(default = "default_same_as")]
    pub same_as: Vec<String>,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Structured markdown source.
    #[serde(default = "default_content_file")]
    pub content_file: String,

    /// Directory for the per-language JSON artifacts.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Directory the HTML pages are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// Sitemap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Whether `sitemap.xml` is written next to the pages.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

// Default value functions
fn default_base_url() -> String {
    "https://gmij.win".to_string()
}

fn default_author() -> String {
    "GMIJ".to_string()
}

fn default_site_name() -> String {
    "GMIJ Personal Page".to_string()
}

fn default_copyright() -> String {
    "© 2024 GMIJ. All rights reserved.".to_string()
}

fn default_job_title() -> String {
    "Full Stack Engineer".to_string()
}

fn default_person_description() -> String {
    "15 years .NET full stack development experience, 5 years technical management experience"
        .to_string()
}

fn default_knows_about() -> Vec<String> {
    [
        ".NET Development",
        "DevOps",
        "Continuous Integration",
        "Team Management",
        "Full Stack Development",
        "AI Programming",
        "AI Voice Interaction",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_same_as() -> Vec<String> {
    [
        "https://github.com/gmij",
        "https://github.com/dotnetcore/SmartSql",
        "https://github.com/ant-design-blazor/ant-design-blazor",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_content_file() -> String {
    "CONTENT.md".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            author: default_author(),
            site_name: default_site_name(),
            copyright: default_copyright(),
        }
    }
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self {
            name: default_author(),
            url: String::new(),
            job_title: default_job_title(),
            description: default_person_description(),
            knows_about: default_knows_about(),
            same_as: default_same_as(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_file: default_content_file(),
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load the file (or defaults when it is absent) and layer `HOMEPAGE__*`
    /// environment overrides on top (e.g. `HOMEPAGE__SITE__BASE_URL`).
    ///
    /// The file has to be valid on its own before the overrides apply.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let base = Self::load_or_default(path)?;
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&base)?)
            .add_source(config::Environment::with_prefix("HOMEPAGE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.build.content_file.is_empty() {
            return Err(CoreError::config("build.content_file cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url())
    }

    /// Canonical URL of a language's page.
    pub fn page_url(&self, lang: Language) -> String {
        self.url_for(lang.page_path())
    }

    /// URL for the JSON-LD `Person` block.
    pub fn person_url(&self) -> &str {
        if self.person.url.is_empty() {
            self.base_url()
        } else {
            &self.person.url
        }
    }

    pub fn content_path(&self) -> PathBuf {
        PathBuf::from(&self.build.content_file)
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.build.data_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.build.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
base_url = "https://example.com"
author = "Test Author"
copyright = "© 2026 Test"

[person]
name = "Test Person"
knows_about = ["Rust"]

[build]
content_file = "site/CONTENT.md"
data_dir = "out/data"
output_dir = "out"

[sitemap]
enabled = false
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("homepage.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.site.author, "Test Author");
        assert_eq!(config.site.copyright, "© 2026 Test");
        assert_eq!(config.site.site_name, "GMIJ Personal Page");
        assert_eq!(config.person.name, "Test Person");
        assert_eq!(config.person.knows_about, vec!["Rust"]);
        assert_eq!(config.person.job_title, "Full Stack Engineer");
        assert_eq!(config.content_path(), PathBuf::from("site/CONTENT.md"));
        assert_eq!(config.data_dir(), PathBuf::from("out/data"));
        assert_eq!(config.output_dir(), PathBuf::from("out"));
        assert!(!config.sitemap.enabled);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.site.base_url, "https://gmij.win");
        assert_eq!(config.build.content_file, "CONTENT.md");
        assert_eq!(config.build.data_dir, "data");
        assert_eq!(config.build.output_dir, ".");
        assert!(config.sitemap.enabled);
        assert_eq!(config.person.same_as.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("homepage.toml");
        std::fs::write(&config_path, "").expect("write");

        let config = Config::load(&config_path).expect("load config");
        assert_eq!(config.site.author, "GMIJ");
    }

    #[test]
    fn test_page_urls() {
        let config = Config::default();

        assert_eq!(config.page_url(Language::Zh), "https://gmij.win/");
        assert_eq!(
            config.page_url(Language::En),
            "https://gmij.win/index-en.html"
        );
        assert_eq!(config.person_url(), "https://gmij.win");
    }

    #[test]
    fn test_url_for_trims_slashes() {
        let mut config = Config::default();
        config.site.base_url = "https://example.com/".to_string();

        assert_eq!(config.url_for("/a"), "https://example.com/a");
        assert_eq!(config.url_for("a"), "https://example.com/a");
    }

    #[test]
    fn test_config_validation_empty_base_url() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("homepage.toml");
        std::fs::write(&config_path, "[site]\nbase_url = \"\"\n").expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("base_url cannot be empty")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/homepage.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/homepage.toml")).unwrap();
        assert_eq!(config.build.content_file, "CONTENT.md");
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("homepage.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.site.author, "Test Author");
        assert_eq!(config.person.knows_about, vec!["Rust"]);
        assert_eq!(config.data_dir(), PathBuf::from("out/data"));
        assert!(!config.sitemap.enabled);
    }

    #[test]
    fn test_load_with_env_rejects_broken_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("homepage.toml");
        std::fs::write(&config_path, "[site\nbase_url = 1").expect("write");

        let err = Config::load_with_env(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_with_env_without_file() {
        let config = Config::load_with_env(Path::new("/nonexistent/homepage.toml")).unwrap();
        assert_eq!(config.site.base_url, "https://gmij.win");
    }
}
