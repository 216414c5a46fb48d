//! Build orchestration.
//!
//! `CONTENT.md` -> `data/{en,zh}.json` -> `index.html` + `index-en.html`
//! (+ `sitemap.xml`). Every output is written atomically, so a failing run
//! leaves the previous files in place.

use std::{path::PathBuf, time::Instant};

use chrono::{DateTime, NaiveDate, Utc};
use homepage_core::{BilingualContent, Config, CoreError, Language, SiteContent, fs};
use homepage_parser::{ContentParser, write_json};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    html::{HtmlError, HtmlGenerator},
    sitemap::SitemapGenerator,
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Missing input, parse failure or I/O.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),
}

pub type Result<T> = std::result::Result<T, BuildError>;

/// What a run produced.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// JSON artifacts written.
    pub data_files: usize,

    /// HTML pages written.
    pub pages: usize,

    /// Whether `sitemap.xml` was written.
    pub sitemap: bool,

    /// Projects on each page (lead + contributor).
    pub projects: usize,

    pub duration_ms: u64,
}

/// Runs the parse and render pipelines for one configuration.
#[derive(Debug)]
pub struct Builder {
    config: Config,
}

impl Builder {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse the content file into both language variants.
    pub fn parse(&self) -> Result<BilingualContent> {
        let parser = ContentParser::new().with_copyright(&self.config.site.copyright);
        let content = parser.parse_file(&self.config.content_path())?;
        content.check_shape()?;
        Ok(content)
    }

    /// Parse the content file and write the JSON artifacts.
    pub fn parse_to_json(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let content = self.parse()?;
        let written = write_json(&content, &self.config.data_dir())?;

        Ok(BuildStats {
            data_files: written.len(),
            projects: content.en.projects.all().count(),
            duration_ms: start.elapsed().as_millis() as u64,
            ..Default::default()
        })
    }

    /// Render both pages from the JSON artifacts already on disk.
    pub fn render(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let content = self.load_json()?;

        let mut stats = self.render_content(&content)?;
        stats.duration_ms = start.elapsed().as_millis() as u64;
        Ok(stats)
    }

    /// Full pipeline: parse, write JSON, render.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();

        info!(
            content = %self.config.content_path().display(),
            output = %self.config.output_dir().display(),
            "starting build"
        );

        let content = self.parse()?;
        let written = write_json(&content, &self.config.data_dir())?;

        let mut stats = self.render_content(&content)?;
        stats.data_files = written.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            data_files = stats.data_files,
            pages = stats.pages,
            projects = stats.projects,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Read `data/en.json` and `data/zh.json`.
    pub fn load_json(&self) -> Result<BilingualContent> {
        let data_dir = self.config.data_dir();
        let mut content = BilingualContent::default();

        for lang in Language::ALL {
            let path = data_dir.join(lang.data_file());
            debug!(path = %path.display(), "loading data file");
            *content.get_mut(lang) = SiteContent::load(&path)?;
        }

        Ok(content)
    }

    /// Write both pages and, when enabled, the sitemap.
    pub fn render_content(&self, content: &BilingualContent) -> Result<BuildStats> {
        let generator = HtmlGenerator::new(self.config.clone());
        let output_dir = self.config.output_dir();
        let mut stats = BuildStats {
            projects: content.en.projects.all().count(),
            ..Default::default()
        };

        for lang in Language::ALL {
            let html = generator.generate_page(content.get(lang), lang)?;
            let path = generator.output_path(lang, &output_dir);
            fs::write_atomic(&path, &html)?;
            info!(path = %path.display(), lang = %lang, "generated page");
            stats.pages += 1;
        }

        if self.config.sitemap.enabled {
            let path = self.sitemap_path();
            let xml = SitemapGenerator::new(self.config.clone()).generate(self.last_modified());
            fs::write_atomic(&path, &xml)?;
            info!(path = %path.display(), "generated sitemap");
            stats.sitemap = true;
        }

        Ok(stats)
    }

    fn sitemap_path(&self) -> PathBuf {
        self.config.output_dir().join("sitemap.xml")
    }

    /// Date of the content the pages were rendered from: the content file's
    /// mtime, else the first JSON artifact's, else today.
    fn last_modified(&self) -> NaiveDate {
        let data_dir = self.config.data_dir();
        let mut sources = vec![self.config.content_path()];
        sources.extend(Language::ALL.into_iter().map(|lang| data_dir.join(lang.data_file())));

        sources
            .iter()
            .find_map(|path| std::fs::metadata(path).and_then(|m| m.modified()).ok())
            .map_or_else(
                || Utc::now().date_naive(),
                |time| DateTime::<Utc>::from(time).date_naive(),
            )
    }
}
