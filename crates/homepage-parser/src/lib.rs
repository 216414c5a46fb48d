//! Homepage Parser Library
//!
//! Turns the structured bilingual `CONTENT.md` into one [`SiteContent`] per
//! language.
//!
//! The document is first split into a heading [`Outline`]; each section is
//! then parsed by its own function in [`sections`], descending into
//! sub-blocks (`### English`, `### Lead Projects`, `#### 1. Name`) and
//! reading `**Label**: value` fields.
//!
//! [`SiteContent`]: homepage_core::SiteContent

pub mod fields;
pub mod outline;
pub mod sections;

use std::path::{Path, PathBuf};

use homepage_core::{
    BilingualContent, CoreError, Language, Result, SiteContent, config::SiteConfig, fs,
};
pub use outline::{Block, Outline};
use tracing::{debug, info};

/// Parser for the content document.
#[derive(Debug, Clone)]
pub struct ContentParser {
    default_copyright: String,
}

impl Default for ContentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentParser {
    /// Create a parser with the stock copyright line.
    pub fn new() -> Self {
        Self {
            default_copyright: SiteConfig::default().copyright,
        }
    }

    /// Copyright used when the Footer section has no `Copyright` field.
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.default_copyright = copyright.into();
        self
    }

    /// Parse a document held in memory.
    pub fn parse(&self, source: &str) -> Result<BilingualContent> {
        let outline = Outline::parse(source);
        let mut doc = BilingualContent::default();

        sections::parse_meta(&outline, &mut doc)?;
        sections::parse_header(&outline, &mut doc)?;
        sections::parse_about(&outline, &mut doc)?;
        sections::parse_projects(&outline, &mut doc)?;
        sections::parse_skills(&outline, &mut doc)?;
        sections::parse_footer(&outline, &mut doc, &self.default_copyright)?;
        sections::parse_ui(&outline, &mut doc)?;

        debug!(
            stats = doc.en.header.stats.len(),
            about = doc.en.about.items.len(),
            projects = doc.en.projects.all().count(),
            skills = doc.en.skills.categories.len(),
            links = doc.en.footer.links.len(),
            "parsed content document"
        );

        Ok(doc)
    }

    /// Read and parse a content file.
    pub fn parse_file(&self, path: &Path) -> Result<BilingualContent> {
        if !path.exists() {
            return Err(CoreError::missing_input(path));
        }

        info!(path = %path.display(), "parsing content");
        let source = std::fs::read_to_string(path)?;
        self.parse(&source)
    }
}

/// Parse a document with default settings.
pub fn parse_document(source: &str) -> Result<BilingualContent> {
    ContentParser::new().parse(source)
}

/// Serialize one language variant in the artifact format.
pub fn to_json_string(content: &SiteContent) -> Result<String> {
    content.to_json()
}

/// Write `<data_dir>/en.json` and `<data_dir>/zh.json`, returning the paths
/// written.
pub fn write_json(content: &BilingualContent, data_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(Language::ALL.len());

    for lang in [Language::En, Language::Zh] {
        let path = data_dir.join(lang.data_file());
        fs::write_atomic(&path, &to_json_string(content.get(lang))?)?;
        info!(path = %path.display(), "generated data file");
        written.push(path);
    }

    Ok(written)
}
