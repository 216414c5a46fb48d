//! Homepage Core Library
//!
//! Content model, configuration, and error handling for the bilingual
//! homepage generator.

pub mod config;
pub mod content;
pub mod error;
pub mod fs;
pub mod labels;
pub mod language;

pub use config::Config;
pub use content::{
    About, AboutItem, BilingualContent, Footer, FooterLink, Header, Meta, Project, Projects,
    SiteContent, SkillCategory, Skills, Stat, UiText,
};
pub use error::{CoreError, Result};
pub use labels::Labels;
pub use language::Language;
