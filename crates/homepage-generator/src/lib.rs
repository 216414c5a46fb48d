//! Homepage Generator Library
//!
//! Renders the parsed content into static pages.
//!
//! # Modules
//!
//! - [`template`] - page template with variable interpolation
//! - [`html`] - section fragments and full-page rendering
//! - [`sitemap`] - XML sitemap with language alternates
//! - [`build`] - parse / render / build pipelines

pub mod build;
pub mod html;
pub mod sitemap;
pub mod template;

pub use build::{BuildError, BuildStats, Builder};
pub use html::{HtmlError, HtmlGenerator, escape_html};
pub use sitemap::SitemapGenerator;
pub use template::{Template, TemplateContext, TemplateRegistry};
