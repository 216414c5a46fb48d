//! Sitemap generation.
//!
//! Lists both language pages, each carrying `xhtml:link` alternates for the
//! other language and `x-default`.

use chrono::NaiveDate;
use homepage_core::{Config, Language};
use tracing::debug;

/// Alternate language link for a URL.
#[derive(Debug, Clone)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

/// A sitemap URL entry.
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub priority: f32,
    pub alternates: Vec<AlternateLink>,
}

#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate sitemap XML with `lastmod` set to `date`.
    pub fn generate(&self, date: NaiveDate) -> String {
        debug!(%date, "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#);
        xml.push_str(r#" xmlns:xhtml="http://www.w3.org/1999/xhtml">"#);
        xml.push('\n');

        for lang in Language::ALL {
            xml.push_str(&url_to_xml(&self.page_to_url(lang, date)));
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn page_to_url(&self, lang: Language, date: NaiveDate) -> SitemapUrl {
        let mut alternates: Vec<AlternateLink> = [Language::En, Language::Zh]
            .into_iter()
            .map(|alt| AlternateLink {
                hreflang: alt.html_lang().to_string(),
                href: self.config.page_url(alt),
            })
            .collect();
        alternates.push(AlternateLink {
            hreflang: "x-default".to_string(),
            href: self.config.page_url(Language::DEFAULT),
        });

        SitemapUrl {
            loc: self.config.page_url(lang),
            lastmod: date,
            priority: if lang.is_default() { 1.0 } else { 0.9 },
            alternates,
        }
    }
}

fn url_to_xml(url: &SitemapUrl) -> String {
    let mut xml = String::from("  <url>\n");

    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
    xml.push_str(&format!(
        "    <lastmod>{}</lastmod>\n",
        url.lastmod.format("%Y-%m-%d")
    ));
    xml.push_str("    <changefreq>monthly</changefreq>\n");
    xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));

    for alt in &url.alternates {
        xml.push_str(&format!(
            r#"    <xhtml:link rel="alternate" hreflang="{}" href="{}" />"#,
            alt.hreflang,
            escape_xml(&alt.href)
        ));
        xml.push('\n');
    }

    xml.push_str("  </url>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
