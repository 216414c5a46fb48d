//! HTML generation from a language's content.
//!
//! Each section is rendered to a fragment by one of the `render_*`
//! functions, then the fragments are substituted into the page template.
//! Free text is escaped; about icons, about descriptions and project
//! descriptions are trusted inline HTML and pass through unchanged.

use std::path::{Path, PathBuf};

use homepage_core::{
    AboutItem, Config, FooterLink, Labels, Language, Project, SiteContent, SkillCategory, Stat,
};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::template::{PAGE, Template, TemplateContext, TemplateError, TemplateRegistry};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("JSON-LD encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HtmlError>;

const GITHUB_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="currentColor" style="vertical-align: middle; margin-right: 4px;">
        <path d="M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z"/>
    </svg>"#;

/// Escape text for HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_stats(stats: &[Stat]) -> String {
    stats
        .iter()
        .map(|stat| {
            format!(
                r#"
            <div class="stat-item">
                <span class="stat-number">{}</span>
                <span class="stat-label">{}</span>
            </div>"#,
                escape_html(&stat.number),
                escape_html(&stat.label)
            )
        })
        .collect()
}

pub fn render_about_items(items: &[AboutItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"
            <div class="about-item">
                <h3><span class="about-icon">{}</span>{}</h3>
                <p>{}</p>
            </div>"#,
                item.icon,
                escape_html(&item.title),
                item.description
            )
        })
        .collect()
}

/// One project card. The GitHub button appears only with a `github` link and
/// the website button only with a `website`, labelled `website_label` or
/// `visit_site`.
pub fn render_project_card(project: &Project, github_label: &str, visit_site: &str) -> String {
    let mut links = String::new();

    if let Some(github) = &project.github {
        links.push_str(&format!(
            r#"
            <a href="{}" class="btn" target="_blank" rel="noopener noreferrer">
                {GITHUB_ICON}
                {}
            </a>"#,
            escape_html(github),
            escape_html(github_label)
        ));
    }

    if let Some(website) = &project.website {
        let label = project.website_label.as_deref().unwrap_or(visit_site);
        links.push_str(&format!(
            r#"
            <a href="{}" class="btn btn-primary" target="_blank" rel="noopener noreferrer">
                {}
            </a>"#,
            escape_html(website),
            escape_html(label)
        ));
    }

    format!(
        r#"
        <div class="project-card">
            <h3>{}</h3>
            <span class="project-badge">{}</span>
            <p>{}</p>
            <div class="project-links">
                {links}
            </div>
        </div>"#,
        escape_html(&project.name),
        escape_html(&project.badge),
        project.description
    )
}

pub fn render_projects(projects: &[Project], github_label: &str, visit_site: &str) -> String {
    projects
        .iter()
        .map(|p| render_project_card(p, github_label, visit_site))
        .collect()
}

pub fn render_skills(categories: &[SkillCategory]) -> String {
    categories
        .iter()
        .map(|category| {
            let items: String = category
                .items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            format!(
                r#"
            <div class="skill-category">
                <h3>{}</h3>
                <ul class="skill-list">
                    {items}
                </ul>
            </div>"#,
                escape_html(&category.name)
            )
        })
        .collect()
}

/// Footer links joined by ` · `. A link labelled exactly `github_label`
/// carries the GitHub icon.
pub fn render_footer_links(links: &[FooterLink], github_label: &str) -> String {
    links
        .iter()
        .map(|link| {
            let url = escape_html(&link.url);
            let label = escape_html(&link.label);
            if link.label == github_label {
                format!(
                    r#"<a href="{url}" target="_blank" rel="noopener noreferrer">
                {GITHUB_ICON}
                {label}
            </a>"#
                )
            } else {
                format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{label}</a>"#)
            }
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

/// `<link rel="alternate">` tags for both pages plus `x-default`.
pub fn alternates_html(config: &Config) -> String {
    let mut tags: Vec<String> = [Language::En, Language::Zh]
        .into_iter()
        .map(|lang| {
            format!(
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                lang.html_lang(),
                escape_html(&config.page_url(lang))
            )
        })
        .collect();

    tags.push(format!(
        r#"<link rel="alternate" hreflang="x-default" href="{}">"#,
        escape_html(&config.page_url(Language::DEFAULT))
    ));

    tags.join("\n    ")
}

/// JSON-LD `Person` block from the `[person]` configuration.
pub fn json_ld(config: &Config) -> Result<String> {
    let person = &config.person;
    let value = json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": person.name,
        "url": config.person_url(),
        "jobTitle": person.job_title,
        "description": person.description,
        "knowsAbout": person.knows_about,
        "sameAs": person.same_as,
    });

    // `</script>` inside a string would end the element early.
    Ok(serde_json::to_string_pretty(&value)?.replace("</", "<\\/"))
}

/// Renders pages for one site configuration.
#[derive(Debug)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    config: Config,
}

impl HtmlGenerator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            config,
        }
    }

    /// Replace a template, e.g. a user-supplied `page`.
    pub fn register_template(&mut self, template: Template) {
        self.templates.register(template);
    }

    /// Render the complete page for `lang`.
    pub fn generate_page(&self, content: &SiteContent, lang: Language) -> Result<String> {
        debug!(lang = %lang, "generating HTML page");

        let ctx = self.build_context(content, lang)?;
        Ok(self.templates.render(PAGE, &ctx)?)
    }

    fn build_context(&self, content: &SiteContent, lang: Language) -> Result<TemplateContext> {
        let labels = Labels::for_language(lang);
        let github_label = &content.ui.github_label;
        let site = &self.config.site;

        let ctx = TemplateContext::new()
            .with_var("lang", lang.html_lang())
            .with_var("title", escape_html(&content.meta.title))
            .with_var("description", escape_html(&content.meta.description))
            .with_var("keywords", escape_html(&content.meta.keywords))
            .with_var("author", escape_html(&site.author))
            .with_var("site_name", escape_html(&site.site_name))
            .with_var("canonical_url", escape_html(&self.config.page_url(lang)))
            .with_var("alternates_html", alternates_html(&self.config))
            .with_var("json_ld", json_ld(&self.config)?)
            .with_var("lang_switch_url", lang.other().page_path())
            .with_var("lang_button_text", escape_html(&content.ui.lang_button))
            .with_var("header_name", escape_html(&content.header.name))
            .with_var("header_tagline", escape_html(&content.header.tagline))
            .with_var("header_subtitle", escape_html(&content.header.subtitle))
            .with_var("stats_html", render_stats(&content.header.stats))
            .with_var("about_title", escape_html(&content.about.title))
            .with_var("about_html", render_about_items(&content.about.items))
            .with_var("projects_title", escape_html(&content.projects.title))
            .with_var(
                "projects_lead_title",
                escape_html(&content.projects.lead_title),
            )
            .with_var(
                "projects_contributor_title",
                escape_html(&content.projects.contributor_title),
            )
            .with_var(
                "lead_projects_html",
                render_projects(
                    &content.projects.lead_projects,
                    github_label,
                    labels.visit_site,
                ),
            )
            .with_var(
                "contributor_projects_html",
                render_projects(
                    &content.projects.contributor_projects,
                    github_label,
                    labels.visit_site,
                ),
            )
            .with_var("skills_title", escape_html(&content.skills.title))
            .with_var("skills_html", render_skills(&content.skills.categories))
            .with_var("footer_copyright", escape_html(&content.footer.copyright))
            .with_var(
                "footer_links_html",
                render_footer_links(&content.footer.links, github_label),
            );

        Ok(ctx)
    }

    /// Where the page for `lang` is written.
    #[must_use]
    pub fn output_path(&self, lang: Language, output_dir: &Path) -> PathBuf {
        output_dir.join(lang.page_file())
    }
}
