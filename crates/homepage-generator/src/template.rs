//! Page template with `{{ variable }}` interpolation.
//!
//! A single built-in template lays out the whole page. Rendered fragments and
//! already-escaped values are substituted in; substituted text is never
//! scanned again, so content containing `{{` is left alone.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;

/// Variables available to a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}

/// A named template.
///
/// `{{ name }}` is required; `{{ name? }}` renders empty when unset.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut out = String::with_capacity(self.content.len());
        let mut rest = self.content.as_str();

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;

            let var_name = after[..end].trim();
            let (var_name, optional) = match var_name.strip_suffix('?') {
                Some(stripped) => (stripped.trim_end(), true),
                None => (var_name, false),
            };

            match context.get(var_name) {
                Some(value) => out.push_str(value),
                None if optional => {}
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            }

            rest = &after[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Templates by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// A registry holding the built-in `page` template.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(Template::new(PAGE, PAGE_TEMPLATE));
        registry
    }

    /// Register a template, replacing any with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Name of the full-page template.
pub const PAGE: &str = "page";

/// The complete homepage: SEO head, inline stylesheet, language switcher and
/// one slot per content section.
pub const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">

    <!-- Primary Meta Tags -->
    <title>{{ title }}</title>
    <meta name="title" content="{{ title }}">
    <meta name="description" content="{{ description }}">
    <meta name="keywords" content="{{ keywords }}">
    <meta name="author" content="{{ author }}">
    <meta name="robots" content="index, follow">

    <!-- Open Graph / Facebook -->
    <meta property="og:type" content="website">
    <meta property="og:url" content="{{ canonical_url }}">
    <meta property="og:title" content="{{ title }}">
    <meta property="og:description" content="{{ description }}">
    <meta property="og:site_name" content="{{ site_name }}">

    <!-- Twitter -->
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:url" content="{{ canonical_url }}">
    <meta name="twitter:title" content="{{ title }}">
    <meta name="twitter:description" content="{{ description }}">

    <!-- Canonical URL -->
    <link rel="canonical" href="{{ canonical_url }}">

    <!-- Alternate language versions -->
    {{ alternates_html }}

    <!-- JSON-LD Structured Data -->
    <script type="application/ld+json">
{{ json_ld }}
    </script>

    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        :root {
            --bg-primary: #0f1419;
            --bg-secondary: #1a1f29;
            --bg-tertiary: #242b38;
            --text-primary: #e6edf3;
            --text-secondary: #8b949e;
            --accent: #3b9eff;
            --accent-hover: #58a6ff;
            --border: #30363d;
            --shadow-sm: 0 1px 3px rgba(0,0,0,0.3);
            --shadow-md: 0 4px 12px rgba(0,0,0,0.4);
        }

        body {
            font-family: "PingFang SC", "Microsoft YaHei", "Helvetica Neue", Helvetica, Arial, sans-serif;
            line-height: 1.7;
            color: var(--text-primary);
            background-color: var(--bg-primary);
            -webkit-font-smoothing: antialiased;
            -moz-osx-font-smoothing: grayscale;
        }

        .container {
            max-width: 1000px;
            margin: 0 auto;
            padding: 0 24px;
        }

        /* Language Switcher */
        .lang-switcher {
            position: fixed;
            top: 20px;
            right: 20px;
            z-index: 1000;
        }

        .lang-btn {
            background: var(--bg-secondary);
            color: var(--text-primary);
            border: 1px solid var(--border);
            padding: 8px 16px;
            border-radius: 6px;
            cursor: pointer;
            font-size: 14px;
            transition: all 0.2s ease;
            font-family: inherit;
            text-decoration: none;
            display: inline-block;
        }

        .lang-btn:hover {
            background: var(--bg-tertiary);
            border-color: var(--accent);
        }

        /* Header */
        header {
            padding: 120px 0 80px;
            text-align: center;
            border-bottom: 1px solid var(--border);
            background: linear-gradient(180deg, var(--bg-secondary) 0%, var(--bg-primary) 100%);
        }

        header h1 {
            font-size: 64px;
            font-weight: 700;
            margin-bottom: 20px;
            letter-spacing: -1px;
            color: var(--text-primary);
            background: linear-gradient(135deg, var(--text-primary) 0%, var(--accent) 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
        }

        @supports not (background-clip: text) {
            header h1 {
                color: var(--text-primary);
                background: none;
            }
        }

        header .tagline {
            font-size: 24px;
            color: var(--text-primary);
            font-weight: 500;
            margin-bottom: 12px;
        }

        header .subtitle {
            font-size: 16px;
            color: var(--text-secondary);
            font-weight: 400;
            margin-bottom: 40px;
        }

        /* Stats Bar */
        .stats-bar {
            display: flex;
            justify-content: center;
            gap: 60px;
            margin-top: 40px;
            flex-wrap: wrap;
        }

        .stat-item {
            text-align: center;
        }

        .stat-number {
            font-size: 36px;
            font-weight: 700;
            color: var(--accent);
            display: block;
            margin-bottom: 8px;
        }

        .stat-label {
            font-size: 14px;
            color: var(--text-secondary);
            text-transform: uppercase;
            letter-spacing: 1px;
        }

        /* Section */
        section {
            padding: 64px 0;
        }

        section:not(:last-child) {
            border-bottom: 1px solid var(--border);
        }

        h2 {
            font-size: 28px;
            font-weight: 600;
            margin-bottom: 32px;
            color: var(--text-primary);
        }

        /* About Section */
        .about-grid {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 24px;
        }

        .about-item {
            padding: 32px 24px;
            background: var(--bg-secondary);
            border-radius: 12px;
            border: 1px solid var(--border);
            transition: all 0.3s ease;
            position: relative;
            overflow: hidden;
        }

        .about-item::before {
            content: '';
            position: absolute;
            top: 0;
            left: 0;
            width: 4px;
            height: 100%;
            background: var(--accent);
            transform: scaleY(0);
            transition: transform 0.3s ease;
        }

        .about-item:hover {
            border-color: var(--accent);
            box-shadow: var(--shadow-md);
            transform: translateY(-4px);
        }

        .about-item:hover::before {
            transform: scaleY(1);
        }

        .about-item h3 {
            font-size: 20px;
            font-weight: 600;
            margin-bottom: 16px;
            color: var(--accent);
            display: flex;
            align-items: center;
            gap: 12px;
        }

        .about-icon {
            font-size: 28px;
            line-height: 1;
        }

        .about-item p {
            font-size: 15px;
            color: var(--text-secondary);
            line-height: 1.8;
        }

        /* Projects Section */
        .section-subtitle {
            font-size: 20px;
            font-weight: 600;
            margin: 40px 0 24px;
            color: var(--text-primary);
        }

        .section-subtitle:first-of-type {
            margin-top: 0;
        }

        .projects-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 24px;
        }

        .project-card {
            padding: 24px;
            background: var(--bg-primary);
            border: 1px solid var(--border);
            border-radius: 8px;
            transition: all 0.2s ease;
        }

        .project-card:hover {
            border-color: var(--accent);
            box-shadow: var(--shadow-md);
        }

        .project-card h3 {
            font-size: 18px;
            font-weight: 600;
            margin-bottom: 8px;
            color: var(--text-primary);
        }

        .project-badge {
            display: inline-block;
            padding: 4px 10px;
            font-size: 12px;
            background: var(--bg-tertiary);
            color: var(--text-secondary);
            border-radius: 4px;
            margin-bottom: 12px;
        }

        .project-card p {
            font-size: 14px;
            color: var(--text-secondary);
            line-height: 1.7;
            margin-bottom: 16px;
        }

        .project-links {
            display: flex;
            gap: 12px;
            flex-wrap: wrap;
        }

        .btn {
            display: inline-block;
            padding: 8px 16px;
            font-size: 14px;
            color: var(--accent);
            text-decoration: none;
            border: 1px solid var(--accent);
            border-radius: 6px;
            transition: all 0.2s ease;
            font-weight: 500;
        }

        .btn:hover {
            background: var(--accent);
            color: white;
        }

        .btn-primary {
            background: var(--accent);
            color: white;
        }

        .btn-primary:hover {
            background: var(--accent-hover);
            border-color: var(--accent-hover);
        }

        /* Skills Section */
        .skills-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 32px;
        }

        .skill-category h3 {
            font-size: 18px;
            font-weight: 600;
            margin-bottom: 16px;
            color: var(--text-primary);
        }

        .skill-list {
            list-style: none;
        }

        .skill-list li {
            font-size: 15px;
            color: var(--text-secondary);
            padding: 6px 0;
            padding-left: 20px;
            position: relative;
        }

        .skill-list li::before {
            content: "•";
            position: absolute;
            left: 0;
            color: var(--accent);
            font-weight: bold;
        }

        /* Footer */
        footer {
            padding: 48px 0;
            text-align: center;
            border-top: 1px solid var(--border);
            background: var(--bg-secondary);
        }

        footer p {
            font-size: 14px;
            color: var(--text-secondary);
            margin-bottom: 12px;
        }

        footer a {
            color: var(--accent);
            text-decoration: none;
            transition: color 0.2s ease;
        }

        footer a:hover {
            color: var(--accent-hover);
        }

        /* Responsive */
        @media (max-width: 1024px) and (min-width: 769px) {
            .about-grid {
                grid-template-columns: repeat(2, 1fr);
            }
        }

        @media (max-width: 768px) {
            header {
                padding: 80px 0 60px;
            }

            header h1 {
                font-size: 42px;
            }

            header .tagline {
                font-size: 18px;
            }

            header .subtitle {
                font-size: 14px;
            }

            .stats-bar {
                gap: 40px;
            }

            .stat-number {
                font-size: 28px;
            }

            .stat-label {
                font-size: 12px;
            }

            h2 {
                font-size: 24px;
            }

            .about-grid,
            .projects-grid,
            .skills-grid {
                grid-template-columns: 1fr;
            }

            section {
                padding: 48px 0;
            }

            .lang-switcher {
                top: 15px;
                right: 15px;
            }
        }

        /* Accessibility - Reduced motion */
        @media (prefers-reduced-motion: reduce) {
            *,
            *::before,
            *::after {
                animation-duration: 0.01ms !important;
                animation-iteration-count: 1 !important;
                transition-duration: 0.01ms !important;
            }

            .about-item::before {
                transition: none;
            }

            .about-item:hover {
                transform: none;
            }
        }
    </style>
</head>
<body>
    <!-- Language Switcher -->
    <div class="lang-switcher">
        <a href="{{ lang_switch_url }}" class="lang-btn">
            <span>{{ lang_button_text }}</span>
        </a>
    </div>

    <header>
        <div class="container">
            <h1>{{ header_name }}</h1>
            <p class="tagline">{{ header_tagline }}</p>
            <p class="subtitle">{{ header_subtitle }}</p>

            <div class="stats-bar">
                {{ stats_html }}
            </div>
        </div>
    </header>

    <section>
        <div class="container">
            <h2>{{ about_title }}</h2>
            <div class="about-grid">
                {{ about_html }}
            </div>
        </div>
    </section>

    <section>
        <div class="container">
            <h2>{{ projects_title }}</h2>

            <div class="section-subtitle">{{ projects_lead_title }}</div>
            <div class="projects-grid">
                {{ lead_projects_html }}
            </div>

            <div class="section-subtitle">{{ projects_contributor_title }}</div>
            <div class="projects-grid">
                {{ contributor_projects_html }}
            </div>
        </div>
    </section>

    <section>
        <div class="container">
            <h2>{{ skills_title }}</h2>
            <div class="skills-grid">
                {{ skills_html }}
            </div>
        </div>
    </section>

    <footer>
        <div class="container">
            <p>{{ footer_copyright }}</p>
            <p>
                {{ footer_links_html }}
            </p>
        </div>
    </footer>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_simple_render() {
        let template = Template::new("test", "Hello, {{ name }}!");
        let mut ctx = TemplateContext::new();
        ctx.insert("name", "World");

        assert_eq!(template.render(&ctx).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_template_optional_variable() {
        let template = Template::new("test", "Hello{{ suffix? }}!");

        assert_eq!(template.render(&TemplateContext::new()).unwrap(), "Hello!");

        let ctx = TemplateContext::new().with_var("suffix", ", World");
        assert_eq!(template.render(&ctx).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_template_missing_required_variable() {
        let template = Template::new("test", "Hello, {{ name }}!");
        let result = template.render(&TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::MissingVariable(ref v)) if v == "name"));
    }

    #[test]
    fn test_template_unclosed_delimiter() {
        let template = Template::new("test", "Hello, {{ name");
        let result = template.render(&TemplateContext::new().with_var("name", "x"));
        assert!(matches!(result, Err(TemplateError::InvalidSyntax(_))));
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let template = Template::new("test", "<p>{{ body }}</p>");
        let ctx = TemplateContext::new().with_var("body", "{{ body }}");

        assert_eq!(template.render(&ctx).unwrap(), "<p>{{ body }}</p>");
    }

    #[test]
    fn test_css_braces_pass_through() {
        let template = Template::new("test", "a { color: red; } {{ x }}");
        let ctx = TemplateContext::new().with_var("x", "ok");
        assert_eq!(template.render(&ctx).unwrap(), "a { color: red; } ok");
    }

    #[test]
    fn test_registry() {
        let mut registry = TemplateRegistry::new();
        assert!(registry.get(PAGE).is_some());
        assert!(matches!(
            registry.render("nonexistent", &TemplateContext::new()),
            Err(TemplateError::NotFound(_))
        ));

        registry.register(Template::new(PAGE, "<html>{{ title }}</html>"));
        let html = registry
            .render(PAGE, &TemplateContext::new().with_var("title", "T"))
            .unwrap();
        assert_eq!(html, "<html>T</html>");
    }

    #[test]
    fn test_page_template_slots() {
        let template = Template::new(PAGE, PAGE_TEMPLATE);
        let result = template.render(&TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::MissingVariable(ref v)) if v == "lang"));
        assert!(PAGE_TEMPLATE.starts_with("<!DOCTYPE html>"));
        assert!(PAGE_TEMPLATE.contains("{{ json_ld }}"));
        assert!(PAGE_TEMPLATE.contains("{{ footer_links_html }}"));
    }
}
