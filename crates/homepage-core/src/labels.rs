//! Built-in localized strings for titles the content file does not carry.

use crate::language::Language;

/// Fixed section titles and interface labels for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub about_title: &'static str,
    pub projects_title: &'static str,
    pub lead_title: &'static str,
    pub contributor_title: &'static str,
    pub skills_title: &'static str,
    /// Text of the button that switches to the *other* language.
    pub lang_button: &'static str,
    pub github_label: &'static str,
    /// Fallback label for a project's website button.
    pub visit_site: &'static str,
}

impl Labels {
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::En => Self {
                about_title: "About Me",
                projects_title: "Open Source Projects",
                lead_title: "Lead Projects",
                contributor_title: "Contributor Projects",
                skills_title: "Skills & Expertise",
                lang_button: "中文",
                github_label: "GitHub",
                visit_site: "Visit Site",
            },
            Language::Zh => Self {
                about_title: "关于我",
                projects_title: "开源项目",
                lead_title: "主导项目",
                contributor_title: "贡献项目",
                skills_title: "技能专长",
                lang_button: "EN",
                github_label: "GitHub",
                visit_site: "Visit Site",
            },
        }
    }
}
