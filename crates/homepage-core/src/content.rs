//! Content document types.
//!
//! The same shape is serialized to `data/<lang>.json` by the parser and read
//! back by the renderer. Keys are camelCase and optional project fields are
//! omitted rather than written as `null`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    language::Language,
};

/// All site content for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub meta: Meta,
    pub header: Header,
    pub about: About,
    pub projects: Projects,
    pub skills: Skills,
    pub footer: Footer,
    pub ui: UiText,
}

/// Page metadata used in `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// Hero header with the headline stats bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub name: String,
    pub tagline: String,
    pub subtitle: String,
    pub stats: Vec<Stat>,
}

/// A number/label pair such as `15+` / `Years`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub title: String,
    pub items: Vec<AboutItem>,
}

/// One card of the about grid.
///
/// `icon` and `description` may carry trusted inline HTML and are rendered
/// unescaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Projects {
    pub title: String,
    pub lead_title: String,
    pub contributor_title: String,
    pub lead_projects: Vec<Project>,
    pub contributor_projects: Vec<Project>,
}

impl Projects {
    /// Lead projects followed by contributor projects, in source order.
    pub fn all(&self) -> impl Iterator<Item = &Project> {
        self.lead_projects
            .iter()
            .chain(self.contributor_projects.iter())
    }
}

/// A project card. `description` may carry trusted inline HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub badge: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub title: String,
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub copyright: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

/// Interface strings that are not part of any content section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiText {
    pub lang_button: String,
    pub github_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading: Option<String>,
}

impl SiteContent {
    /// Serialize to the pretty-printed artifact format (two-space indent,
    /// literal UTF-8, trailing newline).
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Parse an artifact produced by [`SiteContent::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load an artifact from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::missing_input(path));
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// The parsed document: one [`SiteContent`] per language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BilingualContent {
    pub en: SiteContent,
    pub zh: SiteContent,
}

impl BilingualContent {
    /// Content for the given language.
    pub fn get(&self, lang: Language) -> &SiteContent {
        match lang {
            Language::En => &self.en,
            Language::Zh => &self.zh,
        }
    }

    /// Mutable content for the given language.
    pub fn get_mut(&mut self, lang: Language) -> &mut SiteContent {
        match lang {
            Language::En => &mut self.en,
            Language::Zh => &mut self.zh,
        }
    }

    /// Check that both variants have the same structure: equal numbers of
    /// stats, about items, projects, skill categories and footer links.
    pub fn check_shape(&self) -> Result<()> {
        let (en, zh) = (&self.en, &self.zh);
        let counts = [
            ("stats", en.header.stats.len(), zh.header.stats.len()),
            ("about items", en.about.items.len(), zh.about.items.len()),
            (
                "lead projects",
                en.projects.lead_projects.len(),
                zh.projects.lead_projects.len(),
            ),
            (
                "contributor projects",
                en.projects.contributor_projects.len(),
                zh.projects.contributor_projects.len(),
            ),
            (
                "skill categories",
                en.skills.categories.len(),
                zh.skills.categories.len(),
            ),
            ("footer links", en.footer.links.len(), zh.footer.links.len()),
        ];

        for (what, en_count, zh_count) in counts {
            if en_count != zh_count {
                return Err(CoreError::ShapeMismatch(format!(
                    "{what}: en has {en_count}, zh has {zh_count}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SiteContent {
        SiteContent {
            meta: Meta {
                title: "GMIJ".to_string(),
                description: "Engineer".to_string(),
                keywords: "rust".to_string(),
            },
            projects: Projects {
                lead_projects: vec![Project {
                    name: "SmartSql".to_string(),
                    badge: "Creator".to_string(),
                    description: "ORM".to_string(),
                    github: Some("https://github.com/dotnetcore/SmartSql".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            },
            ui: UiText {
                lang_button: "中文".to_string(),
                github_label: "GitHub".to_string(),
                loading: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_json_uses_camel_case_and_omits_absent_fields() {
        let json = sample().to_json().unwrap();

        assert!(json.contains("\"leadProjects\""));
        assert!(json.contains("\"langButton\": \"中文\""));
        assert!(json.contains("\"github\""));
        assert!(!json.contains("\"website\""));
        assert!(!json.contains("null"));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_json_round_trip() {
        let content = sample();
        let parsed = SiteContent::from_json(&content.to_json().unwrap()).unwrap();
        assert_eq!(parsed, content);
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let parsed = SiteContent::from_json(r#"{"meta": {"title": "Only"}}"#).unwrap();
        assert_eq!(parsed.meta.title, "Only");
        assert!(parsed.header.stats.is_empty());
        assert!(parsed.ui.loading.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteContent::load(Path::new("/nonexistent/en.json")).unwrap_err();
        assert!(matches!(err, CoreError::MissingInput { .. }));
    }

    #[test]
    fn test_check_shape() {
        let mut doc = BilingualContent {
            en: sample(),
            zh: sample(),
        };
        assert!(doc.check_shape().is_ok());

        doc.get_mut(Language::Zh).projects.lead_projects.clear();
        let err = doc.check_shape().unwrap_err();
        assert!(err.to_string().contains("lead projects"));
    }

    #[test]
    fn test_projects_all_preserves_order() {
        let mut projects = sample().projects;
        projects.contributor_projects.push(Project {
            name: "ant-design-blazor".to_string(),
            ..Default::default()
        });
        let names: Vec<_> = projects.all().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["SmartSql", "ant-design-blazor"]);
    }
}
