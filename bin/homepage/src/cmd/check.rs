//! Check command - validate configuration and content without writing

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use homepage_core::{BilingualContent, Config, Language};
use homepage_generator::Builder;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Loads the configuration, parses the content file and checks both
/// language variants. Nothing is written.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            Config::default()
        }
    };

    println!("\nChecking content...");
    let builder = Builder::new(config);
    match builder.parse() {
        Ok(content) => {
            println!("  ✓ {} parsed", builder.config().content_path().display());
            validate_content(&content, &mut result);

            println!("\nChecking generated files...");
            check_artifacts(&builder, &content, &mut result);
        }
        Err(e) => {
            result.add_error(e.to_string());
            println!("  ✗ {e}");
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Sections that parsed to nothing usually mean a missing or misspelled
/// heading.
fn validate_content(content: &BilingualContent, result: &mut ValidationResult) {
    for lang in Language::ALL {
        let c = content.get(lang);
        let empty = [
            ("Meta Information", c.meta.title.is_empty()),
            ("Header", c.header.name.is_empty()),
            ("Stats", c.header.stats.is_empty()),
            ("About Me", c.about.items.is_empty()),
            ("Projects", c.projects.all().next().is_none()),
            ("Skills", c.skills.categories.is_empty()),
            ("Footer", c.footer.links.is_empty()),
        ];

        for (section, is_empty) in empty {
            if is_empty {
                result.add_warning(format!("[{lang}] section '{section}' is empty"));
            }
        }

        for category in &c.skills.categories {
            if category.items.is_empty() {
                result.add_warning(format!(
                    "[{lang}] skill category '{}' has no items",
                    category.name
                ));
            }
        }
    }

    for (en, zh) in content
        .en
        .projects
        .all()
        .zip(content.zh.projects.all())
    {
        if en.website_label.is_some() != zh.website_label.is_some() {
            result.add_warning(format!(
                "project '{}' has a website label in only one language",
                en.name
            ));
        }
    }
}

/// Warn when the JSON artifacts or pages are missing or older than the
/// content they would be regenerated from.
fn check_artifacts(builder: &Builder, content: &BilingualContent, result: &mut ValidationResult) {
    let config = builder.config();

    for lang in Language::ALL {
        let path = config.data_dir().join(lang.data_file());
        let expected = content.get(lang).to_json().ok();
        match std::fs::read_to_string(&path) {
            Ok(existing) if Some(&existing) == expected.as_ref() => {
                println!("  ✓ {} up to date", path.display());
            }
            Ok(_) => result.add_warning(format!(
                "{} is out of date; run `homepage parse`",
                path.display()
            )),
            Err(_) => result.add_warning(format!("{} does not exist", path.display())),
        }

        let page = config.output_dir().join(lang.page_file());
        if !page.exists() {
            result.add_warning(format!("{} does not exist", page.display()));
        }
    }
}

#[cfg(test)]
mod tests {
    use homepage_core::{Project, SkillCategory, Stat};

    use super::*;

    fn project(label: Option<&str>) -> Project {
        Project {
            name: "SmartSql".to_string(),
            website_label: label.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_content_warns_per_section() {
        let mut result = ValidationResult::default();
        validate_content(&BilingualContent::default(), &mut result);

        assert!(!result.has_errors());
        assert_eq!(result.warnings.len(), 14);
        assert!(
            result
                .warnings
                .contains(&"[zh] section 'Skills' is empty".to_string())
        );
    }

    #[test]
    fn test_website_label_mismatch() {
        let mut content = BilingualContent::default();
        content.en.projects.lead_projects.push(project(Some("Docs")));
        content.zh.projects.lead_projects.push(project(None));

        let mut result = ValidationResult::default();
        validate_content(&content, &mut result);

        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.contains("website label in only one language"))
        );
    }

    #[test]
    fn test_empty_skill_category() {
        let mut content = BilingualContent::default();
        content.en.header.stats.push(Stat::default());
        content.en.skills.categories.push(SkillCategory {
            name: "Backend".to_string(),
            items: vec![],
        });

        let mut result = ValidationResult::default();
        validate_content(&content, &mut result);

        assert!(
            result
                .warnings
                .contains(&"[en] skill category 'Backend' has no items".to_string())
        );
        assert!(
            !result
                .warnings
                .contains(&"[en] section 'Stats' is empty".to_string())
        );
    }

    #[test]
    fn test_check_artifacts_missing_and_stale() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.build.data_dir = dir.path().join("data").display().to_string();
        config.build.output_dir = dir.path().display().to_string();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/en.json"), "{}").unwrap();

        let mut result = ValidationResult::default();
        check_artifacts(
            &Builder::new(config),
            &BilingualContent::default(),
            &mut result,
        );

        assert!(result.warnings.iter().any(|w| w.ends_with("run `homepage parse`")));
        assert!(result.warnings.iter().any(|w| w.contains("zh.json does not exist")));
        assert!(result.warnings.iter().any(|w| w.contains("index.html does not exist")));
    }
}
