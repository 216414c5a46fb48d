//! One parser per content section.
//!
//! A section whose heading is missing leaves its part of the document empty.
//! Once a section (or one of its entries) is located, every required field
//! must be present; the first miss aborts with its section path and line.

use homepage_core::{
    AboutItem, BilingualContent, CoreError, FooterLink, Labels, Language, Project, Result,
    SkillCategory, Stat,
};
use tracing::{debug, warn};

use crate::{
    fields::{Fields, first_bold, inline_fields, parse_field, parse_link, split_bilingual},
    outline::{Block, Outline},
};

pub const META: &str = "Meta Information";
pub const HEADER: &str = "Header";
pub const STATS: &str = "Stats";
pub const ABOUT: &str = "About Me";
pub const PROJECTS: &str = "Projects";
pub const LEAD: &str = "Lead Projects";
pub const CONTRIBUTOR: &str = "Contributor Projects";
pub const SKILLS: &str = "Skills";
pub const FOOTER: &str = "Footer";
pub const UI_TEXT: &str = "UI Text";

const ENGLISH: &str = "English";
const CHINESE: &str = "中文";

fn locate<'o, 'a>(outline: &'o Outline<'a>, name: &str) -> Option<&'o Block<'a>> {
    let found = outline.section(name);
    if found.is_none() {
        warn!(section = name, "section not found, leaving it empty");
    }
    found
}

/// A sub-block both languages depend on. Once its section is located a
/// missing block would leave one page empty, so it is an error.
fn required_block<'b, 'a>(
    block: &'b Block<'a>,
    section: &str,
    name: &str,
) -> Result<&'b Block<'a>> {
    block
        .child(name)
        .ok_or_else(|| CoreError::missing_field(section, format!("### {name}"), block.line))
}

fn sub_block<'b, 'a>(block: &'b Block<'a>, section: &str, name: &str) -> Option<&'b Block<'a>> {
    let found = block.child(name);
    if found.is_none() {
        warn!(section, block = name, "sub-block not found, leaving it empty");
    }
    found
}

pub fn parse_meta(outline: &Outline<'_>, doc: &mut BilingualContent) -> Result<()> {
    let Some(section) = locate(outline, META) else {
        return Ok(());
    };

    let en = required_block(section, META, ENGLISH)?;
    let zh = required_block(section, META, CHINESE)?;

    let en_fields = Fields::new(en, format!("{META}/{ENGLISH}"));
    doc.en.meta.title = en_fields.required("Title")?;
    doc.en.meta.description = en_fields.required("Description")?;
    doc.en.meta.keywords = en_fields.required("Keywords")?;

    let zh_fields = Fields::new(zh, format!("{META}/{CHINESE}"));
    doc.zh.meta.title = zh_fields.required("标题")?;
    doc.zh.meta.description = zh_fields.required("描述")?;
    doc.zh.meta.keywords = zh_fields.required("关键词")?;

    Ok(())
}

pub fn parse_header(outline: &Outline<'_>, doc: &mut BilingualContent) -> Result<()> {
    let Some(section) = locate(outline, HEADER) else {
        return Ok(());
    };

    let en = required_block(section, HEADER, ENGLISH)?;
    let zh = required_block(section, HEADER, CHINESE)?;

    let en_fields = Fields::new(en, format!("{HEADER}/{ENGLISH}"));
    doc.en.header.name = en_fields.required("Name")?;
    doc.en.header.tagline = en_fields.required("Tagline")?;
    doc.en.header.subtitle = en_fields.required("Subtitle")?;

    let zh_fields = Fields::new(zh, format!("{HEADER}/{CHINESE}"));
    doc.zh.header.name = zh_fields.required("姓名")?;
    doc.zh.header.tagline = zh_fields.required("标语")?;
    doc.zh.header.subtitle = zh_fields.required("副标题")?;

    parse_stats(required_block(section, HEADER, STATS)?, doc)?;

    Ok(())
}

/// Stat lines look like `- **15+** | Years / 年`; lines without `|` are
/// commentary and skipped.
fn parse_stats(block: &Block<'_>, doc: &mut BilingualContent) -> Result<()> {
    for line in block.all_lines() {
        let Some((left, right)) = line.text.split_once('|') else {
            continue;
        };

        let number = first_bold(left).ok_or_else(|| {
            CoreError::malformed(STATS, line.number, "expected a bold number before `|`")
        })?;
        let (en_label, zh_label) = split_bilingual(right).ok_or_else(|| {
            CoreError::malformed(STATS, line.number, "expected `English / 中文` label")
        })?;

        doc.en.header.stats.push(Stat {
            number: number.to_string(),
            label: en_label.to_string(),
        });
        doc.zh.header.stats.push(Stat {
            number: number.to_string(),
            label: zh_label.to_string(),
        });
    }

    debug!(count = doc.en.header.stats.len(), "parsed stats");
    Ok(())
}

pub fn parse_about(outline: &Outline<'_>, doc: &mut BilingualContent) -> Result<()> {
    let Some(section) = locate(outline, ABOUT) else {
        return Ok(());
    };

    doc.en.about.title = Labels::for_language(Language::En).about_title.to_string();
    doc.zh.about.title = Labels::for_language(Language::Zh).about_title.to_string();

    for item in section.children_with("Item") {
        let f = Fields::new(item, format!("{ABOUT}/{}", item.title));
        let icon = f.required("Icon")?;

        doc.en.about.items.push(AboutItem {
            icon: icon.clone(),
            title: f.required("English Title")?,
            description: f.required("English Description")?,
        });
        doc.zh.about.items.push(AboutItem {
            icon,
            title: f.required("中文标题")?,
            description: f.required("中文描述")?,
        });
    }

    debug!(count = doc.en.about.items.len(), "parsed about items");
    Ok(())
}

pub fn parse_projects(outline: &Outline<'_>, doc: &mut BilingualContent) -> Result<()> {
    let Some(section) = locate(outline, PROJECTS) else {
        return Ok(());
    };

    for lang in Language::ALL {
        let labels = Labels::for_language(lang);
        let projects = &mut doc.get_mut(lang).projects;
        projects.title = labels.projects_title.to_string();
        projects.lead_title = labels.lead_title.to_string();
        projects.contributor_title = labels.contributor_title.to_string();
    }

    if let Some(lead) = sub_block(section, PROJECTS, LEAD) {
        for entry in &lead.children {
            let (en, zh) = parse_project(entry, LEAD)?;
            doc.en.projects.lead_projects.push(en);
            doc.zh.projects.lead_projects.push(zh);
        }
    }

    if let Some(contrib) = sub_block(section, PROJECTS, CONTRIBUTOR) {
        for entry in &contrib.children {
            let (en, zh) = parse_project(entry, CONTRIBUTOR)?;
            doc.en.projects.contributor_projects.push(en);
            doc.zh.projects.contributor_projects.push(zh);
        }
    }

    debug!(
        lead = doc.en.projects.lead_projects.len(),
        contributor = doc.en.projects.contributor_projects.len(),
        "parsed projects"
    );
    Ok(())
}

/// Parse a `#### 1. Name` entry into its English and Chinese cards.
fn parse_project(entry: &Block<'_>, group: &str) -> Result<(Project, Project)> {
    let name = strip_ordinal(&entry.title);
    let f = Fields::new(entry, format!("{PROJECTS}/{group}/{name}"));

    let github = f.optional("GitHub");
    let website = f.optional("Website");

    let en = Project {
        name: f.optional("Name EN").unwrap_or_else(|| name.to_string()),
        badge: f.required("Badge EN")?,
        description: f.required("Description EN")?,
        github: github.clone(),
        website: website.clone(),
        website_label: f.optional("Website Label EN"),
    };
    let zh = Project {
        name: f.optional("名称 ZH").unwrap_or_else(|| name.to_string()),
        badge: f.required("Badge ZH")?,
        description: f.required("描述 ZH")?,
        github,
        website,
        website_label: f.optional("网站标签 ZH"),
    };

    Ok((en, zh))
}

/// `3. SmartSql` -> `SmartSql`.
fn strip_ordinal(title: &str) -> &str {
    let digits = title.trim_start_matches(|c: char| c.is_ascii_digit());
    if digits.len() == title.len() {
        return title.trim();
    }
    digits
        .strip_prefix('.')
        .map_or(title, str::trim_start)
        .trim()
}

pub fn parse_skills(outline: &Outline<'_>, doc: &mut BilingualContent) -> Result<()> {
    let Some(section) = locate(outline, SKILLS) else {
        return Ok(());
    };

    doc.en.skills.title = Labels::for_language(Language::En).skills_title.to_string();
    doc.zh.skills.title = Labels::for_language(Language::Zh).skills_title.to_string();

    for category in section.children_with("Category") {
        let f = Fields::new(category, format!("{SKILLS}/{}", category.title));

        let names = f
            .lines()
            .iter()
            .map(|l| inline_fields(l.text))
            .find(|pairs| pairs.iter().any(|(label, _)| *label == "EN"))
            .unwrap_or_default();
        let name_of = |wanted: &str| {
            names
                .iter()
                .find(|(label, _)| *label == wanted)
                .map(|(_, value)| value.to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| CoreError::missing_field(f.section(), wanted, category.line))
        };

        doc.en.skills.categories.push(SkillCategory {
            name: name_of("EN")?,
            items: f.list("Items EN")?,
        });
        doc.zh.skills.categories.push(SkillCategory {
            name: name_of("ZH")?,
            items: f.list("项目 ZH")?,
        });
    }

    debug!(count = doc.en.skills.categories.len(), "parsed skill categories");
    Ok(())
}

pub fn parse_footer(
    outline: &Outline<'_>,
    doc: &mut BilingualContent,
    default_copyright: &str,
) -> Result<()> {
    let Some(section) = locate(outline, FOOTER) else {
        return Ok(());
    };

    let f = Fields::new(section, FOOTER);
    let copyright = f
        .optional("Copyright")
        .unwrap_or_else(|| default_copyright.to_string());
    doc.en.footer.copyright = copyright.clone();
    doc.zh.footer.copyright = copyright;

    for line in f.lines() {
        if parse_field(line).is_some() {
            continue;
        }
        let Some((label, url)) = parse_link(line) else {
            continue;
        };
        let (en_label, zh_label) = split_bilingual(label).unwrap_or((label, label));

        doc.en.footer.links.push(FooterLink {
            label: en_label.to_string(),
            url: url.to_string(),
        });
        doc.zh.footer.links.push(FooterLink {
            label: zh_label.to_string(),
            url: url.to_string(),
        });
    }

    debug!(count = doc.en.footer.links.len(), "parsed footer links");
    Ok(())
}

/// Interface labels are always set; the optional `UI Text` section only
/// adds the loading message.
pub fn parse_ui(outline: &Outline<'_>, doc: &mut BilingualContent) -> Result<()> {
    for lang in Language::ALL {
        let labels = Labels::for_language(lang);
        let ui = &mut doc.get_mut(lang).ui;
        ui.lang_button = labels.lang_button.to_string();
        ui.github_label = labels.github_label.to_string();
    }

    let Some(section) = locate(outline, UI_TEXT) else {
        return Ok(());
    };

    let f = Fields::new(section, UI_TEXT);
    doc.en.ui.loading = f.optional("Loading EN");
    doc.zh.ui.loading = f.optional("加载 ZH");

    Ok(())
}
