//! Parses the fixture content document end to end.

use std::path::Path;

use homepage_core::{CoreError, Language, Stat};
use homepage_parser::{ContentParser, parse_document};

const FIXTURE: &str = include_str!("fixtures/CONTENT.md");

#[test]
fn test_meta_and_header() {
    let doc = parse_document(FIXTURE).unwrap();

    assert_eq!(doc.en.meta.title, "GMIJ - Full Stack Engineer");
    assert_eq!(doc.zh.meta.keywords, ".NET, DevOps, 全栈, AI");
    assert_eq!(doc.en.header.tagline, "Full Stack Engineer <& Team Lead>");
    assert_eq!(doc.zh.header.subtitle, "自2009年起构建可靠的软件");
}

#[test]
fn test_stats_split_into_both_languages() {
    let doc = parse_document(FIXTURE).unwrap();

    assert_eq!(
        doc.en.header.stats[0],
        Stat {
            number: "15+".to_string(),
            label: "Years Experience".to_string()
        }
    );
    assert_eq!(
        doc.zh.header.stats[0],
        Stat {
            number: "15+".to_string(),
            label: "年开发经验".to_string()
        }
    );
    assert_eq!(doc.en.header.stats.len(), 3);
    assert_eq!(doc.zh.header.stats.len(), 3);
}

#[test]
fn test_stat_line_without_spaces() {
    let doc = parse_document(
        "## Header\n\
         ### English\n- **Name**: N\n- **Tagline**: T\n- **Subtitle**: S\n\
         ### 中文\n- **姓名**: 名\n- **标语**: 标\n- **副标题**: 副\n\
         ### Stats\n**42**|Years / 年\n",
    )
    .unwrap();

    assert_eq!(doc.en.header.stats[0].number, "42");
    assert_eq!(doc.en.header.stats[0].label, "Years");
    assert_eq!(doc.zh.header.stats[0].number, "42");
    assert_eq!(doc.zh.header.stats[0].label, "年");
}

#[test]
fn test_about_items_keep_inline_html() {
    let doc = parse_document(FIXTURE).unwrap();

    assert_eq!(doc.en.about.title, "About Me");
    assert_eq!(doc.zh.about.title, "关于我");
    assert_eq!(doc.en.about.items.len(), 2);
    assert_eq!(doc.en.about.items[0].icon, "💻");
    assert_eq!(
        doc.en.about.items[0].description,
        "Full stack <strong>.NET</strong> development"
    );
    assert_eq!(doc.zh.about.items[1].title, "运维");
}

#[test]
fn test_projects_preserve_order_and_optional_fields() {
    let doc = parse_document(FIXTURE).unwrap();

    let lead: Vec<_> = doc
        .en
        .projects
        .lead_projects
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(lead, ["SmartSql", "Voice Assistant"]);

    let zh_names: Vec<_> = doc.zh.projects.all().map(|p| p.name.as_str()).collect();
    assert_eq!(zh_names, ["SmartSql", "语音助手", "ant-design-blazor"]);

    let smartsql = &doc.en.projects.lead_projects[0];
    assert_eq!(smartsql.website.as_deref(), Some("https://smartsql.net"));
    assert_eq!(smartsql.website_label.as_deref(), Some("Docs"));
    assert_eq!(
        doc.zh.projects.lead_projects[0].website_label.as_deref(),
        Some("文档")
    );

    let voice = &doc.zh.projects.lead_projects[1];
    assert!(voice.website.is_none());
    assert!(voice.website_label.is_none());
    assert_eq!(voice.badge, "维护者");

    let contrib = &doc.en.projects.contributor_projects[0];
    assert_eq!(
        contrib.github.as_deref(),
        Some("https://github.com/ant-design-blazor/ant-design-blazor")
    );
    assert_eq!(doc.zh.projects.contributor_title, "贡献项目");
}

#[test]
fn test_skills() {
    let doc = parse_document(FIXTURE).unwrap();

    let en = &doc.en.skills.categories;
    assert_eq!(en.len(), 2);
    assert_eq!(en[0].name, "Backend");
    assert_eq!(en[0].items, ["C# / .NET", "ASP.NET Core", "SQL Server"]);
    assert_eq!(doc.zh.skills.categories[1].name, "工程化");
    assert_eq!(doc.zh.skills.categories[1].items, ["持续集成", "容器化"]);
    assert_eq!(doc.en.skills.title, "Skills & Expertise");
}

#[test]
fn test_footer_and_ui() {
    let doc = parse_document(FIXTURE).unwrap();

    assert_eq!(doc.en.footer.links.len(), 2);
    assert_eq!(doc.en.footer.links[1].label, "Blog");
    assert_eq!(doc.zh.footer.links[1].label, "博客");
    assert_eq!(doc.zh.footer.links[1].url, "https://gmij.win/blog");
    assert_eq!(doc.en.footer.copyright, "© 2024 GMIJ. All rights reserved.");

    assert_eq!(doc.en.ui.loading.as_deref(), Some("Loading..."));
    assert_eq!(doc.zh.ui.loading.as_deref(), Some("加载中..."));
    assert_eq!(doc.get(Language::En).ui.lang_button, "中文");
}

#[test]
fn test_languages_share_shape() {
    let doc = parse_document(FIXTURE).unwrap();
    doc.check_shape().unwrap();
}

#[test]
fn test_parsing_is_deterministic() {
    let first = parse_document(FIXTURE).unwrap();
    let second = parse_document(FIXTURE).unwrap();

    for lang in Language::ALL {
        assert_eq!(
            first.get(lang).to_json().unwrap(),
            second.get(lang).to_json().unwrap()
        );
    }
}

#[test]
fn test_missing_required_project_field() {
    let source = FIXTURE.replace("- **Badge ZH**: 贡献者\n", "");

    let err = parse_document(&source).unwrap_err();
    match err {
        CoreError::MissingField { section, field, .. } => {
            assert_eq!(section, "Projects/Contributor Projects/ant-design-blazor");
            assert_eq!(field, "Badge ZH");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/CONTENT.md");
    let doc = ContentParser::new().parse_file(&path).unwrap();
    assert_eq!(doc.en.header.name, "GMIJ");
}

#[test]
fn test_meta_with_one_language_is_rejected() {
    let source = FIXTURE.replace(
        "### 中文\n- **标题**",
        "### Chinese (removed)\n- **标题**",
    );
    assert_ne!(source, FIXTURE);

    let err = parse_document(&source).unwrap_err();
    match err {
        CoreError::MissingField { section, field, .. } => {
            assert_eq!(section, "Meta Information");
            assert_eq!(field, "### 中文");
        }
        other => panic!("unexpected error: {other}"),
    }
}
