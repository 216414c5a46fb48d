//! Labeled-field conventions of the content document.
//!
//! A field is one line of the form `- **Label**: value` (the list marker is
//! optional). List-valued fields leave the value empty and put one item per
//! following line.

use homepage_core::{CoreError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::outline::{Block, Line};

static FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*+]\s+|\d+\.\s+)?\*\*(?P<label>[^*]+?)\*\*\s*[:：]\s*(?P<value>.*?)\s*$")
        .expect("valid field regex")
});

static INLINE_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(?P<label>[^*]+?)\*\*\s*[:：]\s*(?P<value>[^|]*)")
        .expect("valid inline field regex")
});

static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+\.\s+\*\*(?P<label>.+?)\*\*\s+-\s+(?P<url>\S.*?)\s*$")
        .expect("valid link regex")
});

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));

/// A labeled value found on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub line: usize,
}

/// Parse a line as a labeled field.
pub fn parse_field<'a>(line: &Line<'a>) -> Option<Field<'a>> {
    let caps = FIELD.captures(line.text)?;
    Some(Field {
        label: caps.name("label")?.as_str().trim(),
        value: caps.name("value")?.as_str(),
        line: line.number,
    })
}

/// All `**Label**: value` pairs on one line, split on `|`.
pub fn inline_fields(text: &str) -> Vec<(&str, &str)> {
    INLINE_FIELD
        .captures_iter(text)
        .filter_map(|caps| {
            Some((
                caps.name("label")?.as_str().trim(),
                caps.name("value")?.as_str().trim(),
            ))
        })
        .collect()
}

/// Parse a numbered link line: `1. **Label** - https://…`.
pub fn parse_link<'a>(line: &Line<'a>) -> Option<(&'a str, &'a str)> {
    let caps = LINK.captures(line.text)?;
    Some((
        caps.name("label")?.as_str().trim(),
        caps.name("url")?.as_str(),
    ))
}

/// First bold span of a line.
pub fn first_bold(text: &str) -> Option<&str> {
    BOLD.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Split `English / 中文` into its two halves.
///
/// A spaced ` / ` wins over a bare slash, which then splits at the last one.
pub fn split_bilingual(text: &str) -> Option<(&str, &str)> {
    text.split_once(" / ")
        .or_else(|| text.rsplit_once('/'))
        .map(|(en, zh)| (en.trim(), zh.trim()))
}

/// Strip a leading list marker from an item line.
fn list_item(text: &str) -> &str {
    let t = text.trim();
    t.strip_prefix(['-', '*', '+']).map_or(t, str::trim_start)
}

/// Field lookup on a block and its descendants.
///
/// `section` is the human-readable path used in error messages.
pub struct Fields<'b, 'a> {
    block: &'b Block<'a>,
    section: String,
    lines: Vec<Line<'a>>,
}

impl<'b, 'a> Fields<'b, 'a> {
    pub fn new(block: &'b Block<'a>, section: impl Into<String>) -> Self {
        Self {
            block,
            section: section.into(),
            lines: block.all_lines(),
        }
    }

    /// Section path used in error messages.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Value of the first field named `label`.
    pub fn optional(&self, label: &str) -> Option<String> {
        self.lines
            .iter()
            .filter_map(parse_field)
            .find(|f| f.label == label)
            .map(|f| f.value.to_string())
            .filter(|v| !v.is_empty())
    }

    /// Value of the first field named `label`, or a `MissingField` error
    /// pointing at the block heading.
    pub fn required(&self, label: &str) -> Result<String> {
        self.optional(label)
            .ok_or_else(|| CoreError::missing_field(&self.section, label, self.block.line))
    }

    /// Items listed under an empty-valued field named `label`, up to the
    /// next field line.
    pub fn list(&self, label: &str) -> Result<Vec<String>> {
        let start = self
            .lines
            .iter()
            .position(|l| parse_field(l).is_some_and(|f| f.label == label))
            .ok_or_else(|| CoreError::missing_field(&self.section, label, self.block.line))?;

        Ok(self.lines[start + 1..]
            .iter()
            .take_while(|l| parse_field(l).is_none())
            .map(|l| list_item(l.text))
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect())
    }

    /// All lines of the block, in document order.
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Line<'_> {
        Line { number: 3, text }
    }

    #[test]
    fn test_parse_field_with_list_marker() {
        let field = parse_field(&line("- **Badge EN**: Library ")).unwrap();
        assert_eq!(field.label, "Badge EN");
        assert_eq!(field.value, "Library");
        assert_eq!(field.line, 3);
    }

    #[test]
    fn test_parse_field_plain_and_fullwidth_colon() {
        let field = parse_field(&line("**标题**： 你好")).unwrap();
        assert_eq!(field.label, "标题");
        assert_eq!(field.value, "你好");
    }

    #[test]
    fn test_parse_field_keeps_inline_html() {
        let field = parse_field(&line("- **Description EN**: A <b>fast</b> ORM")).unwrap();
        assert_eq!(field.value, "A <b>fast</b> ORM");
    }

    #[test]
    fn test_non_field_lines() {
        assert!(parse_field(&line("- **15+** | Years / 年")).is_none());
        assert!(parse_field(&line("1. **GitHub** - https://github.com/gmij")).is_none());
        assert!(parse_field(&line("  - Rust")).is_none());
    }

    #[test]
    fn test_inline_fields() {
        let pairs = inline_fields("- **EN**: Backend | **ZH**: 后端");
        assert_eq!(pairs, vec![("EN", "Backend"), ("ZH", "后端")]);
    }

    #[test]
    fn test_parse_link() {
        let (label, url) = parse_link(&line("2. **Blog / 博客** - https://gmij.win/blog")).unwrap();
        assert_eq!(label, "Blog / 博客");
        assert_eq!(url, "https://gmij.win/blog");
    }

    #[test]
    fn test_split_bilingual() {
        assert_eq!(split_bilingual("Years / 年"), Some(("Years", "年")));
        assert_eq!(split_bilingual("GitHub"), None);
        assert_eq!(split_bilingual("Years/年"), Some(("Years", "年")));
        assert_eq!(
            split_bilingual("CI/CD / 持续集成"),
            Some(("CI/CD", "持续集成"))
        );
        assert_eq!(split_bilingual("Docs/API / 文档"), Some(("Docs/API", "文档")));
    }

    #[test]
    fn test_first_bold() {
        assert_eq!(first_bold("- **42** | x"), Some("42"));
        assert_eq!(first_bold("no bold"), None);
    }

    #[test]
    fn test_list_item() {
        assert_eq!(list_item("  - Rust"), "Rust");
        assert_eq!(list_item("* C#"), "C#");
        assert_eq!(list_item("Go"), "Go");
    }
}
