//! Heading outline of a markdown document.
//!
//! Headings are located with pulldown-cmark so that `#` lines inside fenced
//! code never open a block. Every non-heading, non-blank line is attached to
//! the block of the closest preceding heading; thematic breaks (`---`) are
//! dropped.

use pulldown_cmark::{Event, Parser, Tag};

/// A source line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// A heading and everything nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text without leading emoji or punctuation.
    pub title: String,
    /// 1-based line number of the heading.
    pub line: usize,
    /// Body lines before the first nested heading.
    pub lines: Vec<Line<'a>>,
    /// Nested headings.
    pub children: Vec<Block<'a>>,
}

impl<'a> Block<'a> {
    fn new(level: u8, title: String, line: usize) -> Self {
        Self {
            level,
            title,
            line,
            lines: Vec::new(),
            children: Vec::new(),
        }
    }

    /// First direct child whose title starts with `prefix`.
    pub fn child(&self, prefix: &str) -> Option<&Block<'a>> {
        self.children.iter().find(|c| c.title.starts_with(prefix))
    }

    /// All direct children whose title starts with `prefix`, in order.
    pub fn children_with<'s>(&'s self, prefix: &'s str) -> impl Iterator<Item = &'s Block<'a>> {
        self.children
            .iter()
            .filter(move |c| c.title.starts_with(prefix))
    }

    /// Own lines followed by all descendant lines, in document order.
    pub fn all_lines(&self) -> Vec<Line<'a>> {
        let mut out = self.lines.clone();
        for child in &self.children {
            out.extend(child.all_lines());
        }
        out
    }
}

/// The heading tree of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline<'a> {
    /// Lines before the first heading.
    pub preamble: Vec<Line<'a>>,
    /// Top-level blocks.
    pub blocks: Vec<Block<'a>>,
}

impl<'a> Outline<'a> {
    /// Build the outline of `source`.
    pub fn parse(source: &'a str) -> Self {
        let headings = locate_headings(source);
        let mut flat: Vec<Block<'a>> = Vec::new();
        let mut preamble = Vec::new();
        let mut next = headings.iter().peekable();

        for (idx, text) in source.lines().enumerate() {
            let number = idx + 1;

            if next.peek().is_some_and(|h| h.line == number) {
                if let Some(heading) = next.next() {
                    flat.push(Block::new(
                        heading.level,
                        clean_title(heading_text(text)),
                        number,
                    ));
                }
                continue;
            }

            if text.trim().is_empty() || is_thematic_break(text) {
                continue;
            }

            let line = Line { number, text };
            match flat.last_mut() {
                Some(block) => block.lines.push(line),
                None => preamble.push(line),
            }
        }

        Self {
            preamble,
            blocks: nest(flat),
        }
    }

    /// First level-2 section whose title starts with `prefix`, searched
    /// depth-first so a document title (`#`) above the sections is allowed.
    pub fn section(&self, prefix: &str) -> Option<&Block<'a>> {
        fn find<'o, 's>(blocks: &'o [Block<'s>], prefix: &str) -> Option<&'o Block<'s>> {
            for block in blocks {
                if block.level == 2 && block.title.starts_with(prefix) {
                    return Some(block);
                }
                if block.level < 2 {
                    if let Some(found) = find(&block.children, prefix) {
                        return Some(found);
                    }
                }
            }
            None
        }
        find(&self.blocks, prefix)
    }
}

/// Heading position as reported by pulldown-cmark.
#[derive(Debug)]
struct HeadingSpan {
    level: u8,
    line: usize,
}

fn locate_headings(source: &str) -> Vec<HeadingSpan> {
    Parser::new(source)
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            // ATX only: in hand-written content a `---` under a line is a
            // separator, not a setext underline.
            Event::Start(Tag::Heading { level, .. })
                if source[range.start..].trim_start().starts_with('#') =>
            {
                Some(HeadingSpan {
                    level: level as u8,
                    line: line_of(source, range.start),
                })
            }
            _ => None,
        })
        .collect()
}

/// 1-based line number of a byte offset.
fn line_of(source: &str, offset: usize) -> usize {
    source.as_bytes()[..offset.min(source.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

fn heading_text(line: &str) -> &str {
    line.trim().trim_start_matches('#').trim_end_matches('#').trim()
}

/// Strip leading emoji, variation selectors and punctuation from a title.
fn clean_title(raw: &str) -> String {
    raw.trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim()
        .to_string()
}

fn is_thematic_break(line: &str) -> bool {
    let t = line.trim();
    t.len() >= 3 && (t.chars().all(|c| c == '-') || t.chars().all(|c| c == '*'))
}

fn nest<'a>(flat: Vec<Block<'a>>) -> Vec<Block<'a>> {
    fn attach<'s>(stack: &mut [Block<'s>], roots: &mut Vec<Block<'s>>, block: Block<'s>) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(block),
            None => roots.push(block),
        }
    }

    let mut roots = Vec::new();
    let mut stack: Vec<Block<'a>> = Vec::new();

    for block in flat {
        while stack.last().is_some_and(|top| top.level >= block.level) {
            if let Some(done) = stack.pop() {
                attach(&mut stack, &mut roots, done);
            }
        }
        stack.push(block);
    }
    while let Some(done) = stack.pop() {
        attach(&mut stack, &mut roots, done);
    }

    roots
}
