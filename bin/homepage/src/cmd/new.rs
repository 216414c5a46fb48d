//! New command - write a starter CONTENT.md

use std::path::Path;

use chrono::{Datelike, Utc};
use color_eyre::eyre::{Result, WrapErr, bail};
use homepage_core::fs::write_atomic;

/// Run the new command.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run(path: &Path, force: bool) -> Result<()> {
    tracing::info!(?path, force, "Creating starter content");

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    write_atomic(path, &starter_content(Utc::now().year())).wrap_err("Failed to write file")?;

    tracing::info!(?path, "Created starter content file");
    println!("Created: {}", path.display());
    println!("Edit it, then run `homepage build`.");

    Ok(())
}

fn starter_content(year: i32) -> String {
    format!(
        r#"# Personal Homepage Content

Edit the values below, then run `homepage build` to regenerate
`data/en.json`, `data/zh.json`, `index.html` and `index-en.html`.

---

## 🌐 Meta Information

### English
- **Title**: Your Name - Software Engineer
- **Description**: A short English description for search engines
- **Keywords**: Rust, Open Source

### 中文
- **标题**: 你的名字 - 软件工程师
- **描述**: 一段用于搜索引擎的中文简介
- **关键词**: Rust, 开源

---

## 👤 Header

### English
- **Name**: Your Name
- **Tagline**: Software Engineer
- **Subtitle**: Building things that last

### 中文
- **姓名**: 你的名字
- **标语**: 软件工程师
- **副标题**: 构建长久的东西

### Stats
- **10+** | Years Experience / 年开发经验
- **5** | Open Source Projects / 开源项目

---

## 💡 About Me

### Item 1: Development
- **Icon**: 💻
- **English Title**: Development
- **English Description**: Backend and <strong>systems</strong> programming
- **中文标题**: 开发
- **中文描述**: 后端与<strong>系统</strong>编程

---

## 🚀 Projects

### Lead Projects

#### 1. my-project
- **Badge EN**: Creator
- **Badge ZH**: 创建者
- **Description EN**: What the project does
- **描述 ZH**: 项目简介
- **GitHub**: https://github.com/you/my-project
- **Website**: https://example.com
- **Website Label EN**: Docs
- **网站标签 ZH**: 文档

### Contributor Projects

#### 1. some-library
- **Badge EN**: Contributor
- **Badge ZH**: 贡献者
- **Description EN**: A library you contribute to
- **描述 ZH**: 你参与贡献的库
- **GitHub**: https://github.com/org/some-library

---

## 🛠️ Skills

### Category 1: Languages
- **EN**: Languages | **ZH**: 编程语言
- **Items EN**:
  - Rust
  - Python
- **项目 ZH**:
  - Rust
  - Python

---

## 📝 Footer

- **Copyright**: © {year} Your Name. All rights reserved.

1. **GitHub** - https://github.com/you
2. **Blog / 博客** - https://example.com/blog

---

## 🎨 UI Text

- **Loading EN**: Loading...
- **加载 ZH**: 加载中...
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_content_parses() {
        let doc = homepage_parser::parse_document(&starter_content(2026)).unwrap();

        doc.check_shape().unwrap();
        assert_eq!(doc.en.header.name, "Your Name");
        assert_eq!(doc.zh.header.stats.len(), 2);
        assert_eq!(doc.en.projects.all().count(), 2);
        assert_eq!(doc.zh.skills.categories[0].name, "编程语言");
        assert_eq!(
            doc.en.footer.copyright,
            "© 2026 Your Name. All rights reserved."
        );
        assert_eq!(doc.zh.footer.links[1].label, "博客");
    }

    #[test]
    fn test_new_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CONTENT.md");
        std::fs::write(&path, "keep me").unwrap();

        assert!(run(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        run(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("## 👤 Header"));
    }
}
