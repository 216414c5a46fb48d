//! Supported page languages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two language variants the site is published in.
///
/// Chinese is the default page (served at `/`), English lives at
/// `/index-en.html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Simplified Chinese.
    Zh,
}

impl Language {
    /// All languages in output order.
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    /// The `x-default` language.
    pub const DEFAULT: Language = Language::Zh;

    /// Short language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Value for the `<html lang>` attribute and `hreflang` links.
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh-CN",
        }
    }

    /// File name of the intermediate JSON artifact.
    pub fn data_file(self) -> &'static str {
        match self {
            Self::En => "en.json",
            Self::Zh => "zh.json",
        }
    }

    /// File name of the rendered page.
    pub fn page_file(self) -> &'static str {
        match self {
            Self::En => "index-en.html",
            Self::Zh => "index.html",
        }
    }

    /// Site-relative path the page is served from.
    pub fn page_path(self) -> &'static str {
        match self {
            Self::En => "/index-en.html",
            Self::Zh => "/",
        }
    }

    /// The reciprocal language, used for the switch link.
    pub fn other(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Whether this is the `x-default` page.
    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
