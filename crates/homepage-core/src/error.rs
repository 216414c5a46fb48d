//! Error types for the homepage core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for the homepage generator.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A required input file does not exist.
    #[error("Missing input: {} not found", path.display())]
    MissingInput { path: PathBuf },

    /// A required labeled field is absent from a located section.
    #[error("Missing field `{field}` in section {section} (line {line})")]
    MissingField {
        section: String,
        field: String,
        line: usize,
    },

    /// A line inside a located section does not follow the expected shape.
    #[error("Malformed {section} entry at line {line}: {message}")]
    Malformed {
        section: String,
        line: usize,
        message: String,
    },

    /// The two language variants do not share the same structure.
    #[error("Language variants differ: {0}")]
    ShapeMismatch(String),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a missing input error.
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    /// Create a missing field error.
    pub fn missing_field(section: impl Into<String>, field: impl Into<String>, line: usize) -> Self {
        Self::MissingField {
            section: section.into(),
            field: field.into(),
            line,
        }
    }

    /// Create a malformed entry error.
    pub fn malformed(section: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            section: section.into(),
            line,
            message: message.into(),
        }
    }
}
