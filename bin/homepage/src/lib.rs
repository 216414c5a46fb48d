//! Homepage CLI Library
//!
//! Command implementations for the `homepage` binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, parse, render, check, new)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use homepage::cmd;
//!
//! // Parse CONTENT.md and render both pages
//! cmd::build::run(Path::new("homepage.toml"), &cmd::Overrides::default()).unwrap();
//! ```

pub mod cmd;

pub use homepage_core::{BilingualContent, Config, Language};
pub use homepage_generator::{BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
