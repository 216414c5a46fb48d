//! Homepage CLI
//!
//! Builds the bilingual personal homepage from `CONTENT.md`.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use homepage::cmd::{self, Overrides};

/// Command-line interface for the homepage generator.
#[derive(Parser)]
#[command(
    name = "homepage",
    version,
    about = "Generate a bilingual personal homepage from CONTENT.md"
)]
struct Cli {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long, default_value = "homepage.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Parse CONTENT.md, write data/*.json and render both pages (default)
    Build {
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Parse CONTENT.md into data/en.json and data/zh.json only
    Parse {
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Render index.html and index-en.html from existing data/*.json
    Render {
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Parse and validate without writing anything
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Write a starter CONTENT.md
    New {
        /// Where to write the file
        #[arg(default_value = "CONTENT.md")]
        path: std::path::PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    homepage::init_tracing(cli.verbose);

    match cli.command {
        None => cmd::build::run(&cli.config, &Overrides::default())?,
        Some(Commands::Build { overrides }) => cmd::build::run(&cli.config, &overrides)?,
        Some(Commands::Parse { overrides }) => cmd::parse::run(&cli.config, &overrides)?,
        Some(Commands::Render { overrides }) => cmd::render::run(&cli.config, &overrides)?,
        Some(Commands::Check { strict }) => cmd::check::run(&cli.config, strict)?,
        Some(Commands::New { path, force }) => cmd::new::run(&path, force)?,
    }

    Ok(())
}
