//! CLI argument definitions for Settler.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "settler",
    version,
    about = "Resolve multi-module build settings",
    long_about = "Settler reads a settings.toml build declaration, validates it, and prints \
                  the resolved workspace: modules, repositories in resolution order, \
                  feature previews, and version catalogs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the settings file (default: nearest settings.toml)
    #[arg(long, global = true, env = "SETTLER_SETTINGS")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the workspace and print it
    Resolve {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List included modules and their directories
    Modules,

    /// List repositories in resolution order
    Repos {
        /// Which repository list to show
        #[arg(long, value_enum, default_value_t = RepoScope::All)]
        scope: RepoScope,
    },

    /// Load a version catalog and list its entries
    Catalog {
        /// Catalog name as declared in settings.toml
        name: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepoScope {
    Plugin,
    Dependency,
    All,
}

pub fn parse() -> Cli {
    Cli::parse()
}
