//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Decide which configuration location the flags select.
//!
//! Non-responsibilities:
//! - Does not load or query configuration (see `main` and `query`).

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "configurator")]
#[command(about = "Configurator - Project configuration management tool", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  configurator --validate\n  configurator --get project.name\n  configurator --get paths.input_dir\n  configurator --list\n  configurator --find-root\n  configurator --url https://example.com/project.toml --list\n\nExit codes:\n  0  Success\n  1  Error (file not found, invalid syntax, key not found)\n"
)]
pub struct Cli {
    /// Path to project.toml file (auto-discovered if not specified)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// URL of a remote project.toml.
    ///
    /// When neither --url nor --config is given, PROJECT_TOML is used if set.
    #[arg(long, value_name = "URL", conflicts_with = "config")]
    pub url: Option<String>,

    /// Validate configuration file syntax and structure
    #[arg(long)]
    pub validate: bool,

    /// Get configuration value (dot notation: project.name)
    #[arg(long, value_name = "KEY")]
    pub get: Option<String>,

    /// List all configuration keys
    #[arg(long)]
    pub list: bool,

    /// Find and display project root directory
    #[arg(long)]
    pub find_root: bool,

    /// Print values from --get as JSON
    #[arg(long)]
    pub json: bool,
}

/// Where the CLI should read configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    Url(String),
    Path(PathBuf),
    /// `PROJECT_TOML` if set, otherwise discovery from the working directory.
    EnvOrDiscovery,
}

impl Cli {
    /// The `--get` key, or None when absent or blank.
    pub fn get_key(&self) -> Option<&str> {
        self.get.as_deref().filter(|key| !key.trim().is_empty())
    }

    pub fn source_selection(&self) -> SourceSelection {
        if let Some(url) = self.url.as_deref().filter(|u| !u.trim().is_empty()) {
            return SourceSelection::Url(url.to_string());
        }
        match self.config.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(path) => SourceSelection::Path(PathBuf::from(path)),
            None => SourceSelection::EnvOrDiscovery,
        }
    }
}
