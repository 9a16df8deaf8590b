//! Configurator - command-line inspection of `project.toml` files.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load configuration through `project-config` from a path, a URL, or
//!   upward discovery.
//! - Validate, list keys, print values, and report the project root.
//!
//! Does NOT handle:
//! - Parsing TOML itself. The core decoder is the single parsing path.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide `PROJECT_TOML`.
//! - Results go to stdout; diagnostics and errors go to stderr.
//! - Exit code is 0 on success and 1 on any error.

mod args;
mod dotenv;
mod error;
mod query;

use std::io::Write;

use anyhow::Context;
use args::{Cli, SourceSelection};
use clap::Parser;
use error::ExitCode;
use project_config::{ConfigLocation, LoadedConfig, find_root, url_from_env};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    if let Err(e) = dotenv::load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::GeneralError
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();

    if cli.find_root {
        let cwd = std::env::current_dir().context("Failed to get working directory")?;
        let found = find_root(&cwd)?;
        writeln!(out, "Project root: {}", found.root.display())?;
        writeln!(out, "Config file: {}", found.marker_path.display())?;
        return Ok(());
    }

    let location = select_location(cli)?;
    tracing::debug!(?location, "loading configuration");
    let loaded: LoadedConfig<toml::Table> = location.load()?;

    if cli.validate {
        writeln!(out, "Configuration valid")?;
    } else if cli.list {
        for key in query::leaf_keys(&loaded.value) {
            writeln!(out, "{key}")?;
        }
    } else if let Some(key) = cli.get_key() {
        let value = query::lookup(&loaded.value, key)
            .with_context(|| format!("Key not found: {key}"))?;
        writeln!(out, "{}", query::render(value, cli.json)?)?;
    } else {
        writeln!(out, "Configuration loaded from: {}", loaded.origin)?;
        writeln!(out, "Use --help for available commands")?;
    }

    Ok(())
}

fn select_location(cli: &Cli) -> anyhow::Result<ConfigLocation> {
    Ok(match cli.source_selection() {
        SourceSelection::Url(url) => ConfigLocation::RemoteUrl(url),
        SourceSelection::Path(path) => ConfigLocation::ExplicitPath(path),
        SourceSelection::EnvOrDiscovery => match url_from_env() {
            Some(url) => ConfigLocation::RemoteUrl(url),
            None => ConfigLocation::Discovery(
                std::env::current_dir().context("Failed to get working directory")?,
            ),
        },
    })
}
