// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! adcopy - ad copy normalization, de-duplication and relevance scoring

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod batch_file;
mod commands;
mod exit_error;
mod output;
mod table;

use output::OutputFormat;

use adcopy_pipeline::PipelineConfig;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use commands::{fields, process, text};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "adcopy.toml";

#[derive(Parser)]
#[command(
    name = "adcopy",
    version,
    about = "Ad copy pipeline - normalize, fit, de-duplicate and score ad text"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Pipeline config file (TOML)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch file through the full pipeline
    Process(process::ProcessArgs),
    /// Strip symbols, collapse whitespace and fix all-caps text
    Normalize(text::NormalizeArgs),
    /// Fit text into a length limit, preferring a word boundary
    Truncate(text::TruncateArgs),
    /// Estimate keyword relevance of a headline set
    Score(text::ScoreArgs),
    /// Split a raw generator response into candidates
    Split(text::SplitArgs),
    /// List field kinds and their length limits
    Fields,
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` overrides
/// the default `warn` level.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Process(args) => {
            let config = load_config(cli.config.as_deref())?;
            process::handle(args, config, format)
        }
        Commands::Normalize(args) => text::normalize_texts(args, format),
        Commands::Truncate(args) => {
            let config = load_config(cli.config.as_deref())?;
            text::truncate(args, &config, format)
        }
        Commands::Score(args) => {
            let config = load_config(cli.config.as_deref())?;
            text::score(args, &config, format)
        }
        Commands::Split(args) => text::split(args, format),
        Commands::Fields => fields::handle(format),
    }
}

/// Resolve the pipeline config: `--config`, then `./adcopy.toml`, then
/// built-in defaults.
fn load_config(explicit: Option<&Path>) -> Result<PipelineConfig> {
    let path = match explicit {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
        None => {
            tracing::debug!("no config file, using defaults");
            return Ok(PipelineConfig::default());
        }
    };
    tracing::debug!(path = %path.display(), "loading config");
    PipelineConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
