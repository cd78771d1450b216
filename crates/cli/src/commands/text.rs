// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-stage commands: `normalize`, `truncate`, `score`, `split`.

use std::path::PathBuf;

use adcopy_core::{split_response, FieldKind};
use adcopy_pipeline::{
    enforce_length_with_ratio, normalize, normalize_multiline, score_with_cap, PipelineConfig,
};
use anyhow::Result;
use clap::Args;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct NormalizeArgs {
    /// Texts to normalize
    #[arg(required = true)]
    pub texts: Vec<String>,

    /// Keep line breaks (one normalized line per input line)
    #[arg(long)]
    pub multiline: bool,
}

#[derive(Args)]
pub struct TruncateArgs {
    /// Text to fit
    pub text: String,

    /// Maximum length in characters
    #[arg(
        short = 'm',
        long,
        required_unless_present = "field",
        conflicts_with = "field",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max: Option<usize>,

    /// Use the limit of this field instead of --max
    #[arg(short = 'f', long)]
    pub field: Option<FieldKind>,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Accepted headlines
    #[arg(required = true)]
    pub headlines: Vec<String>,

    /// Campaign keyword, most important first (repeatable)
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,
}

#[derive(Args)]
pub struct SplitArgs {
    /// Response file, or `-` for stdin
    pub input: PathBuf,
}

pub fn normalize_texts(args: NormalizeArgs, format: OutputFormat) -> Result<()> {
    let normalized: Vec<String> = args
        .texts
        .iter()
        .map(|t| {
            if args.multiline {
                normalize_multiline(t)
            } else {
                normalize(t)
            }
        })
        .collect();
    print_lines(&normalized, format)
}

pub fn truncate(args: TruncateArgs, config: &PipelineConfig, format: OutputFormat) -> Result<()> {
    let max = match (args.max, args.field) {
        (Some(max), _) => max,
        (None, Some(field)) => field.max_length(),
        (None, None) => anyhow::bail!("either --max or --field is required"),
    };
    let fitted = enforce_length_with_ratio(&args.text, max, config.boundary_ratio);
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "text": fitted,
            "length": fitted.chars().count(),
            "max_length": max,
        }))?,
        OutputFormat::Text => println!("{}", fitted),
    }
    Ok(())
}

pub fn score(args: ScoreArgs, config: &PipelineConfig, format: OutputFormat) -> Result<()> {
    let estimate = score_with_cap(&args.headlines, &args.keywords, config.keyword_cap);
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "relevance": estimate }))?,
        OutputFormat::Text => println!("{}", estimate),
    }
    Ok(())
}

pub fn split(args: SplitArgs, format: OutputFormat) -> Result<()> {
    let content = super::read_input(&args.input)?;
    print_lines(&split_response(&content), format)
}

fn print_lines(lines: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(lines)?,
        OutputFormat::Text => {
            for line in lines {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
