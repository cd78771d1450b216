// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `adcopy process` runs a batch file through the pipeline.

use std::path::PathBuf;

use adcopy_pipeline::{BatchResult, Pipeline, PipelineConfig};
use anyhow::{Context, Result};
use clap::Args;

use crate::batch_file::BatchFile;
use crate::exit_error::{ExitError, EXIT_EXHAUSTED};
use crate::output::{print_json, render_batch_result, OutputFormat};

#[derive(Args)]
pub struct ProcessArgs {
    /// Batch JSON file, or `-` for stdin
    pub input: PathBuf,
}

pub fn handle(args: ProcessArgs, config: PipelineConfig, format: OutputFormat) -> Result<()> {
    let content = super::read_input(&args.input)?;
    let batch = BatchFile::parse(&content)
        .and_then(BatchFile::into_batch)
        .with_context(|| format!("invalid batch file {}", args.input.display()))?;

    let result = Pipeline::new(config).run(&batch);
    log_result(&result);

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => render_batch_result(&result, &mut std::io::stdout().lock())?,
    }

    let exhausted = result.exhausted_fields();
    if !exhausted.is_empty() {
        let names: Vec<String> = exhausted.iter().map(ToString::to_string).collect();
        return Err(ExitError::new(
            EXIT_EXHAUSTED,
            format!("all candidates rejected for: {}", names.join(", ")),
        )
        .into());
    }
    Ok(())
}

fn log_result(result: &BatchResult) {
    for field in &result.fields {
        tracing::info!(
            field = %field.field,
            accepted = field.accepted.len(),
            rejected = field.rejected.len(),
            "field processed"
        );
        for rejection in &field.rejected {
            tracing::debug!(
                field = %field.field,
                text = %rejection.candidate.text,
                reason = ?rejection.reason,
                "candidate rejected"
            );
        }
        if field.is_exhausted() {
            tracing::warn!(field = %field.field, "all candidates rejected, regenerate");
        }
    }
}
