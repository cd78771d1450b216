// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use adcopy_core::Origin;
use adcopy_pipeline::{BatchResult, FieldResult, RejectReason};
use clap::ValueEnum;
use serde::Serialize;

use crate::table::{Column, Table};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a batch result as per-field tables followed by the relevance line.
pub fn render_batch_result(result: &BatchResult, out: &mut impl Write) -> io::Result<()> {
    for (i, field) in result.fields.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        render_field(field, out)?;
    }
    if let Some(relevance) = result.relevance {
        writeln!(out)?;
        writeln!(out, "relevance: {}", relevance)?;
    }
    Ok(())
}

fn render_field(field: &FieldResult, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{} (max {}): {} accepted, {} rejected",
        field.field,
        field.field.max_length(),
        field.accepted.len(),
        field.rejected.len()
    )?;

    let mut accepted = Table::new(vec![
        Column::right("#"),
        Column::left("ORIGIN"),
        Column::right("LEN"),
        Column::left("TEXT"),
    ]);
    for (i, candidate) in field.accepted.iter().enumerate() {
        accepted.row(vec![
            (i + 1).to_string(),
            origin_label(candidate.origin).to_string(),
            candidate.char_len().to_string(),
            candidate.text.clone(),
        ]);
    }
    accepted.render(out)?;

    let mut rejected = Table::new(vec![Column::left("REJECTED"), Column::left("REASON")]);
    for rejection in &field.rejected {
        rejected.row(vec![
            rejection.candidate.text.clone(),
            reason_label(&rejection.reason),
        ]);
    }
    rejected.render(out)
}

pub fn origin_label(origin: Origin) -> &'static str {
    match origin {
        Origin::Generated => "generated",
        Origin::Curated => "curated",
        Origin::SavedBank => "saved",
    }
}

/// Human-readable rejection reason; positions are 1-based like the table.
pub fn reason_label(reason: &RejectReason) -> String {
    match reason {
        RejectReason::Empty => "empty after normalization".to_string(),
        RejectReason::ExactDuplicate { of } => format!("exact duplicate of #{}", of + 1),
        RejectReason::NearDuplicate { of, similarity } => {
            format!(
                "near duplicate of #{} ({:.0}% overlap)",
                of + 1,
                similarity * 100.0
            )
        }
    }
}
