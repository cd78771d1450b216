// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `adcopy fields` lists the known field kinds and their limits.

use adcopy_core::FieldKind;
use anyhow::Result;

use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

pub fn handle(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let fields: Vec<serde_json::Value> = FieldKind::ALL
                .iter()
                .map(|kind| {
                    let spec = kind.spec();
                    serde_json::json!({
                        "name": spec.name,
                        "max_length": spec.max_length,
                        "allows_line_breaks": spec.allows_line_breaks,
                    })
                })
                .collect();
            print_json(&fields)?;
        }
        OutputFormat::Text => {
            let mut table = Table::new(vec![
                Column::left("FIELD"),
                Column::right("MAX"),
                Column::left("LINE BREAKS"),
            ]);
            for kind in FieldKind::ALL {
                let spec = kind.spec();
                table.row(vec![
                    spec.name.to_string(),
                    spec.max_length.to_string(),
                    if spec.allows_line_breaks { "yes" } else { "no" }.to_string(),
                ]);
            }
            table.render(&mut std::io::stdout().lock())?;
        }
    }
    Ok(())
}
