// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod fields;
pub mod process;
pub mod text;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a whole input file, or stdin when the path is `-`.
pub fn read_input(source: &Path) -> Result<String> {
    if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(source).with_context(|| format!("failed to read {}", source.display()))
}
