// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Exit code when at least one field ended up with no usable candidates.
pub const EXIT_EXHAUSTED: i32 = 3;

/// An error that carries a specific process exit code.
///
/// `main` downcasts to this to pick the code; anything else exits with 1.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: String) -> Self {
        Self { code, message }
    }
}
