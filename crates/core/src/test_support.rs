// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Candidate, Origin};

// ── Candidate factory functions ─────────────────────────────────────────────

pub fn candidates(origin: Origin, texts: &[&str]) -> Vec<Candidate> {
    texts.iter().map(|t| Candidate::new(*t, origin)).collect()
}

pub fn generated(texts: &[&str]) -> Vec<Candidate> {
    candidates(Origin::Generated, texts)
}

pub fn curated(texts: &[&str]) -> Vec<Candidate> {
    candidates(Origin::Curated, texts)
}

/// Texts of a candidate list, for compact assertions.
pub fn texts(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.text.as_str()).collect()
}
