// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Ad copy normalization, de-duplication, and relevance scoring

mod batch;
mod config;
mod curated;
mod dedup;
mod fold;
mod length;
mod normalize;
mod relevance;

pub use batch::{
    BatchResult, CuratedPlacement, FieldInput, FieldResult, GenerationBatch, Pipeline,
    RejectReason, Rejection,
};
pub use config::{
    ConfigError, PipelineConfig, DEFAULT_BOUNDARY_RATIO, DEFAULT_FILLER_WORDS,
    DEFAULT_KEYWORD_CAP, DEFAULT_SIGNIFICANT_WORD_MIN_LEN, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use curated::{expand_templates, interpolate, placeholders};
pub use dedup::{
    filter_duplicates, filter_duplicates_with, overlap, signature, significant_words,
    DuplicateFilter, Verdict,
};
pub use fold::FoldTable;
pub use length::{enforce_length, enforce_length_with_ratio};
pub use normalize::{normalize, normalize_multiline};
pub use relevance::{score, score_with_cap, strip_keyword_syntax};
