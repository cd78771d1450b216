// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline policy constants and their TOML representation.

use crate::fold::FoldTable;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.70;
/// Words must be at least this many characters (i.e. more than 3) to count.
pub const DEFAULT_SIGNIFICANT_WORD_MIN_LEN: usize = 4;
pub const DEFAULT_KEYWORD_CAP: usize = 5;
pub const DEFAULT_BOUNDARY_RATIO: f64 = 2.0 / 3.0;

/// High-frequency urgency filler in Hungarian ad copy, already folded.
pub const DEFAULT_FILLER_WORDS: &[&str] = &[
    "most", "azonnal", "gyorsan", "akar", "csak", "mindig", "nalunk", "onnek",
];

/// Errors from loading a pipeline config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Policy values used by the pipeline stages.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Minimum word-overlap ratio at which a candidate is a near duplicate
    pub similarity_threshold: f64,
    pub significant_word_min_len: usize,
    /// How many ranked keywords the relevance scorer checks
    pub keyword_cap: usize,
    /// Earliest word boundary (as a fraction of the limit) the length
    /// enforcer may cut at instead of hard-cutting
    pub boundary_ratio: f64,
    /// Folded words ignored when comparing word overlap
    pub filler_words: Vec<String>,
    pub fold: FoldTable,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            significant_word_min_len: DEFAULT_SIGNIFICANT_WORD_MIN_LEN,
            keyword_cap: DEFAULT_KEYWORD_CAP,
            boundary_ratio: DEFAULT_BOUNDARY_RATIO,
            filler_words: DEFAULT_FILLER_WORDS.iter().map(|w| w.to_string()).collect(),
            fold: FoldTable::hungarian(),
        }
    }
}

/// On-disk shape: every key optional, fold entries as strings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    similarity_threshold: Option<f64>,
    significant_word_min_len: Option<usize>,
    keyword_cap: Option<usize>,
    boundary_ratio: Option<f64>,
    filler_words: Option<Vec<String>>,
    /// Replaces the default fold table when present
    fold: Option<BTreeMap<String, String>>,
}

impl PipelineConfig {
    /// Parse a TOML config, filling missing keys with defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let defaults = Self::default();

        let fold = match raw.fold {
            Some(entries) => FoldTable::from_entries(&entries)?,
            None => defaults.fold,
        };
        let filler_words = match raw.filler_words {
            Some(words) => words.iter().map(|w| fold.fold(w)).collect(),
            None => defaults.filler_words,
        };

        let config = Self {
            similarity_threshold: raw
                .similarity_threshold
                .unwrap_or(defaults.similarity_threshold),
            significant_word_min_len: raw
                .significant_word_min_len
                .unwrap_or(defaults.significant_word_min_len),
            keyword_cap: raw.keyword_cap.unwrap_or(defaults.keyword_cap),
            boundary_ratio: raw.boundary_ratio.unwrap_or(defaults.boundary_ratio),
            filler_words,
            fold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err(ConfigError::Invalid {
                key: "similarity_threshold",
                message: format!("{} is not in (0, 1]", self.similarity_threshold),
            });
        }
        if self.keyword_cap == 0 {
            return Err(ConfigError::Invalid {
                key: "keyword_cap",
                message: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.boundary_ratio) {
            return Err(ConfigError::Invalid {
                key: "boundary_ratio",
                message: format!("{} is not in [0, 1]", self.boundary_ratio),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
