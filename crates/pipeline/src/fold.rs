// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diacritic folding through an explicit substitution table.
//!
//! Generic Unicode decomposition would fold letters the source language
//! treats as distinct and would change which candidates compare equal, so
//! the table is a fixed per-language mapping.

use crate::config::ConfigError;
use std::collections::BTreeMap;

const HUNGARIAN: &[(char, char)] = &[
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ö', 'o'),
    ('ő', 'o'),
    ('ú', 'u'),
    ('ü', 'u'),
    ('ű', 'u'),
];

/// Lowercase accented letter to unaccented base letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldTable {
    map: BTreeMap<char, char>,
}

impl FoldTable {
    pub fn hungarian() -> Self {
        Self {
            map: HUNGARIAN.iter().copied().collect(),
        }
    }

    /// A table that folds nothing; folding then only lower-cases.
    pub fn identity() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Build a table from config entries. Keys and values must each be a
    /// single character; keys are stored lower-cased.
    pub fn from_entries(entries: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut map = BTreeMap::new();
        for (from, to) in entries {
            let from = single_char(from)?;
            let to = single_char(to)?;
            for lower in from.to_lowercase() {
                map.insert(lower, to);
            }
        }
        Ok(Self { map })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Lower-case `text`, then substitute every mapped letter.
    pub fn fold(&self, text: &str) -> String {
        text.chars()
            .flat_map(char::to_lowercase)
            .map(|c| self.map.get(&c).copied().unwrap_or(c))
            .collect()
    }
}

impl Default for FoldTable {
    fn default() -> Self {
        Self::hungarian()
    }
}

fn single_char(s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::Invalid {
            key: "fold",
            message: format!("'{}' is not a single character", s),
        }),
    }
}

#[cfg(test)]
#[path = "fold_tests.rs"]
mod tests;
