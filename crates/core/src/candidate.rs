// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Candidate text units and the boundary shape they arrive in.

use serde::{Deserialize, Serialize};

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    #[default]
    Generated,
    /// Operator-approved or template-expanded priority text
    Curated,
    /// Previously approved text pulled from the saved bank
    SavedBank,
}

/// Optional operator annotations carried alongside a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Ad position the text is pinned to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<u8>,
}

/// One unit of text flowing through the pipeline for a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    #[serde(default)]
    pub origin: Origin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<CandidateMeta>,
}

impl Candidate {
    pub fn new(text: impl Into<String>, origin: Origin) -> Self {
        Self {
            text: text.into(),
            origin,
            meta: None,
        }
    }

    pub fn generated(text: impl Into<String>) -> Self {
        Self::new(text, Origin::Generated)
    }

    pub fn curated(text: impl Into<String>) -> Self {
        Self::new(text, Origin::Curated)
    }

    pub fn saved(text: impl Into<String>) -> Self {
        Self::new(text, Origin::SavedBank)
    }

    pub fn with_meta(mut self, meta: CandidateMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Replace the text, keeping origin and meta.
    pub fn with_text(self, text: String) -> Self {
        Self { text, ..self }
    }

    /// Length in characters, the unit every field limit is expressed in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A candidate as it arrives from a caller: either a bare string or an
/// object with a `text` key.
///
/// Shape differences are resolved here so the pipeline only ever sees
/// [`Candidate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCandidate {
    Text(String),
    Object {
        text: String,
        #[serde(default)]
        meta: Option<CandidateMeta>,
    },
}

impl RawCandidate {
    pub fn text(&self) -> &str {
        match self {
            RawCandidate::Text(text) | RawCandidate::Object { text, .. } => text,
        }
    }

    pub fn into_candidate(self, origin: Origin) -> Candidate {
        match self {
            RawCandidate::Text(text) => Candidate::new(text, origin),
            RawCandidate::Object { text, meta } => Candidate {
                text,
                origin,
                meta,
            },
        }
    }
}

impl From<&str> for RawCandidate {
    fn from(s: &str) -> Self {
        RawCandidate::Text(s.to_string())
    }
}

impl From<String> for RawCandidate {
    fn from(s: String) -> Self {
        RawCandidate::Text(s)
    }
}

#[cfg(test)]
#[path = "candidate_tests.rs"]
mod tests;
