// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exact and near-duplicate filtering of candidates for one field.
//!
//! Candidates are offered strictly in order and the first one seen wins.
//! Two checks run per candidate:
//!
//! 1. **Exact**: the folded signature (lower-cased, diacritics folded,
//!    everything but letters and digits removed) matches an accepted one.
//! 2. **Near**: the share of the candidate's significant words that also
//!    appear in some accepted candidate reaches the similarity threshold.
//!    The measure is asymmetric: it is relative to the newcomer's words.

use crate::config::PipelineConfig;
use adcopy_core::Candidate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Outcome of offering one candidate to a [`DuplicateFilter`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Accepted at this position of the accepted list
    Accepted { index: usize },
    /// Same folded signature as the accepted candidate at `of`
    ExactDuplicate { of: usize },
    /// Word overlap with the accepted candidate at `of` reached the threshold
    NearDuplicate { of: usize, similarity: f64 },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }
}

/// Accepted candidates for one field plus what later candidates are
/// compared against.
#[derive(Debug, Default)]
struct AcceptedSet {
    candidates: Vec<Candidate>,
    signatures: HashMap<String, usize>,
    word_sets: Vec<HashSet<String>>,
}

/// Order-sensitive duplicate filter. One instance per field per run.
#[derive(Debug)]
pub struct DuplicateFilter<'a> {
    config: &'a PipelineConfig,
    filler: HashSet<&'a str>,
    accepted: AcceptedSet,
}

impl<'a> DuplicateFilter<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self {
            config,
            filler: config.filler_words.iter().map(String::as_str).collect(),
            accepted: AcceptedSet::default(),
        }
    }

    /// Offer the next candidate; it is kept only if the verdict is
    /// [`Verdict::Accepted`].
    pub fn offer(&mut self, candidate: Candidate) -> Verdict {
        let folded = self.config.fold.fold(&candidate.text);
        let signature = signature_of_folded(&folded);
        if let Some(&of) = self.accepted.signatures.get(&signature) {
            return Verdict::ExactDuplicate { of };
        }

        let words = significant_words_of_folded(
            &folded,
            self.config.significant_word_min_len,
            &self.filler,
        );
        if let Some((of, similarity)) = self.first_match(&words) {
            return Verdict::NearDuplicate { of, similarity };
        }

        let index = self.accepted.candidates.len();
        self.accepted.signatures.insert(signature, index);
        self.accepted.word_sets.push(words);
        self.accepted.candidates.push(candidate);
        Verdict::Accepted { index }
    }

    /// First accepted candidate whose overlap reaches the threshold.
    fn first_match(&self, words: &HashSet<String>) -> Option<(usize, f64)> {
        if words.is_empty() {
            return None;
        }
        self.accepted
            .word_sets
            .iter()
            .enumerate()
            .map(|(idx, prior)| (idx, overlap(words, prior)))
            .find(|&(_, similarity)| similarity >= self.config.similarity_threshold)
    }

    pub fn accepted(&self) -> &[Candidate] {
        &self.accepted.candidates
    }

    pub fn into_accepted(self) -> Vec<Candidate> {
        self.accepted.candidates
    }
}

/// Share of `current`'s words also present in `prior`. Zero for an empty
/// `current`.
pub fn overlap(current: &HashSet<String>, prior: &HashSet<String>) -> f64 {
    if current.is_empty() {
        return 0.0;
    }
    let shared = current.intersection(prior).count();
    shared as f64 / current.len() as f64
}

/// Folded signature used for exact-duplicate detection.
pub fn signature(text: &str, config: &PipelineConfig) -> String {
    signature_of_folded(&config.fold.fold(text))
}

fn signature_of_folded(folded: &str) -> String {
    folded.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Significant words of `text`: folded tokens with edge punctuation
/// trimmed, at least `significant_word_min_len` characters long, and not
/// filler.
pub fn significant_words(text: &str, config: &PipelineConfig) -> HashSet<String> {
    let filler: HashSet<&str> = config.filler_words.iter().map(String::as_str).collect();
    significant_words_of_folded(
        &config.fold.fold(text),
        config.significant_word_min_len,
        &filler,
    )
}

fn significant_words_of_folded(
    folded: &str,
    min_len: usize,
    filler: &HashSet<&str>,
) -> HashSet<String> {
    folded
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().count() >= min_len && !filler.contains(word))
        .map(str::to_string)
        .collect()
}

/// Filter with the default policy, returning accepted candidates in order.
pub fn filter_duplicates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    filter_duplicates_with(candidates, &PipelineConfig::default())
}

pub fn filter_duplicates_with(
    candidates: Vec<Candidate>,
    config: &PipelineConfig,
) -> Vec<Candidate> {
    let mut filter = DuplicateFilter::new(config);
    for candidate in candidates {
        filter.offer(candidate);
    }
    filter.into_accepted()
}

#[cfg(test)]
#[path = "dedup_tests.rs"]
mod tests;
