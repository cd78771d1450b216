// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword relevance estimate for an accepted headline set.

use crate::config::DEFAULT_KEYWORD_CAP;
use adcopy_core::RelevanceEstimate;
use unicode_normalization::UnicodeNormalization;

/// Keyword match-type syntax stripped before comparing.
const KEYWORD_SYNTAX: &[char] = &['+', '[', ']', '"'];

/// Score how many of the top keywords literally appear in the headlines.
pub fn score<H, K>(headlines: &[H], keywords: &[K]) -> RelevanceEstimate
where
    H: AsRef<str>,
    K: AsRef<str>,
{
    score_with_cap(headlines, keywords, DEFAULT_KEYWORD_CAP)
}

/// Like [`score`], checking at most `keyword_cap` keywords.
///
/// The cap counts keywords in rank order; any of them blank after stripping
/// match syntax is skipped, not replaced by a later keyword. With nothing to
/// check the estimate is 0.
pub fn score_with_cap<H, K>(headlines: &[H], keywords: &[K], keyword_cap: usize) -> RelevanceEstimate
where
    H: AsRef<str>,
    K: AsRef<str>,
{
    let headlines: Vec<String> = headlines
        .iter()
        .map(|h| h.as_ref().to_lowercase().nfc().collect())
        .collect();

    let checked: Vec<String> = keywords
        .iter()
        .map(|k| strip_keyword_syntax(k.as_ref()))
        .take(keyword_cap)
        .filter(|k| !k.is_empty())
        .collect();

    let matched = checked
        .iter()
        .filter(|keyword| headlines.iter().any(|h| h.contains(keyword.as_str())))
        .count();

    RelevanceEstimate::from_ratio(matched, checked.len())
}

/// Lower-cased, NFC-composed keyword text without match-type syntax,
/// single-spaced.
pub fn strip_keyword_syntax(keyword: &str) -> String {
    keyword
        .chars()
        .filter(|c| !KEYWORD_SYNTAX.contains(c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .nfc()
        .collect()
}

#[cfg(test)]
#[path = "relevance_tests.rs"]
mod tests;
