// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boundary-aware truncation to a field's character limit.

use crate::config::DEFAULT_BOUNDARY_RATIO;

/// Truncate `text` to at most `max_length` characters, preferring to cut
/// at a word boundary in the last third of the limit.
pub fn enforce_length(text: &str, max_length: usize) -> String {
    enforce_length_with_ratio(text, max_length, DEFAULT_BOUNDARY_RATIO)
}

/// Like [`enforce_length`], with the earliest acceptable boundary given as
/// a fraction of `max_length`.
///
/// Lengths are counted in `char`s. When no whitespace at or after
/// `ceil(max_length * boundary_ratio)` exists in the cut, the cut stays
/// at exactly `max_length`, even mid-word.
pub fn enforce_length_with_ratio(text: &str, max_length: usize, boundary_ratio: f64) -> String {
    let Some((cut_byte, _)) = text.char_indices().nth(max_length) else {
        return text.to_string();
    };
    let head = &text[..cut_byte];

    // The cut already falls between two words
    let next_is_space = text[cut_byte..]
        .chars()
        .next()
        .is_some_and(char::is_whitespace);
    if next_is_space {
        return head.trim_end().to_string();
    }

    let earliest = (max_length as f64 * boundary_ratio).ceil() as usize;
    let boundary = head
        .char_indices()
        .enumerate()
        .filter(|(_, (_, c))| c.is_whitespace())
        .last();
    match boundary {
        Some((char_idx, (byte_idx, _))) if char_idx >= earliest => {
            head[..byte_idx].trim_end().to_string()
        }
        _ => head.trim_end().to_string(),
    }
}

#[cfg(test)]
#[path = "length_tests.rs"]
mod tests;
