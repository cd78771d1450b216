// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The [`RelevanceEstimate`] value attached to a headline batch.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// At-a-glance keyword relevance hint, always within `0..=10`.
///
/// Zero doubles as the neutral value when no keywords were checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RelevanceEstimate(u8);

/// A stored score outside `0..=10`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("relevance score {0} is out of range (0..={max})", max = RelevanceEstimate::MAX)]
pub struct RelevanceOutOfRange(pub u8);

impl RelevanceEstimate {
    pub const MAX: u8 = 10;

    /// Build an estimate, clamping to [`Self::MAX`].
    pub fn new(score: u8) -> Self {
        Self(score.min(Self::MAX))
    }

    /// Score `matched` out of `checked` on the 0..=10 scale, rounding half up.
    pub fn from_ratio(matched: usize, checked: usize) -> Self {
        if checked == 0 {
            return Self(0);
        }
        let matched = matched.min(checked);
        let scaled = (matched as f64 / checked as f64) * f64::from(Self::MAX);
        Self::new(scaled.round() as u8)
    }

    pub fn score(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RelevanceEstimate {
    type Error = RelevanceOutOfRange;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        if score > Self::MAX {
            return Err(RelevanceOutOfRange(score));
        }
        Ok(Self(score))
    }
}

impl From<RelevanceEstimate> for u8 {
    fn from(estimate: RelevanceEstimate) -> Self {
        estimate.0
    }
}

impl fmt::Display for RelevanceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
#[path = "relevance_tests.rs"]
mod tests;
