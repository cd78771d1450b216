// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! adcopy-core: Data model shared by the ad copy pipeline and its callers

pub mod candidate;
pub mod field;
pub mod relevance;
pub mod response;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use candidate::{Candidate, CandidateMeta, Origin, RawCandidate};
pub use field::{
    FieldKind, FieldParseError, FieldSpec, CALL_ONLY_BUSINESS_NAME, CALL_ONLY_DESCRIPTION_LINE,
    DESCRIPTION, HEADLINE, SITELINK_LINE, SITELINK_TITLE,
};
pub use relevance::{RelevanceEstimate, RelevanceOutOfRange};
pub use response::split_response;
