// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ad field descriptors and the [`FieldKind`] enum naming the known fields.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Static length/shape policy for one kind of ad text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Maximum length in characters (never bytes). Always positive.
    pub max_length: usize,
    pub allows_line_breaks: bool,
}

impl FieldSpec {
    const fn single_line(name: &'static str, max_length: usize) -> Self {
        Self {
            name,
            max_length,
            allows_line_breaks: false,
        }
    }
}

pub const HEADLINE: FieldSpec = FieldSpec::single_line("headline", 30);
pub const DESCRIPTION: FieldSpec = FieldSpec::single_line("description", 90);
pub const SITELINK_TITLE: FieldSpec = FieldSpec::single_line("sitelink_title", 25);
pub const SITELINK_LINE: FieldSpec = FieldSpec::single_line("sitelink_line", 35);
pub const CALL_ONLY_BUSINESS_NAME: FieldSpec =
    FieldSpec::single_line("call_only_business_name", 25);
pub const CALL_ONLY_DESCRIPTION_LINE: FieldSpec =
    FieldSpec::single_line("call_only_description_line", 35);

/// The known ad field types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Headline,
    Description,
    SitelinkTitle,
    SitelinkLine,
    CallOnlyBusinessName,
    CallOnlyDescriptionLine,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Headline,
        FieldKind::Description,
        FieldKind::SitelinkTitle,
        FieldKind::SitelinkLine,
        FieldKind::CallOnlyBusinessName,
        FieldKind::CallOnlyDescriptionLine,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        match self {
            FieldKind::Headline => &HEADLINE,
            FieldKind::Description => &DESCRIPTION,
            FieldKind::SitelinkTitle => &SITELINK_TITLE,
            FieldKind::SitelinkLine => &SITELINK_LINE,
            FieldKind::CallOnlyBusinessName => &CALL_ONLY_BUSINESS_NAME,
            FieldKind::CallOnlyDescriptionLine => &CALL_ONLY_DESCRIPTION_LINE,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn max_length(self) -> usize {
        self.spec().max_length
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a field name does not match any known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}' (expected one of: {known})", known = known_names())]
pub struct FieldParseError(pub String);

fn known_names() -> String {
    FieldKind::ALL
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for FieldKind {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        FieldKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
