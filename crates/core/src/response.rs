// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting raw generator responses into candidate strings.
//!
//! Generation sources answer either with a JSON array (of strings or of
//! `{"text": ...}` objects) or with free text, one candidate per line,
//! usually numbered or bulleted and sometimes wrapped in a code fence.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,3}[.)]|[-*•‣–])\s+").expect("constant regex pattern is valid")
});

const QUOTE_PAIRS: &[(char, char)] = &[
    ('"', '"'),
    ('\'', '\''),
    ('“', '”'),
    ('„', '”'),
    ('«', '»'),
];

/// Split a raw response into candidate strings, in response order.
///
/// Never fails: unparseable JSON falls back to line splitting, and blank
/// entries are dropped.
pub fn split_response(raw: &str) -> Vec<String> {
    let body = strip_code_fence(raw.trim());
    if body.starts_with('[') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(body) {
            return items.iter().filter_map(json_item_text).collect();
        }
    }
    body.lines().filter_map(clean_line).collect()
}

fn json_item_text(item: &Value) -> Option<String> {
    let text = match item {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map.get("text")?.as_str()?,
        _ => return None,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn clean_line(line: &str) -> Option<String> {
    let line = line.trim();
    let line = LIST_MARKER.find(line).map_or(line, |m| &line[m.end()..]);
    let line = unquote(line.trim());
    (!line.is_empty()).then(|| line.to_string())
}

fn unquote(s: &str) -> &str {
    for &(open, close) in QUOTE_PAIRS {
        if let Some(inner) = s.strip_prefix(open).and_then(|r| r.strip_suffix(close)) {
            return inner.trim();
        }
    }
    s
}

/// Unwrap a ```` ``` ```` fenced block, dropping the info string line.
fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
