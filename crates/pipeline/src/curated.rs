// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expansion of operator templates into curated candidates.

use adcopy_core::{Candidate, Origin};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for ${variable_name}
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("constant regex pattern is valid")
});

/// Substitute every `${name}` in `template` from `vars`.
///
/// Returns `None` if any placeholder has no value; half-expanded copy is
/// never usable as an ad asset.
pub fn interpolate(template: &str, vars: &IndexMap<String, String>) -> Option<String> {
    let mut missing = false;
    let expanded = VAR_PATTERN.replace_all(template, |caps: &regex::Captures| {
        match vars.get(&caps[1]) {
            Some(val) => val.clone(),
            None => {
                missing = true;
                String::new()
            }
        }
    });
    (!missing).then(|| expanded.into_owned())
}

/// Expand templates into [`Origin::Curated`] candidates, skipping any
/// template with an unresolved placeholder. Order is preserved.
pub fn expand_templates<T: AsRef<str>>(
    templates: &[T],
    vars: &IndexMap<String, String>,
) -> Vec<Candidate> {
    templates
        .iter()
        .filter_map(|t| interpolate(t.as_ref(), vars))
        .map(|text| Candidate::new(text, Origin::Curated))
        .collect()
}

/// Placeholder names used in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    VAR_PATTERN
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

#[cfg(test)]
#[path = "curated_tests.rs"]
mod tests;
