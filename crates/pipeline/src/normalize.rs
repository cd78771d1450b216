// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text normalization: symbol stripping, whitespace collapse, and
//! title-casing of all-caps ("shouting") text.

use unicode_normalization::UnicodeNormalization;

/// Decorative glyphs outside the stripped blocks that generators like to
/// use as bullets or emphasis.
const DENYLIST: &[char] = &[
    '•', '‣', '⁃', '·', '※', '‼', '⁉', '\u{200B}', '\u{200C}', '\u{2060}', '\u{FEFF}',
];

/// Punctuation that may appear in shouting text without making it mixed-case.
const SHOUTING_PUNCTUATION: &[char] = &['?', '!', '=', '-'];

/// Clean one raw candidate string.
///
/// Total over its input and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|&c| !is_stripped(c)).collect();
    // Compose after stripping: removing a joiner can leave a base letter
    // next to its combining mark.
    let composed: String = stripped.nfc().collect();
    let collapsed = collapse_whitespace(&composed);
    if is_shouting(&collapsed) {
        title_case(&collapsed)
    } else {
        collapsed
    }
}

/// Normalize each line on its own, dropping lines left blank.
pub fn normalize_multiline(raw: &str) -> String {
    raw.lines()
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_stripped(c: char) -> bool {
    is_pictographic(c) || DENYLIST.contains(&c) || (c.is_control() && !c.is_whitespace())
}

fn is_pictographic(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF   // emoji, pictographs, regional indicators
            | 0x2600..=0x27BF   // miscellaneous symbols, dingbats
            | 0x2B00..=0x2BFF   // miscellaneous symbols and arrows
            | 0x2190..=0x21FF   // arrows
            | 0x2300..=0x23FF   // miscellaneous technical (watch, hourglass)
            | 0x25A0..=0x25FF   // geometric shapes
            | 0xFE00..=0xFE0F   // variation selectors
            | 0xE0020..=0xE007F // tag characters
            | 0x200D            // zero width joiner
            | 0x20E3 // combining enclosing keycap
    )
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Only uppercase letters, digits, spaces and [`SHOUTING_PUNCTUATION`].
fn is_shouting(s: &str) -> bool {
    s.chars().all(|c| {
        c.is_uppercase() || c.is_ascii_digit() || c == ' ' || SHOUTING_PUNCTUATION.contains(&c)
    })
}

/// Keep the first character of each word, lowercase the rest.
///
/// Uses Unicode case mapping so `ŐSZI ÁRAK` becomes `Őszi Árak`.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => std::iter::once(first)
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
