//! Length enforcer specs

use adcopy_pipeline::enforce_length;

const LONG: &str = "Professzionális Duguláselhárítás Budapesten";

#[yare::parameterized(
    hard_cut_when_boundary_too_early = { 30, "Professzionális Duguláselhárít" },
    cut_at_word_boundary             = { 33, "Professzionális Duguláselhárítás" },
    exact_fit_is_untouched           = { 43, LONG },
    short_limit_hard_cuts            = { 5, "Profe" },
)]
fn fits_headline(max: usize, expected: &str) {
    let out = enforce_length(LONG, max);
    assert_eq!(out, expected);
    assert!(out.chars().count() <= max);
}

#[test]
fn limits_count_characters_not_bytes() {
    // 10 characters, 16 bytes
    let text = "Őrző Védő!";
    assert_eq!(enforce_length(text, 10), text);
}

#[test]
fn zero_limit_is_empty() {
    assert_eq!(enforce_length(LONG, 0), "");
}
