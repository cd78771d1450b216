//! Relevance estimate specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn half_of_keywords_matched_scores_five() {
    let out = batch()
        .headlines(&["24 Órás Duguláselhárítás"])
        .keywords(&["duguláselhárítás", "vízszerelés"])
        .run();
    assert_eq!(out.relevance(), 5);
}

#[test]
fn no_keywords_scores_zero() {
    let out = batch().headlines(&["Duguláselhárítás"]).run();
    assert_eq!(out.relevance(), 0);
}

#[test]
fn match_syntax_and_case_are_ignored() {
    let out = batch()
        .headlines(&["Vízszerelés Budapesten"])
        .keywords(&["\"VÍZSZERELÉS budapesten\"", "[vízszerelés]"])
        .run();
    assert_eq!(out.relevance(), 10);
}

#[test]
fn only_accepted_headlines_count() {
    let out = batch()
        .headlines(&["Sürgős Vízszerelés Most", "Sürgős Vízszerelés Azonnal"])
        .keywords(&["azonnal"])
        .run();
    assert_eq!(out.relevance(), 0);
}

#[test]
fn keyword_cap_comes_from_config() {
    let config = PipelineConfig {
        keyword_cap: 1,
        ..PipelineConfig::default()
    };
    let out = batch()
        .headlines(&["Vízszerelés"])
        .keywords(&["vízszerelés", "duguláselhárítás"])
        .config(config)
        .run();
    assert_eq!(out.relevance(), 10);
}

#[test]
fn no_relevance_without_headlines() {
    let out = batch()
        .generated(FieldKind::Description, &["Vízszerelés egész Budapesten"])
        .keywords(&["vízszerelés"])
        .run();
    assert_eq!(out.result.relevance, None);
}
