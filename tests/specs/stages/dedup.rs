//! Duplicate filter specs

use crate::prelude::*;
use similar_asserts::assert_eq;
use adcopy_pipeline::{filter_duplicates, filter_duplicates_with};

fn texts(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.text.as_str()).collect()
}

fn generated(texts: &[&str]) -> Vec<Candidate> {
    texts.iter().map(|t| Candidate::generated(*t)).collect()
}

#[test]
fn exact_duplicate_ignores_case_accents_and_punctuation() {
    let out = filter_duplicates(generated(&[
        "Gyors Duguláselhárítás!",
        "gyors duguláselhárítás",
        "GYORS DUGULASELHARITAS",
    ]));
    assert_eq!(texts(&out), vec!["Gyors Duguláselhárítás!"]);
}

#[test]
fn near_duplicate_by_shared_words() {
    let out = filter_duplicates(generated(&[
        "Sürgős Vízszerelés Most",
        "Sürgős Vízszerelés Azonnal",
    ]));
    assert_eq!(texts(&out), vec!["Sürgős Vízszerelés Most"]);
}

#[test]
fn distinct_texts_are_kept() {
    let out = filter_duplicates(generated(&["Hívjon Most Minket", "Olcsó Árak Nálunk"]));
    assert_eq!(texts(&out), vec!["Hívjon Most Minket", "Olcsó Árak Nálunk"]);
}

#[test]
fn overlap_is_measured_against_the_newcomer() {
    // Longer text first: the short one is fully covered and dropped
    let out = filter_duplicates(generated(&[
        "Vízszerelés Duguláselhárítás Csőtörés Budapesten",
        "Vízszerelés Budapesten",
    ]));
    assert_eq!(out.len(), 1);

    // Short text first: the long one shares only half its words
    let out = filter_duplicates(generated(&[
        "Vízszerelés Budapesten",
        "Vízszerelés Duguláselhárítás Csőtörés Budapesten",
    ]));
    assert_eq!(out.len(), 2);
}

#[test]
fn without_filler_words_short_pairs_fall_below_threshold() {
    let config = PipelineConfig {
        filler_words: Vec::new(),
        ..PipelineConfig::default()
    };
    let out = filter_duplicates_with(
        generated(&["Sürgős Vízszerelés Most", "Sürgős Vízszerelés Azonnal"]),
        &config,
    );
    assert_eq!(out.len(), 2);
}

#[test]
fn output_is_never_longer_than_input() {
    let input = generated(&["A", "B", "a", "Ugyanaz Szöveg", "ugyanaz szöveg!"]);
    let len = input.len();
    assert!(filter_duplicates(input).len() <= len);
}
