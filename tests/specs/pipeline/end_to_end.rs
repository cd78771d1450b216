//! Full batch specs
//!
//! A realistic generator batch with symbols, shouting, near duplicates and
//! an over-long headline comes out clean.

use crate::prelude::*;
use similar_asserts::assert_eq;

const GENERATED: &[&str] = &[
    "🔥 Gyors Duguláselhárítás",
    "Vízszerelés Budapesten ✓",
    "Gyors Duguláselhárítás Most!",
    "Hívjon Minket Bizalommal 📞",
    "OLCSÓ ÁRAK GARANCIÁVAL",
    "Most Vízszerelés Budapesten",
    "Csőtörés Elhárítás Éjjel",
    "Tapasztalt Szakemberek",
    "Garanciával Olcsó Árak Azonnal",
    "Ingyenes Helyszíni Felmérés",
    "Kamerás Csővizsgálat",
    "Kamerás Csővizsgálat Gyorsan",
    "Lefolyótisztítás Profi Géppel",
    "Ügyfeleink Ajánlanak Minket",
    "Megbízható Vízvezeték Javítás Mindenhol",
];

const KEYWORDS: &[&str] = &[
    "duguláselhárítás",
    "vízszerelés",
    "csővizsgálat",
    "+lefolyó",
    "[tetőfedés]",
    "sixth keyword is never checked",
];

#[test]
fn fifteen_generated_headlines_yield_eleven_distinct() {
    let out = batch().headlines(GENERATED).keywords(KEYWORDS).run();

    assert_eq!(
        out.accepted(FieldKind::Headline),
        vec![
            "Gyors Duguláselhárítás",
            "Vízszerelés Budapesten",
            "Hívjon Minket Bizalommal",
            "Olcsó Árak Garanciával",
            "Csőtörés Elhárítás Éjjel",
            "Tapasztalt Szakemberek",
            "Ingyenes Helyszíni Felmérés",
            "Kamerás Csővizsgálat",
            "Lefolyótisztítás Profi Géppel",
            "Ügyfeleink Ajánlanak Minket",
            "Megbízható Vízvezeték Javítás",
        ]
    );
    assert_eq!(
        out.rejected(FieldKind::Headline),
        vec![
            "Gyors Duguláselhárítás Most!",
            "Most Vízszerelés Budapesten",
            "Garanciával Olcsó Árak Azonnal",
            "Kamerás Csővizsgálat Gyorsan",
        ]
    );
}

#[test]
fn every_rejection_is_a_near_duplicate_of_an_earlier_headline() {
    let out = batch().headlines(GENERATED).run();
    let of: Vec<usize> = out
        .field(FieldKind::Headline)
        .rejected
        .iter()
        .map(|r| match r.reason {
            RejectReason::NearDuplicate { of, similarity } => {
                assert!(similarity >= 0.70);
                of
            }
            ref other => panic!("unexpected rejection {other:?}"),
        })
        .collect();
    assert_eq!(of, vec![0, 1, 3, 7]);
}

#[test]
fn accepted_headlines_are_length_compliant_and_symbol_free() {
    let out = batch().headlines(GENERATED).run();
    for text in out.accepted(FieldKind::Headline) {
        assert!(text.chars().count() <= 30, "too long: {text}");
        assert!(
            text.chars()
                .all(|c| c.is_alphanumeric() || " !?-".contains(c)),
            "symbol left in: {text}"
        );
        assert_ne!(text, text.to_uppercase(), "still shouting: {text}");
    }
}

#[test]
fn relevance_counts_first_five_keywords() {
    let out = batch().headlines(GENERATED).keywords(KEYWORDS).run();
    // duguláselhárítás, vízszerelés, csővizsgálat and lefolyó match; tetőfedés does not
    assert_eq!(out.relevance(), 8);
}

#[test]
fn running_twice_gives_identical_results() {
    let first = batch().headlines(GENERATED).keywords(KEYWORDS).run();
    let second = batch().headlines(GENERATED).keywords(KEYWORDS).run();
    assert_eq!(first.result, second.result);
}

#[test]
fn fields_are_filtered_independently() {
    let out = batch()
        .headlines(&["Gyors Duguláselhárítás", "gyors duguláselhárítás"])
        .generated(
            FieldKind::SitelinkTitle,
            &["Gyors Duguláselhárítás", "Kamerás Csővizsgálat"],
        )
        .run();
    assert_eq!(
        out.accepted(FieldKind::Headline),
        vec!["Gyors Duguláselhárítás"]
    );
    assert_eq!(
        out.accepted(FieldKind::SitelinkTitle),
        vec!["Gyors Duguláselhárítás", "Kamerás Csővizsgálat"]
    );
}
