//! Priority-first specs
//!
//! Operator text placed first wins every duplicate tie against generated
//! text; placing it last reverses that.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn curated_wins_over_near_duplicate_generated() {
    let out = batch()
        .curated(FieldKind::Headline, &["Sürgős Vízszerelés Most"])
        .headlines(&["Sürgős Vízszerelés Azonnal", "Olcsó Árak Nálunk"])
        .run();

    assert_eq!(
        out.accepted(FieldKind::Headline),
        vec!["Sürgős Vízszerelés Most", "Olcsó Árak Nálunk"]
    );
    assert_eq!(
        out.origins(FieldKind::Headline),
        vec![Origin::Curated, Origin::Generated]
    );
    assert_eq!(
        out.rejected(FieldKind::Headline),
        vec!["Sürgős Vízszerelés Azonnal"]
    );
}

#[test]
fn saved_bank_sits_between_curated_and_generated() {
    let out = batch()
        .headlines(&["Non-Stop Ügyelet", "Garanciával Dolgozunk"])
        .saved(FieldKind::Headline, &["Garanciával Dolgozunk!"])
        .curated(FieldKind::Headline, &["Non-Stop Ügyelet Budapest"])
        .run();

    assert_eq!(
        out.origins(FieldKind::Headline),
        vec![Origin::Curated, Origin::SavedBank]
    );
    assert_eq!(
        out.rejected(FieldKind::Headline),
        vec!["Non-Stop Ügyelet", "Garanciával Dolgozunk"]
    );
}

#[test]
fn curated_last_lets_generated_win() {
    let out = batch()
        .curated(FieldKind::Headline, &["Sürgős Vízszerelés Most"])
        .headlines(&["Sürgős Vízszerelés Azonnal"])
        .curated_last()
        .run();

    assert_eq!(
        out.accepted(FieldKind::Headline),
        vec!["Sürgős Vízszerelés Azonnal"]
    );
    assert_eq!(out.origins(FieldKind::Headline), vec![Origin::Generated]);
}

#[test]
fn curated_text_is_normalized_like_any_other() {
    let out = batch()
        .curated(FieldKind::Headline, &["★ AKCIÓS ÁRAK ★"])
        .run();
    assert_eq!(out.accepted(FieldKind::Headline), vec!["Akciós Árak"]);
}
