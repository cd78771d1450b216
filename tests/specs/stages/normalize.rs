//! Normalizer specs

use adcopy_pipeline::{normalize, normalize_multiline};

#[test]
fn normalizing_twice_changes_nothing() {
    for raw in [
        "🚿 Vízszerelés 🔧 Most! 💯",
        "SÜRGŐS VÍZSZERELÉS 0-24!",
        "  Gyors \t\n Szerviz  ",
        "★ ÚJ ★ Ajánlat → Kattintson",
    ] {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once, "input: {raw:?}");
    }
}

#[test]
fn accented_letters_are_kept() {
    assert_eq!(
        normalize("Árvíztűrő Tükörfúrógép"),
        "Árvíztűrő Tükörfúrógép"
    );
}

#[test]
fn mixed_case_is_left_alone() {
    assert_eq!(normalize("Hívjon MOST Minket"), "Hívjon MOST Minket");
}

#[test]
fn only_symbols_normalizes_to_empty() {
    assert_eq!(normalize("🔥 ✓ ★ 📞"), "");
}

#[test]
fn multiline_keeps_lines_and_drops_blank_ones() {
    assert_eq!(
        normalize_multiline("ELSŐ SOR ✓\n\n  második   sor  "),
        "Első Sor\nmásodik sor"
    );
}
