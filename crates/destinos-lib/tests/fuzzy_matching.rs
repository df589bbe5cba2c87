use std::path::PathBuf;

use destinos_lib::load_atlas;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/destinos_sample.txt")
}

#[test]
fn close_misspelling_suggests_the_real_name() {
    let atlas = load_atlas(&fixture_path()).expect("fixture loads");

    let matches = atlas.fuzzy_matches("Guatapee", 3);
    assert_eq!(matches.first().map(String::as_str), Some("Guatape"));
}

#[test]
fn lowercase_input_still_matches() {
    let atlas = load_atlas(&fixture_path()).expect("fixture loads");

    let matches = atlas.fuzzy_matches("medellin", 3);
    assert_eq!(matches.first().map(String::as_str), Some("Medellin"));
}

#[test]
fn unrelated_input_suggests_nothing() {
    let atlas = load_atlas(&fixture_path()).expect("fixture loads");

    assert!(atlas.fuzzy_matches("Bucaramanga", 3).is_empty());
}

#[test]
fn limit_caps_the_suggestion_count() {
    let atlas = load_atlas(&fixture_path()).expect("fixture loads");

    // "Santa " is a prefix of two fixture names.
    let matches = atlas.fuzzy_matches("Santa", 1);
    assert!(matches.len() <= 1);
}
