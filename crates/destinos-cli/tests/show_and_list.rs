use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/destinos_sample.txt")
        .canonicalize()
        .expect("fixture dataset present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("destinos");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn show_renders_the_full_card() {
    let mut cmd = cli();
    cmd.arg("--data-file")
        .arg(fixture_path())
        .arg("show")
        .arg("Caldas");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Caldas (19 C, 1750 m)"))
        .stdout(predicate::str::contains("Activities: senderismo, ciclismo"))
        .stdout(predicate::str::contains("  Medellin: 22.0 km"))
        .stdout(predicate::str::contains("  Jardin: 110.0 km"))
        .stdout(predicate::str::contains("  Caldas: not connected"));
}

#[test]
fn show_serializes_the_mirrored_distance_table() {
    let mut cmd = cli();
    cmd.arg("--data-file")
        .arg(fixture_path())
        .arg("--format")
        .arg("json")
        .arg("show")
        .arg("Caldas");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");

    assert_eq!(json["name"], "Caldas");
    assert_eq!(json["temperature_c"], 19);
    assert_eq!(json["altitude_m"], 1750);

    let distances = json["distances_km"].as_array().expect("distance table");
    // Five recorded hub columns plus the mirrored Jardin and Jerico rows.
    assert_eq!(distances.len(), 7);
    assert!(distances
        .iter()
        .any(|row| row["name"] == "Jardin" && row["km"] == 110.0));
}

#[test]
fn show_unknown_name_fails_with_a_suggestion() {
    let mut cmd = cli();
    cmd.arg("--data-file")
        .arg(fixture_path())
        .arg("show")
        .arg("caldas");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown destination: caldas"))
        .stderr(predicate::str::contains("Did you mean 'Caldas'?"));
}

#[test]
fn list_prints_one_line_per_destination_in_name_order() {
    let mut cmd = cli();
    cmd.arg("--data-file").arg(fixture_path()).arg("list");

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).expect("utf8 output");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "Barbosa (22 C, 1300 m) - natacion, senderismo");
    assert_eq!(
        lines[5],
        "Medellin (24 C, 1495 m) - urbanismo, gastronomia, museos"
    );
    assert_eq!(
        lines[8],
        "Santa Fe de Antioquia (27 C, 550 m) - historia, natacion, gastronomia"
    );
}

#[test]
fn list_json_is_an_array_of_full_cards() {
    let mut cmd = cli();
    cmd.arg("--data-file")
        .arg(fixture_path())
        .arg("--format")
        .arg("json")
        .arg("list");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");

    let cards = json.as_array().expect("card array");
    assert_eq!(cards.len(), 9);
    assert_eq!(cards[0]["name"], "Barbosa");
    assert!(cards[0]["distances_km"].as_array().is_some());
}
