use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

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

fn write_dataset(rows: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = tempdir().expect("create temp dir");
    let data_path = temp_dir.path().join("destinos.txt");
    fs::write(&data_path, rows.join("\n")).expect("write dataset");
    (temp_dir, data_path)
}

#[test]
fn route_crosses_hubs_between_two_leaves() {
    let mut cmd = cli();
    cmd.arg("--data-file")
        .arg(fixture_path())
        .arg("route")
        .arg("--from")
        .arg("Guatape")
        .arg("--to")
        .arg("Jardin");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Guatape -> Jardin (3 hops, 205.0 km)",
        ))
        .stdout(predicate::str::contains("  0: Guatape"))
        .stdout(predicate::str::contains("  1: Rionegro (35.0 km)"))
        .stdout(predicate::str::contains("  2: Caldas (60.0 km)"))
        .stdout(predicate::str::contains("  3: Jardin (110.0 km)"));
}

#[test]
fn direct_hub_edge_is_reported_with_one_hop() {
    let mut cmd = cli();
    cmd.arg("--data-file")
        .arg(fixture_path())
        .arg("route")
        .arg("--from")
        .arg("Medellin")
        .arg("--to")
        .arg("Santa Fe de Antioquia");

    cmd.assert().success().stdout(predicate::str::contains(
        "Route: Medellin -> Santa Fe de Antioquia (1 hops, 57.0 km)",
    ));
}

#[test]
fn json_format_emits_a_parseable_summary() {
    let mut cmd = cli();
    cmd.arg("--data-file")
        .arg(fixture_path())
        .arg("--format")
        .arg("json")
        .arg("route")
        .arg("--from")
        .arg("Guatape")
        .arg("--to")
        .arg("Jardin");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");

    assert_eq!(json["origin"]["name"], "Guatape");
    assert_eq!(json["target"]["name"], "Jardin");
    assert_eq!(json["hops"], 3);
    assert_eq!(json["total_km"], 205.0);

    let legs = json["legs"].as_array().expect("legs array");
    assert_eq!(legs.len(), 4);
    // The origin leg has no incoming distance, so the field is omitted.
    assert!(legs[0].get("distance_km").is_none());
    assert_eq!(legs[1]["distance_km"], 35.0);
}

#[test]
fn unknown_destination_error_is_friendly() {
    let mut cmd = cli();
    cmd.arg("--data-file")
        .arg(fixture_path())
        .arg("route")
        .arg("--from")
        .arg("Guatapee")
        .arg("--to")
        .arg("Jardin");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown destination: Guatapee"))
        .stderr(predicate::str::contains("Did you mean 'Guatape'?"));
}

#[test]
fn unreachable_destination_reports_no_route() {
    let (_temp, data_path) = write_dataset(&[
        "Medellin,24,1495,urbanismo;gastronomia,0,45,57,38,22",
        "Caldas,19,1750,senderismo;ciclismo,22,60,75,55,0",
        "Aislado,18,2100,senderismo,0,0,0,0,0",
    ]);

    let mut cmd = cli();
    cmd.arg("--data-file")
        .arg(&data_path)
        .arg("route")
        .arg("--from")
        .arg("Aislado")
        .arg("--to")
        .arg("Medellin");

    cmd.assert().failure().stderr(predicate::str::contains(
        "no route found between Aislado and Medellin",
    ));
}
