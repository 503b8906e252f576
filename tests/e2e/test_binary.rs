//! Integration tests for the roster-diagram binary.
//!
//! These run the compiled binary against the fixture table in tests/fixtures.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the binary built by `cargo test`.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_roster-diagram"))
}

fn fixture_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("roster.csv");
    path
}

/// Run the binary with the given stdin input and CLI args.
fn run_binary(input: &str, args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run against the fixture file and return stdout, asserting success.
fn run_fixture(extra_args: &[&str]) -> String {
    let fixture = fixture_path();
    let mut args = vec![fixture.to_str().unwrap()];
    args.extend_from_slice(extra_args);
    let output = run_binary("", &args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

#[test]
fn test_list_days() {
    let out = run_fixture(&["--list-days"]);
    assert_eq!(out, "Lundi\nMardi\nMercredi\n");
}

#[test]
fn test_list_lines_for_days() {
    let out = run_fixture(&["--list-lines", "-d", "Mardi", "-d", "Mercredi"]);
    assert_eq!(out, "1\n4\n");
}

#[test]
fn test_ascii_output() {
    let out = run_fixture(&["-d", "Lundi", "-l", "1", "--ascii"]);
    assert!(out.contains("Day: Lundi"));
    assert!(out.contains("Roster line: 1"));
    assert!(out.contains("| 830103 |"));
    assert!(out.contains("8 min"));
    assert!(out.contains("10 min"));
    assert!(out.is_ascii());
}

#[test]
fn test_multiple_pairs_in_selection_order() {
    let out = run_fixture(&["-d", "Mardi", "-d", "Lundi", "-l", "1"]);
    let mardi = out.find("Day: Mardi").expect("Mardi diagram");
    let lundi = out.find("Day: Lundi").expect("Lundi diagram");
    assert!(mardi < lundi);
}

#[test]
fn test_json_output() {
    let out = run_fixture(&["-d", "Lundi", "-l", "2", "-f", "json"]);
    let v: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    let diagrams = v.as_array().expect("array of diagrams");
    assert_eq!(diagrams.len(), 1);
    assert_eq!(diagrams[0]["nodes"][1]["category"], "Unknown");
    assert_eq!(diagrams[0]["edges"][0]["duration_minutes"], 10);
}

#[test]
fn test_svg_output() {
    let out = run_fixture(&["-d", "Mercredi", "-l", "4", "-f", "svg"]);
    assert!(out.starts_with("<svg"));
    assert!(out.contains("830401"));
}

#[test]
fn test_stdin_input() {
    let input = fs::read_to_string(fixture_path()).unwrap();
    let output = run_binary(&input, &["-d", "Mercredi", "-l", "4"]);
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(out.contains("830401"));
}

#[test]
fn test_missing_selection_warns() {
    let fixture = fixture_path();
    let output = run_binary("", &[fixture.to_str().unwrap(), "-d", "Lundi"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please select at least one line."));
}

#[test]
fn test_missing_file_fails() {
    let output = run_binary("", &["no_such_roster.csv", "-d", "Lundi", "-l", "1"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_export_skipped_when_nothing_matches() {
    let dir = std::env::temp_dir().join(format!("roster-diagram-e2e-empty-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let out = run_fixture(&[
        "-d",
        "Dimanche",
        "-l",
        "1",
        "--export-csv",
        dir.to_str().unwrap(),
    ]);
    assert!(out.is_empty());
    assert!(!dir.join("Lignes_Roulement_Dimanche.csv").exists());
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_huge_padding_does_not_panic() {
    let out = run_fixture(&["-d", "Mercredi", "-l", "4", "-p", "18446744073709551615"]);
    assert!(out.contains("830401"));
}

#[test]
fn test_output_and_export_files() {
    let dir = std::env::temp_dir().join(format!("roster-diagram-e2e-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let out_file = dir.join("diagram.txt");
    run_fixture(&[
        "-d",
        "Lundi",
        "-d",
        "Mardi",
        "-l",
        "1",
        "-o",
        out_file.to_str().unwrap(),
        "--export-csv",
        dir.to_str().unwrap(),
    ]);
    let rendered = fs::read_to_string(&out_file).unwrap();
    assert!(rendered.contains("Day: Mardi"));
    let exported = fs::read_to_string(dir.join("Lignes_Roulement_Lundi_Mardi.csv")).unwrap();
    assert_eq!(exported.lines().count(), 6);
    assert!(exported.starts_with("Jour,Ligne Jour,TrainA,HeureA,HeureD,TypeTrainA,Gare\n"));
    fs::remove_dir_all(&dir).ok();
}
