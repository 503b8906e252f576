//! Dataset loading, selection, export and the end-to-end pipeline.

use std::path::PathBuf;

use roster_diagram::config::{AppConfig, DatasetConfig, RenderConfig};
use roster_diagram::dataset::{ScheduleDataset, Selection, SelectionAdvisory, export};
use roster_diagram::schedule::TrainCategory;
use roster_diagram::{diagrams, render_csv, render_selection, roster_lines};

fn fixture_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("roster.csv");
    path
}

fn fixture() -> ScheduleDataset {
    ScheduleDataset::from_path(fixture_path(), &DatasetConfig::default()).unwrap()
}

#[test]
fn test_load_fixture() {
    let ds = fixture();
    assert_eq!(ds.len(), 8);
    assert_eq!(ds.headers().get(6), Some("Gare"));
    assert_eq!(ds.rows()[6].arrival_time, None);
    assert_eq!(ds.rows()[6].train_type.as_deref(), Some("Fret"));
}

#[test]
fn test_missing_file() {
    let err = ScheduleDataset::from_path("does/not/exist.csv", &DatasetConfig::default())
        .unwrap_err();
    assert!(err.to_string().contains("does/not/exist.csv"));
}

#[test]
fn test_semicolon_delimiter() {
    let src = "Jour;Ligne Jour;TrainA;HeureA;HeureD;TypeTrainA\nLundi;1;T1;08:00:00;08:10:00;Commercial\n";
    let config = DatasetConfig {
        delimiter: ';',
        ..DatasetConfig::default()
    };
    let ds = ScheduleDataset::from_reader(src.as_bytes(), &config).unwrap();
    assert_eq!(ds.rows()[0].category(), TrainCategory::Commercial);
}

#[test]
fn test_available_days_and_lines() {
    let ds = fixture();
    assert_eq!(ds.days(), vec!["Lundi", "Mardi", "Mercredi"]);
    assert_eq!(ds.lines_for_days(&["Lundi", "Mercredi"]), vec!["1", "2", "4"]);
}

#[test]
fn test_roster_lines_in_selection_order() {
    let ds = fixture();
    let selection = Selection::new(["Mardi", "Lundi"], ["2", "1"]);
    let lines = roster_lines(&ds, &selection);
    let keys: Vec<(&str, &str, usize)> = lines
        .iter()
        .map(|rl| (rl.day.as_str(), rl.line.as_str(), rl.len()))
        .collect();
    assert_eq!(keys, vec![("Mardi", "1", 2), ("Lundi", "2", 2), ("Lundi", "1", 3)]);
}

#[test]
fn test_fixture_gaps() {
    let ds = fixture();
    let selection = Selection::new(["Lundi", "Mardi"], ["1", "2"]);
    let models = diagrams(&ds, &selection);
    let durations: Vec<Vec<i64>> = models
        .iter()
        .map(|m| m.edges.iter().map(|e| e.duration_minutes).collect())
        .collect();
    // Lundi/1, Lundi/2, Mardi/1 (invalid arrival suppresses its gap)
    assert_eq!(durations, vec![vec![8, 10], vec![10], vec![]]);
}

#[test]
fn test_render_selection_advisory() {
    let ds = fixture();
    let none: [&str; 0] = [];
    let config = RenderConfig::default();
    assert_eq!(
        render_selection(&ds, &Selection::new(none, ["1"]), &config),
        Err(SelectionAdvisory::NoDays)
    );
    assert_eq!(
        render_selection(&ds, &Selection::new(["Lundi"], none), &config),
        Err(SelectionAdvisory::NoLines)
    );
}

#[test]
fn test_render_selection_no_match() {
    let ds = fixture();
    let selection = Selection::new(["Dimanche"], ["1"]);
    assert_eq!(
        render_selection(&ds, &selection, &RenderConfig::default()),
        Ok(String::new())
    );
}

#[test]
fn test_render_csv_text() {
    let text = std::fs::read_to_string(fixture_path()).unwrap();
    let out = render_csv(&text, &["Mercredi"], &["4"], &AppConfig::default()).unwrap();
    assert!(out.contains("Day: Mercredi"));
    assert!(out.contains("830401"));
    assert!(out.contains("09:00 -> 08:30"));
    let advisory = render_csv(&text, &[], &["4"], &AppConfig::default()).unwrap();
    assert_eq!(advisory, "Please select at least one day.");
}

#[test]
fn test_export_round_trip_columns() {
    let ds = fixture();
    let selection = Selection::new(["Mardi"], ["1"]);
    let mut out = Vec::new();
    export::write_csv(&ds.filter(&selection), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Jour,Ligne Jour,TrainA,HeureA,HeureD,TypeTrainA,Gare");
    assert_eq!(lines[1], "Mardi,1,830301,invalid,06:00:00,Commercial,Centrale");
    assert_eq!(
        export::file_name(selection.days(), "csv"),
        "Lignes_Roulement_Mardi.csv"
    );
}
