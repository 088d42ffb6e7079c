//! End-to-end runs through `generate`: file in, chart out.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use std::path::Path;

use common::{td_cells, RosterCsvBuilder};
use seatchart::{generate, ChartConfig, ErrorKind, Locale, OutputFormat};

fn config(input: &Path, output: &Path) -> ChartConfig {
    ChartConfig {
        input: input.to_path_buf(),
        rows: 2,
        cols: 2,
        seed: Some(0),
        locale: "en".to_string(),
        subject: "Physics".to_string(),
        room: "B-101".to_string(),
        date: "2025/6/1".to_string(),
        time: "09:00".to_string(),
        output: Some(output.to_path_buf()),
        ..ChartConfig::default()
    }
}

#[test]
fn test_generate_writes_chart() {
    let dir = tempfile::tempdir().unwrap();
    let input = RosterCsvBuilder::new()
        .student("A", "1")
        .student("B", "2")
        .student("C", "3")
        .write_to(dir.path(), "roster.csv");
    let output = dir.path().join("chart.html");

    let report = generate(&config(&input, &output)).unwrap();
    assert_eq!(report.output, output);
    assert_eq!(report.seated, 3);
    assert_eq!(report.capacity, 4);
    assert_eq!(report.locale, Locale::En);
    assert_eq!(report.seed, Some(0));

    let html = std::fs::read_to_string(&output).unwrap();
    let cells = td_cells(&html);
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[3], "<td class=\"empty-seat\">Empty</td>");
    assert!(cells[..3].iter().all(|c| c.contains("<br>")));
}

#[test]
fn test_same_seed_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = RosterCsvBuilder::new()
        .students(30)
        .write_to(dir.path(), "roster.csv");
    let first = dir.path().join("first.html");
    let second = dir.path().join("second.html");

    let mut cfg = config(&input, &first);
    cfg.rows = 6;
    cfg.cols = 6;
    generate(&cfg).unwrap();
    cfg.output = Some(second.clone());
    generate(&cfg).unwrap();

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_over_capacity_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = RosterCsvBuilder::new()
        .students(3)
        .write_to(dir.path(), "roster.csv");
    let output = dir.path().join("chart.html");
    let mut cfg = config(&input, &output);
    cfg.rows = 1;

    let err = generate(&cfg).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity);
    assert!(!output.exists());
}

#[test]
fn test_missing_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = RosterCsvBuilder::with_headers(&["Name", "ID number"])
        .row(&["Ann", "1"])
        .write_to(dir.path(), "roster.csv");
    let output = dir.path().join("chart.html");

    let err = generate(&config(&input, &output)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingField);
    assert!(!output.exists());
}

#[test]
fn test_invalid_grid_is_rejected_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("chart.html");
    let mut cfg = config(&dir.path().join("absent.csv"), &output);
    cfg.cols = 0;
    assert_eq!(generate(&cfg).unwrap_err().kind(), ErrorKind::InvalidGrid);
}

#[test]
fn test_empty_roster_renders_empty_chart() {
    let dir = tempfile::tempdir().unwrap();
    let input = RosterCsvBuilder::new().write_to(dir.path(), "roster.csv");
    let output = dir.path().join("chart.html");

    let report = generate(&config(&input, &output)).unwrap();
    assert_eq!(report.seated, 0);
    let html = std::fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("class=\"empty-seat\"").count(), 4);
}

#[test]
fn test_unknown_locale_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let input = RosterCsvBuilder::new()
        .students(2)
        .write_to(dir.path(), "roster.csv");
    let output = dir.path().join("chart.html");
    let mut cfg = config(&input, &output);
    cfg.locale = "fr".to_string();

    let report = generate(&cfg).unwrap();
    assert_eq!(report.locale, Locale::En);
    assert!(std::fs::read_to_string(&output)
        .unwrap()
        .contains("<th>Seat 1</th>"));
}

#[test]
fn test_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    let input = RosterCsvBuilder::new()
        .students(2)
        .write_to(dir.path(), "roster.csv");
    let output = dir.path().join("no_such_dir").join("chart.html");

    let err = generate(&config(&input, &output)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DestinationWrite);
}

#[test]
fn test_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = RosterCsvBuilder::new()
        .students(3)
        .write_to(dir.path(), "roster.csv");
    let output = dir.path().join("chart.json");
    let mut cfg = config(&input, &output);
    cfg.format = OutputFormat::Json;

    generate(&cfg).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["seated"], 3);
    assert_eq!(json["subject"], "Physics");
}

#[test]
fn test_unterminated_quote_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("roster.csv");
    std::fs::write(&input, "First name,ID number\n\"Ann,1\nBen,2\n").unwrap();
    let output = dir.path().join("chart.html");

    let err = generate(&config(&input, &output)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
    assert!(!output.exists());
}
