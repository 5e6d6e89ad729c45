// End-to-end pipeline tests
// Config -> scan -> sort -> table -> CSV

mod common;

use rust_fsas::error::{ExportError, RunError, ScanError};
use rust_fsas::progress::NoopProgress;
use rust_fsas::scanner::Filter;
use rust_fsas::{Config, FileRecord, Outcome, run};

fn read_back(path: &std::path::Path) -> Vec<FileRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), ["size", "location"]);
    reader.deserialize().map(|r| r.unwrap()).collect()
}

#[test]
fn test_csv_round_trip_matches_displayed_records() {
    let dir = common::create_test_tree();
    let out = dir.path().join("results.csv");
    let config = common::size_config(dir.path(), 1, Some(out.clone()));

    let Outcome::Reported(displayed) = run(&config, &NoopProgress).unwrap() else {
        panic!("expected results");
    };

    assert_eq!(displayed.len(), 3);
    assert!(displayed[0].location.ends_with("big.bin"));
    assert!(displayed[1].location.ends_with("mid.bin"));
    assert!(displayed[2].location.ends_with("a.bin"));

    assert_eq!(read_back(&out), displayed);
}

#[test]
fn test_no_output_file_written_without_flag() {
    let dir = common::create_test_tree();
    let config = common::size_config(dir.path(), 1, None);

    let outcome = run(&config, &NoopProgress).unwrap();

    assert!(matches!(outcome, Outcome::Reported(ref r) if r.len() == 3));
    assert!(!dir.path().join("results.csv").exists());
}

#[test]
fn test_empty_result_is_success_with_header_only_csv() {
    let dir = common::create_test_tree();
    let out = dir.path().join("results.csv");
    let config = common::size_config(dir.path(), 250, Some(out.clone()));

    let outcome = run(&config, &NoopProgress).unwrap();

    assert!(matches!(outcome, Outcome::NoResults));
    assert!(read_back(&out).is_empty());
    assert_eq!(std::fs::read_to_string(&out).unwrap().trim_end(), "size,location");
}

#[test]
fn test_empty_result_without_flag_writes_nothing() {
    let dir = common::create_test_tree();
    let config = common::size_config(dir.path(), 250, None);

    let outcome = run(&config, &NoopProgress).unwrap();

    assert!(matches!(outcome, Outcome::NoResults));
    assert!(!dir.path().join("results.csv").exists());
}

#[test]
fn test_empty_result_csv_write_failure_is_an_error() {
    let dir = common::create_test_tree();
    let out = dir.path().join("no-such-dir").join("results.csv");
    let config = common::size_config(dir.path(), 250, Some(out));

    let err = run(&config, &NoopProgress).unwrap_err();

    assert!(matches!(err, RunError::Export(ExportError::Csv { .. })));
}

#[test]
fn test_csv_write_failure_is_an_error() {
    let dir = common::create_test_tree();
    let out = dir.path().join("no-such-dir").join("results.csv");
    let config = common::size_config(dir.path(), 1, Some(out));

    let err = run(&config, &NoopProgress).unwrap_err();

    assert!(matches!(err, RunError::Export(ExportError::Csv { .. })));
}

#[test]
fn test_search_subcommand_fails_instead_of_returning_nothing() {
    let dir = common::create_test_tree();
    let config = Config {
        base: dir.path().to_path_buf(),
        filter: Filter::NamePattern("*".to_string()),
        output: None,
        quiet: true,
    };

    let err = run(&config, &NoopProgress).unwrap_err();

    assert!(matches!(err, RunError::Scan(ScanError::Unsupported(_))));
}

#[test]
fn test_missing_base_is_an_error() {
    let dir = common::create_test_tree();
    let config = common::size_config(&dir.path().join("missing"), 1, None);

    let err = run(&config, &NoopProgress).unwrap_err();

    assert!(matches!(err, RunError::Scan(ScanError::InvalidBase(_))));
}
