//! Integration tests for input parsing and result rendering.

use sorter_cli::config::OutputFormat;
use sorter_cli::error::CliError;
use sorter_cli::input::{parse_values, read_values};
use sorter_cli::report::{algorithm_table, verify, SortReport};
use sorter_core::{Algorithm, Sorter};
use strum::IntoEnumIterator;

// =============================================================================
// Input parsing
// =============================================================================

#[test]
fn parses_whitespace_and_commas() {
    assert_eq!(parse_values("3, 1,2\n-4\t 0").unwrap(), vec![3, 1, 2, -4, 0]);
}

#[test]
fn empty_text_is_empty_sequence() {
    assert!(parse_values("").unwrap().is_empty());
    assert!(parse_values(" ,\n, ").unwrap().is_empty());
}

#[test]
fn bad_token_reports_position() {
    match parse_values("1 2 three 4") {
        Err(CliError::Parse {
            token, position, ..
        }) => {
            assert_eq!(token, "three");
            assert_eq!(position, 2);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn arguments_take_precedence_over_file() {
    let args = vec!["5,4".to_string(), "-1".to_string()];
    let values = read_values(&args, Some(std::path::Path::new("/nonexistent"))).unwrap();
    assert_eq!(values, vec![5, 4, -1]);
}

#[test]
fn reads_values_from_file() {
    let path = std::env::temp_dir().join(format!("sorter-input-{}.txt", std::process::id()));
    std::fs::write(&path, "9 8\n7,6\n").unwrap();
    let values = read_values(&[], Some(&path)).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(values, vec![9, 8, 7, 6]);
}

#[test]
fn missing_file_is_read_error() {
    let err = read_values(&[], Some(std::path::Path::new("/nonexistent/values.txt"))).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn text_report_is_space_separated() {
    let sorter = Sorter::with_algorithm(Algorithm::Bubble);
    let sorted = sorter.sort(&[3, 1, 2]).unwrap();
    let report = SortReport::new(&sorter, 3, sorted);
    assert_eq!(report.render(OutputFormat::Text).unwrap(), "1 2 3");
}

#[test]
fn json_report_fields() {
    let sorter = Sorter::with_algorithm(Algorithm::Merge).stable(false);
    let sorted = sorter.sort(&[2, 2, 1]).unwrap();
    let report = SortReport::new(&sorter, 3, sorted);
    let json: serde_json::Value =
        serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["algorithm"], "merge");
    assert_eq!(json["stable"], false);
    assert_eq!(json["running_time"], "O(n log n)");
    assert_eq!(json["input_len"], 3);
    assert_eq!(json["values"], serde_json::json!([1, 2, 2]));
}

#[test]
fn verify_detects_bad_output() {
    assert!(verify(&[1, 2, 3], &[3, 2, 1]).is_ok());
    assert!(matches!(verify(&[2, 1], &[1, 2]), Err(CliError::Verify(_))));
    assert!(matches!(verify(&[1, 1], &[1, 2]), Err(CliError::Verify(_))));
}

#[test]
fn table_lists_every_algorithm() {
    let table = algorithm_table();
    for algorithm in Algorithm::iter() {
        assert!(table.contains(algorithm.as_ref()), "{algorithm} missing");
        assert!(table.contains(algorithm.summary()));
    }
    assert_eq!(table.lines().count(), 1 + Algorithm::iter().count());
}
