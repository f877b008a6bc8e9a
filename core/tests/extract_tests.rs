//! End-to-end extraction tests: CSV text in, [`Collection`] out.

mod common;

use common::{OLD_CSV, grid, open_csv, upper_lower_config};
use param_diff::{ExtractConfig, ExtractError, ParametricFile, extract};

#[test]
fn worked_example_old_file_extracts_both_entries() {
    let config = upper_lower_config();
    let file = open_csv(OLD_CSV, &config);

    assert_eq!(file.collection.parametric_column, Some(1));
    assert_eq!(file.collection.entry_count, 2);
    assert_eq!(file.collection.len(), 2);

    let p1 = file.collection.entry("P1").expect("P1 should exist");
    assert_eq!(p1.limits.get("upper"), Some(&Some(10.0)));
    assert_eq!(p1.limits.get("lower"), Some(&Some(5.0)));

    let p2 = file.collection.entry("P2").expect("P2 should exist");
    assert_eq!(p2.limits.get("upper"), Some(&Some(20.0)));
    assert_eq!(p2.limits.get("lower"), Some(&Some(8.0)));
}

#[test]
fn rows_before_the_marker_are_skipped_without_error() {
    // The preamble rows would abort with a parse error if they were ever
    // classified as value rows.
    let text = "title,report for Q3\n\
                min,not-a-number\n\
                section,parametric limits\n\
                key,,P1\n\
                min,,4\n";
    let file = open_csv(text, &ExtractConfig::default());

    assert_eq!(file.collection.parametric_column, Some(1));
    let entry = file.collection.entry("P1").expect("P1 should exist");
    assert_eq!(entry.limits.get("min"), Some(&Some(4.0)));
}

#[test]
fn exclusive_boundary_starts_data_one_column_after_the_marker() {
    // begin_from_parametric defaults to false: the marker column itself
    // carries no data.
    let text = "x,parametric,y\n\
                key,IGNORED,P1\n\
                min,junk,7\n";
    let file = open_csv(text, &ExtractConfig::default());

    assert_eq!(file.collection.parametric_column, Some(1));
    assert_eq!(file.collection.len(), 1);
    assert!(file.collection.entry("IGNORED").is_none());
    let entry = file.collection.entry("P1").expect("P1 should exist");
    assert_eq!(entry.limits.get("min"), Some(&Some(7.0)));
}

#[test]
fn inclusive_boundary_starts_data_at_the_marker_column() {
    let config = ExtractConfig::builder()
        .begin_from_parametric(true)
        .build()
        .expect("valid config");
    let text = "x,parametric,y\n\
                key,P1,P2\n\
                min,3,4\n";
    let file = open_csv(text, &config);

    assert_eq!(file.collection.len(), 2);
    let p1 = file.collection.entry("P1").expect("P1 should exist");
    assert_eq!(p1.limits.get("min"), Some(&Some(3.0)));
}

#[test]
fn marker_match_is_case_insensitive_and_substring() {
    let text = "x,Selected PARAMETRIC Limits\n\
                key,,P1\n\
                min,,2\n";
    let file = open_csv(text, &ExtractConfig::default());

    assert_eq!(file.collection.parametric_column, Some(1));
    assert!(file.collection.entry("P1").is_some());
}

#[test]
fn null_sentinel_becomes_absent_value_not_zero() {
    let text = "x,parametric\n\
                key,,P1,P2\n\
                min,,N/A,0\n";
    let file = open_csv(text, &ExtractConfig::default());

    let p1 = file.collection.entry("P1").expect("P1 should exist");
    assert_eq!(p1.limits.get("min"), Some(&None));

    // The sentinel must stay distinguishable from a literal zero.
    let p2 = file.collection.entry("P2").expect("P2 should exist");
    assert_eq!(p2.limits.get("min"), Some(&Some(0.0)));
    assert!(p1.limits_differ(p2));
}

#[test]
fn sentinel_matching_is_exact_including_whitespace() {
    // The CSV reader preserves leading whitespace, so " N/A" is not the
    // configured "N/A" sentinel and must fail numeric parsing instead.
    let text = "x,parametric\n\
                key,,P1\n\
                min,, N/A\n";
    let result = ParametricFile::open(text.as_bytes(), &ExtractConfig::default());

    let err = result.expect_err("padded sentinel should fail to parse");
    assert!(err.to_string().contains("row 3, column 3"));
}

#[test]
fn invalid_number_reports_one_based_row_and_column() {
    let text = "x,parametric\n\
                key,P1,P2\n\
                min,1,abc\n";
    let rows = param_diff::read_rows(text.as_bytes()).expect("fixture should read");
    let err = extract(&rows, &ExtractConfig::default()).expect_err("abc is not a number");

    match &err {
        ExtractError::InvalidNumber {
            label,
            row,
            column,
            value,
            ..
        } => {
            assert_eq!(label, "min");
            assert_eq!(*row, 3);
            assert_eq!(*column, 3);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
    assert_eq!(err.code(), "PARDIFF_EXTRACT_001");
    assert!(err.to_string().contains("invalid min value 'abc'"));
}

#[test]
fn column_zero_is_never_a_data_column() {
    // Even with an inclusive boundary at column 0, the first cell of each row
    // is the classification cell and never yields an entry or a value.
    let config = ExtractConfig::builder()
        .begin_from_parametric(true)
        .build()
        .expect("valid config");
    let rows = grid(&[&["parametric"], &["key", "P1"], &["min", "5"]]);
    let collection = extract(&rows, &config).expect("extraction should succeed");

    assert_eq!(collection.len(), 1);
    let entry = collection.entry("P1").expect("P1 should exist");
    assert_eq!(entry.limits.get("min"), Some(&Some(5.0)));
}

#[test]
fn value_row_without_a_name_row_yields_an_unnamed_entry() {
    let rows = grid(&[&["x", "parametric"], &["min", "", "3"]]);
    let collection =
        extract(&rows, &ExtractConfig::default()).expect("extraction should succeed");

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.entry_count, 0);
    let entry = collection.entry("").expect("unnamed entry should exist");
    assert_eq!(entry.limits.get("min"), Some(&Some(3.0)));
}

#[test]
fn later_name_row_restarts_the_column() {
    // A second key row discards the limits accumulated so far for its
    // columns; entry_count still counts every name cell seen.
    let rows = grid(&[
        &["x", "parametric"],
        &["key", "", "P1"],
        &["min", "", "1"],
        &["key", "", "P1B"],
        &["max", "", "2"],
    ]);
    let collection =
        extract(&rows, &ExtractConfig::default()).expect("extraction should succeed");

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.entry_count, 2);
    let entry = collection.entry("P1B").expect("P1B should exist");
    assert_eq!(entry.limits.get("max"), Some(&Some(2.0)));
    assert!(entry.limits.get("min").is_none());
}

#[test]
fn unequal_cell_counts_are_tolerated() {
    // Short value rows simply cover fewer columns.
    let config = ExtractConfig::builder()
        .begin_from_parametric(true)
        .build()
        .expect("valid config");
    let text = "x,parametric\n\
                key,P1,P2,P3\n\
                min,1\n\
                max,5,6,7\n";
    let file = open_csv(text, &config);

    assert_eq!(file.collection.len(), 3);
    let p1 = file.collection.entry("P1").expect("P1 should exist");
    assert_eq!(p1.limits.get("min"), Some(&Some(1.0)));
    assert_eq!(p1.limits.get("max"), Some(&Some(5.0)));
    let p3 = file.collection.entry("P3").expect("P3 should exist");
    assert!(p3.limits.get("min").is_none());
    assert_eq!(p3.limits.get("max"), Some(&Some(7.0)));
}

#[test]
fn names_preserve_surrounding_whitespace() {
    let config = ExtractConfig::builder()
        .begin_from_parametric(true)
        .build()
        .expect("valid config");
    let text = "x,parametric\nkey, P1\n";
    let file = open_csv(text, &config);

    assert!(file.collection.entry(" P1").is_some());
    assert!(file.collection.entry("P1").is_none());
}

#[test]
fn empty_input_is_rejected() {
    let err = ParametricFile::open("".as_bytes(), &ExtractConfig::default())
        .expect_err("empty input must be rejected");
    assert!(err.to_string().contains("PARDIFF_CSV_003"));
}

#[test]
fn open_path_reads_a_file_on_disk() {
    let temp = tempfile::TempDir::new().expect("failed to create temp dir");
    let path = temp.path().join("limits.csv");
    std::fs::write(&path, OLD_CSV).expect("failed to write fixture");

    let file = ParametricFile::open_path(&path, &upper_lower_config())
        .expect("file on disk should open");
    assert_eq!(file.collection.len(), 2);

    let err = ParametricFile::open_path(temp.path().join("missing.csv"), &upper_lower_config())
        .expect_err("missing path must fail");
    assert!(err.to_string().contains("PARDIFF_CSV_001"));
}

#[test]
fn missing_marker_yields_zero_entries_and_a_warning() {
    let text = "alpha,beta\nkey,P1\nmin,1\n";
    let file = open_csv(text, &ExtractConfig::default());

    assert!(file.collection.is_empty());
    assert_eq!(file.collection.parametric_column, None);
    assert_eq!(file.collection.warnings.len(), 1);
    assert!(file.collection.warnings[0].contains("parametric"));
}

#[test]
fn limit_report_preset_reads_upper_and_lower_labels() {
    let config = ExtractConfig::limit_report();
    let text = "result,parametric tests\n\
                key,P1\n\
                Upper Limit,12.5\n\
                Lower Limit,NA\n";
    let file = open_csv(text, &config);

    let entry = file.collection.entry("P1").expect("P1 should exist");
    assert_eq!(entry.limits.get("upper limit"), Some(&Some(12.5)));
    assert_eq!(entry.limits.get("lower limit"), Some(&None));
}
