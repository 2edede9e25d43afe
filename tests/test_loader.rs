mod common;

use biotrace::data::loader::{parse_recording, LoadError};
use biotrace::data::model::ColumnData;

#[test]
fn comment_lines_are_skipped_before_and_between_rows() {
    let csv = "\
# Device: Acme BioAmp 3000
# Exported: 2024-11-02
Time,Fz,X1
0.0,1.0,10.0
# operator note: electrode re-gelled here
0.1,2.0,11.0
";
    let table = common::table(csv);
    assert_eq!(table.column_names(), vec!["Time", "Fz", "X1"]);
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.column("Fz").unwrap().numeric().unwrap(), &[1.0, 2.0]);
}

#[test]
fn columns_are_typed_once_at_load() {
    let csv = "\
Time,Fz,Comments
0.0,1.5,ok
0.1,2.5,blink
";
    let table = common::table(csv);
    assert!(table.column("Time").unwrap().is_numeric());
    assert!(table.column("Fz").unwrap().is_numeric());

    let comments = table.column("Comments").unwrap();
    assert!(!comments.is_numeric());
    assert_eq!(
        comments.data,
        ColumnData::Text(vec!["ok".to_string(), "blink".to_string()])
    );
}

#[test]
fn blank_cells_in_numeric_columns_become_nan() {
    let csv = "\
Time,Fz
0.0,
0.1,2.0
";
    let table = common::table(csv);
    let fz = table.column("Fz").unwrap().numeric().unwrap();
    assert!(fz[0].is_nan());
    assert_eq!(fz[1], 2.0);
}

#[test]
fn ragged_row_rejects_the_whole_table() {
    let csv = "\
Time,Fz,X1
0.0,1.0,10.0
0.1,2.0
0.2,3.0,12.0
";
    let err = parse_recording(csv).unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)), "got {err:?}");
}

#[test]
fn empty_input_has_no_header() {
    let err = parse_recording("").unwrap_err();
    assert!(matches!(err, LoadError::MissingHeader), "got {err:?}");
}

#[test]
fn comments_only_input_has_no_header() {
    let err = parse_recording("# just metadata\n# nothing else\n").unwrap_err();
    assert!(matches!(err, LoadError::MissingHeader), "got {err:?}");
}

#[test]
fn header_only_table_has_zero_rows_and_text_columns() {
    let table = common::table("Time,Fz\n");
    assert_eq!(table.n_rows(), 0);
    assert!(!table.column("Time").unwrap().is_numeric());
}

#[test]
fn series_extraction_pairs_time_with_channel() {
    let csv = "\
Time,Fz,Comments
0.0,1.0,a
0.5,4.0,b
";
    let table = common::table(csv);
    let series = table.series("Time", "Fz").unwrap();
    assert_eq!(series.time, vec![0.0, 0.5]);
    assert_eq!(series.values, vec![1.0, 4.0]);

    assert!(table.series("Time", "Comments").is_none());
    assert!(table.series("Time", "Missing").is_none());
}
