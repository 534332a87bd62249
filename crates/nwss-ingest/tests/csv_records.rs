use std::fs;

use nwss_ingest::{collect_inputs, list_csv_files, read_records, read_records_from_reader};
use nwss_model::RawValue;

#[test]
fn rows_are_keyed_by_trimmed_header() {
    let input = "\u{feff}zipcode , sample_location,county_names\n 94607 ,wwtp,\n";
    let records = read_records_from_reader(input.as_bytes()).expect("read csv");
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.get("zipcode"), Some(&RawValue::text("94607")));
    assert_eq!(record.get("sample_location"), Some(&RawValue::text("wwtp")));
    assert_eq!(record.get("county_names"), Some(&RawValue::text("")));
}

#[test]
fn short_rows_are_padded_and_blank_rows_skipped() {
    let input = "a,b,c\n1\n,,\n4,5,6\n";
    let records = read_records_from_reader(input.as_bytes()).expect("read csv");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].len(), 3);
    assert_eq!(records[0].get("c"), Some(&RawValue::text("")));
    assert_eq!(records[1].get("b"), Some(&RawValue::text("5")));
}

#[test]
fn duplicate_headers_are_rejected() {
    let input = "zipcode,zipcode\n1,2\n";
    let err = read_records_from_reader(input.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("duplicate column `zipcode`"));
}

#[test]
fn cells_past_the_header_are_rejected() {
    let input = "sample_id,zipcode\nS-1,94607\nS-2,94607,extra\n";
    let err = read_records_from_reader(input.as_bytes()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "data row 2 has 3 cells but the header has 2 columns"
    );
}

#[test]
fn blank_trailing_cells_are_tolerated() {
    let input = "sample_id,zipcode\nS-1,94607,,\n";
    let records = read_records_from_reader(input.as_bytes()).expect("read csv");
    assert_eq!(records[0].len(), 2);
}

#[test]
fn quoted_cells_keep_commas() {
    let input = "county_names,zipcode\n\"Alameda, Contra Costa\",94607\n";
    let records = read_records_from_reader(input.as_bytes()).expect("read csv");
    assert_eq!(
        records[0].get("county_names"),
        Some(&RawValue::text("Alameda, Contra Costa"))
    );
}

#[test]
fn reads_files_and_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("b.csv"), "sample_id\nB-1\nB-2\n").expect("write b");
    fs::write(dir.path().join("a.CSV"), "sample_id\nA-1\n").expect("write a");
    fs::write(dir.path().join("notes.txt"), "ignore me").expect("write notes");

    let files = list_csv_files(dir.path()).expect("list");
    let names: Vec<_> = files
        .iter()
        .filter_map(|path| path.file_name()?.to_str())
        .collect();
    assert_eq!(names, ["a.CSV", "b.csv"]);

    let inputs = collect_inputs(&[dir.path().join("b.csv"), dir.path().to_path_buf()])
        .expect("collect inputs");
    assert_eq!(inputs.len(), 3);

    let records = read_records(&inputs[0]).expect("read b");
    assert_eq!(records.len(), 2);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = collect_inputs(&[dir.path().join("absent.csv")]).unwrap_err();
    assert!(err.to_string().starts_with("input not found"));
}
