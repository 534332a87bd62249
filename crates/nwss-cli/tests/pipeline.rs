//! End-to-end validation of CSV inputs through the library pipeline.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use nwss_cli::pipeline::validate_inputs;
use nwss_cli::summary::{describe_constraints, fields_table, issue_table, summary_table};
use nwss_model::FieldSpec;
use nwss_standards::nwss_schema;
use nwss_validate::{FixedClock, ValidationOptions};

const HEADER: &str = "reporting_jurisdiction,county_names,other_jurisdiction,zipcode,\
population_served,sample_location,sample_location_specify,institution_type,wwtp_jurisdiction,\
sample_id,lab_id,sample_type,composite_freq,sample_matrix,sample_collect_date,\
concentration_method,extraction_method,pcr_target,pcr_type,test_result_date,\
pcr_target_avg_conc,pcr_target_units,pcr_target_below_lod,rec_eff_percent,\
rec_eff_target_name,inhibition_detect";

const VALID_ROW: &str = "CA,Alameda,,94607,350000,wwtp,,not institution specific,CA,\
EB-1,LAB-17,grab,,raw wastewater,2021-05-30,peg precipitation,\
qiagen qiaamp viral rna mini kit,sars-cov-2 n1,qpcr,2021-06-01,152000,\
copies/l wastewater,no,52,bcov,no";

const UPSTREAM_ROW: &str = "CA,Alameda,,94607,350000,upstream,,not institution specific,CA,\
EB-2,LAB-17,grab,,raw wastewater,2021-05-30,peg precipitation,\
qiagen qiaamp viral rna mini kit,sars-cov-2 n1,qpcr,2021-06-01,152000,\
copies/l wastewater,no,52,bcov,no";

fn write_csv(dir: &Path, name: &str, rows: &[&str]) {
    let mut contents = String::from(HEADER);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    fs::write(dir.join(name), contents).expect("write csv");
}

fn clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2021, 6, 1).expect("date"))
}

#[test]
fn validates_every_csv_in_a_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_csv(dir.path(), "a_clean.csv", &[VALID_ROW, VALID_ROW]);
    write_csv(dir.path(), "b_upstream.csv", &[VALID_ROW, UPSTREAM_ROW]);

    let schema = nwss_schema().expect("nwss schema");
    let run = validate_inputs(
        &[dir.path().to_path_buf()],
        &schema,
        ValidationOptions::default(),
        &clock(),
    )
    .expect("validate inputs");

    assert_eq!(run.files.len(), 2);
    assert_eq!(run.record_count(), 4);
    assert_eq!(run.invalid_count(), 1);
    assert!(!run.all_valid());
    assert!(run.files[0].batch.all_valid(), "{:#?}", run.files[0].batch);

    let upstream = &run.files[1].batch.records[1];
    assert_eq!(upstream.index, 1);
    assert!(upstream.violation("upstream_location_specify").is_some());

    let summary = summary_table(&run).to_string();
    assert!(summary.contains("a_clean.csv"));
    assert!(summary.contains("TOTAL"));

    let issues = issue_table(&run).expect("issue table").to_string();
    assert!(issues.contains("upstream_location_specify"));
}

#[test]
fn unknown_columns_follow_options() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("extra.csv");
    fs::write(
        &path,
        format!("{HEADER},lab_notes\n{VALID_ROW},rerun\n"),
    )
    .expect("write csv");

    let schema = nwss_schema().expect("nwss schema");
    let inputs = [path];
    let strict = validate_inputs(&inputs, &schema, ValidationOptions::default(), &clock())
        .expect("strict run");
    assert!(!strict.all_valid());

    let lenient = validate_inputs(
        &inputs,
        &schema,
        ValidationOptions::default().ignore_unknown_fields(),
        &clock(),
    )
    .expect("lenient run");
    assert!(lenient.all_valid());
    assert!(issue_table(&lenient).is_none());
}

#[test]
fn missing_input_fails_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let schema = nwss_schema().expect("nwss schema");
    let result = validate_inputs(
        &[dir.path().join("nope.csv")],
        &schema,
        ValidationOptions::default(),
        &clock(),
    );
    assert!(result.is_err());
}

#[test]
fn dictionary_table_lists_constraints() {
    let schema = nwss_schema().expect("nwss schema");
    let zipcode = schema.field("zipcode").expect("zipcode");
    insta::assert_snapshot!(describe_constraints(zipcode), @"length 5..5");
    let collected = schema.field("sample_collect_date").expect("collect date");
    assert_eq!(describe_constraints(collected), "-");
    let bounded = FieldSpec::date("received_date").not_in_future();
    insta::assert_snapshot!(describe_constraints(&bounded), @"not in future");
    let location = schema.field("sample_location").expect("location");
    assert_eq!(describe_constraints(location), "one of: sample_location");

    let table = fields_table(&schema).to_string();
    assert!(table.contains("population_served"));
    assert!(table.contains("collection_site"));
}
