//! Cross-field rules of the NWSS dictionary, exercised through full records.

mod common;

use nwss_model::RecordResult;
use nwss_validate::RecordValidator;

use common::{ctx, record_with, schema};

fn validate(overrides: &[(&str, &str)]) -> RecordResult {
    let schema = schema();
    let result = RecordValidator::new(&schema).validate_record(&record_with(overrides), &ctx());
    assert!(
        result.field_errors.is_empty(),
        "fixture override produced field errors: {:#?}",
        result.field_errors
    );
    result
}

fn violated(overrides: &[(&str, &str)]) -> Vec<String> {
    validate(overrides)
        .rule_violations
        .into_iter()
        .map(|violation| violation.rule)
        .collect()
}

#[test]
fn county_or_other_jurisdiction() {
    let result = validate(&[("county_names", ""), ("other_jurisdiction", "")]);
    let violation = result
        .violation("county_or_other_jurisdiction")
        .expect("violation");
    assert_eq!(
        violation.message,
        "Either county_names or other_jurisdiction must have a value."
    );
    assert!(violated(&[("county_names", "X"), ("other_jurisdiction", "")]).is_empty());
    assert!(violated(&[("county_names", ""), ("other_jurisdiction", "Y")]).is_empty());
}

#[test]
fn upstream_location_needs_specification() {
    let result = validate(&[
        ("sample_location", "upstream"),
        ("sample_location_specify", ""),
    ]);
    let violation = result
        .violation("upstream_location_specify")
        .expect("violation");
    assert!(violation.involves("sample_location_specify"));
    assert_eq!(
        violation.message,
        "An \"upstream\" sample_location must have a sample_location_specify value."
    );

    assert!(
        violated(&[
            ("sample_location", "upstream"),
            ("sample_location_specify", "culvert #3"),
        ])
        .is_empty()
    );
    assert!(
        violated(&[("sample_location", "wwtp"), ("sample_location_specify", "")]).is_empty()
    );
}

#[test]
fn recovery_efficiency_sentinel() {
    let result = validate(&[("rec_eff_percent", "-1"), ("rec_eff_target_name", "oc43")]);
    let violation = result
        .violation("recovery_efficiency_target")
        .expect("violation");
    assert!(violation.message.contains("must be empty"), "{}", violation.message);

    let result = validate(&[("rec_eff_percent", "52"), ("rec_eff_target_name", "")]);
    let violation = result
        .violation("recovery_efficiency_target")
        .expect("violation");
    assert!(violation.message.contains("cannot be empty"), "{}", violation.message);

    assert!(violated(&[("rec_eff_percent", "52"), ("rec_eff_target_name", "oc43")]).is_empty());
}

#[test]
fn unmeasured_recovery_leaves_spike_fields_alone() {
    let rules = violated(&[
        ("rec_eff_percent", "-1"),
        ("rec_eff_target_name", ""),
        ("rec_eff_spike_matrix", "raw sample"),
        ("rec_eff_spike_conc", "5.1"),
    ]);
    assert!(rules.is_empty(), "{rules:?}");
}

#[test]
fn collection_before_result() {
    let result = validate(&[
        ("sample_collect_date", "2021-05-30"),
        ("test_result_date", "2021-05-29"),
    ]);
    assert!(result.violation("collection_before_result").is_some());

    assert!(
        violated(&[
            ("sample_collect_date", "2021-05-30"),
            ("test_result_date", "2021-05-30"),
        ])
        .is_empty()
    );

    // One day of slack past the validation date, no more.
    assert!(violated(&[("test_result_date", "2021-06-02")]).is_empty());
    assert_eq!(
        violated(&[("test_result_date", "2021-06-03")]),
        ["collection_before_result"]
    );
}

#[test]
fn collection_and_result_may_both_fall_tomorrow() {
    let result = validate(&[
        ("sample_collect_date", "2021-06-02"),
        ("test_result_date", "2021-06-02"),
    ]);
    assert!(result.is_valid(), "{:#?}", result.rule_violations);
}

#[test]
fn collection_date_past_horizon_violates_chronology() {
    let result = validate(&[
        ("sample_collect_date", "2021-06-03"),
        ("test_result_date", "2021-06-03"),
    ]);
    let violation = result
        .violation("collection_before_result")
        .expect("chronology violation");
    assert_eq!(
        violation.message,
        "sample_collect_date (2021-06-03) cannot be later than 2021-06-02. \
         test_result_date (2021-06-03) cannot be later than 2021-06-02."
    );
}

#[test]
fn standard_error_or_confidence_interval() {
    assert_eq!(
        violated(&[
            ("pcr_target_cl_95_lo", "140000"),
            ("pcr_target_cl_95_up", "165000"),
        ]),
        ["standard_error_confidence_interval"]
    );
    assert!(
        violated(&[
            ("pcr_target_std_error", ""),
            ("pcr_target_cl_95_lo", "140000"),
            ("pcr_target_cl_95_up", "165000"),
        ])
        .is_empty()
    );
    assert_eq!(
        violated(&[
            ("pcr_target_std_error", ""),
            ("pcr_target_cl_95_lo", "140000"),
        ]),
        ["confidence_interval_pair"]
    );
}

#[test]
fn pretreatment_and_composite_frequency() {
    let result = validate(&[("pretreatment", "yes"), ("pretreatment_specify", "")]);
    assert_eq!(
        result
            .violation("pretreatment_specify")
            .map(|v| v.message.as_str()),
        Some("If \"pretreatment\" is \"yes\", then specify the chemicals used.")
    );

    assert_eq!(violated(&[("composite_freq", "")]), ["composite_frequency"]);
    assert!(violated(&[("sample_type", "grab"), ("composite_freq", "")]).is_empty());
}

#[test]
fn normalization_groups() {
    let result = validate(&[("hum_frac_target_mic_ref", ""), ("hum_frac_mic_unit", "")]);
    let violation = result
        .violation("human_fraction_microbial")
        .expect("violation");
    assert!(
        violation
            .message
            .ends_with("(missing: hum_frac_mic_unit, hum_frac_target_mic_ref)."),
        "{}",
        violation.message
    );

    assert_eq!(
        violated(&[("hum_frac_chem_conc", "12.5")]),
        ["human_fraction_chemical"]
    );
    assert_eq!(
        violated(&[("other_norm_conc", "4.0")]),
        ["other_normalization"]
    );
    assert_eq!(violated(&[("stan_ref", "")]), ["quantification_standard"]);
}

#[test]
fn inhibition_not_tested_pairs_with_no_method() {
    assert!(
        violated(&[
            ("inhibition_detect", "not tested"),
            ("inhibition_method", "none"),
        ])
        .is_empty()
    );
    assert_eq!(
        violated(&[("inhibition_detect", "not tested")]),
        ["inhibition_not_tested"]
    );
    assert_eq!(
        violated(&[("inhibition_method", "none")]),
        ["inhibition_not_tested"]
    );
}

#[test]
fn all_violations_are_collected() {
    let rules = violated(&[
        ("county_names", ""),
        ("sample_location", "upstream"),
        ("pretreatment", "yes"),
    ]);
    assert_eq!(
        rules,
        [
            "county_or_other_jurisdiction",
            "upstream_location_specify",
            "pretreatment_specify",
        ]
    );
}
