//! Shared fixtures: a fully valid NWSS record and a fixed validation date.

#![allow(dead_code)]

use chrono::NaiveDate;

use nwss_model::{RawRecord, RecordSchema};
use nwss_validate::ValidationContext;

pub fn schema() -> RecordSchema {
    nwss_standards::nwss_schema().expect("nwss schema")
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 1).expect("date")
}

pub fn ctx() -> ValidationContext {
    ValidationContext::on(today())
}

/// A record that passes every field check and every rule as of [`today`].
pub fn valid_record() -> RawRecord {
    RawRecord::from_pairs([
        ("reporting_jurisdiction", "CA"),
        ("county_names", "Alameda"),
        ("other_jurisdiction", ""),
        ("zipcode", "94607"),
        ("population_served", "350000"),
        ("sewage_travel_time", "6.5"),
        ("sample_location", "wwtp"),
        ("sample_location_specify", ""),
        ("institution_type", "not institution specific"),
        ("epaid", "CA0037702"),
        ("wwtp_name", "East Bay MUD"),
        ("wwtp_jurisdiction", "CA"),
        ("capacity_mgd", "168"),
        ("industrial_input", "4"),
        ("stormwater_input", "no"),
        ("influent_equilibrated", "yes"),
        ("sample_id", "EB-2021-0530"),
        ("lab_id", "LAB-17"),
        ("sample_type", "24-hr flow-weighted composite"),
        ("composite_freq", "24"),
        ("sample_matrix", "raw wastewater"),
        ("sample_collect_date", "2021-05-30"),
        ("sample_collect_time", "08:00"),
        ("flow_rate", "54.2"),
        ("ph", "7.2"),
        ("pretreatment", "no"),
        ("pretreatment_specify", ""),
        ("solids_separation", "none"),
        ("concentration_method", "peg precipitation"),
        ("extraction_method", "qiagen qiaamp viral rna mini kit"),
        ("tot_conc_vol", "40"),
        ("rec_eff_target_name", "bcov"),
        ("rec_eff_spike_matrix", "raw sample"),
        ("rec_eff_spike_conc", "5.1"),
        ("pcr_target", "sars-cov-2 n1"),
        ("pcr_type", "qpcr"),
        ("quant_stan_type", "rna"),
        ("stan_ref", "ATCC VR-3276SD"),
        ("inhibition_method", "spike-in"),
        ("test_result_date", "2021-06-01"),
        ("pcr_target_avg_conc", "152000"),
        ("pcr_target_units", "copies/l wastewater"),
        ("pcr_target_std_error", "8100"),
        ("pcr_target_below_lod", "no"),
        ("lod_sewage", "1200"),
        ("rec_eff_percent", "52"),
        ("inhibition_detect", "no"),
        ("hum_frac_mic_conc", "3100000"),
        ("hum_frac_mic_unit", "copies/l wastewater"),
        ("hum_frac_target_mic", "pepper mild mottle virus"),
        ("hum_frac_target_mic_ref", "doi:10.1128/AEM.01282-20"),
    ])
}

/// [`valid_record`] with the given fields overwritten.
pub fn record_with(overrides: &[(&str, &str)]) -> RawRecord {
    overrides
        .iter()
        .fold(valid_record(), |record, (name, value)| {
            record.with(*name, *value)
        })
}
