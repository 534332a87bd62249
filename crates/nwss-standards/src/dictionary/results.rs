//! Test results and quality-control fields.

use nwss_model::{CrossFieldRule, FieldGroup, FieldSpec, NumericRange, Result};

/// `rec_eff_percent` value meaning "recovery efficiency not measured".
pub const REC_EFF_NOT_MEASURED: &str = "-1";

/// Result and collection dates may run this many days past the validation
/// date, to absorb time-zone differences between lab and submitter.
pub const DATE_HORIZON_DAYS: i64 = 1;

pub fn results() -> Result<FieldGroup> {
    Ok(FieldGroup::new("results")
        .field(
            FieldSpec::date("test_result_date")
                .required()
                .describe("Date the PCR result was produced (YYYY-MM-DD)."),
        )
        .field(concentration("pcr_target_avg_conc").required())
        .field(FieldSpec::enumeration("pcr_target_units", "concentration_unit").required())
        .field(concentration("pcr_target_std_error").nullable())
        .field(concentration("pcr_target_cl_95_lo").nullable())
        .field(concentration("pcr_target_cl_95_up").nullable())
        .field(FieldSpec::enumeration("pcr_target_below_lod", "yes_no").required())
        .field(concentration("lod_sewage").nullable())
        .field(FieldSpec::enumeration("ntc_amplify", "yes_no").nullable())
        .field(
            FieldSpec::float("rec_eff_percent")
                .required()
                .range(NumericRange::between(-1.0, 200.0))
                .unit("Percent; -1 when not measured."),
        )
        .field(FieldSpec::enumeration("inhibition_detect", "inhibition_detect").required())
        .field(FieldSpec::enumeration("inhibition_adjust", "yes_no").nullable())
        .field(concentration("hum_frac_mic_conc").nullable())
        .field(FieldSpec::enumeration("hum_frac_mic_unit", "concentration_unit").nullable())
        .field(concentration("hum_frac_chem_conc").nullable())
        .field(FieldSpec::enumeration("hum_frac_chem_unit", "chemical_unit").nullable())
        .field(concentration("other_norm_conc").nullable())
        .field(FieldSpec::string("other_norm_unit").nullable().max_length(50))
        .field(FieldSpec::enumeration("quality_flag", "yes_no").nullable())
        // Only the target name follows the not-measured sentinel; the spike
        // matrix and spike concentration are left unconstrained.
        .rule(CrossFieldRule::sentinel_exclusive(
            "recovery_efficiency_target",
            "rec_eff_percent",
            REC_EFF_NOT_MEASURED,
            "rec_eff_target_name",
        ))
        .rule(CrossFieldRule::group_dependency(
            "human_fraction_microbial",
            "hum_frac_mic_conc",
            &[
                "hum_frac_mic_unit",
                "hum_frac_target_mic",
                "hum_frac_target_mic_ref",
            ],
        ))
        .rule(CrossFieldRule::group_dependency(
            "human_fraction_chemical",
            "hum_frac_chem_conc",
            &[
                "hum_frac_chem_unit",
                "hum_frac_target_chem",
                "hum_frac_target_chem_ref",
            ],
        ))
        .rule(CrossFieldRule::group_dependency(
            "other_normalization",
            "other_norm_conc",
            &["other_norm_unit", "other_norm_name", "other_norm_ref"],
        ))
        .rule(CrossFieldRule::conditional_equality(
            "inhibition_not_tested",
            "inhibition_detect",
            "not tested",
            "inhibition_method",
            "none",
        ))
        .rule(CrossFieldRule::mutually_exclusive(
            "standard_error_confidence_interval",
            "pcr_target_std_error",
            &["pcr_target_cl_95_lo", "pcr_target_cl_95_up"],
        ))
        .rule(CrossFieldRule::group_dependency(
            "confidence_interval_pair",
            "pcr_target_cl_95_lo",
            &["pcr_target_cl_95_up"],
        ))
        .rule(CrossFieldRule::chronological(
            "collection_before_result",
            "sample_collect_date",
            "test_result_date",
            DATE_HORIZON_DAYS,
        )))
}

fn concentration(name: &str) -> FieldSpec {
    FieldSpec::float(name).range(NumericRange::at_least(0.0))
}
