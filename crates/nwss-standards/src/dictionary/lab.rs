//! Laboratory processing methods: concentration, extraction, PCR setup.

use nwss_model::{CrossFieldRule, FieldGroup, FieldSpec, NumericRange, Result};

pub fn lab_processing() -> Result<FieldGroup> {
    Ok(FieldGroup::new("lab_processing")
        .field(FieldSpec::enumeration("solids_separation", "solids_separation").nullable())
        .field(FieldSpec::enumeration("concentration_method", "concentration_method").required())
        .field(FieldSpec::enumeration("extraction_method", "extraction_method").required())
        .field(storage_time("pre_conc_storage_time"))
        .field(storage_temp("pre_conc_storage_temp"))
        .field(storage_time("pre_ext_storage_time"))
        .field(storage_temp("pre_ext_storage_temp"))
        .field(
            FieldSpec::float("tot_conc_vol")
                .nullable()
                .range(NumericRange::greater_than(0.0))
                .unit("Milliliters."),
        )
        .field(FieldSpec::enumeration("ext_blank", "yes_no").nullable())
        .field(FieldSpec::enumeration("rec_eff_target_name", "rec_eff_target_name").nullable())
        .field(FieldSpec::enumeration("rec_eff_spike_matrix", "rec_eff_spike_matrix").nullable())
        .field(
            FieldSpec::float("rec_eff_spike_conc")
                .nullable()
                .range(NumericRange::at_least(0.0))
                .unit("log10 copies per milliliter."),
        )
        .field(FieldSpec::enumeration("pcr_target", "pcr_target").required())
        .field(FieldSpec::string("pcr_target_ref").nullable().max_length(200))
        .field(FieldSpec::enumeration("pcr_type", "pcr_type").required())
        .field(FieldSpec::string("lod_ref").nullable().max_length(200))
        .field(FieldSpec::enumeration("quant_stan_type", "quant_stan_type").nullable())
        .field(FieldSpec::string("stan_ref").nullable().max_length(200))
        .field(FieldSpec::enumeration("inhibition_method", "inhibition_method").nullable())
        .field(
            FieldSpec::integer("num_no_target_control")
                .nullable()
                .range(NumericRange::at_least(0.0)),
        )
        .field(FieldSpec::enumeration("hum_frac_target_mic", "hum_frac_target_mic").nullable())
        .field(FieldSpec::string("hum_frac_target_mic_ref").nullable().max_length(200))
        .field(FieldSpec::enumeration("hum_frac_target_chem", "hum_frac_target_chem").nullable())
        .field(FieldSpec::string("hum_frac_target_chem_ref").nullable().max_length(200))
        .field(FieldSpec::string("other_norm_name").nullable().max_length(100))
        .field(FieldSpec::string("other_norm_ref").nullable().max_length(200))
        .rule(CrossFieldRule::group_dependency(
            "quantification_standard",
            "quant_stan_type",
            &["stan_ref"],
        )))
}

fn storage_time(name: &str) -> FieldSpec {
    FieldSpec::float(name)
        .nullable()
        .range(NumericRange::at_least(0.0))
        .unit("Time in hours.")
}

fn storage_temp(name: &str) -> FieldSpec {
    FieldSpec::float(name).nullable().unit("Degrees Celsius.")
}
