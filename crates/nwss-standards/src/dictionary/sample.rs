//! Sample collection fields.

use nwss_model::{CrossFieldRule, FieldGroup, FieldSpec, NumericRange, Result};

/// Composite sample types; each needs a compositing frequency.
pub const COMPOSITE_SAMPLE_TYPES: &[&str] = &[
    "24-hr flow-weighted composite",
    "24-hr time-weighted composite",
    "24-hr manual composite",
    "12-hr flow-weighted composite",
    "12-hr time-weighted composite",
    "12-hr manual composite",
];

pub fn sample() -> Result<FieldGroup> {
    Ok(FieldGroup::new("sample")
        .field(FieldSpec::string("sample_id").required().length(Some(1), None))
        .field(FieldSpec::string("lab_id").required().length(Some(1), None))
        .field(FieldSpec::enumeration("sample_type", "sample_type").required())
        .field(
            FieldSpec::integer("composite_freq")
                .nullable()
                .range(NumericRange::at_least(1.0))
                .unit("Number of subsamples per composite."),
        )
        .field(FieldSpec::enumeration("sample_matrix", "sample_matrix").required())
        .field(
            FieldSpec::date("sample_collect_date")
                .required()
                .describe("Date the sample was collected (YYYY-MM-DD)."),
        )
        .field(FieldSpec::time("sample_collect_time").nullable())
        .field(
            FieldSpec::float("collection_storage_time")
                .nullable()
                .range(NumericRange::at_least(0.0))
                .unit("Time in hours."),
        )
        .field(
            FieldSpec::float("collection_storage_temp")
                .nullable()
                .unit("Degrees Celsius."),
        )
        .field(
            FieldSpec::float("flow_rate")
                .nullable()
                .range(NumericRange::at_least(0.0))
                .unit("Million gallons per day."),
        )
        .field(
            FieldSpec::float("ph")
                .nullable()
                .range(NumericRange::between(0.0, 14.0)),
        )
        .field(
            FieldSpec::float("conductivity")
                .nullable()
                .range(NumericRange::at_least(0.0))
                .unit("Microsiemens per centimeter."),
        )
        .field(
            FieldSpec::float("tss")
                .nullable()
                .range(NumericRange::at_least(0.0))
                .unit("Milligrams per liter."),
        )
        .field(
            FieldSpec::float("collection_water_temp")
                .nullable()
                .unit("Degrees Celsius."),
        )
        .field(FieldSpec::enumeration("pretreatment", "yes_no").nullable())
        .field(
            FieldSpec::string("pretreatment_specify")
                .nullable()
                .max_length(200)
                .describe("Chemicals used to pretreat the sample."),
        )
        .rule(
            CrossFieldRule::value_implies_required(
                "pretreatment_specify",
                "pretreatment",
                &["yes"],
                "pretreatment_specify",
            )
            .with_message("If \"pretreatment\" is \"yes\", then specify the chemicals used."),
        )
        .rule(CrossFieldRule::value_implies_required(
            "composite_frequency",
            "sample_type",
            COMPOSITE_SAMPLE_TYPES,
            "composite_freq",
        )))
}
