//! Collection site and treatment plant fields.

use nwss_model::{CrossFieldRule, FieldGroup, FieldSpec, NumericRange, Result};

/// Where the sample was taken and who it represents.
pub fn collection_site() -> Result<FieldGroup> {
    Ok(FieldGroup::new("collection_site")
        .field(
            FieldSpec::enumeration("reporting_jurisdiction", "jurisdiction")
                .required()
                .describe("Postal abbreviation of the jurisdiction submitting the data."),
        )
        .field(
            FieldSpec::string("county_names")
                .nullable()
                .describe("Comma-separated names of the counties served by the sewershed."),
        )
        .field(
            FieldSpec::string("other_jurisdiction")
                .nullable()
                .describe("Cities or other jurisdictions served, when not county-based."),
        )
        .field(
            FieldSpec::string("zipcode")
                .required()
                .length(Some(5), Some(5))
                .describe("Five-digit ZIP code of the sampling site."),
        )
        .field(
            FieldSpec::integer("population_served")
                .required()
                .range(NumericRange::at_least(0.0))
                .describe("Estimated number of people contributing to the sample."),
        )
        .field(
            FieldSpec::float("sewage_travel_time")
                .nullable()
                .range(NumericRange::at_least(0.0))
                .unit("Time in hours."),
        )
        .field(FieldSpec::enumeration("sample_location", "sample_location").required())
        .field(
            FieldSpec::string("sample_location_specify")
                .nullable()
                .max_length(40)
                .describe("Details of an upstream sampling location."),
        )
        .field(FieldSpec::enumeration("institution_type", "institution_type").required())
        .rule(
            CrossFieldRule::either_or(
                "county_or_other_jurisdiction",
                "county_names",
                "other_jurisdiction",
            )
            .with_message("Either county_names or other_jurisdiction must have a value."),
        )
        .rule(
            CrossFieldRule::value_implies_required(
                "upstream_location_specify",
                "sample_location",
                &["upstream"],
                "sample_location_specify",
            )
            .with_message(
                "An \"upstream\" sample_location must have a sample_location_specify value.",
            ),
        ))
}

/// Wastewater treatment plant attributes.
pub fn treatment_plant() -> Result<FieldGroup> {
    Ok(FieldGroup::new("treatment_plant")
        .field(
            FieldSpec::string("epaid")
                .nullable()
                .pattern(r"^[A-Za-z]{2}[0-9]{7}$")?
                .describe("NPDES permit number: two letters followed by seven digits."),
        )
        .field(FieldSpec::string("wwtp_name").nullable().max_length(100))
        .field(FieldSpec::enumeration("wwtp_jurisdiction", "jurisdiction").required())
        .field(
            FieldSpec::float("capacity_mgd")
                .nullable()
                .range(NumericRange::at_least(0.0))
                .unit("Million gallons per day."),
        )
        .field(
            FieldSpec::float("industrial_input")
                .nullable()
                .range(NumericRange::between(0.0, 100.0))
                .unit("Percent of flow."),
        )
        .field(FieldSpec::enumeration("stormwater_input", "yes_no").nullable())
        .field(FieldSpec::enumeration("influent_equilibrated", "yes_no").nullable()))
}
