//! The NWSS water-sample data dictionary.
//!
//! Fields are declared in named groups that mirror the sections of the
//! dictionary. [`nwss_schema`] concatenates them into one record schema.

mod lab;
mod results;
mod sample;
mod site;

pub use lab::lab_processing;
pub use results::{DATE_HORIZON_DAYS, REC_EFF_NOT_MEASURED, results};
pub use sample::{COMPOSITE_SAMPLE_TYPES, sample};
pub use site::{collection_site, treatment_plant};

use nwss_model::{FieldGroup, RecordSchema, ValueSetRegistry};

use crate::error::StandardsError;
use crate::value_sets::load_value_sets;

/// Record type name used in exported schemas.
pub const SCHEMA_NAME: &str = "WaterSample";

/// All dictionary groups, in record order.
pub fn field_groups() -> Result<Vec<FieldGroup>, StandardsError> {
    Ok(vec![
        collection_site()?,
        treatment_plant()?,
        sample()?,
        lab_processing()?,
        results()?,
    ])
}

/// Build the NWSS record schema from the bundled value sets.
pub fn nwss_schema() -> Result<RecordSchema, StandardsError> {
    nwss_schema_with_registry(load_value_sets()?)
}

/// Build the NWSS record schema against a caller-supplied registry.
pub fn nwss_schema_with_registry(
    registry: ValueSetRegistry,
) -> Result<RecordSchema, StandardsError> {
    let builder = field_groups()?
        .into_iter()
        .fold(RecordSchema::builder(SCHEMA_NAME), |builder, group| {
            builder.group(group)
        });
    Ok(builder.build(registry)?)
}
