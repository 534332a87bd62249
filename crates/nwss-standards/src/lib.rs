#![deny(unsafe_code)]

pub mod dictionary;
pub mod error;
pub mod value_sets;

pub use crate::dictionary::{SCHEMA_NAME, field_groups, nwss_schema, nwss_schema_with_registry};
pub use crate::error::StandardsError;
pub use crate::value_sets::{load_value_sets, parse_value_sets};
