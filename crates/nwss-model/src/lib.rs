//! Data model for NWSS water-sample validation.
//!
//! The types here describe what a valid record looks like ([`RecordSchema`],
//! [`FieldSpec`], [`CrossFieldRule`], [`ValueSet`]) and what validation
//! produces ([`RecordResult`], [`BatchResult`]). Evaluation lives in
//! `nwss-validate`; the NWSS dictionary itself lives in `nwss-standards`.

pub mod error;
pub mod field;
pub mod issue;
pub mod record;
pub mod rule;
pub mod schema;
pub mod value_set;

pub use error::{Result, SchemaError};
pub use field::{
    Bound, Constraints, DATE_FORMAT, FieldKind, FieldSpec, LengthBound, NumericRange, Pattern,
    TIME_FORMAT,
};
pub use issue::{BatchResult, Category, FieldError, FieldErrorKind, RecordResult, RuleViolation};
pub use record::{RawRecord, RawValue, TypedRecord, TypedValue};
pub use rule::{CrossFieldRule, RuleKind};
pub use schema::{FieldGroup, GroupSummary, RecordSchema, RecordSchemaBuilder};
pub use value_set::{NOT_PROVIDED, ValueSet, ValueSetRegistry};
