use thiserror::Error;

/// Errors raised while assembling a [`RecordSchema`](crate::RecordSchema).
///
/// These are construction-time failures in the static declarations, never
/// data-validation outcomes.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("duplicate field in schema: {name}")]
    DuplicateField { name: String },

    #[error("duplicate cross-field rule: {name}")]
    DuplicateRule { name: String },

    #[error("field {field} references unknown value set {value_set}")]
    UnknownValueSet { field: String, value_set: String },

    #[error("rule {rule} references undeclared field {field}")]
    UnknownRuleField { rule: String, field: String },

    #[error("invalid pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
