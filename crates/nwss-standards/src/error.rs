use nwss_model::SchemaError;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to parse value sets: {0}")]
    Csv(#[from] csv::Error),

    #[error("value set row {line} has no value_set name")]
    UnnamedValueSet { line: u64 },

    #[error("invalid data dictionary: {0}")]
    Schema(#[from] SchemaError),
}
