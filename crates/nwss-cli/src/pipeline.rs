//! Load CSV inputs and validate them against the NWSS schema.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use nwss_ingest::{collect_inputs, read_records};
use nwss_model::{BatchResult, RecordSchema};
use nwss_validate::{Clock, RecordValidator, ValidationContext, ValidationOptions};

use crate::logging::redact_value;

/// Validation outcome for one input file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub batch: BatchResult,
}

impl FileResult {
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Outcome of validating every input of one invocation.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    pub context: ValidationContext,
    pub files: Vec<FileResult>,
}

impl ValidationRun {
    pub fn all_valid(&self) -> bool {
        self.files.iter().all(|file| file.batch.all_valid())
    }

    pub fn record_count(&self) -> usize {
        self.files.iter().map(|file| file.batch.len()).sum()
    }

    pub fn invalid_count(&self) -> usize {
        self.files.iter().map(|file| file.batch.invalid_count()).sum()
    }
}

/// Validate each CSV named by `inputs` (files or directories).
///
/// The clock is read once, so every file is judged against the same date.
pub fn validate_inputs(
    inputs: &[PathBuf],
    schema: &RecordSchema,
    options: ValidationOptions,
    clock: &dyn Clock,
) -> Result<ValidationRun> {
    let context = ValidationContext::from_clock(clock);
    let validator = RecordValidator::new(schema).with_options(options);
    let files = collect_inputs(inputs)?;
    info!(files = files.len(), today = %context.today(), "validating inputs");

    let files = files
        .into_iter()
        .map(|path| {
            let batch = validate_file(&validator, &path, &context)?;
            Ok(FileResult { path, batch })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ValidationRun { context, files })
}

fn validate_file(
    validator: &RecordValidator<'_>,
    path: &Path,
    context: &ValidationContext,
) -> Result<BatchResult> {
    let span = info_span!("file", path = %path.display());
    let _guard = span.enter();

    let records =
        read_records(path).with_context(|| format!("load records: {}", path.display()))?;
    let batch = validator.validate_batch_at(&records, context);
    for record in &batch.records {
        for error in &record.field_errors {
            trace!(
                record = record.index,
                field = %error.field,
                kind = error.kind.label(),
                value = error.value.as_deref().map(redact_value),
                "field error"
            );
        }
    }
    Ok(batch)
}
