//! Record and batch validation.

use nwss_model::{
    BatchResult, FieldError, FieldErrorKind, RawRecord, RecordResult, RecordSchema, TypedRecord,
};

use crate::clock::{Clock, ValidationContext};
use crate::coerce::validate_field;
use crate::normalize::normalize;
use crate::rules::RuleEngine;

/// What to do with record keys the schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
    /// Report each as an [`FieldErrorKind::UnknownField`] error.
    #[default]
    Reject,
    /// Drop them silently.
    Ignore,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    pub unknown_fields: UnknownFieldPolicy,
}

impl ValidationOptions {
    #[must_use]
    pub fn ignore_unknown_fields(mut self) -> Self {
        self.unknown_fields = UnknownFieldPolicy::Ignore;
        self
    }
}

/// Validates raw records against a [`RecordSchema`].
#[derive(Debug, Clone, Copy)]
pub struct RecordValidator<'a> {
    schema: &'a RecordSchema,
    options: ValidationOptions,
}

impl<'a> RecordValidator<'a> {
    pub fn new(schema: &'a RecordSchema) -> Self {
        Self {
            schema,
            options: ValidationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn schema(&self) -> &'a RecordSchema {
        self.schema
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Validate one record.
    ///
    /// Every declared field is checked even after an earlier field fails.
    /// Cross-field rules run only when no field error was found, since they
    /// read typed values.
    pub fn validate_record(&self, raw: &RawRecord, ctx: &ValidationContext) -> RecordResult {
        let record = normalize(raw);
        let registry = self.schema.registry();
        let mut typed = TypedRecord::new();
        let mut field_errors = Vec::new();

        for spec in self.schema.fields() {
            match validate_field(spec, record.get(&spec.name), registry, ctx) {
                Ok(value) => typed.insert(spec.name.as_str(), value),
                Err(error) => field_errors.push(error),
            }
        }

        if self.options.unknown_fields == UnknownFieldPolicy::Reject {
            field_errors.extend(
                record
                    .keys()
                    .filter(|name| !self.schema.declares(name))
                    .map(|name| {
                        FieldError::new(name, FieldErrorKind::UnknownField, "Unknown field.")
                    }),
            );
        }

        if !field_errors.is_empty() {
            return RecordResult {
                field_errors,
                ..RecordResult::default()
            };
        }

        let rule_violations = RuleEngine::new(self.schema.rules()).execute(&typed, ctx);
        RecordResult {
            rule_violations,
            typed: Some(typed),
            ..RecordResult::default()
        }
    }

    /// Validate a batch, reading `clock` once so every record shares the
    /// same validation date.
    pub fn validate_batch(&self, records: &[RawRecord], clock: &dyn Clock) -> BatchResult {
        self.validate_batch_at(records, &ValidationContext::from_clock(clock))
    }

    /// Validate a batch against an explicit context. Results keep input order.
    pub fn validate_batch_at(&self, records: &[RawRecord], ctx: &ValidationContext) -> BatchResult {
        let span = tracing::info_span!(
            "validate_batch",
            schema = self.schema.name(),
            records = records.len(),
            today = %ctx.today(),
        );
        let _guard = span.enter();

        let records: Vec<RecordResult> = records
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let result = RecordResult {
                    index,
                    ..self.validate_record(raw, ctx)
                };
                if !result.is_valid() {
                    tracing::debug!(
                        index,
                        field_errors = result.field_errors.len(),
                        rule_violations = result.rule_violations.len(),
                        "record failed validation"
                    );
                }
                result
            })
            .collect();

        let batch = BatchResult { records };
        tracing::info!(
            records = batch.len(),
            invalid = batch.invalid_count(),
            field_errors = batch.field_error_count(),
            rule_violations = batch.rule_violation_count(),
            "batch validated"
        );
        batch
    }
}
