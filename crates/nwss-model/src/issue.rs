//! Validation outcomes.
//!
//! Field errors and rule violations are returned as data. They implement
//! [`std::error::Error`] so callers can render or wrap them, but the engine
//! never raises them past the record boundary.

use serde::Serialize;
use thiserror::Error;

use crate::record::TypedRecord;

/// Broad grouping of field errors, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Presence,
    Format,
    Terminology,
    Limit,
    Consistency,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Presence => "Presence",
            Category::Format => "Format",
            Category::Terminology => "Terminology",
            Category::Limit => "Limit",
            Category::Consistency => "Consistency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldErrorKind {
    MissingRequired,
    TypeMismatch,
    NotInValueSet,
    OutOfRange,
    LengthViolation,
    PatternMismatch,
    FutureDateViolation,
    /// Record carries a key the schema does not declare.
    UnknownField,
}

impl FieldErrorKind {
    pub fn category(&self) -> Category {
        match self {
            FieldErrorKind::MissingRequired | FieldErrorKind::UnknownField => Category::Presence,
            FieldErrorKind::TypeMismatch | FieldErrorKind::PatternMismatch => Category::Format,
            FieldErrorKind::NotInValueSet => Category::Terminology,
            FieldErrorKind::OutOfRange | FieldErrorKind::LengthViolation => Category::Limit,
            FieldErrorKind::FutureDateViolation => Category::Consistency,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldErrorKind::MissingRequired => "MissingRequired",
            FieldErrorKind::TypeMismatch => "TypeMismatch",
            FieldErrorKind::NotInValueSet => "NotInValueSet",
            FieldErrorKind::OutOfRange => "OutOfRange",
            FieldErrorKind::LengthViolation => "LengthViolation",
            FieldErrorKind::PatternMismatch => "PatternMismatch",
            FieldErrorKind::FutureDateViolation => "FutureDateViolation",
            FieldErrorKind::UnknownField => "UnknownField",
        }
    }
}

/// A single field failed its own checks.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
    /// The offending raw text, when there was one.
    pub value: Option<String>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
            value: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

/// A cross-field rule fired.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{rule}: {message}")]
pub struct RuleViolation {
    pub rule: String,
    pub message: String,
    /// Fields involved in the violation, most specific first.
    pub fields: Vec<String>,
}

impl RuleViolation {
    pub fn new<I, S>(rule: impl Into<String>, message: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rule: rule.into(),
            message: message.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn involves(&self, field: &str) -> bool {
        self.fields.iter().any(|name| name == field)
    }
}

/// Outcome for one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordResult {
    /// Zero-based position of the record in its batch.
    pub index: usize,
    pub field_errors: Vec<FieldError>,
    pub rule_violations: Vec<RuleViolation>,
    /// Present only when every field passed its own checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typed: Option<TypedRecord>,
}

impl RecordResult {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.rule_violations.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.field_errors.len() + self.rule_violations.len()
    }

    pub fn field_error(&self, field: &str) -> Option<&FieldError> {
        self.field_errors.iter().find(|error| error.field == field)
    }

    pub fn violation(&self, rule: &str) -> Option<&RuleViolation> {
        self.rule_violations
            .iter()
            .find(|violation| violation.rule == rule)
    }
}

/// Outcome for a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    pub records: Vec<RecordResult>,
}

impl BatchResult {
    pub fn all_valid(&self) -> bool {
        self.records.iter().all(RecordResult::is_valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.records.iter().filter(|record| !record.is_valid()).count()
    }

    pub fn field_error_count(&self) -> usize {
        self.records.iter().map(|record| record.field_errors.len()).sum()
    }

    pub fn rule_violation_count(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.rule_violations.len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
