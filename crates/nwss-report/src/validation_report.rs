//! Machine-readable validation report.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use nwss_model::{BatchResult, Category, FieldErrorKind, RecordResult};

use crate::json::write_pretty_json;

const REPORT_SCHEMA: &str = "nwss.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub totals: ValidationTotals,
    /// Invalid records only; valid ones are counted in `totals`.
    pub records: Vec<RecordIssuesJson>,
}

#[derive(Debug, Serialize)]
pub struct ValidationTotals {
    pub records: usize,
    pub valid: usize,
    pub invalid: usize,
    pub field_errors: usize,
    pub rule_violations: usize,
}

#[derive(Debug, Serialize)]
pub struct RecordIssuesJson {
    pub index: usize,
    pub issues: Vec<IssueJson>,
}

#[derive(Debug, Serialize)]
pub struct IssueJson {
    pub category: Category,
    /// Field error kind, or `None` for a cross-field rule violation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub fields: Vec<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

pub fn build_report_payload(source: &str, batch: &BatchResult) -> ValidationReportPayload {
    ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        totals: ValidationTotals {
            records: batch.len(),
            valid: batch.len() - batch.invalid_count(),
            invalid: batch.invalid_count(),
            field_errors: batch.field_error_count(),
            rule_violations: batch.rule_violation_count(),
        },
        records: batch
            .records
            .iter()
            .filter(|record| !record.is_valid())
            .map(record_issues)
            .collect(),
    }
}

pub fn write_validation_report_json(path: &Path, source: &str, batch: &BatchResult) -> Result<()> {
    write_pretty_json(path, &build_report_payload(source, batch))
}

fn record_issues(record: &RecordResult) -> RecordIssuesJson {
    let field_issues = record.field_errors.iter().map(|error| IssueJson {
        category: error.category(),
        kind: Some(error.kind),
        rule: None,
        fields: vec![error.field.clone()],
        message: error.message.clone(),
        value: error.value.clone(),
    });
    let rule_issues = record.rule_violations.iter().map(|violation| IssueJson {
        category: Category::Consistency,
        kind: None,
        rule: Some(violation.rule.clone()),
        fields: violation.fields.clone(),
        message: violation.message.clone(),
        value: None,
    });
    RecordIssuesJson {
        index: record.index,
        issues: field_issues.chain(rule_issues).collect(),
    }
}
