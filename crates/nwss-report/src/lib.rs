//! JSON outputs: the record schema as JSON Schema, and validation reports.

#![deny(unsafe_code)]

mod json;
pub mod json_schema;
pub mod validation_report;

pub use json_schema::{JSON_SCHEMA_DRAFT, TIME_PATTERN, json_schema, write_json_schema};
pub use validation_report::{
    IssueJson, RecordIssuesJson, ValidationReportPayload, ValidationTotals, build_report_payload,
    write_validation_report_json,
};
