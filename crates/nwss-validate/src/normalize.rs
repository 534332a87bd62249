//! Record normalization.
//!
//! Delimited text cannot say "no value" except with an empty cell. Before
//! coercion every empty text value becomes [`RawValue::Absent`], so an
//! optional numeric field reads as absent instead of as an unparseable
//! number.

use nwss_model::{RawRecord, RawValue};

/// Return a copy of `record` with empty text replaced by `Absent`.
///
/// Idempotent: a record without empty text comes back unchanged.
pub fn normalize(record: &RawRecord) -> RawRecord {
    record
        .iter()
        .map(|(name, value)| (name.to_string(), normalize_value(value)))
        .collect()
}

pub fn normalize_value(value: &RawValue) -> RawValue {
    match value {
        RawValue::Text(text) if text.is_empty() => RawValue::Absent,
        other => other.clone(),
    }
}
