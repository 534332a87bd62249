//! Raw and typed records.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::field::{DATE_FORMAT, TIME_FORMAT};

/// A value as read from the source, before coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    /// No value provided.
    Absent,
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(value) => Some(value),
            RawValue::Absent => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Field name to raw value. Keys that never appeared in the source are
/// "missing", which is distinct from a key mapped to [`RawValue::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawRecord {
    values: BTreeMap<String, RawValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(name, text)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(key, value)| (key.into(), RawValue::Text(value.into())))
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style insert, handy for overriding one field of a fixture.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<RawValue> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, RawValue)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// A coerced value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Absent,
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl TypedValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, TypedValue::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Integer(value) => Some(*value as f64),
            TypedValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            TypedValue::Date(value) => Some(*value),
            _ => None,
        }
    }

    /// Compare against a literal written in the data dictionary.
    ///
    /// The literal is parsed according to this value's type: text compares
    /// exactly, numbers numerically, dates and times by their fixed formats.
    /// `Absent` matches nothing.
    pub fn matches_literal(&self, literal: &str) -> bool {
        match self {
            TypedValue::Absent => false,
            TypedValue::Text(value) => value == literal,
            TypedValue::Integer(value) => literal.trim().parse::<i64>().ok() == Some(*value),
            TypedValue::Float(value) => literal.trim().parse::<f64>().ok() == Some(*value),
            TypedValue::Date(value) => {
                NaiveDate::parse_from_str(literal, DATE_FORMAT).ok() == Some(*value)
            }
            TypedValue::Time(value) => {
                NaiveTime::parse_from_str(literal, TIME_FORMAT).ok() == Some(*value)
            }
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Absent => f.write_str(""),
            TypedValue::Text(value) => f.write_str(value),
            TypedValue::Integer(value) => write!(f, "{value}"),
            TypedValue::Float(value) => write!(f, "{value}"),
            TypedValue::Date(value) => write!(f, "{}", value.format(DATE_FORMAT)),
            TypedValue::Time(value) => write!(f, "{}", value.format(TIME_FORMAT)),
        }
    }
}

/// A record whose every declared field is coerced or marked absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypedRecord {
    values: BTreeMap<String, TypedValue>,
}

impl TypedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: TypedValue) {
        self.values.insert(name.into(), value);
    }

    /// Value of a field; undeclared names read as absent.
    pub fn get(&self, name: &str) -> &TypedValue {
        self.values.get(name).unwrap_or(&TypedValue::Absent)
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_present()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, TypedValue)> for TypedRecord {
    fn from_iter<I: IntoIterator<Item = (String, TypedValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
