//! Field specifications.
//!
//! A [`FieldSpec`] declares one record attribute: its kind, whether the key
//! must be present (`required`), whether the value may be absent
//! (`nullable`), and any extra [`Constraints`].
//!
//! `required` and `nullable` combine as follows:
//!
//! | required | nullable | meaning                                              |
//! |----------|----------|------------------------------------------------------|
//! | true     | false    | key must be present and carry a value                |
//! | true     | true     | key must be present, value may be empty              |
//! | false    | true     | key may be missing, value may be empty               |
//! | false    | false    | key may be missing, but a present value must be set  |

use std::fmt;

use regex::Regex;

use crate::error::{Result, SchemaError};

/// Date format accepted for [`FieldKind::Date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time format accepted for [`FieldKind::Time`].
pub const TIME_FORMAT: &str = "%H:%M";

/// The declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Float,
    Date,
    Time,
    /// Enumerated text; the payload is the value-set name.
    Enum(String),
}

impl FieldKind {
    pub fn enumeration(value_set: impl Into<String>) -> Self {
        Self::Enum(value_set.into())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Enum(_) => "enum",
        }
    }

    pub fn value_set(&self) -> Option<&str> {
        match self {
            FieldKind::Enum(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::Float)
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, FieldKind::String | FieldKind::Enum(_))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One end of a numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub value: f64,
    pub inclusive: bool,
}

impl Bound {
    pub fn inclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    pub fn exclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// Numeric range check; either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: Option<Bound>,
    pub max: Option<Bound>,
}

impl NumericRange {
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(Bound::inclusive(min)),
            max: None,
        }
    }

    pub fn greater_than(min: f64) -> Self {
        Self {
            min: Some(Bound::exclusive(min)),
            max: None,
        }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(Bound::inclusive(min)),
            max: Some(Bound::inclusive(max)),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above = match self.min {
            Some(Bound {
                value: min,
                inclusive: true,
            }) => value >= min,
            Some(Bound {
                value: min,
                inclusive: false,
            }) => value > min,
            None => true,
        };
        let below = match self.max {
            Some(Bound {
                value: max,
                inclusive: true,
            }) => value <= max,
            Some(Bound {
                value: max,
                inclusive: false,
            }) => value < max,
            None => true,
        };
        above && below
    }

    /// Human-readable description, e.g. "greater than or equal to 0".
    pub fn describe(&self) -> String {
        let lower = self.min.map(|bound| {
            let op = if bound.inclusive {
                "greater than or equal to"
            } else {
                "greater than"
            };
            format!("{op} {}", bound.value)
        });
        let upper = self.max.map(|bound| {
            let op = if bound.inclusive {
                "less than or equal to"
            } else {
                "less than"
            };
            format!("{op} {}", bound.value)
        });
        match (lower, upper) {
            (Some(lower), Some(upper)) => format!("{lower} and {upper}"),
            (Some(lower), None) => lower,
            (None, Some(upper)) => upper,
            (None, None) => "any value".to_string(),
        }
    }
}

/// Character-count bounds for text values (both inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthBound {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthBound {
    pub fn contains(&self, len: usize) -> bool {
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }

    pub fn describe(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("Length must be between {min} and {max}."),
            (Some(min), None) => format!("Shorter than minimum length {min}."),
            (None, Some(max)) => format!("Longer than maximum length {max}."),
            (None, None) => "Any length.".to_string(),
        }
    }
}

/// A compiled regular expression with its source text kept for export.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(source).map_err(|source_err| SchemaError::InvalidPattern {
            pattern: source.to_string(),
            source: source_err,
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Extra checks applied after coercion, in declaration order:
/// range, length, pattern, not-in-future.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Constraints {
    pub range: Option<NumericRange>,
    pub length: Option<LengthBound>,
    pub pattern: Option<Pattern>,
    /// Date must be today or earlier.
    pub not_in_future: bool,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        self.range.is_none()
            && self.length.is_none()
            && self.pattern.is_none()
            && !self.not_in_future
    }
}

/// Declarative descriptor for one record attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub nullable: bool,
    pub constraints: Constraints,
    /// Informational only; never validated.
    pub unit: Option<String>,
    pub description: Option<String>,
}

impl FieldSpec {
    /// A field that is neither required nor nullable.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            nullable: false,
            constraints: Constraints::default(),
            unit: None,
            description: None,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Float)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn time(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Time)
    }

    pub fn enumeration(name: impl Into<String>, value_set: impl Into<String>) -> Self {
        Self::new(name, FieldKind::enumeration(value_set))
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn range(mut self, range: NumericRange) -> Self {
        self.constraints.range = Some(range);
        self
    }

    #[must_use]
    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.constraints.length = Some(LengthBound { min, max });
        self
    }

    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.length(None, Some(max))
    }

    /// Attach a regex pattern; fails when the expression does not compile.
    pub fn pattern(mut self, pattern: &str) -> Result<Self> {
        self.constraints.pattern = Some(Pattern::new(pattern)?);
        Ok(self)
    }

    #[must_use]
    pub fn not_in_future(mut self) -> Self {
        self.constraints.not_in_future = true;
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
