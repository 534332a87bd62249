//! Validation of NWSS water-sample records.
//!
//! A record is normalized, each declared field is coerced and checked on its
//! own, and when all fields pass the schema's cross-field rules run against
//! the typed record. Batches are validated in order against a single
//! [`ValidationContext`] read from an injected [`Clock`].

#![deny(unsafe_code)]

pub mod clock;
pub mod coerce;
pub mod normalize;
pub mod rules;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock, ValidationContext};
pub use coerce::{coerce, validate_field};
pub use normalize::{normalize, normalize_value};
pub use rules::{RuleEngine, evaluate_rule};
pub use validator::{RecordValidator, UnknownFieldPolicy, ValidationOptions};
