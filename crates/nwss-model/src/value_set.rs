//! Controlled vocabularies (value sets).
//!
//! A value set is the list of legal literals for an enumerated field, e.g.
//! `sample_location` accepts `wwtp` and `upstream`. Membership is an exact,
//! case-sensitive match: `WWTP` is not a member of `sample_location`.
//!
//! Some vocabularies designate the empty string as a "not provided" member.
//! The registry answers `contains(set, "")` with `true` only for those sets.

use std::collections::{BTreeMap, BTreeSet};

/// Literal used as the "not provided" member of a value set.
pub const NOT_PROVIDED: &str = "";

/// An immutable, named set of legal string literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSet {
    name: String,
    /// Literals in declaration order (used for messages and schema export).
    values: Vec<String>,
    lookup: BTreeSet<String>,
    allows_not_provided: bool,
}

impl ValueSet {
    /// Create a value set. Duplicate literals are collapsed, keeping the
    /// first occurrence.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut lookup = BTreeSet::new();
        for value in values {
            let value = value.into();
            if lookup.insert(value.clone()) {
                ordered.push(value);
            }
        }
        Self {
            name: name.into(),
            values: ordered,
            lookup,
            allows_not_provided: false,
        }
    }

    /// Mark the empty string as a legal "not provided" member.
    #[must_use]
    pub fn with_not_provided(mut self) -> Self {
        self.allows_not_provided = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared literals, in order. Does not include the not-provided sentinel.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn allows_not_provided(&self) -> bool {
        self.allows_not_provided
    }

    /// Case-sensitive membership test.
    pub fn contains(&self, value: &str) -> bool {
        if value == NOT_PROVIDED {
            return self.allows_not_provided;
        }
        self.lookup.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Registry of value sets by name.
///
/// Filled while loading reference data, then handed to a
/// [`RecordSchema`](crate::RecordSchema) which only exposes it by shared
/// reference.
#[derive(Debug, Clone, Default)]
pub struct ValueSetRegistry {
    sets: BTreeMap<String, ValueSet>,
}

impl ValueSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value set, replacing any set previously registered under the
    /// same name.
    pub fn insert(&mut self, set: ValueSet) {
        self.sets.insert(set.name.clone(), set);
    }

    pub fn get(&self, name: &str) -> Option<&ValueSet> {
        self.sets.get(name)
    }

    /// Membership test. Unknown set names contain nothing.
    pub fn contains(&self, set_name: &str, value: &str) -> bool {
        self.sets
            .get(set_name)
            .is_some_and(|set| set.contains(value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl FromIterator<ValueSet> for ValueSetRegistry {
    fn from_iter<I: IntoIterator<Item = ValueSet>>(iter: I) -> Self {
        let mut registry = Self::new();
        for set in iter {
            registry.insert(set);
        }
        registry
    }
}
