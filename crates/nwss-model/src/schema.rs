//! Record schema composition.
//!
//! A schema is assembled from independently declared [`FieldGroup`]s. Each
//! group contributes a flat list of fields and rules; the builder
//! concatenates them in the order the groups were added and checks the
//! result once.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, SchemaError};
use crate::field::FieldSpec;
use crate::rule::CrossFieldRule;
use crate::value_set::ValueSetRegistry;

/// A named cluster of fields and the rules that belong with them.
#[derive(Debug, Clone, Default)]
pub struct FieldGroup {
    pub name: String,
    pub fields: Vec<FieldSpec>,
    pub rules: Vec<CrossFieldRule>,
}

impl FieldGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn rule(mut self, rule: CrossFieldRule) -> Self {
        self.rules.push(rule);
        self
    }
}

#[derive(Debug, Default)]
pub struct RecordSchemaBuilder {
    name: String,
    groups: Vec<FieldGroup>,
}

impl RecordSchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn group(mut self, group: FieldGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Validate the declarations against `registry` and freeze the schema.
    pub fn build(self, registry: ValueSetRegistry) -> Result<RecordSchema> {
        let mut fields = Vec::new();
        let mut rules = Vec::new();
        let mut groups = Vec::new();
        for group in self.groups {
            groups.push(GroupSummary {
                name: group.name,
                fields: group.fields.iter().map(|field| field.name.clone()).collect(),
            });
            fields.extend(group.fields);
            rules.extend(group.rules);
        }

        let mut index = BTreeMap::new();
        for (position, field) in fields.iter().enumerate() {
            if index.insert(field.name.clone(), position).is_some() {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                });
            }
            if let Some(set) = field.kind.value_set()
                && registry.get(set).is_none()
            {
                return Err(SchemaError::UnknownValueSet {
                    field: field.name.clone(),
                    value_set: set.to_string(),
                });
            }
        }

        let mut rule_names = BTreeSet::new();
        for rule in &rules {
            if !rule_names.insert(rule.name().to_string()) {
                return Err(SchemaError::DuplicateRule {
                    name: rule.name().to_string(),
                });
            }
            if let Some(unknown) = rule.fields().into_iter().find(|f| !index.contains_key(*f)) {
                return Err(SchemaError::UnknownRuleField {
                    rule: rule.name().to_string(),
                    field: unknown.to_string(),
                });
            }
        }

        Ok(RecordSchema {
            name: self.name,
            fields,
            index,
            rules,
            groups,
            registry,
        })
    }
}

/// Group name and the fields it contributed, kept for introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub name: String,
    pub fields: Vec<String>,
}

/// An immutable, ordered collection of field specs and cross-field rules.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldSpec>,
    index: BTreeMap<String, usize>,
    rules: Vec<CrossFieldRule>,
    groups: Vec<GroupSummary>,
    registry: ValueSetRegistry,
}

impl RecordSchema {
    pub fn builder(name: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field specs in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.index.get(name).map(|position| &self.fields[*position])
    }

    pub fn declares(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn rules(&self) -> &[CrossFieldRule] {
        &self.rules
    }

    pub fn rule(&self, name: &str) -> Option<&CrossFieldRule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn groups(&self) -> &[GroupSummary] {
        &self.groups
    }

    pub fn registry(&self) -> &ValueSetRegistry {
        &self.registry
    }

    /// Names of fields whose key must appear in every record.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name.as_str())
    }
}
