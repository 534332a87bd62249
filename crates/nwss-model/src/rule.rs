//! Cross-field rule descriptors.
//!
//! Rules are declared as data: a stable name, a description for schema
//! consumers, and a [`RuleKind`] that the validation engine interprets. The
//! descriptor carries no behaviour of its own, so a schema can be inspected
//! without pulling in the engine.

/// The dependency contract a rule enforces.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    /// At least one of the two fields must be present.
    EitherOr { first: String, second: String },

    /// When `field` equals any of `values`, `dependent` must be present.
    ValueImpliesRequired {
        field: String,
        values: Vec<String>,
        dependent: String,
    },

    /// `field == sentinel` forbids `dependent`; any other present value of
    /// `field` requires it.
    SentinelExclusive {
        field: String,
        sentinel: String,
        dependent: String,
    },

    /// When `trigger` is present, every member of `group` must be present.
    GroupDependency { trigger: String, group: Vec<String> },

    /// `field == value` if and only if `dependent == expected`.
    ConditionalEquality {
        field: String,
        value: String,
        dependent: String,
        expected: String,
    },

    /// When `trigger` is present, the alternatives may not all be present.
    MutuallyExclusive {
        trigger: String,
        alternatives: Vec<String>,
    },

    /// `later` may not precede `earlier`, and neither may be more than
    /// `horizon_days` after the validation date.
    Chronological {
        earlier: String,
        later: String,
        horizon_days: i64,
    },
}

impl RuleKind {
    /// Every field the rule reads, in declaration order.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            RuleKind::EitherOr { first, second } => vec![first.as_str(), second.as_str()],
            RuleKind::ValueImpliesRequired {
                field, dependent, ..
            }
            | RuleKind::SentinelExclusive {
                field, dependent, ..
            }
            | RuleKind::ConditionalEquality {
                field, dependent, ..
            } => vec![field.as_str(), dependent.as_str()],
            RuleKind::GroupDependency { trigger, group } => std::iter::once(trigger.as_str())
                .chain(group.iter().map(String::as_str))
                .collect(),
            RuleKind::MutuallyExclusive {
                trigger,
                alternatives,
            } => std::iter::once(trigger.as_str())
                .chain(alternatives.iter().map(String::as_str))
                .collect(),
            RuleKind::Chronological { earlier, later, .. } => {
                vec![earlier.as_str(), later.as_str()]
            }
        }
    }

    /// Generated description used when a rule does not supply its own.
    pub fn describe(&self) -> String {
        match self {
            RuleKind::EitherOr { first, second } => {
                format!("Either {first} or {second} must have a value.")
            }
            RuleKind::ValueImpliesRequired {
                field,
                values,
                dependent,
            } => format!(
                "If {field} is {}, {dependent} must have a value.",
                quote_list(values)
            ),
            RuleKind::SentinelExclusive {
                field,
                sentinel,
                dependent,
            } => format!(
                "If {field} is \"{sentinel}\", {dependent} must be empty; otherwise {dependent} \
                 cannot be empty."
            ),
            RuleKind::GroupDependency { trigger, group } => format!(
                "If {trigger} has a value, {} must also have values.",
                group.join(", ")
            ),
            RuleKind::ConditionalEquality {
                field,
                value,
                dependent,
                expected,
            } => format!(
                "{field} is \"{value}\" if and only if {dependent} is \"{expected}\"."
            ),
            RuleKind::MutuallyExclusive {
                trigger,
                alternatives,
            } => format!(
                "If {trigger} has a value, {} cannot all have values.",
                alternatives.join(", ")
            ),
            RuleKind::Chronological {
                earlier,
                later,
                horizon_days,
            } => format!(
                "{later} cannot be earlier than {earlier}, and neither may be more than \
                 {horizon_days} day(s) after the validation date."
            ),
        }
    }
}

fn quote_list(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// A named cross-field rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossFieldRule {
    name: String,
    description: String,
    /// Overrides the generated violation message.
    message: Option<String>,
    kind: RuleKind,
}

impl CrossFieldRule {
    pub fn new(name: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            name: name.into(),
            description: kind.describe(),
            message: None,
            kind,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn either_or(name: &str, first: &str, second: &str) -> Self {
        Self::new(
            name,
            RuleKind::EitherOr {
                first: first.to_string(),
                second: second.to_string(),
            },
        )
    }

    pub fn value_implies_required(name: &str, field: &str, values: &[&str], dependent: &str) -> Self {
        Self::new(
            name,
            RuleKind::ValueImpliesRequired {
                field: field.to_string(),
                values: values.iter().map(ToString::to_string).collect(),
                dependent: dependent.to_string(),
            },
        )
    }

    pub fn sentinel_exclusive(name: &str, field: &str, sentinel: &str, dependent: &str) -> Self {
        Self::new(
            name,
            RuleKind::SentinelExclusive {
                field: field.to_string(),
                sentinel: sentinel.to_string(),
                dependent: dependent.to_string(),
            },
        )
    }

    pub fn group_dependency(name: &str, trigger: &str, group: &[&str]) -> Self {
        Self::new(
            name,
            RuleKind::GroupDependency {
                trigger: trigger.to_string(),
                group: group.iter().map(ToString::to_string).collect(),
            },
        )
    }

    pub fn conditional_equality(
        name: &str,
        field: &str,
        value: &str,
        dependent: &str,
        expected: &str,
    ) -> Self {
        Self::new(
            name,
            RuleKind::ConditionalEquality {
                field: field.to_string(),
                value: value.to_string(),
                dependent: dependent.to_string(),
                expected: expected.to_string(),
            },
        )
    }

    pub fn mutually_exclusive(name: &str, trigger: &str, alternatives: &[&str]) -> Self {
        Self::new(
            name,
            RuleKind::MutuallyExclusive {
                trigger: trigger.to_string(),
                alternatives: alternatives.iter().map(ToString::to_string).collect(),
            },
        )
    }

    pub fn chronological(name: &str, earlier: &str, later: &str, horizon_days: i64) -> Self {
        Self::new(
            name,
            RuleKind::Chronological {
                earlier: earlier.to_string(),
                later: later.to_string(),
                horizon_days,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn fields(&self) -> Vec<&str> {
        self.kind.fields()
    }
}
