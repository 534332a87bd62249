//! Cross-field rule engine.
//!
//! Interprets the declarative [`RuleKind`] descriptors against a fully
//! coerced [`TypedRecord`]. Every rule runs; a rule yields at most one
//! [`RuleViolation`].

use chrono::{NaiveDate, TimeDelta};

use nwss_model::{CrossFieldRule, DATE_FORMAT, RuleKind, RuleViolation, TypedRecord};

use crate::clock::ValidationContext;

/// Runs a schema's cross-field rules against typed records.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    rules: &'a [CrossFieldRule],
}

impl<'a> RuleEngine<'a> {
    pub fn new(rules: &'a [CrossFieldRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a [CrossFieldRule] {
        self.rules
    }

    /// Evaluate every rule, collecting all violations in declaration order.
    pub fn execute(&self, record: &TypedRecord, ctx: &ValidationContext) -> Vec<RuleViolation> {
        self.rules
            .iter()
            .filter_map(|rule| evaluate_rule(rule, record, ctx))
            .collect()
    }
}

/// Evaluate a single rule. `None` when the record satisfies it.
pub fn evaluate_rule(
    rule: &CrossFieldRule,
    record: &TypedRecord,
    ctx: &ValidationContext,
) -> Option<RuleViolation> {
    let message = match rule.kind() {
        RuleKind::EitherOr { first, second } => {
            (!record.is_present(first) && !record.is_present(second)).then(|| {
                format!("Either {first} or {second} must have a value.")
            })
        }
        RuleKind::ValueImpliesRequired {
            field,
            values,
            dependent,
        } => {
            let value = record.get(field);
            (values.iter().any(|literal| value.matches_literal(literal))
                && !record.is_present(dependent))
            .then(|| format!("{dependent} must have a value when {field} is \"{value}\"."))
        }
        RuleKind::SentinelExclusive {
            field,
            sentinel,
            dependent,
        } => {
            let value = record.get(field);
            if value.is_absent() {
                None
            } else if value.matches_literal(sentinel) {
                record
                    .is_present(dependent)
                    .then(|| format!("{dependent} must be empty when {field} is {sentinel}."))
            } else {
                (!record.is_present(dependent)).then(|| {
                    format!("{dependent} cannot be empty when {field} is not {sentinel}.")
                })
            }
        }
        RuleKind::GroupDependency { trigger, group } => {
            if record.is_present(trigger) {
                let missing: Vec<&str> = group
                    .iter()
                    .map(String::as_str)
                    .filter(|member| !record.is_present(member))
                    .collect();
                (!missing.is_empty()).then(|| {
                    format!(
                        "When {trigger} has a value, {} must also have values (missing: {}).",
                        group.join(", "),
                        missing.join(", ")
                    )
                })
            } else {
                None
            }
        }
        RuleKind::ConditionalEquality {
            field,
            value,
            dependent,
            expected,
        } => {
            let field_matches = record.get(field).matches_literal(value);
            let dependent_matches = record.get(dependent).matches_literal(expected);
            match (field_matches, dependent_matches) {
                (true, false) => Some(format!(
                    "{dependent} must be \"{expected}\" when {field} is \"{value}\"."
                )),
                (false, true) => Some(format!(
                    "{field} must be \"{value}\" when {dependent} is \"{expected}\"."
                )),
                _ => None,
            }
        }
        RuleKind::MutuallyExclusive {
            trigger,
            alternatives,
        } => (record.is_present(trigger)
            && !alternatives.is_empty()
            && alternatives.iter().all(|name| record.is_present(name)))
        .then(|| {
            format!(
                "{} cannot all have values when {trigger} has a value.",
                alternatives.join(", ")
            )
        }),
        RuleKind::Chronological {
            earlier,
            later,
            horizon_days,
        } => check_chronology(record, ctx, earlier, later, *horizon_days),
    }?;

    tracing::trace!(rule = rule.name(), "rule violated");
    let message = rule.message().map(str::to_string).unwrap_or(message);
    Some(RuleViolation::new(rule.name(), message, rule.fields()))
}

fn check_chronology(
    record: &TypedRecord,
    ctx: &ValidationContext,
    earlier: &str,
    later: &str,
    horizon_days: i64,
) -> Option<String> {
    let start = record.get(earlier).as_date();
    let end = record.get(later).as_date();
    let limit = TimeDelta::try_days(horizon_days)
        .and_then(|delta| ctx.today().checked_add_signed(delta))
        .unwrap_or(NaiveDate::MAX);

    let mut problems = Vec::new();
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        problems.push(format!(
            "{later} ({}) cannot be earlier than {earlier} ({}).",
            end.format(DATE_FORMAT),
            start.format(DATE_FORMAT)
        ));
    }
    for (name, date) in [(earlier, start), (later, end)] {
        if let Some(date) = date
            && date > limit
        {
            problems.push(format!(
                "{name} ({}) cannot be later than {}.",
                date.format(DATE_FORMAT),
                limit.format(DATE_FORMAT)
            ));
        }
    }

    (!problems.is_empty()).then(|| problems.join(" "))
}
