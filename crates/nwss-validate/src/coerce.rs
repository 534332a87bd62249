//! Field coercion and per-field validation.
//!
//! Each field runs through a fixed sequence and stops at its first failure:
//!
//! 1. presence (missing key, absent value)
//! 2. coercion to the declared kind
//! 3. enum membership, range, length, pattern, not-in-future
//!
//! A failure here never stops the caller from checking the record's other
//! fields.

use chrono::{NaiveDate, NaiveTime};

use nwss_model::{
    DATE_FORMAT, FieldError, FieldErrorKind, FieldKind, FieldSpec, RawValue, TIME_FORMAT,
    TypedValue, ValueSetRegistry,
};

use crate::clock::ValidationContext;

pub(crate) const MISSING_KEY_MESSAGE: &str = "Missing data for required field.";
pub(crate) const EMPTY_VALUE_MESSAGE: &str = "Field may not be empty.";

/// Validate one field's raw value against its spec.
///
/// `value` is `None` when the record has no key for the field at all.
/// Empty text is treated the same as [`RawValue::Absent`].
pub fn validate_field(
    spec: &FieldSpec,
    value: Option<&RawValue>,
    registry: &ValueSetRegistry,
    ctx: &ValidationContext,
) -> Result<TypedValue, FieldError> {
    let text = match value {
        None if spec.required => {
            return Err(FieldError::new(
                &spec.name,
                FieldErrorKind::MissingRequired,
                MISSING_KEY_MESSAGE,
            ));
        }
        None => return Ok(TypedValue::Absent),
        Some(RawValue::Text(text)) if !text.is_empty() => text,
        Some(_) if spec.nullable => return Ok(TypedValue::Absent),
        Some(_) => {
            return Err(FieldError::new(
                &spec.name,
                FieldErrorKind::MissingRequired,
                EMPTY_VALUE_MESSAGE,
            ));
        }
    };

    let typed = coerce(&spec.kind, text).ok_or_else(|| {
        FieldError::new(
            &spec.name,
            FieldErrorKind::TypeMismatch,
            format!("Not a valid {}.", spec.kind),
        )
        .with_value(text.as_str())
    })?;

    check_constraints(spec, text, &typed, registry, ctx)
        .map_err(|error| error.with_value(text.as_str()))?;
    Ok(typed)
}

/// Parse text into the declared kind. `None` on failure.
pub fn coerce(kind: &FieldKind, text: &str) -> Option<TypedValue> {
    match kind {
        FieldKind::String | FieldKind::Enum(_) => Some(TypedValue::Text(text.to_string())),
        FieldKind::Integer => text.parse::<i64>().ok().map(TypedValue::Integer),
        FieldKind::Float => text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(TypedValue::Float),
        FieldKind::Date => NaiveDate::parse_from_str(text, DATE_FORMAT)
            .ok()
            .map(TypedValue::Date),
        FieldKind::Time => NaiveTime::parse_from_str(text, TIME_FORMAT)
            .ok()
            .map(TypedValue::Time),
    }
}

fn check_constraints(
    spec: &FieldSpec,
    text: &str,
    typed: &TypedValue,
    registry: &ValueSetRegistry,
    ctx: &ValidationContext,
) -> Result<(), FieldError> {
    let fail = |kind: FieldErrorKind, message: String| -> Result<(), FieldError> {
        Err(FieldError::new(&spec.name, kind, message))
    };

    if let FieldKind::Enum(set_name) = &spec.kind
        && !registry.contains(set_name, text)
    {
        let allowed = registry
            .get(set_name)
            .map(|set| set.values().join(", "))
            .unwrap_or_default();
        return fail(
            FieldErrorKind::NotInValueSet,
            format!("Must be one of: {allowed}."),
        );
    }

    let constraints = &spec.constraints;
    if let (Some(range), Some(number)) = (&constraints.range, typed.as_f64())
        && !range.contains(number)
    {
        return fail(
            FieldErrorKind::OutOfRange,
            format!("Must be {}.", range.describe()),
        );
    }

    if spec.kind.is_textual() {
        if let Some(length) = &constraints.length
            && !length.contains(text.chars().count())
        {
            return fail(FieldErrorKind::LengthViolation, length.describe());
        }
        if let Some(pattern) = &constraints.pattern
            && !pattern.is_match(text)
        {
            return fail(
                FieldErrorKind::PatternMismatch,
                "String does not match expected pattern.".to_string(),
            );
        }
    }

    if constraints.not_in_future
        && let Some(date) = typed.as_date()
        && date > ctx.today()
    {
        return fail(
            FieldErrorKind::FutureDateViolation,
            format!(
                "Date {} is later than today ({}).",
                date.format(DATE_FORMAT),
                ctx.today().format(DATE_FORMAT)
            ),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use nwss_model::{NumericRange, ValueSet};

    use super::*;

    fn ctx() -> ValidationContext {
        ValidationContext::on(NaiveDate::from_ymd_opt(2021, 6, 1).unwrap())
    }

    fn registry() -> ValueSetRegistry {
        [ValueSet::new("sample_location", ["wwtp", "upstream"])]
            .into_iter()
            .collect()
    }

    fn check(spec: &FieldSpec, value: &str) -> Result<TypedValue, FieldError> {
        validate_field(spec, Some(&RawValue::text(value)), &registry(), &ctx())
    }

    #[test]
    fn missing_key_depends_on_required() {
        let required = FieldSpec::integer("population_served").required();
        let err = validate_field(&required, None, &registry(), &ctx()).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::MissingRequired);
        assert_eq!(err.message, MISSING_KEY_MESSAGE);

        let optional = FieldSpec::integer("composite_freq");
        assert_eq!(
            validate_field(&optional, None, &registry(), &ctx()),
            Ok(TypedValue::Absent)
        );
    }

    #[test]
    fn absent_value_depends_on_nullable() {
        let nullable = FieldSpec::float("sewage_travel_time").nullable();
        assert_eq!(
            validate_field(&nullable, Some(&RawValue::Absent), &registry(), &ctx()),
            Ok(TypedValue::Absent)
        );

        let strict = FieldSpec::enumeration("sample_location", "sample_location").required();
        let err = validate_field(&strict, Some(&RawValue::Absent), &registry(), &ctx()).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::MissingRequired);
        assert_eq!(err.message, EMPTY_VALUE_MESSAGE);
    }

    #[test]
    fn empty_text_reads_as_absent() {
        let nullable = FieldSpec::float("flow_rate").nullable();
        assert_eq!(check(&nullable, ""), Ok(TypedValue::Absent));
    }

    #[test]
    fn parse_failures_are_type_mismatches() {
        let err = check(&FieldSpec::integer("population_served"), "12.5").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::TypeMismatch);
        assert_eq!(err.message, "Not a valid integer.");
        assert_eq!(err.value.as_deref(), Some("12.5"));

        assert!(check(&FieldSpec::float("ph"), "NaN").is_err());
        assert!(check(&FieldSpec::date("test_result_date"), "06/01/2021").is_err());
        assert!(check(&FieldSpec::time("sample_collect_time"), "25:00").is_err());
    }

    #[test]
    fn coerces_each_kind() {
        assert_eq!(
            check(&FieldSpec::integer("n"), "42"),
            Ok(TypedValue::Integer(42))
        );
        assert_eq!(check(&FieldSpec::float("x"), "7.5"), Ok(TypedValue::Float(7.5)));
        assert_eq!(
            check(&FieldSpec::time("t"), "08:30"),
            Ok(TypedValue::Time(NaiveTime::from_hms_opt(8, 30, 0).unwrap()))
        );
    }

    #[test]
    fn enum_message_lists_allowed_values() {
        let spec = FieldSpec::enumeration("sample_location", "sample_location");
        let err = check(&spec, "invalid location").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::NotInValueSet);
        assert_eq!(err.message, "Must be one of: wwtp, upstream.");
    }

    #[test]
    fn range_checks_numbers() {
        let spec = FieldSpec::integer("population_served").range(NumericRange::at_least(0.0));
        let err = check(&spec, "-5").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::OutOfRange);
        assert_eq!(err.message, "Must be greater than or equal to 0.");
        assert!(check(&spec, "0").is_ok());
    }

    #[test]
    fn length_counts_characters() {
        let spec = FieldSpec::string("zipcode").length(Some(5), Some(5));
        assert!(check(&spec, "30301").is_ok());
        let err = check(&spec, "3030").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::LengthViolation);
        assert_eq!(err.message, "Length must be between 5 and 5.");
    }

    #[test]
    fn pattern_applies_to_text() {
        let spec = FieldSpec::string("epaid")
            .pattern(r"^[A-Za-z]{2}[0-9]{7}$")
            .unwrap();
        assert!(check(&spec, "AL0042234").is_ok());
        assert!(check(&spec, "ca2343454").is_ok());
        for bad in ["CA1123", "CAA112323", "0042234AL"] {
            let err = check(&spec, bad).unwrap_err();
            assert_eq!(err.kind, FieldErrorKind::PatternMismatch, "{bad}");
        }
    }

    #[test]
    fn first_failing_constraint_wins() {
        // Both length and pattern would fail; length is checked first.
        let spec = FieldSpec::string("code")
            .max_length(3)
            .pattern("^[0-9]+$")
            .unwrap();
        let err = check(&spec, "abcdef").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::LengthViolation);
    }

    #[test]
    fn future_dates_are_rejected_when_declared() {
        let spec = FieldSpec::date("sample_collect_date").not_in_future();
        assert!(check(&spec, "2021-06-01").is_ok());
        let err = check(&spec, "2021-06-02").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::FutureDateViolation);

        let unbounded = FieldSpec::date("test_result_date");
        assert!(check(&unbounded, "2030-01-01").is_ok());
    }
}
