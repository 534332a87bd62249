#![allow(missing_docs)]

use nwss_model::{
    CrossFieldRule, FieldGroup, FieldSpec, RecordSchema, SchemaError, ValueSet, ValueSetRegistry,
};

fn registry() -> ValueSetRegistry {
    [
        ValueSet::new("sample_location", ["wwtp", "upstream"]),
        ValueSet::new("yes_no", ["yes", "no"]),
    ]
    .into_iter()
    .collect()
}

fn site_group() -> FieldGroup {
    FieldGroup::new("collection_site")
        .field(FieldSpec::enumeration("sample_location", "sample_location").required())
        .field(FieldSpec::string("sample_location_specify").nullable())
        .rule(CrossFieldRule::value_implies_required(
            "upstream_location_specify",
            "sample_location",
            &["upstream"],
            "sample_location_specify",
        ))
}

#[test]
fn groups_concatenate_in_order() {
    let schema = RecordSchema::builder("WaterSample")
        .group(site_group())
        .group(FieldGroup::new("sample").field(FieldSpec::enumeration("pretreatment", "yes_no")))
        .build(registry())
        .expect("schema");

    let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        ["sample_location", "sample_location_specify", "pretreatment"]
    );
    assert_eq!(schema.groups().len(), 2);
    assert_eq!(schema.groups()[1].fields, ["pretreatment"]);
    assert_eq!(schema.rules().len(), 1);
    assert!(schema.declares("pretreatment"));
    assert!(schema.field("missing").is_none());
    assert_eq!(schema.required_fields().collect::<Vec<_>>(), ["sample_location"]);
}

#[test]
fn duplicate_field_is_rejected() {
    let err = RecordSchema::builder("WaterSample")
        .group(site_group())
        .group(FieldGroup::new("again").field(FieldSpec::string("sample_location_specify")))
        .build(registry())
        .unwrap_err();
    assert!(
        matches!(err, SchemaError::DuplicateField { ref name } if name == "sample_location_specify")
    );
}

#[test]
fn unknown_value_set_is_rejected() {
    let err = RecordSchema::builder("WaterSample")
        .group(FieldGroup::new("sample").field(FieldSpec::enumeration("sample_type", "nope")))
        .build(registry())
        .unwrap_err();
    assert!(matches!(err, SchemaError::UnknownValueSet { .. }));
}

#[test]
fn rule_on_undeclared_field_is_rejected() {
    let err = RecordSchema::builder("WaterSample")
        .group(FieldGroup::new("site").field(FieldSpec::string("county_names")).rule(
            CrossFieldRule::either_or("jurisdiction", "county_names", "other_jurisdiction"),
        ))
        .build(registry())
        .unwrap_err();
    assert!(
        matches!(err, SchemaError::UnknownRuleField { ref field, .. } if field == "other_jurisdiction")
    );
}

#[test]
fn duplicate_rule_is_rejected() {
    let err = RecordSchema::builder("WaterSample")
        .group(site_group())
        .group(FieldGroup::new("dup").rule(CrossFieldRule::value_implies_required(
            "upstream_location_specify",
            "sample_location",
            &["wwtp"],
            "sample_location_specify",
        )))
        .build(registry())
        .unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateRule { .. }));
}
