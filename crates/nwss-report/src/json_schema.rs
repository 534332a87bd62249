//! JSON Schema export.
//!
//! The document describes a submission file: an array of records, each an
//! object whose properties follow the field specs. Cross-field rules cannot
//! be expressed in draft-07 and are listed under `x-cross-field-rules`.

use std::path::Path;

use anyhow::Result;
use serde_json::{Map, Value, json};

use nwss_model::{Bound, FieldKind, FieldSpec, NOT_PROVIDED, RecordSchema};

use crate::json::write_pretty_json;

pub const JSON_SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

/// Clock times as the validator parses them (`%H:%M`, one or two digits per
/// part). Draft-07 `format: time` would demand seconds and an offset.
pub const TIME_PATTERN: &str = "^([01]?[0-9]|2[0-3]):[0-5]?[0-9]$";

/// Render `schema` as a draft-07 JSON Schema document.
pub fn json_schema(schema: &RecordSchema) -> Value {
    let properties: Map<String, Value> = schema
        .fields()
        .iter()
        .map(|field| (field.name.clone(), field_schema(schema, field)))
        .collect();
    let required: Vec<&str> = schema.required_fields().collect();
    let rules: Vec<Value> = schema
        .rules()
        .iter()
        .map(|rule| {
            json!({
                "name": rule.name(),
                "description": rule.description(),
                "fields": rule.fields(),
            })
        })
        .collect();

    json!({
        "$schema": JSON_SCHEMA_DRAFT,
        "type": "array",
        "items": { "$ref": format!("#/definitions/{}", schema.name()) },
        "definitions": {
            schema.name(): {
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            }
        },
        "x-cross-field-rules": rules,
    })
}

/// Write the JSON Schema for `schema` to `path`.
pub fn write_json_schema(path: &Path, schema: &RecordSchema) -> Result<()> {
    write_pretty_json(path, &json_schema(schema))
}

fn field_schema(schema: &RecordSchema, field: &FieldSpec) -> Value {
    let mut out = Map::new();
    let base = match field.kind {
        FieldKind::Integer => "integer",
        FieldKind::Float => "number",
        _ => "string",
    };
    out.insert(
        "type".to_string(),
        if field.nullable {
            json!([base, "null"])
        } else {
            json!(base)
        },
    );

    match &field.kind {
        FieldKind::Date => {
            out.insert("format".to_string(), json!("date"));
        }
        FieldKind::Time => {
            out.insert("pattern".to_string(), json!(TIME_PATTERN));
        }
        FieldKind::Enum(set_name) => {
            if let Some(set) = schema.registry().get(set_name) {
                let mut values: Vec<Value> = set.values().iter().map(|v| json!(v)).collect();
                // Empty text reads as absent, so only nullable fields accept it.
                if field.nullable {
                    values.push(json!(NOT_PROVIDED));
                    values.push(Value::Null);
                }
                out.insert("enum".to_string(), Value::Array(values));
            }
        }
        _ => {}
    }

    let constraints = &field.constraints;
    if let Some(range) = &constraints.range {
        if let Some(min) = range.min {
            insert_bound(&mut out, "minimum", "exclusiveMinimum", min);
        }
        if let Some(max) = range.max {
            insert_bound(&mut out, "maximum", "exclusiveMaximum", max);
        }
    }
    if let Some(length) = &constraints.length {
        if let Some(min) = length.min {
            out.insert("minLength".to_string(), json!(min));
        }
        if let Some(max) = length.max {
            out.insert("maxLength".to_string(), json!(max));
        }
    }
    if let Some(pattern) = &constraints.pattern {
        out.insert("pattern".to_string(), json!(pattern.as_str()));
    }
    if let Some(unit) = &field.unit {
        out.insert("unit".to_string(), json!(unit));
    }
    if let Some(description) = &field.description {
        out.insert("description".to_string(), json!(description));
    }
    Value::Object(out)
}

fn insert_bound(out: &mut Map<String, Value>, inclusive: &str, exclusive: &str, bound: Bound) {
    let key = if bound.inclusive { inclusive } else { exclusive };
    out.insert(key.to_string(), number(bound.value));
}

/// Whole numbers render without a fractional part.
fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_bounds_render_as_integers() {
        assert_eq!(number(0.0), json!(0));
        assert_eq!(number(-1.0), json!(-1));
        assert_eq!(number(2.5), json!(2.5));
    }
}
