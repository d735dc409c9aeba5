//! Document validation against resource schemas
//!
//! Validation walks the schema's fields in declaration order and collects
//! every failure, so error lists are deterministic for a given input.
//! A passing document comes back as a [`NormalizedRecord`]: defaults
//! filled in, unknown keys dropped, declared keys carried through.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::schema::errors::ValidationError;
use crate::schema::types::{FieldSpec, FieldType, ResourceSchema};

/// Field path reported when the input is not a JSON object at all.
const ROOT_FIELD: &str = "$root";

/// Date format accepted for [`FieldType::Date`] fields.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A document that passed validation.
///
/// Holds exactly the declared fields: provided values, substituted
/// defaults, and explicit nulls on nullable fields. Optional fields
/// that were absent stay absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    fields: Map<String, Value>,
}

impl NormalizedRecord {
    /// The normalized fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the record, yielding its fields.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// The record as a JSON object value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// Validate `input` against `schema`.
///
/// Returns the normalized record, or every failure found, ordered by
/// field declaration. Unknown keys are dropped without error.
pub fn validate_document(
    schema: &ResourceSchema,
    input: &Value,
) -> Result<NormalizedRecord, Vec<ValidationError>> {
    let Some(object) = input.as_object() else {
        return Err(vec![ValidationError::type_mismatch(
            ROOT_FIELD,
            "object",
            json_type_name(input),
        )]);
    };

    let mut errors = Vec::new();
    let mut fields = Map::new();

    for spec in &schema.fields {
        match object.get(spec.name) {
            Some(Value::Null) if spec.nullable => {
                fields.insert(spec.name.to_string(), Value::Null);
            }
            Some(value) => {
                let failures_before = errors.len();
                check_value(spec.name, spec, value, &mut errors);
                if errors.len() == failures_before {
                    fields.insert(spec.name.to_string(), value.clone());
                }
            }
            None if spec.required => {
                errors.push(ValidationError::required(spec.name));
            }
            None => {
                if let Some(default) = &spec.default {
                    fields.insert(spec.name.to_string(), default.clone());
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(NormalizedRecord { fields })
    } else {
        Err(errors)
    }
}

/// Type- and range-check a single non-null value.
fn check_value(path: &str, spec: &FieldSpec, value: &Value, errors: &mut Vec<ValidationError>) {
    match spec.field_type {
        FieldType::String => {
            if !value.is_string() {
                errors.push(mismatch(path, spec, value));
            }
        }
        FieldType::Int => {
            if value.is_i64() || value.is_u64() {
                check_range(path, spec, value, errors);
            } else {
                errors.push(mismatch(path, spec, value));
            }
        }
        FieldType::Float => {
            if value.is_number() {
                check_range(path, spec, value, errors);
            } else {
                errors.push(mismatch(path, spec, value));
            }
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                errors.push(mismatch(path, spec, value));
            }
        }
        FieldType::Date => match value.as_str() {
            Some(text) => {
                if !is_calendar_date(text) {
                    errors.push(ValidationError::type_mismatch(
                        path,
                        "ISO-8601 date (YYYY-MM-DD)",
                        "malformed date string",
                    ));
                }
            }
            None => errors.push(mismatch(path, spec, value)),
        },
        FieldType::StringArray => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        errors.push(ValidationError::type_mismatch(
                            format!("{}[{}]", path, index),
                            "string",
                            json_type_name(item),
                        ));
                    }
                }
            }
            None => errors.push(mismatch(path, spec, value)),
        },
    }
}

/// Strict `YYYY-MM-DD` check. Chrono tolerates unpadded fields when
/// parsing, so the parsed date is formatted back and compared.
fn is_calendar_date(text: &str) -> bool {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .is_ok_and(|date| date.format(DATE_FORMAT).to_string() == text)
}

/// Bounds check for a value already known to be numeric.
fn check_range(path: &str, spec: &FieldSpec, value: &Value, errors: &mut Vec<ValidationError>) {
    if let (Some(range), Some(number)) = (spec.range, value.as_f64()) {
        if !range.contains(number) {
            errors.push(ValidationError::out_of_range(path, range));
        }
    }
}

fn mismatch(path: &str, spec: &FieldSpec, value: &Value) -> ValidationError {
    ValidationError::type_mismatch(path, spec.field_type.type_name(), json_type_name(value))
}

/// The JSON type of `value`, distinguishing int from float.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
