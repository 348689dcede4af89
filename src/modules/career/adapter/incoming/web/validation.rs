use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const NULL_CHARACTERS: &str = "Null characters are not allowed.";
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Field name → messages, rendered as the 400 response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Interprets a request body as a JSON object.
pub fn as_object(payload: &Value) -> Result<&Map<String, Value>, FieldErrors> {
    match payload {
        Value::Object(map) => Ok(map),
        other => {
            let mut errors = FieldErrors::default();
            errors.add(
                NON_FIELD_ERRORS,
                format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    type_name(other)
                ),
            );
            Err(errors)
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// A required, trimmed, non-blank string field with an optional length cap.
#[derive(Debug, Clone, Copy)]
pub struct CharField {
    name: &'static str,
    max_length: Option<usize>,
}

impl CharField {
    pub const fn new(name: &'static str, max_length: Option<usize>) -> Self {
        Self { name, max_length }
    }

    /// Returns the cleaned value, or records why it was rejected.
    pub fn clean(&self, data: &Map<String, Value>, errors: &mut FieldErrors) -> Option<String> {
        let raw = match data.get(self.name) {
            None => return self.reject(errors, REQUIRED),
            Some(Value::Null) => return self.reject(errors, NOT_NULL),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(_) | Value::Array(_) | Value::Object(_)) => {
                return self.reject(errors, NOT_A_STRING)
            }
        };

        let value = raw.trim();

        if value.is_empty() {
            return self.reject(errors, NOT_BLANK);
        }

        // Length and null-character checks report together.
        let mut valid = true;

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                errors.add(
                    self.name,
                    format!("Ensure this field has no more than {max} characters."),
                );
                valid = false;
            }
        }

        if value.contains('\0') {
            errors.add(self.name, NULL_CHARACTERS);
            valid = false;
        }

        valid.then(|| value.to_string())
    }

    fn reject(&self, errors: &mut FieldErrors, message: impl Into<String>) -> Option<String> {
        errors.add(self.name, message);
        None
    }
}
