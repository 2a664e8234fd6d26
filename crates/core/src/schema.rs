//! Static record schemas and strict request-body validation.
//!
//! A [`Schema`] lists the exact set of attributes a record accepts. Validation
//! is fail-fast: a body with a missing attribute, an attribute of the wrong
//! JSON type, or any attribute the schema does not know about is rejected with
//! a [`ValidationError`] naming the offending field.

use std::fmt;

use serde_json::Value;

use crate::types::Record;

/// Where a scalar parameter came from, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Query,
    Path,
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("Query"),
            Self::Path => f.write_str("Path"),
        }
    }
}

/// A request-time validation failure. Every variant maps to HTTP 422.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("JSON body must be of type 'object': {actual}")]
    NotAnObject { actual: &'static str },

    #[error("Missing attribute: '{field}'")]
    Missing { field: String },

    #[error("Unexpected attribute: '{field}'")]
    Unexpected { field: String },

    #[error("Attribute '{field}' must be of type '{expected}': {actual}")]
    WrongType {
        field: String,
        expected: FieldKind,
        actual: &'static str,
    },

    #[error("{location} parameter '{name}' must be an integer: '{value}'")]
    InvalidInteger {
        location: ParamLocation,
        name: String,
        value: String,
    },
}

/// The JSON type an attribute must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
}

impl FieldKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// An ordered, closed set of required attributes.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Check `body` against the schema and return it unchanged on success.
    ///
    /// Fields are checked in schema order, so the first missing or mistyped
    /// field is reported. A `null` value counts as missing. Unknown attributes
    /// are only reported once every required field is present.
    pub fn validate(&self, body: Record) -> Result<Record, ValidationError> {
        for spec in self.fields {
            match body.get(spec.name) {
                None | Some(Value::Null) => {
                    return Err(ValidationError::Missing {
                        field: spec.name.to_string(),
                    });
                }
                Some(value) if !spec.kind.accepts(value) => {
                    return Err(ValidationError::WrongType {
                        field: spec.name.to_string(),
                        expected: spec.kind,
                        actual: json_type_name(value),
                    });
                }
                Some(_) => {}
            }
        }

        if let Some(extra) = body.keys().find(|key| !self.contains(key)) {
            return Err(ValidationError::Unexpected {
                field: extra.clone(),
            });
        }

        Ok(body)
    }
}

/// Require a decoded request body to be a JSON object.
pub fn require_object(value: Value) -> Result<Record, ValidationError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ValidationError::NotAnObject {
            actual: json_type_name(&other),
        }),
    }
}

/// Parse a raw query or path parameter as an integer.
pub fn parse_integer(
    location: ParamLocation,
    name: &str,
    raw: &str,
) -> Result<i64, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidInteger {
            location,
            name: name.to_string(),
            value: raw.to_string(),
        })
}

/// The JSON type name of `value`, as used in client-facing messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
