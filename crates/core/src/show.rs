//! The show entity: its collection name, schema, and validated create payload.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::schema::{require_object, FieldKind, FieldSpec, Schema, ValidationError};
use crate::types::Record;

/// Store collection holding show records.
pub const COLLECTION: &str = "shows";

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Show";

/// Attributes a create request must carry, no more and no fewer.
pub const SHOW_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "name",
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "episodes_seen",
            kind: FieldKind::Integer,
        },
    ],
};

/// A validated create payload. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    pub name: String,
    pub episodes_seen: i64,
}

impl NewShow {
    pub fn new(name: impl Into<String>, episodes_seen: i64) -> Self {
        Self {
            name: name.into(),
            episodes_seen,
        }
    }

    /// Validate a decoded request body against [`SHOW_SCHEMA`].
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        Self::from_record(require_object(body)?)
    }

    /// Validate an already object-shaped body against [`SHOW_SCHEMA`].
    pub fn from_record(body: Record) -> Result<Self, ValidationError> {
        let record = SHOW_SCHEMA.validate(body)?;

        // The schema has already checked both fields are present and typed.
        let name = record["name"].as_str().unwrap_or_default().to_string();
        let episodes_seen = record["episodes_seen"].as_i64().unwrap_or_default();
        Ok(Self {
            name,
            episodes_seen,
        })
    }

    pub fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("name".into(), json!(self.name));
        record.insert("episodes_seen".into(), json!(self.episodes_seen));
        record
    }
}

/// Whether `record` has seen at least `min` episodes.
///
/// Updates may store any JSON number, so the comparison is numeric. Records
/// whose `episodes_seen` is not a number never match.
pub fn has_seen_at_least(record: &Record, min: i64) -> bool {
    match record.get("episodes_seen") {
        Some(Value::Number(seen)) => match seen.as_i64() {
            Some(seen) => seen >= min,
            None => seen.as_f64().is_some_and(|seen| seen >= min as f64),
        },
        _ => false,
    }
}
