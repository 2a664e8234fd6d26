/// Record ids are assigned by the store and never reused.
pub type DbId = i64;

/// A stored record: a flat JSON object keyed by attribute name.
pub type Record = serde_json::Map<String, serde_json::Value>;
