use crate::errors::{FieldTrackError, Result};
use crate::model::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// A mutable record: a schema identifier plus field values keyed by field ID
///
/// A field missing from `fields` is absent, which is distinct from a field
/// holding [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    schema_id: String,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record for the given schema
    pub fn new(schema_id: impl Into<String>) -> Self {
        Self {
            schema_id: schema_id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment
    pub fn with(mut self, field_id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field_id.into(), value.into());
        self
    }

    /// Build a record from a JSON object of field values
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if `json` is not an object.
    pub fn from_json(schema_id: impl Into<String>, json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Object(map) => Ok(Self {
                schema_id: schema_id.into(),
                fields: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
            other => Err(FieldTrackError::Serialization {
                message: format!("record JSON root must be an object, got: {}", other),
            }),
        }
    }

    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    /// Get a field value (`None` when the field is absent)
    pub fn get(&self, field_id: &str) -> Option<&Value> {
        self.fields.get(field_id)
    }

    /// Assign a field value, returning the previous one
    pub fn set(&mut self, field_id: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field_id.into(), value.into())
    }

    /// Erase a field, leaving it absent
    pub fn remove(&mut self, field_id: &str) -> Option<Value> {
        self.fields.remove(field_id)
    }

    pub fn contains_key(&self, field_id: &str) -> bool {
        self.fields.contains_key(field_id)
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
