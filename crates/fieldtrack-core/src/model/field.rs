use crate::model::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Semantic type of a record field
///
/// Type names follow the catalog's spelling (`True/False` for booleans).
/// Any name the engine does not model deserializes as `Unsupported`; such
/// fields never register a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Numeric,
    #[serde(rename = "True/False", alias = "TrueFalse")]
    TrueFalse,
    Date,
    Link,
    #[serde(other)]
    Unsupported,
}

impl FieldType {
    /// Every modeled field type, in catalog order
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Numeric,
        FieldType::TrueFalse,
        FieldType::Date,
        FieldType::Link,
    ];

    /// Catalog name of the type
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Numeric => "Numeric",
            FieldType::TrueFalse => "True/False",
            FieldType::Date => "Date",
            FieldType::Link => "Link",
            FieldType::Unsupported => "Unsupported",
        }
    }

    /// Built-in value an erased field of this type is reset to
    pub fn builtin_default(&self) -> Option<Value> {
        match self {
            FieldType::Text => Some(Value::Text(String::new())),
            FieldType::Numeric => Some(Value::Number(0.0)),
            FieldType::TrueFalse => Some(Value::Bool(false)),
            FieldType::Date => Some(Value::Null),
            FieldType::Link => Some(Value::Null),
            FieldType::Unsupported => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named, typed slot declared by a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(alias = "FieldId")]
    pub field_id: String,
    #[serde(rename = "type", alias = "Type")]
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(field_id: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field_id: field_id.into(),
            field_type,
        }
    }
}

/// Per-type default values used when an erased field is fixed
///
/// Owned by a single tracker; overriding a default never affects other
/// trackers.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultValues {
    values: BTreeMap<FieldType, Value>,
}

impl DefaultValues {
    /// Get the default for a type (`None` for unsupported types)
    pub fn get(&self, field_type: FieldType) -> Option<&Value> {
        self.values.get(&field_type)
    }

    /// Override the default for a modeled type
    ///
    /// Returns `false` and leaves the table unchanged for `Unsupported`.
    pub fn set(&mut self, field_type: FieldType, value: Value) -> bool {
        if field_type == FieldType::Unsupported {
            return false;
        }
        self.values.insert(field_type, value);
        true
    }
}

impl Default for DefaultValues {
    fn default() -> Self {
        let values = FieldType::ALL
            .iter()
            .filter_map(|t| t.builtin_default().map(|v| (*t, v)))
            .collect();
        Self { values }
    }
}
