use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Key under which a reference object carries the identifier of the record it
/// points to.
pub const REFERENCE_ID_KEY: &str = "_id";

/// Dynamic value held by a record field
///
/// A field that is missing from a record is *absent* and is represented as
/// `None` wherever an `Option<&Value>` appears; `Value::Null` is a defined
/// value. The two are never interchangeable.
///
/// Equality is structural. Numbers follow IEEE-754 (`NaN != NaN`) and dates
/// compare by instant regardless of their UTC offset.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(DateTime<FixedOffset>),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Build a date value from any timezone-aware timestamp
    pub fn date<Tz: TimeZone>(at: DateTime<Tz>) -> Self {
        Value::Date(at.fixed_offset())
    }

    /// Build a reference object `{ "_id": id }`
    pub fn reference(id: impl Into<String>) -> Self {
        let mut object = BTreeMap::new();
        object.insert(REFERENCE_ID_KEY.to_string(), Value::Text(id.into()));
        Value::Object(object)
    }

    /// Build a list of reference objects, one per identifier
    pub fn references<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(ids.into_iter().map(Value::reference).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert to JSON for display and serialization
    ///
    /// Non-finite numbers become `null` and dates become RFC 3339 strings.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Date(d) => serde_json::Value::String(d.to_rfc3339()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

/// Render a possibly-absent value for log lines (`undefined` when absent)
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "undefined".to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(d: DateTime<FixedOffset>) -> Self {
        Value::Date(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_nan_is_not_structurally_equal_to_itself() {
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert!(Value::Number(f64::NAN).as_number().is_some_and(f64::is_nan));
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn test_dates_compare_by_instant() {
        let utc = Utc.with_ymd_and_hms(2020, 11, 11, 0, 0, 0).unwrap();
        let plus_two = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(Value::date(utc), Value::date(plus_two));
    }

    #[test]
    fn test_from_json_maps_every_shape() {
        let value = Value::from(json!({
            "n": 1,
            "s": "x",
            "b": true,
            "z": null,
            "l": [{"_id": "1"}]
        }));
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("n"), Some(&Value::Number(1.0)));
        assert_eq!(obj.get("s"), Some(&Value::Text("x".into())));
        assert_eq!(obj.get("b"), Some(&Value::Bool(true)));
        assert_eq!(obj.get("z"), Some(&Value::Null));
        assert_eq!(obj.get("l"), Some(&Value::references(["1"])));
    }

    #[test]
    fn test_to_json_renders_integers_without_fraction() {
        assert_eq!(Value::Number(1000.0).to_string(), "1000");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::Number(f64::NAN).to_string(), "null");
    }

    #[test]
    fn test_render_absent_as_undefined() {
        assert_eq!(render_value(None), "undefined");
        assert_eq!(render_value(Some(&Value::Text("a".into()))), "\"a\"");
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let value = Value::reference("42");
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"_id": "42"})
        );
    }
}
