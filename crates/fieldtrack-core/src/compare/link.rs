//! Link normalization
//!
//! A link value is semantically a set of referenced record IDs. It can show
//! up absent, as `null`, as a single reference object or as a list of them,
//! and lists may contain junk entries, duplicates and any ordering.

use crate::model::value::{Value, REFERENCE_ID_KEY};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of a linked record
///
/// Numeric and text identifiers never match each other, so `12` and `"12"`
/// are different records. Numbers sort before text.
#[derive(Debug, Clone)]
pub enum LinkId {
    Number(f64),
    Text(String),
}

impl PartialEq for LinkId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LinkId {}

impl PartialOrd for LinkId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LinkId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (LinkId::Number(a), LinkId::Number(b)) => a.total_cmp(b),
            (LinkId::Text(a), LinkId::Text(b)) => a.cmp(b),
            (LinkId::Number(_), LinkId::Text(_)) => Ordering::Less,
            (LinkId::Text(_), LinkId::Number(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkId::Number(n) => write!(f, "{}", Value::Number(*n)),
            LinkId::Text(id) => f.write_str(id),
        }
    }
}

impl From<&str> for LinkId {
    fn from(id: &str) -> Self {
        LinkId::Text(id.to_string())
    }
}

/// Normalize a raw link value into its sorted, deduplicated identifiers
///
/// 1. Lists pass through, a single object becomes a one-element list, and
///    anything else (absent, `null`, scalars) becomes empty.
/// 2. Entries that are not reference objects with a usable `_id` are dropped.
/// 3. Identifiers are sorted and duplicates removed.
pub fn normalize_link(value: Option<&Value>) -> Vec<LinkId> {
    let entries: &[Value] = match value {
        Some(single @ Value::Object(_)) => std::slice::from_ref(single),
        Some(other) => other.as_list().unwrap_or_default(),
        None => &[],
    };

    let mut ids: Vec<LinkId> = entries.iter().filter_map(reference_id).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Two link values are equal when they reference the same set of records
pub fn compare_link(previous: Option<&Value>, current: Option<&Value>) -> bool {
    normalize_link(previous) == normalize_link(current)
}

// Usable ids are non-empty strings or non-zero finite numbers.
fn reference_id(entry: &Value) -> Option<LinkId> {
    let id = entry.as_object()?.get(REFERENCE_ID_KEY)?;
    if let Some(text) = id.as_text() {
        return (!text.is_empty()).then(|| LinkId::Text(text.to_string()));
    }
    id.as_number()
        .filter(|n| n.is_finite() && *n != 0.0)
        .map(LinkId::Number)
}
