//! Type comparators
//!
//! One pure equality rule per [`FieldType`]. Operands are `Option<&Value>` so
//! that an absent field can be told apart from a `null` one. Comparators never
//! fail: malformed values fall back to the rule's literal behavior and
//! unsupported types always compare equal.

pub mod link;

pub use link::{compare_link, normalize_link, LinkId};

use crate::model::{FieldType, Value};

/// Options that change how comparators treat their operands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Strip leading and trailing whitespace from text operands
    pub trim_to_compare: bool,
}

/// Compare two values according to a field type; `true` means equal
pub fn compare(
    field_type: FieldType,
    previous: Option<&Value>,
    current: Option<&Value>,
    options: &CompareOptions,
) -> bool {
    match field_type {
        FieldType::TrueFalse => compare_true_false(previous, current),
        FieldType::Text => compare_text(previous, current, options.trim_to_compare),
        FieldType::Numeric => compare_numeric(previous, current),
        FieldType::Date => compare_date(previous, current),
        FieldType::Link => compare_link(previous, current),
        FieldType::Unsupported => true,
    }
}

/// Strict equality, no coercion
pub fn compare_true_false(previous: Option<&Value>, current: Option<&Value>) -> bool {
    previous == current
}

/// Strict equality, optionally ignoring surrounding whitespace on text operands
///
/// Non-text operands are never trimmed, so `" 1 "` and `1` stay unequal.
pub fn compare_text(previous: Option<&Value>, current: Option<&Value>, trim: bool) -> bool {
    if !trim {
        return previous == current;
    }
    match (
        previous.and_then(Value::as_text),
        current.and_then(Value::as_text),
    ) {
        (Some(a), Some(b)) => a.trim() == b.trim(),
        (None, None) => previous == current,
        _ => false,
    }
}

/// Strict equality, except that two NaNs are equal
pub fn compare_numeric(previous: Option<&Value>, current: Option<&Value>) -> bool {
    let is_nan = |v: Option<&Value>| v.and_then(Value::as_number).is_some_and(f64::is_nan);
    if is_nan(previous) && is_nan(current) {
        return true;
    }
    previous == current
}

/// Dates are equal when they denote the same instant
///
/// When neither side is a date, the operands fall back to strict equality
/// (so `null` equals `null` but not an absent value).
pub fn compare_date(previous: Option<&Value>, current: Option<&Value>) -> bool {
    match (
        previous.and_then(Value::as_date),
        current.and_then(Value::as_date),
    ) {
        (Some(a), Some(b)) => a == b,
        (None, None) => previous == current,
        _ => false,
    }
}
