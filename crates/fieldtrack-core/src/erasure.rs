//! Erasure resolution
//!
//! A field is *erased* when the baseline held a defined value (including
//! `null`) and the live record no longer has the field at all. Saving such a
//! record typically restores the stored value, so a naive comparison would
//! report the same change on every update cycle. The [`ErasurePolicy`] picks
//! how that case is resolved before the type comparator runs.
//!
//! Resolution is pure: it returns an [`ErasureResolution`] describing what
//! the caller should write back, and the tracker applies it to the record.

use crate::model::Value;
use serde::{Deserialize, Serialize};

/// How a tracker treats erased fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErasurePolicy {
    /// Reset the field to its type's default value, then compare
    #[default]
    Fix,
    /// Report the field as unchanged and leave it absent
    Ignore,
    /// Compare baseline against absent; reports a change on every query
    None,
}

/// Outcome of resolving one field before comparison
#[derive(Debug, Clone, PartialEq)]
pub enum ErasureResolution {
    /// Not an erasure; compare the live value as-is
    NotErased,
    /// Write `value` into the record and compare against it
    Fixed { value: Value },
    /// Skip the comparator; the field counts as unchanged
    Suppressed,
    /// Erasure left in place; compare the baseline against absent
    Unresolved,
}

impl ErasureResolution {
    /// Value the caller must write into the live record, if any
    pub fn record_write(&self) -> Option<&Value> {
        match self {
            ErasureResolution::Fixed { value } => Some(value),
            _ => None,
        }
    }

    /// Whether the comparator should run for this field
    pub fn needs_comparison(&self) -> bool {
        !matches!(self, ErasureResolution::Suppressed)
    }
}

/// Whether `previous -> current` is an erasure
pub fn was_erased(previous: Option<&Value>, current: Option<&Value>) -> bool {
    previous.is_some() && current.is_none()
}

/// Resolve a field's erasure state under a policy
///
/// `default` is the configured default for the field's type; a type without
/// one (unsupported types) cannot be fixed and is left unresolved.
pub fn resolve(
    policy: ErasurePolicy,
    previous: Option<&Value>,
    current: Option<&Value>,
    default: Option<&Value>,
) -> ErasureResolution {
    if !was_erased(previous, current) {
        return ErasureResolution::NotErased;
    }
    match (policy, default) {
        (ErasurePolicy::Fix, Some(value)) => ErasureResolution::Fixed {
            value: value.clone(),
        },
        (ErasurePolicy::Fix, None) => ErasureResolution::Unresolved,
        (ErasurePolicy::Ignore, _) => ErasureResolution::Suppressed,
        (ErasurePolicy::None, _) => ErasureResolution::Unresolved,
    }
}
