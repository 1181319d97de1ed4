//! Change report produced by a change query.
//!
//! Collections keep tracked-field order so that identical inputs produce
//! identical reports.

use crate::model::value::render_value;
use crate::model::{FieldType, Value};
use serde::Serialize;

/// Result of one change query over the tracked fields
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChangeReport {
    /// Schema of the record that was compared
    pub schema_id: String,
    /// Tracked fields whose live value differs from the baseline
    pub changed: Vec<FieldChange>,
    /// Erased fields that were reset to their type's default
    pub fixed: Vec<FixedField>,
    /// Erased fields reported as unchanged under the `Ignore` policy
    pub suppressed: Vec<String>,
}

/// One field that compared unequal
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldChange {
    pub field_id: String,
    pub field_type: FieldType,
    /// Baseline value (`None` when the field was absent)
    pub previous: Option<Value>,
    /// Live value after erasure resolution (`None` when absent)
    pub current: Option<Value>,
}

/// One erased field written back with a default value
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FixedField {
    pub field_id: String,
    pub field_type: FieldType,
    pub value: Value,
}

impl ChangeReport {
    pub(crate) fn new(schema_id: impl Into<String>) -> Self {
        Self {
            schema_id: schema_id.into(),
            changed: Vec::new(),
            fixed: Vec::new(),
            suppressed: Vec::new(),
        }
    }

    /// True if at least one tracked field changed
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }

    /// IDs of the changed fields, in tracked order
    pub fn changed_field_ids(&self) -> Vec<&str> {
        self.changed.iter().map(|c| c.field_id.as_str()).collect()
    }

    /// Whether the record was mutated while resolving erasures
    pub fn record_was_mutated(&self) -> bool {
        !self.fixed.is_empty()
    }
}

/// Render a human-readable summary of a [`ChangeReport`].
pub fn render_change_summary(report: &ChangeReport) -> String {
    let mut out = String::new();

    out.push_str("## Field Changes\n\n");
    out.push_str(&format!(
        "**Schema**: {}  \n**Changed fields**: {}\n\n",
        report.schema_id,
        report.changed.len()
    ));

    if !report.has_changes() && report.fixed.is_empty() && report.suppressed.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    if report.has_changes() {
        out.push_str("### Changed\n\n");
        for change in &report.changed {
            out.push_str(&format!(
                "- `{}` ({}): {} -> {}\n",
                change.field_id,
                change.field_type,
                render_value(change.previous.as_ref()),
                render_value(change.current.as_ref()),
            ));
        }
        out.push('\n');
    }

    if !report.fixed.is_empty() {
        out.push_str("### Erased and fixed\n\n");
        for fixed in &report.fixed {
            out.push_str(&format!(
                "- `{}` ({}): reset to {}\n",
                fixed.field_id, fixed.field_type, fixed.value
            ));
        }
        out.push('\n');
    }

    if !report.suppressed.is_empty() {
        out.push_str(&format!(
            "### Erased and ignored\n\n- {}\n",
            report.suppressed.join(", ")
        ));
    }

    out
}
