//! Tracked-field set
//!
//! The subset of a schema's fields that participate in change detection.

use crate::schema::FieldSchema;

/// Ordered set of tracked field IDs
///
/// Insertion order is preserved; only IDs present in the schema can be added.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackedFields {
    ids: Vec<String>,
}

impl TrackedFields {
    /// Track every field of the schema, in declaration order
    pub fn all(schema: &FieldSchema) -> Self {
        Self {
            ids: schema.field_ids().map(str::to_string).collect(),
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Track each ID the schema declares and that is not yet tracked
    ///
    /// Unknown IDs are dropped silently. Returns how many IDs were added.
    pub fn add<I, S>(&mut self, schema: &FieldSchema, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.ids.len();
        for id in ids {
            let id = id.as_ref();
            if schema.contains(id) && !self.contains(id) {
                self.ids.push(id.to_string());
            }
        }
        self.ids.len() - before
    }

    /// Stop tracking the given IDs; returns how many were removed
    pub fn remove<I, S>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed: Vec<S> = ids.into_iter().collect();
        let before = self.ids.len();
        self.ids
            .retain(|tracked| !removed.iter().any(|r| r.as_ref() == tracked.as_str()));
        before - self.ids.len()
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.ids.iter().any(|id| id == field_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
