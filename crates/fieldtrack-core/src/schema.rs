//! Resolved field schema
//!
//! A [`FieldSchema`] is the ordered, id-indexed view of the descriptors a
//! catalog returns for one schema identifier.

use crate::model::{FieldDescriptor, FieldType};
use std::collections::HashMap;

/// Ordered field descriptors indexed by field ID
///
/// When the same field ID is declared more than once, the last declaration's
/// type wins and the field keeps the position of its first declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSchema {
    order: Vec<String>,
    types: HashMap<String, FieldType>,
}

impl FieldSchema {
    pub fn new<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = FieldDescriptor>,
    {
        let mut schema = Self::default();
        for descriptor in descriptors {
            if schema
                .types
                .insert(descriptor.field_id.clone(), descriptor.field_type)
                .is_none()
            {
                schema.order.push(descriptor.field_id);
            }
        }
        schema
    }

    /// Declared type of a field, if the schema has it
    pub fn field_type(&self, field_id: &str) -> Option<FieldType> {
        self.types.get(field_id).copied()
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.types.contains_key(field_id)
    }

    /// Field IDs in declaration order
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Descriptors in declaration order
    pub fn descriptors(&self) -> impl Iterator<Item = FieldDescriptor> + '_ {
        self.order.iter().filter_map(|id| {
            self.types
                .get(id)
                .map(|t| FieldDescriptor::new(id.clone(), *t))
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<FieldDescriptor> for FieldSchema {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        Self::new(iter)
    }
}
