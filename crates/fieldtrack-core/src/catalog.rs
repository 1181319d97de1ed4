//! Schema catalog capability
//!
//! This module defines the `SchemaCatalog` trait, which resolves a record's
//! schema identifier into its ordered field descriptors. Trackers receive a
//! catalog at construction instead of reaching for a global registry.

use crate::errors::{FieldTrackError, Result};
use crate::model::FieldDescriptor;
use serde::Deserialize;
use std::collections::HashMap;

/// Capability for looking up the fields declared by a schema
///
/// Implementations must return the same descriptors for a given schema ID for
/// as long as a tracker built from them is alive.
pub trait SchemaCatalog {
    /// Resolve a schema identifier to its ordered field descriptors
    ///
    /// # Errors
    ///
    /// Returns `SchemaNotFound` if the catalog does not know `schema_id`.
    fn resolve_fields(&self, schema_id: &str) -> Result<Vec<FieldDescriptor>>;
}

impl<C: SchemaCatalog + ?Sized> SchemaCatalog for &C {
    fn resolve_fields(&self, schema_id: &str) -> Result<Vec<FieldDescriptor>> {
        (**self).resolve_fields(schema_id)
    }
}

/// Catalog backed by an in-memory map of schema ID to descriptors
///
/// # Example
/// ```
/// use fieldtrack_core::catalog::{InMemoryCatalog, SchemaCatalog};
/// use fieldtrack_core::model::{FieldDescriptor, FieldType};
///
/// let catalog = InMemoryCatalog::new()
///     .with_schema("Product", vec![FieldDescriptor::new("Price", FieldType::Numeric)]);
///
/// assert_eq!(catalog.resolve_fields("Product").unwrap().len(), 1);
/// assert!(catalog.resolve_fields("Unknown").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    schemas: HashMap<String, Vec<FieldDescriptor>>,
}

#[derive(Deserialize)]
struct CatalogEntry {
    #[serde(alias = "Fields")]
    fields: Vec<FieldDescriptor>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the fields of a schema
    pub fn insert(&mut self, schema_id: impl Into<String>, fields: Vec<FieldDescriptor>) {
        self.schemas.insert(schema_id.into(), fields);
    }

    /// Builder-style [`InMemoryCatalog::insert`]
    pub fn with_schema(mut self, schema_id: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        self.insert(schema_id, fields);
        self
    }

    /// Load a catalog document
    ///
    /// The document maps schema IDs to `{ "fields": [ { "field_id", "type" } ] }`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the document does not have that shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: HashMap<String, CatalogEntry> =
            serde_json::from_str(json).map_err(|e| FieldTrackError::InvalidCatalog {
                reason: e.to_string(),
            })?;
        let schemas = entries
            .into_iter()
            .map(|(id, entry)| (id, entry.fields))
            .collect();
        Ok(Self { schemas })
    }

    pub fn contains(&self, schema_id: &str) -> bool {
        self.schemas.contains_key(schema_id)
    }
}

impl SchemaCatalog for InMemoryCatalog {
    fn resolve_fields(&self, schema_id: &str) -> Result<Vec<FieldDescriptor>> {
        self.schemas
            .get(schema_id)
            .cloned()
            .ok_or_else(|| FieldTrackError::SchemaNotFound {
                schema_id: schema_id.to_string(),
            })
    }
}
