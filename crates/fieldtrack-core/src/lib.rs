//! fieldtrack core - field-level change detection for mutable records
//!
//! Given a record and the schema describing its fields' semantic types, a
//! [`ChangeTracker`] decides whether the record's current values differ
//! meaningfully from a captured baseline. It drives "save only if something
//! changed" logic in update handlers, where re-saving an unchanged record
//! would re-trigger the handler.
//!
//! This crate provides:
//! - Per-type comparators (text, numeric, true/false, date, link)
//! - Erasure resolution for fields that disappear from the live record
//! - A mutable set of tracked fields
//! - An injectable schema catalog and an optional notice sink
//! - Structured logging via `tracing`

pub mod catalog;
pub mod compare;
pub mod config;
pub mod erasure;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod report;
pub mod schema;
pub mod sink;
pub mod tracked;
pub mod tracker;

// Re-export commonly used types
pub use catalog::{InMemoryCatalog, SchemaCatalog};
pub use config::TrackerConfig;
pub use erasure::{ErasurePolicy, ErasureResolution};
pub use errors::{ExError, ExErrorKind, FieldTrackError, Result};
pub use model::{FieldDescriptor, FieldType, Record, Value};
pub use report::{render_change_summary, ChangeReport};
pub use schema::FieldSchema;
pub use sink::{ChangeSink, TracingSink};
pub use tracker::ChangeTracker;
