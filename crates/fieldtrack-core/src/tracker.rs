//! Change tracker
//!
//! A [`ChangeTracker`] captures a baseline of a record when it is built and
//! answers whether the record's tracked fields have since changed in a way
//! that warrants saving it. Each query runs every tracked field through
//! erasure resolution and then through the comparator for its declared type.
//!
//! The tracker never stores the live record. Each query borrows it mutably
//! because the `Fix` erasure policy writes default values back into erased
//! fields; that write happens in exactly one place, [`ChangeTracker::detect_changes`].
//!
//! ```
//! use fieldtrack_core::catalog::InMemoryCatalog;
//! use fieldtrack_core::model::{FieldDescriptor, FieldType, Record};
//! use fieldtrack_core::tracker::ChangeTracker;
//!
//! let catalog = InMemoryCatalog::new()
//!     .with_schema("Product", vec![FieldDescriptor::new("Price", FieldType::Numeric)]);
//! let mut record = Record::new("Product").with("Price", 100);
//!
//! let tracker = ChangeTracker::new(&catalog, &record).unwrap();
//! assert!(!tracker.changes_were_made(&mut record));
//!
//! record.set("Price", 120);
//! assert!(tracker.changes_were_made(&mut record));
//! ```

use crate::catalog::SchemaCatalog;
use crate::compare::{self, CompareOptions};
use crate::config::TrackerConfig;
use crate::erasure;
use crate::errors::Result;
use crate::model::value::render_value;
use crate::model::{DefaultValues, FieldType, Record, Value};
use crate::report::{ChangeReport, FieldChange, FixedField};
use crate::schema::FieldSchema;
use crate::sink::{ChangeSink, LEVEL_NOTICE};
use crate::tracked::TrackedFields;
use crate::{log_op_end, log_op_error, log_op_start};
use std::fmt;
use std::time::Instant;

/// Field-level change detector for one before/after window
pub struct ChangeTracker {
    schema: FieldSchema,
    baseline: Record,
    tracked: TrackedFields,
    config: TrackerConfig,
    defaults: DefaultValues,
    sink: Option<Box<dyn ChangeSink>>,
}

impl ChangeTracker {
    /// Build a tracker with the default configuration
    ///
    /// # Errors
    ///
    /// Returns `SchemaNotFound` if the catalog cannot resolve the record's
    /// schema.
    pub fn new<C>(catalog: &C, record: &Record) -> Result<Self>
    where
        C: SchemaCatalog + ?Sized,
    {
        Self::with_config(catalog, record, TrackerConfig::default())
    }

    /// Build a tracker, snapshotting `record` as the baseline
    ///
    /// Every field the schema declares starts out tracked.
    ///
    /// # Errors
    ///
    /// Returns `SchemaNotFound` if the catalog cannot resolve the record's
    /// schema.
    pub fn with_config<C>(catalog: &C, record: &Record, config: TrackerConfig) -> Result<Self>
    where
        C: SchemaCatalog + ?Sized,
    {
        let start = Instant::now();
        let baseline = record.clone();
        let schema_id = baseline.schema_id();
        log_op_start!("tracker_new", schema_id = schema_id);

        let descriptors = match catalog.resolve_fields(schema_id) {
            Ok(descriptors) => descriptors,
            Err(err) => {
                log_op_error!(
                    "tracker_new",
                    err.clone(),
                    duration_ms = elapsed_ms(start),
                    schema_id = schema_id
                );
                return Err(err);
            }
        };
        let schema = FieldSchema::new(descriptors);
        let tracked = TrackedFields::all(&schema);

        log_op_end!(
            "tracker_new",
            duration_ms = elapsed_ms(start),
            schema_id = schema_id,
            tracked_len = tracked.len()
        );

        Ok(Self {
            schema,
            baseline,
            tracked,
            config,
            defaults: DefaultValues::default(),
            sink: None,
        })
    }

    /// Attach a sink that receives a notice per changed or fixed field
    pub fn with_sink(mut self, sink: impl ChangeSink + 'static) -> Self {
        self.set_sink(sink);
        self
    }

    pub fn set_sink(&mut self, sink: impl ChangeSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Snapshot of the record taken at construction
    pub fn baseline(&self) -> &Record {
        &self.baseline
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn tracked_fields(&self) -> &TrackedFields {
        &self.tracked
    }

    /// Stop tracking every field; queries report no changes until fields
    /// are added back
    pub fn clear_tracked_fields(&mut self) {
        self.tracked.clear();
    }

    /// Track the given fields; IDs the schema does not declare are ignored
    pub fn add_tracked_fields<I, S>(&mut self, field_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tracked.add(&self.schema, field_ids);
    }

    /// Stop tracking the given fields
    pub fn remove_tracked_fields<I, S>(&mut self, field_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tracked.remove(field_ids);
    }

    /// Default value written into erased fields of this type
    pub fn default_value(&self, field_type: FieldType) -> Option<&Value> {
        self.defaults.get(field_type)
    }

    /// Override the erasure default for one field type on this tracker only
    ///
    /// Unsupported types have no default and are left unchanged.
    pub fn set_default_value(&mut self, field_type: FieldType, value: impl Into<Value>) {
        if !self.defaults.set(field_type, value.into()) {
            tracing::debug!(
                component = module_path!(),
                field_type = %field_type,
                "ignoring default override for unsupported field type"
            );
        }
    }

    /// True if at least one tracked field differs from the baseline
    ///
    /// Under the `Fix` policy, erased fields are reset in `record` as a side
    /// effect.
    pub fn changes_were_made(&self, record: &mut Record) -> bool {
        self.detect_changes(record).has_changes()
    }

    /// Compare every tracked field and report what changed
    ///
    /// All tracked fields are evaluated, even after the first difference.
    pub fn detect_changes(&self, record: &mut Record) -> ChangeReport {
        let start = Instant::now();
        let schema_id = self.baseline.schema_id();
        log_op_start!(
            "detect_changes",
            schema_id = schema_id,
            tracked_len = self.tracked.len()
        );

        let options = self.config.compare_options();
        let mut report = ChangeReport::new(schema_id);
        for field_id in self.tracked.iter() {
            self.check_field(field_id, record, &options, &mut report);
        }

        log_op_end!(
            "detect_changes",
            duration_ms = elapsed_ms(start),
            schema_id = schema_id,
            changed_len = report.changed.len()
        );
        report
    }

    /// Run the save closure only if a tracked field changed
    ///
    /// Returns whether the record was saved.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `save`.
    pub fn save_if_changed<F, E>(&self, record: &mut Record, save: F) -> std::result::Result<bool, E>
    where
        F: FnOnce(&mut Record) -> std::result::Result<(), E>,
    {
        if !self.changes_were_made(record) {
            return Ok(false);
        }
        save(record)?;
        Ok(true)
    }

    fn check_field(
        &self,
        field_id: &str,
        record: &mut Record,
        options: &CompareOptions,
        report: &mut ChangeReport,
    ) {
        let Some(field_type) = self.schema.field_type(field_id) else {
            return;
        };
        let previous = self.baseline.get(field_id);

        let resolution = erasure::resolve(
            self.config.erased_compare,
            previous,
            record.get(field_id),
            self.defaults.get(field_type),
        );
        if !resolution.needs_comparison() {
            tracing::debug!(
                component = module_path!(),
                field_id,
                field_type = %field_type,
                "erased field ignored"
            );
            report.suppressed.push(field_id.to_string());
            return;
        }
        if let Some(value) = resolution.record_write() {
            record.set(field_id, value.clone());
            tracing::debug!(
                component = module_path!(),
                field_id,
                field_type = %field_type,
                value = %value,
                "erased field reset to default"
            );
            if previous != Some(value) {
                self.notice(|| {
                    format!(
                        "### Field {} was fixed: {}(undefined, {})",
                        field_id, field_type, value
                    )
                });
            }
            report.fixed.push(FixedField {
                field_id: field_id.to_string(),
                field_type,
                value: value.clone(),
            });
        }

        let current = record.get(field_id);
        if compare::compare(field_type, previous, current, options) {
            return;
        }

        tracing::debug!(
            component = module_path!(),
            field_id,
            field_type = %field_type,
            "field changed"
        );
        self.notice(|| {
            format!(
                "### {} field changed: {}({}, {})",
                field_id,
                field_type,
                render_value(previous),
                render_value(current)
            )
        });
        report.changed.push(FieldChange {
            field_id: field_id.to_string(),
            field_type,
            previous: previous.cloned(),
            current: current.cloned(),
        });
    }

    fn notice(&self, message: impl FnOnce() -> String) {
        if let Some(sink) = &self.sink {
            sink.log(LEVEL_NOTICE, &message());
        }
    }
}

impl fmt::Debug for ChangeTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeTracker")
            .field("schema_id", &self.baseline.schema_id())
            .field("tracked", &self.tracked)
            .field("config", &self.config)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
