//! Canonical logging macros
//!
//! Every operation boundary is logged with the same `component`/`op`/`event`
//! keys so captured events can be filtered uniformly.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use fieldtrack_core::log_op_start;
/// log_op_start!("detect_changes");
/// log_op_start!("detect_changes", schema_id = "InvoiceItem");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fieldtrack_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fieldtrack_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use fieldtrack_core::log_op_end;
/// log_op_end!("detect_changes", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fieldtrack_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fieldtrack_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use fieldtrack_core::{log_op_error, errors::FieldTrackError};
/// let err = FieldTrackError::SchemaNotFound { schema_id: "Invoice".to_string() };
/// log_op_error!("tracker_new", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err = ExError::from($err).with_op($op);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = fieldtrack_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.message = %ex_err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err = ExError::from($err).with_op($op);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = fieldtrack_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.message = %ex_err,
            $($field)*
        );
    }};
}
