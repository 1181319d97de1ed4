//! Canonical schema constants for structured logging and events
//!
//! These constants keep event keys consistent between the emitting macros and
//! anything that consumes the captured events.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Record and field identifiers
pub const FIELD_SCHEMA_ID: &str = "schema_id";
pub const FIELD_FIELD_ID: &str = "field_id";
pub const FIELD_FIELD_TYPE: &str = "field_type";

// Collection sizes
pub const FIELD_TRACKED_LEN: &str = "tracked_len";
pub const FIELD_CHANGED_LEN: &str = "changed_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_MESSAGE: &str = "err.message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
