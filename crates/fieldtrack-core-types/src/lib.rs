//! Core types shared across fieldtrack facilities
//!
//! - **Schema constants**: Canonical field keys and event names used by the
//!   structured logging macros and the test capture layer

pub mod schema;
