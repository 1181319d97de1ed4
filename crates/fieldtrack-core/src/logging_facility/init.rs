//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility. Library
//! code only emits events; installing a subscriber is the host's decision.

use crate::logging_facility::test_capture::init_test_capture;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Installs the global tracing subscriber for the selected profile. Later
/// calls, or a subscriber installed elsewhere, leave the existing one in place.
/// `RUST_LOG` overrides the profile's default filter.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Installs the shared capture layer (see
///   [`init_test_capture`](crate::logging_facility::test_capture::init_test_capture))
///
/// # Example
///
/// ```
/// use fieldtrack_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("fieldtrack_core=debug")),
                    )
                    .try_init()
                    .ok();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("fieldtrack_core=info")),
                    )
                    .try_init()
                    .ok();
            }
            Profile::Test => {
                init_test_capture();
            }
        }
    });
}
