//! Optional logging collaborator for change notices
//!
//! A tracker configured with a [`ChangeSink`] reports every changed field and
//! every fixed erasure as a human-readable line. Sinks return nothing, so
//! they cannot influence comparison results.

/// Level used for change and fix notices
pub const LEVEL_NOTICE: &str = "notice";

/// Receiver of human-readable change notices
pub trait ChangeSink {
    fn log(&self, level: &str, message: &str);
}

impl<F> ChangeSink for F
where
    F: Fn(&str, &str),
{
    fn log(&self, level: &str, message: &str) {
        self(level, message)
    }
}

/// Sink that forwards notices to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ChangeSink for TracingSink {
    fn log(&self, level: &str, message: &str) {
        match level {
            "error" => tracing::error!(component = module_path!(), sink_level = level, "{}", message),
            "warn" | "warning" => tracing::warn!(component = module_path!(), sink_level = level, "{}", message),
            "debug" => tracing::debug!(component = module_path!(), sink_level = level, "{}", message),
            _ => tracing::info!(component = module_path!(), sink_level = level, "{}", message),
        }
    }
}
