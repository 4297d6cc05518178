//! Error log sinks for operator-facing messages.
//!
//! The plugin reports configuration problems as plain strings through the
//! [`ErrorLog`] port.  In production they go to `tracing` at `ERROR` level so
//! they end up in the host's log next to everything else.

use tracing::error;

use crate::application::load_config::ErrorLog;

pub mod mock;

/// [`ErrorLog`] that forwards every message to `tracing::error!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn log_error(&self, message: &str) {
        error!(target: "essentials", "{message}");
    }
}
