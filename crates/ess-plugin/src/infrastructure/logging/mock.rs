//! Recording error log for tests.
//!
//! Keeps every message in order so tests can assert on exactly what an
//! operator would have seen.

use std::sync::Mutex;

use crate::application::load_config::ErrorLog;

/// An [`ErrorLog`] that stores messages instead of emitting them.
#[derive(Default)]
pub struct RecordingErrorLog {
    messages: Mutex<Vec<String>>,
}

impl RecordingErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every message logged so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock poisoned").clone()
    }
}

impl ErrorLog for RecordingErrorLog {
    fn log_error(&self, message: &str) {
        self.messages
            .lock()
            .expect("lock poisoned")
            .push(message.to_string());
    }
}
