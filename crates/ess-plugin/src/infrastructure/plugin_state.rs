//! Process-wide plugin state.
//!
//! The host calls into the plugin from several entry points (startup, the
//! `/reload` command, the console).  They all share one [`PluginState`],
//! constructed on first access.

use std::sync::{Mutex, OnceLock};

use crate::application::load_config::ConfigLoader;
use crate::infrastructure::logging::TracingErrorLog;
use crate::infrastructure::storage::FsDocumentStore;

/// Loader type used by the running plugin.
pub type PluginConfigLoader = ConfigLoader<FsDocumentStore, TracingErrorLog>;

pub struct PluginState {
    /// The single live configuration.  Lock it to load, reload or read.
    pub config: Mutex<PluginConfigLoader>,
}

impl PluginState {
    fn new() -> Self {
        Self {
            config: Mutex::new(ConfigLoader::new(FsDocumentStore::new(), TracingErrorLog)),
        }
    }

    /// Returns the process-wide state, creating it on first use.
    pub fn global() -> &'static PluginState {
        static STATE: OnceLock<PluginState> = OnceLock::new();
        STATE.get_or_init(PluginState::new)
    }
}
