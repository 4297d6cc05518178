//! Infrastructure layer of the plugin.
//!
//! Contains host-facing adapters: document storage, the error log sink, the
//! console command source, and the process-wide plugin state.
//!
//! **Dependency rule**: this layer may depend on `application` and `ess_core`,
//! but MUST NOT be imported by the `application` layer.

pub mod console;
pub mod logging;
pub mod plugin_state;
pub mod storage;
