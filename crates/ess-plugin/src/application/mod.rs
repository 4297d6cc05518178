//! Application layer of the plugin.
//!
//! Use cases here orchestrate `ess_core` types and depend only on traits
//! (`DocumentStore`, `ErrorLog`, `CommandSource`).  Concrete file-system,
//! logging and console implementations live in `infrastructure`.
//!
//! - **`load_config`** – the configuration loader: load-or-create, migrate,
//!   validate, persist-if-changed, and fall back to defaults on any failure.
//! - **`command_source`** – the identity and permission view of whoever
//!   issues a command (a player or the server console).

pub mod command_source;
pub mod load_config;
