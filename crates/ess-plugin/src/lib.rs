//! # ess-plugin
//!
//! Host-side glue for the uEssentials configuration: the loader that keeps
//! the live [`ess_core::EssConfig`] in sync with `config.json`, plus the
//! storage, error-log and console adapters it runs on.
//!
//! `application` holds the loader and the traits it depends on;
//! `infrastructure` holds their concrete implementations.  The `ess-config`
//! binary and the tests under `tests/` both build on this library.

pub mod application;
pub mod infrastructure;
