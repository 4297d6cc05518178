//! # ess-core
//!
//! Configuration model for the uEssentials server plugin: the typed settings
//! record, its built-in defaults, and the engine that reconciles a persisted
//! JSON document written by an older plugin release with the current shape.
//!
//! This crate does no file I/O and owns no global state.  Reading and writing
//! the document, reporting errors to the host log, and deciding when to fall
//! back to defaults all happen in `ess-plugin`.
//!
//! # Architecture overview
//!
//! - **`config::schema`** – [`EssConfig`] and its nested settings groups.
//!   Field names on disk are PascalCase and case-sensitive.
//!
//! - **`config::defaults`** – the built-in value of every field.  Calling
//!   [`EssConfig::default`] twice always yields equal instances.
//!
//! - **`config::fields`** – the ordered table of top-level fields.  The
//!   migration engine walks this table instead of inspecting types at runtime.
//!
//! - **`config::rules`** – point migrations for renamed leaves.
//!
//! - **`config::migrate`** – turns an arbitrary old document into a fully
//!   populated [`EssConfig`] and says whether the document must be rewritten.
//!
//! - **`config::validate`** – semantic checks reported as [`Violation`]s.

pub mod config;

pub use config::defaults::DEFAULT_LOCALE;
pub use config::error::ConfigError;
pub use config::fields::{fields, FieldDescriptor, FieldKind};
pub use config::migrate::{migrate, parse_document, ConfigDocument, Migration};
pub use config::rules::{MigrationRule, MIGRATION_RULES};
pub use config::schema::{
    AntiSpamSettings, AutoAnnouncerSettings, AutoCommandsSettings, EconomySettings, EssConfig,
    HomeCommandSettings, KitSettings, TpaSettings, UpdaterSettings, VehicleFeaturesSettings,
    WarpCommandSettings, WebConfigSettings, WebKitsSettings,
};
pub use config::validate::{Validatable, Violation};
