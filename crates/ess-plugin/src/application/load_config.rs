//! LoadConfigUseCase: load-or-create, migrate, validate, persist-if-changed.
//!
//! [`ConfigLoader`] exclusively owns the live [`EssConfig`].  The rest of the
//! plugin reads it through [`ConfigLoader::config`]; only the loader mutates it.
//!
//! # Load states
//!
//! ```text
//! NotLoaded ──► Loading ──┬──► Loaded
//!                         └──► LoadedWithDefaults
//! ```
//!
//! - No document at the path: defaults are written to it and the state is
//!   `Loaded`.
//! - Document present: it is parsed, migrated, rewritten if its shape changed,
//!   and validated.  Violations are logged but never block loading.
//! - Any failure while reading, parsing, migrating or rewriting: three error
//!   lines are logged, the in-memory config resets to defaults, and the state
//!   is `LoadedWithDefaults`.  The document on disk is left as it was so the
//!   operator can inspect it.
//!
//! `load` never returns an error; the plugin always starts with a usable
//! configuration.

use std::path::{Path, PathBuf};

use ess_core::{migrate, parse_document, ConfigError, EssConfig, Validatable};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for document storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing is stored at the requested location.
    #[error("document not found: {0}")]
    NotFound(PathBuf),

    /// The underlying storage failed.
    #[error("I/O error accessing document at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for a failed load or save.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Persisted-document storage.
///
/// The production implementation is `infrastructure::storage::FsDocumentStore`.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore: Send + Sync {
    /// Returns `true` if a document exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Reads the whole document as UTF-8 text.
    fn read_all_text(&self, path: &Path) -> Result<String, StoreError>;
    /// Replaces the document at `path` with `text`.
    fn write_all_text(&self, path: &Path, text: &str) -> Result<(), StoreError>;
}

/// Sink for operator-facing error messages.
pub trait ErrorLog: Send + Sync {
    fn log_error(&self, message: &str);
}

/// Where the loader is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// `load` has not been called yet; the config holds defaults.
    NotLoaded,
    /// A load is in progress.
    Loading,
    /// The config reflects the document at the last loaded path.
    Loaded,
    /// The last load failed; the config holds in-memory defaults only.
    LoadedWithDefaults,
}

/// Owner of the live configuration.
pub struct ConfigLoader<S, L> {
    store: S,
    log: L,
    config: EssConfig,
    state: LoadState,
    last_path: Option<PathBuf>,
}

impl<S: DocumentStore, L: ErrorLog> ConfigLoader<S, L> {
    /// Creates a loader holding default values, in the `NotLoaded` state.
    pub fn new(store: S, log: L) -> Self {
        Self {
            store,
            log,
            config: EssConfig::default(),
            state: LoadState::NotLoaded,
            last_path: None,
        }
    }

    /// The live configuration.
    pub fn config(&self) -> &EssConfig {
        &self.config
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Path passed to the most recent [`Self::load`], if any.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn error_log(&self) -> &L {
        &self.log
    }

    /// Resets the in-memory configuration to defaults without touching storage.
    pub fn load_defaults(&mut self) {
        self.config = EssConfig::default();
    }

    /// Loads the configuration at `path` and returns it.
    ///
    /// See the module documentation for the full state machine.
    pub fn load(&mut self, path: &Path) -> &EssConfig {
        self.state = LoadState::Loading;
        self.last_path = Some(path.to_path_buf());

        if !self.store.exists(path) {
            info!("no configuration at {}, creating defaults", path.display());
            self.load_defaults();
            if let Err(e) = self.save(path) {
                self.log.log_error(&format!(
                    "Could not write default configuration ({}): {e}",
                    path.display()
                ));
            }
            self.state = LoadState::Loaded;
            return &self.config;
        }

        match self.load_existing(path) {
            Ok(config) => {
                self.config = config;
                self.state = LoadState::Loaded;
                debug!("configuration loaded from {}", path.display());
            }
            Err(e) => {
                warn!("falling back to default configuration: {e}");
                self.log
                    .log_error(&format!("Invalid configuration ({})", path.display()));
                self.log.log_error(&e.to_string());
                self.log.log_error("Using default configuration...");
                self.load_defaults();
                self.state = LoadState::LoadedWithDefaults;
            }
        }
        &self.config
    }

    /// Re-runs [`Self::load`] on the last loaded path.
    ///
    /// Returns `None` if nothing has been loaded yet.
    pub fn reload(&mut self) -> Option<&EssConfig> {
        let path = self.last_path.clone()?;
        Some(self.load(&path))
    }

    /// Writes the in-memory configuration to `path` as-is.
    ///
    /// # Errors
    ///
    /// [`LoadError::Store`] if the document cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LoadError> {
        let text = self.config.to_json()?;
        self.store.write_all_text(path, &text)?;
        Ok(())
    }

    /// Builds the config from an existing document without touching `self`,
    /// so a failure at any step leaves no partial state behind.
    fn load_existing(&self, path: &Path) -> Result<EssConfig, LoadError> {
        let text = self.store.read_all_text(path)?;
        let document = parse_document(&text)?;
        let migration = migrate(&document)?;

        if migration.requires_rewrite() {
            info!(
                "updating configuration at {} ({} rule(s) applied, {} key(s) dropped)",
                path.display(),
                migration.applied_rules.len(),
                migration.dropped_keys.len()
            );
            self.store
                .write_all_text(path, &migration.config.to_json()?)?;
        }

        for violation in migration.config.validate() {
            self.log.log_error(&violation.to_string());
        }

        Ok(migration.config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
