//! ess-config: load, migrate and inspect a uEssentials configuration file.
//!
//! Runs the same loader the plugin runs at server startup, so an operator can
//! upgrade or check a config document without starting the game server.
//!
//! # Usage
//!
//! ```text
//! ess-config [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Configuration document [default: config.json]
//!   --reset           Overwrite the document with the default configuration
//!   --get <FIELD>     Print a single top-level field (e.g. HomeCommand)
//! ```
//!
//! `RUST_LOG` controls log verbosity (default `info`).

use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ess_plugin::application::command_source::CommandSource;
use ess_plugin::application::load_config::LoadState;
use ess_plugin::infrastructure::console::ConsoleSource;
use ess_plugin::infrastructure::plugin_state::PluginState;

/// Load, migrate and inspect a uEssentials configuration file.
#[derive(Debug, Parser)]
#[command(name = "ess-config", version)]
struct Cli {
    /// Path of the JSON configuration document.
    ///
    /// Created with default values if it does not exist.
    #[arg(long, default_value = "config.json", env = "ESS_CONFIG")]
    config: PathBuf,

    /// Replace the document with the default configuration.
    #[arg(long, conflicts_with = "get")]
    reset: bool,

    /// Print only this top-level field (case-sensitive JSON name).
    #[arg(long, value_name = "FIELD")]
    get: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let console = ConsoleSource::instance();
    let mut loader = PluginState::global()
        .config
        .lock()
        .map_err(|_| anyhow!("configuration lock poisoned"))?;

    if cli.reset {
        loader.load_defaults();
        loader.save(&cli.config)?;
        console.send_message(&format!(
            "Wrote default configuration to {}",
            cli.config.display()
        ));
        return Ok(());
    }

    loader.load(&cli.config);
    info!(state = ?loader.state(), "loaded {}", cli.config.display());
    if loader.state() == LoadState::LoadedWithDefaults {
        console.send_message("Configuration is invalid; showing defaults instead.");
    }

    match cli.get {
        Some(field) => match loader.config().get(&field) {
            Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            None => bail!("unknown configuration field: {field}"),
        },
        None => println!("{}", loader.config().to_json()?),
    }
    Ok(())
}
