//! The server console as a command source.
//!
//! There is exactly one console per process.  [`ConsoleSource::instance`]
//! constructs it on first access behind a `OnceLock`; every later caller, on
//! any thread, observes the same fully built instance.
//!
//! The host console cannot render accented Latin-1 letters, so outgoing
//! messages are folded to plain ASCII vowels first.

use std::io::{self, Write};
use std::sync::OnceLock;

use tracing::warn;

use crate::application::command_source::{CommandSource, WILDCARD_PERMISSION};

/// Steam id reserved for "nobody"; the console uses it as its id.
pub const CONSOLE_ID: &str = "0";

pub const CONSOLE_NAME: &str = "*console*";

/// The server console.  Always an admin, holds every permission.
#[derive(Debug)]
pub struct ConsoleSource {
    _private: (),
}

impl ConsoleSource {
    /// Returns the process-wide console source, creating it on first use.
    pub fn instance() -> &'static ConsoleSource {
        static INSTANCE: OnceLock<ConsoleSource> = OnceLock::new();
        INSTANCE.get_or_init(|| ConsoleSource { _private: () })
    }
}

impl CommandSource for ConsoleSource {
    fn id(&self) -> String {
        CONSOLE_ID.to_string()
    }

    fn display_name(&self) -> &str {
        CONSOLE_NAME
    }

    fn is_console(&self) -> bool {
        true
    }

    fn is_admin(&self) -> bool {
        true
    }

    fn permissions(&self) -> Vec<String> {
        vec![WILDCARD_PERMISSION.to_string()]
    }

    fn has_permission(&self, _permission: &str) -> bool {
        true
    }

    fn send_message(&self, message: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", fold_accents(message)) {
            warn!("failed to write to console: {e}");
        }
    }
}

impl std::fmt::Display for ConsoleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(CONSOLE_NAME)
    }
}

/// Replaces accented Latin-1 vowels and `ç`/`Ç` with their ASCII base letter.
///
/// `Ù` and any other character, including other non-ASCII text, is kept
/// as-is.
pub fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'à'..='å' => 'a',
            'À'..='Å' => 'A',
            'è'..='ë' => 'e',
            'È'..='Ë' => 'E',
            'ì'..='ï' => 'i',
            'Ì'..='Ï' => 'I',
            'ò'..='ö' => 'o',
            'Ò'..='Ö' => 'O',
            'ù'..='ü' => 'u',
            'Ú'..='Ü' => 'U',
            'ç' => 'c',
            'Ç' => 'C',
            other => other,
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
