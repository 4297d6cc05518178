//! Identity and permission view of a command issuer.
//!
//! Commands can come from a connected player or from the server console.
//! Both are seen through [`CommandSource`]; the console implementation lives
//! in `infrastructure::console`.

/// Permission node that grants every permission.
pub const WILDCARD_PERMISSION: &str = "*";

/// Something that can issue commands and receive replies.
pub trait CommandSource: Send + Sync {
    /// Stable identifier (a Steam id for players).
    fn id(&self) -> String;
    /// Name shown in replies and logs.
    fn display_name(&self) -> &str;
    fn is_console(&self) -> bool;
    fn is_admin(&self) -> bool;
    /// Permission nodes granted to this source.
    fn permissions(&self) -> Vec<String>;
    /// Returns `true` if `permission` is granted.
    ///
    /// The default implementation accepts exact matches and the
    /// [`WILDCARD_PERMISSION`] node.
    fn has_permission(&self, permission: &str) -> bool {
        self.permissions()
            .iter()
            .any(|granted| granted == WILDCARD_PERMISSION || granted == permission)
    }
    /// Delivers a reply to the source.
    fn send_message(&self, message: &str);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
