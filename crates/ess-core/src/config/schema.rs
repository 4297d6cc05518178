//! The typed configuration record and its nested settings groups.
//!
//! On disk the record is a single JSON object whose keys are the PascalCase
//! field names below (`"PMFormatFrom"`, `"HomeCommand"`, ...).  Matching is
//! exact and case-sensitive.
//!
//! ```json
//! {
//!   "Locale": "en",
//!   "HomeCommand": { "Cooldown": 30, "Delay": 5, "CancelTeleportWhenMove": true },
//!   "EnabledSystems": ["kits", "warps"]
//! }
//! ```
//!
//! Every settings group carries `#[serde(default)]`: a group present in the
//! document but missing some leaves gets the group's default for those leaves.
//! The top-level record is intentionally *not* defaultable through serde;
//! top-level reconciliation is the job of [`crate::config::migrate`].
//!
//! Integer and boolean leaves are read through [`crate::config::lenient`], so
//! `30.0` or `"30"` load as `30` and `"true"` loads as `true`.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Root configuration record of the plugin.
///
/// Field declaration order is the serialization order, so a freshly written
/// document always lists keys in the same order as [`crate::fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EssConfig {
    /// Message locale (`"en"`, `"pt-br"`, ...).
    pub locale: String,
    /// Format of a private message as seen by the receiver.  `{0}` is the
    /// sender name, `{1}` the message.
    #[serde(rename = "PMFormatFrom")]
    pub pm_format_from: String,
    /// Format of a private message as seen by the sender.
    #[serde(rename = "PMFormatTo")]
    pub pm_format_to: String,

    #[serde(deserialize_with = "lenient::boolean")]
    pub unfreeze_on_death: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub unfreeze_on_quit: bool,

    #[serde(deserialize_with = "lenient::boolean")]
    pub enable_text_commands: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub enable_death_messages: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub enable_join_leave_message: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub show_permission_on_error_message: bool,

    #[serde(deserialize_with = "lenient::boolean")]
    pub enable_poll_running_message: bool,
    /// Seconds between "a poll is running" broadcasts.
    #[serde(deserialize_with = "lenient::int")]
    pub poll_running_message_cooldown: i32,
    /// Target server frame rate; `-1` leaves the engine default untouched.
    #[serde(deserialize_with = "lenient::int")]
    pub server_frame_rate: i32,

    /// Maximum item amount a single `/i` command may spawn.
    #[serde(deserialize_with = "lenient::int")]
    pub item_spawn_limit: u16,

    #[serde(deserialize_with = "lenient::group")]
    pub anti_spam: AntiSpamSettings,
    #[serde(deserialize_with = "lenient::group")]
    pub updater: UpdaterSettings,
    #[serde(deserialize_with = "lenient::group")]
    pub home_command: HomeCommandSettings,
    #[serde(deserialize_with = "lenient::group")]
    pub warp_command: WarpCommandSettings,
    #[serde(deserialize_with = "lenient::group")]
    pub vehicle_features: VehicleFeaturesSettings,
    #[serde(deserialize_with = "lenient::group")]
    pub web_kits: WebKitsSettings,
    #[serde(deserialize_with = "lenient::group")]
    pub web_config: WebConfigSettings,
    #[serde(deserialize_with = "lenient::group")]
    pub kit: KitSettings,
    #[serde(deserialize_with = "lenient::group")]
    pub tpa: TpaSettings,
    #[serde(deserialize_with = "lenient::group")]
    pub economy: EconomySettings,

    #[serde(deserialize_with = "lenient::group")]
    pub auto_announcer: AutoAnnouncerSettings,
    #[serde(deserialize_with = "lenient::group")]
    pub auto_commands: AutoCommandsSettings,

    /// Item ids players may not obtain through `/i`.
    #[serde(deserialize_with = "lenient::int_list")]
    pub give_item_blacklist: Vec<u16>,
    /// Vehicle ids players may not obtain through `/v`.
    #[serde(deserialize_with = "lenient::int_list")]
    pub vehicle_blacklist: Vec<u16>,
    /// Optional systems to enable (`"kits"`, `"warps"`).
    pub enabled_systems: Vec<String>,
    /// Command names that are never registered.
    pub disabled_commands: Vec<String>,
}

/// Chat anti-spam throttling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AntiSpamSettings {
    #[serde(deserialize_with = "lenient::boolean")]
    pub enabled: bool,
    /// Minimum seconds between two chat messages of the same player.
    #[serde(deserialize_with = "lenient::int")]
    pub interval: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdaterSettings {
    #[serde(deserialize_with = "lenient::boolean")]
    pub check_updates: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub download_latest: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub alert_on_join: bool,
}

/// `/home` command behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HomeCommandSettings {
    /// Seconds before the command can be used again.
    #[serde(deserialize_with = "lenient::int")]
    pub cooldown: i32,
    /// Seconds between the command and the teleport.
    #[serde(deserialize_with = "lenient::int")]
    pub delay: i32,
    /// Abort the pending teleport when the player moves.
    ///
    /// Older documents store this leaf as `CancelWhenMove`.
    #[serde(deserialize_with = "lenient::boolean")]
    pub cancel_teleport_when_move: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WarpCommandSettings {
    #[serde(deserialize_with = "lenient::int")]
    pub cooldown: i32,
    #[serde(deserialize_with = "lenient::boolean")]
    pub cancel_teleport_when_move: bool,
    /// Require `essentials.warp.<name>` for each warp.
    #[serde(deserialize_with = "lenient::boolean")]
    pub per_warp_permission: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WebKitsSettings {
    pub url: String,
    #[serde(deserialize_with = "lenient::boolean")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WebConfigSettings {
    pub url: String,
    #[serde(deserialize_with = "lenient::boolean")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct KitSettings {
    #[serde(deserialize_with = "lenient::boolean")]
    pub show_cost: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub show_cost_if_zero: bool,
    /// `{0}` kit name, `{1}` currency symbol, `{2}` cost.
    pub cost_format: String,
    /// Seconds shared by every kit; `0` disables the global cooldown.
    #[serde(deserialize_with = "lenient::int")]
    pub global_cooldown: u32,
    #[serde(deserialize_with = "lenient::boolean")]
    pub reset_global_cooldown_when_die: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TpaSettings {
    #[serde(deserialize_with = "lenient::int")]
    pub expire_delay: i32,
    #[serde(deserialize_with = "lenient::int")]
    pub teleport_delay: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EconomySettings {
    /// Charge experience instead of Uconomy balance.
    #[serde(deserialize_with = "lenient::boolean")]
    pub use_xp: bool,
    pub xp_currency: String,
    pub uconomy_currency: String,
}

/// Percentages applied by `/refuel` and `/repair`.
///
/// Both must be strictly positive; see [`crate::Validatable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VehicleFeaturesSettings {
    #[serde(deserialize_with = "lenient::int")]
    pub refuel_percentage: i32,
    #[serde(deserialize_with = "lenient::int")]
    pub repair_percentage: i32,
}

/// Periodic broadcast of server messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutoAnnouncerSettings {
    #[serde(deserialize_with = "lenient::boolean")]
    pub enabled: bool,
    /// Pick the next message at random instead of cycling in order.
    #[serde(deserialize_with = "lenient::boolean")]
    pub random_messages: bool,
    /// Seconds between two announcements.
    #[serde(deserialize_with = "lenient::int")]
    pub interval: u32,
    pub messages: Vec<String>,
}

/// Console commands executed on a fixed interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutoCommandsSettings {
    #[serde(deserialize_with = "lenient::boolean")]
    pub enabled: bool,
    #[serde(deserialize_with = "lenient::int")]
    pub interval: u32,
    pub commands: Vec<String>,
}

impl EssConfig {
    /// Serializes the record to the pretty-printed on-disk representation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Serialize`] if serialization fails, which
    /// cannot happen for the plain data types used here.
    pub fn to_json(&self) -> Result<String, crate::ConfigError> {
        serde_json::to_string_pretty(self).map_err(crate::ConfigError::Serialize)
    }

    /// Looks up a top-level field by its on-disk name and returns its value.
    ///
    /// Returns `None` for names that are not part of the current schema.
    pub fn get(&self, name: &str) -> Option<serde_json::Value> {
        super::fields::find(name).and_then(|field| (field.read)(self).ok())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_pm_format_fields_keep_upper_case_prefix_on_disk() {
        // Arrange
        let cfg = EssConfig::default();

        // Act
        let value = serde_json::to_value(&cfg).expect("serialize");

        // Assert
        assert!(value.get("PMFormatFrom").is_some());
        assert!(value.get("PMFormatTo").is_some());
        assert!(value.get("PmFormatFrom").is_none());
    }

    #[test]
    fn test_groups_serialize_as_nested_objects() {
        let value = serde_json::to_value(EssConfig::default()).expect("serialize");
        assert_eq!(
            value["HomeCommand"],
            json!({ "Cooldown": 30, "Delay": 5, "CancelTeleportWhenMove": true })
        );
        assert_eq!(
            value["VehicleFeatures"],
            json!({ "RefuelPercentage": 20, "RepairPercentage": 70 })
        );
    }

    #[test]
    fn test_partial_group_fills_missing_leaves_with_defaults() {
        // Arrange: an old HomeCommand object without the renamed leaf
        let raw = json!({ "Cooldown": 60, "Delay": 2 });

        // Act
        let home: HomeCommandSettings = serde_json::from_value(raw).expect("deserialize");

        // Assert
        assert_eq!(home.cooldown, 60);
        assert_eq!(home.delay, 2);
        assert!(home.cancel_teleport_when_move);
    }

    #[test]
    fn test_group_ignores_unknown_leaves() {
        let raw = json!({ "Enabled": false, "Interval": 9, "Legacy": "x" });
        let anti_spam: AntiSpamSettings = serde_json::from_value(raw).expect("deserialize");
        assert!(!anti_spam.enabled);
        assert_eq!(anti_spam.interval, 9);
    }

    #[test]
    fn test_to_json_produces_a_json_object() {
        let text = EssConfig::default().to_json().expect("serialize");
        let parsed: Value = serde_json::from_str(&text).expect("parse back");
        assert!(parsed.is_object());
        assert!(text.contains('\n'), "persisted documents are pretty-printed");
    }

    #[test]
    fn test_get_returns_value_for_known_field() {
        let cfg = EssConfig::default();
        assert_eq!(cfg.get("Locale"), Some(json!("en")));
        assert_eq!(cfg.get("ItemSpawnLimit"), Some(json!(10)));
    }

    #[test]
    fn test_get_is_case_sensitive_and_rejects_unknown_names() {
        let cfg = EssConfig::default();
        assert_eq!(cfg.get("locale"), None);
        assert_eq!(cfg.get("NoSuchField"), None);
    }
}
