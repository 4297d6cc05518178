//! Ordered table of the top-level configuration fields.
//!
//! Each [`FieldDescriptor`] pairs an on-disk name with a reader and a writer
//! for the matching [`EssConfig`] member.  The migration engine iterates this
//! table to copy every value whose name is still present in an old document,
//! without any runtime type inspection.
//!
//! The table must list exactly the keys that serde writes for [`EssConfig`],
//! in the same order.  A unit test below enforces that.

use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;

use super::lenient;
use super::schema::EssConfig;

/// Shape of a field's value, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    /// Signed integer.
    Int,
    /// Unsigned integer.
    UInt,
    Str,
    /// JSON array of scalars.
    List,
    /// Nested settings group (JSON object).
    Group,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::UInt => "unsigned integer",
            Self::Str => "string",
            Self::List => "list",
            Self::Group => "settings group",
        };
        f.write_str(name)
    }
}

/// Accessor pair for one top-level field.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    /// Exact, case-sensitive key in the JSON document.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Serializes the member's current value.
    pub read: fn(&EssConfig) -> Result<Value, serde_json::Error>,
    /// Deserializes `value` into the member, leaving it untouched on error.
    pub write: fn(&mut EssConfig, Value) -> Result<(), serde_json::Error>,
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

macro_rules! field {
    ($name:literal, $kind:ident, $member:ident, $decode:path) => {
        FieldDescriptor {
            name: $name,
            kind: FieldKind::$kind,
            read: |config| serde_json::to_value(&config.$member),
            write: |config, value| {
                config.$member = $decode(value)?;
                Ok(())
            },
        }
    };
    ($name:literal, $kind:ident, $member:ident) => {
        FieldDescriptor {
            name: $name,
            kind: FieldKind::$kind,
            read: |config| serde_json::to_value(&config.$member),
            write: |config, value| {
                config.$member = serde_json::from_value(value)?;
                Ok(())
            },
        }
    };
}

/// Returns the field table, building it on first use.
pub fn fields() -> &'static [FieldDescriptor] {
    static FIELDS: OnceLock<Vec<FieldDescriptor>> = OnceLock::new();
    FIELDS.get_or_init(|| {
        vec![
            field!("Locale", Str, locale),
            field!("PMFormatFrom", Str, pm_format_from),
            field!("PMFormatTo", Str, pm_format_to),
            field!("UnfreezeOnDeath", Bool, unfreeze_on_death, lenient::boolean),
            field!("UnfreezeOnQuit", Bool, unfreeze_on_quit, lenient::boolean),
            field!("EnableTextCommands", Bool, enable_text_commands, lenient::boolean),
            field!("EnableDeathMessages", Bool, enable_death_messages, lenient::boolean),
            field!("EnableJoinLeaveMessage", Bool, enable_join_leave_message, lenient::boolean),
            field!("ShowPermissionOnErrorMessage", Bool, show_permission_on_error_message, lenient::boolean),
            field!("EnablePollRunningMessage", Bool, enable_poll_running_message, lenient::boolean),
            field!("PollRunningMessageCooldown", Int, poll_running_message_cooldown, lenient::int),
            field!("ServerFrameRate", Int, server_frame_rate, lenient::int),
            field!("ItemSpawnLimit", UInt, item_spawn_limit, lenient::int),
            field!("AntiSpam", Group, anti_spam, lenient::group),
            field!("Updater", Group, updater, lenient::group),
            field!("HomeCommand", Group, home_command, lenient::group),
            field!("WarpCommand", Group, warp_command, lenient::group),
            field!("VehicleFeatures", Group, vehicle_features, lenient::group),
            field!("WebKits", Group, web_kits, lenient::group),
            field!("WebConfig", Group, web_config, lenient::group),
            field!("Kit", Group, kit, lenient::group),
            field!("Tpa", Group, tpa, lenient::group),
            field!("Economy", Group, economy, lenient::group),
            field!("AutoAnnouncer", Group, auto_announcer, lenient::group),
            field!("AutoCommands", Group, auto_commands, lenient::group),
            field!("GiveItemBlacklist", List, give_item_blacklist, lenient::int_list),
            field!("VehicleBlacklist", List, vehicle_blacklist, lenient::int_list),
            field!("EnabledSystems", List, enabled_systems),
            field!("DisabledCommands", List, disabled_commands),
        ]
    })
}

/// Returns the descriptor registered under `name`, if any.
pub fn find(name: &str) -> Option<&'static FieldDescriptor> {
    fields().iter().find(|field| field.name == name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
