//! Built-in default values for every configuration field.
//!
//! `Default` is implemented for the root record and for each settings group.
//! Construction is pure: nothing here touches storage, and two calls always
//! produce equal values.  The migration engine relies on this to rebuild a
//! complete record before copying preserved values on top of it.

use super::schema::{
    AntiSpamSettings, AutoAnnouncerSettings, AutoCommandsSettings, EconomySettings, EssConfig,
    HomeCommandSettings, KitSettings, TpaSettings, UpdaterSettings, VehicleFeaturesSettings,
    WarpCommandSettings, WebConfigSettings, WebKitsSettings,
};

/// Locale used when no document exists.
pub const DEFAULT_LOCALE: &str = "en";

/// `ServerFrameRate` value meaning "leave the engine default untouched".
pub const UNLIMITED_FRAME_RATE: i32 = -1;

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_pm_format_from() -> String {
    "(From {0}): {1}".to_string()
}
fn default_pm_format_to() -> String {
    "(To {0}): {1}".to_string()
}
fn default_cost_format() -> String {
    "{0}({1}{2})".to_string()
}
fn default_enabled_systems() -> Vec<String> {
    vec!["kits".to_string(), "warps".to_string()]
}
fn default_announcements() -> Vec<String> {
    vec![
        "Welcome to the server!".to_string(),
        "Type /help to see the available commands.".to_string(),
    ]
}

impl Default for EssConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            pm_format_from: default_pm_format_from(),
            pm_format_to: default_pm_format_to(),
            unfreeze_on_death: true,
            unfreeze_on_quit: true,
            enable_text_commands: true,
            enable_death_messages: true,
            enable_join_leave_message: true,
            show_permission_on_error_message: true,
            enable_poll_running_message: true,
            poll_running_message_cooldown: 20,
            server_frame_rate: UNLIMITED_FRAME_RATE,
            item_spawn_limit: 10,
            anti_spam: AntiSpamSettings::default(),
            updater: UpdaterSettings::default(),
            home_command: HomeCommandSettings::default(),
            warp_command: WarpCommandSettings::default(),
            vehicle_features: VehicleFeaturesSettings::default(),
            web_kits: WebKitsSettings::default(),
            web_config: WebConfigSettings::default(),
            kit: KitSettings::default(),
            tpa: TpaSettings::default(),
            economy: EconomySettings::default(),
            auto_announcer: AutoAnnouncerSettings::default(),
            auto_commands: AutoCommandsSettings::default(),
            give_item_blacklist: Vec::new(),
            vehicle_blacklist: Vec::new(),
            enabled_systems: default_enabled_systems(),
            disabled_commands: Vec::new(),
        }
    }
}

impl Default for AntiSpamSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: 3,
        }
    }
}

impl Default for UpdaterSettings {
    fn default() -> Self {
        Self {
            check_updates: true,
            download_latest: true,
            alert_on_join: true,
        }
    }
}

impl Default for HomeCommandSettings {
    fn default() -> Self {
        Self {
            cooldown: 30,
            delay: 5,
            cancel_teleport_when_move: true,
        }
    }
}

impl Default for WarpCommandSettings {
    fn default() -> Self {
        Self {
            cooldown: 5,
            cancel_teleport_when_move: false,
            per_warp_permission: true,
        }
    }
}

impl Default for WebKitsSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            enabled: false,
        }
    }
}

impl Default for WebConfigSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            enabled: false,
        }
    }
}

impl Default for KitSettings {
    fn default() -> Self {
        Self {
            show_cost: true,
            show_cost_if_zero: false,
            cost_format: default_cost_format(),
            global_cooldown: 0,
            reset_global_cooldown_when_die: false,
        }
    }
}

impl Default for TpaSettings {
    fn default() -> Self {
        Self {
            expire_delay: 10,
            teleport_delay: 5,
        }
    }
}

impl Default for EconomySettings {
    fn default() -> Self {
        Self {
            use_xp: false,
            xp_currency: "Xp".to_string(),
            uconomy_currency: "$".to_string(),
        }
    }
}

impl Default for VehicleFeaturesSettings {
    fn default() -> Self {
        Self {
            refuel_percentage: 20,
            repair_percentage: 70,
        }
    }
}

impl Default for AutoAnnouncerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            random_messages: false,
            interval: 60,
            messages: default_announcements(),
        }
    }
}

impl Default for AutoCommandsSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            interval: 300,
            commands: Vec::new(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_default_instances_are_equal() {
        // Arrange / Act
        let first = EssConfig::default();
        let second = EssConfig::default();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_locale_is_en() {
        assert_eq!(EssConfig::default().locale, "en");
    }

    #[test]
    fn test_default_server_frame_rate_is_unlimited() {
        assert_eq!(EssConfig::default().server_frame_rate, -1);
    }

    #[test]
    fn test_default_enabled_systems_are_kits_and_warps() {
        assert_eq!(EssConfig::default().enabled_systems, vec!["kits", "warps"]);
    }

    #[test]
    fn test_default_blacklists_are_empty() {
        let cfg = EssConfig::default();
        assert!(cfg.give_item_blacklist.is_empty());
        assert!(cfg.vehicle_blacklist.is_empty());
        assert!(cfg.disabled_commands.is_empty());
    }

    #[test]
    fn test_default_home_command_cancels_teleport_on_move() {
        let home = HomeCommandSettings::default();
        assert_eq!(home.cooldown, 30);
        assert_eq!(home.delay, 5);
        assert!(home.cancel_teleport_when_move);
    }

    #[test]
    fn test_default_warp_command_requires_per_warp_permission() {
        let warp = WarpCommandSettings::default();
        assert!(warp.per_warp_permission);
        assert!(!warp.cancel_teleport_when_move);
    }

    #[test]
    fn test_default_vehicle_percentages_are_positive() {
        let vehicle = VehicleFeaturesSettings::default();
        assert_eq!(vehicle.refuel_percentage, 20);
        assert_eq!(vehicle.repair_percentage, 70);
    }

    #[test]
    fn test_default_economy_uses_uconomy_balance() {
        let economy = EconomySettings::default();
        assert!(!economy.use_xp);
        assert_eq!(economy.uconomy_currency, "$");
        assert_eq!(economy.xp_currency, "Xp");
    }

    #[test]
    fn test_default_kit_cost_format() {
        assert_eq!(KitSettings::default().cost_format, "{0}({1}{2})");
    }
}
