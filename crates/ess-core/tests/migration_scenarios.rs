//! Integration tests for document reconciliation.
//!
//! Each test feeds a document shaped like one written by an older plugin
//! release through the public API (`parse_document` + `migrate` +
//! `Validatable`) and checks the reconciled record.

use ess_core::{migrate, parse_document, EssConfig, Validatable};
use serde_json::{json, Value};

/// A document as written before AutoAnnouncer, AutoCommands, Economy and
/// VehicleFeatures existed, with the old HomeCommand leaf name.
const LEGACY_DOCUMENT: &str = r#"{
  "Locale": "pt-br",
  "PMFormatFrom": "[PM de {0}]: {1}",
  "PMFormatTo": "[PM para {0}]: {1}",
  "UnfreezeOnDeath": false,
  "UnfreezeOnQuit": true,
  "EnableTextCommands": true,
  "EnableDeathMessages": false,
  "EnableJoinLeaveMessage": true,
  "ShowPermissionOnErrorMessage": true,
  "ItemSpawnLimit": 25,
  "AntiSpam": { "Enabled": true, "Interval": 5 },
  "Updater": { "CheckUpdates": false, "DownloadLatest": false, "AlertOnJoin": false },
  "HomeCommand": { "Cooldown": 60, "Delay": 10, "CancelWhenMove": false },
  "WarpCommand": { "Cooldown": 8, "CancelTeleportWhenMove": true, "PerWarpPermission": false },
  "Kit": { "ShowCost": false, "ShowCostIfZero": false, "CostFormat": "{0} - {2}{1}" },
  "GiveItemBlacklist": [519, 1441],
  "EnabledSystems": ["kits"],
  "DisabledCommands": ["spy"],
  "LegacyMotd": "Hello!"
}"#;

fn legacy_config() -> ess_core::Migration {
    let doc = parse_document(LEGACY_DOCUMENT).expect("legacy document must parse");
    migrate(&doc).expect("legacy document must migrate")
}

#[test]
fn test_legacy_document_preserves_user_values() {
    let migration = legacy_config();
    let cfg = &migration.config;

    assert_eq!(cfg.locale, "pt-br");
    assert_eq!(cfg.pm_format_from, "[PM de {0}]: {1}");
    assert!(!cfg.unfreeze_on_death);
    assert!(!cfg.enable_death_messages);
    assert_eq!(cfg.item_spawn_limit, 25);
    assert_eq!(cfg.anti_spam.interval, 5);
    assert!(!cfg.updater.check_updates);
    assert_eq!(cfg.warp_command.cooldown, 8);
    assert_eq!(cfg.give_item_blacklist, vec![519, 1441]);
    assert_eq!(cfg.enabled_systems, vec!["kits"]);
    assert_eq!(cfg.disabled_commands, vec!["spy"]);
}

#[test]
fn test_legacy_document_renamed_leaf_is_carried_over() {
    let cfg = legacy_config().config;
    assert!(!cfg.home_command.cancel_teleport_when_move);
    assert_eq!(cfg.home_command.cooldown, 60);
    assert_eq!(cfg.home_command.delay, 10);
}

#[test]
fn test_legacy_document_new_fields_take_defaults() {
    let migration = legacy_config();
    let defaults = EssConfig::default();
    let cfg = &migration.config;

    assert_eq!(cfg.vehicle_features, defaults.vehicle_features);
    assert_eq!(cfg.economy, defaults.economy);
    assert_eq!(cfg.auto_announcer, defaults.auto_announcer);
    assert_eq!(cfg.server_frame_rate, defaults.server_frame_rate);
    assert!(migration.missing_fields.contains(&"VehicleFeatures"));
    assert!(migration.missing_fields.contains(&"PollRunningMessageCooldown"));
}

#[test]
fn test_legacy_document_partial_group_fills_missing_leaves() {
    // Kit in the legacy document has no GlobalCooldown leaves.
    let cfg = legacy_config().config;
    assert!(!cfg.kit.show_cost);
    assert_eq!(cfg.kit.cost_format, "{0} - {2}{1}");
    assert_eq!(cfg.kit.global_cooldown, 0);
    assert!(!cfg.kit.reset_global_cooldown_when_die);
}

#[test]
fn test_legacy_document_requires_rewrite_and_drops_unknown_keys() {
    let migration = legacy_config();

    assert!(migration.needs_update);
    assert!(migration.requires_rewrite());
    assert_eq!(migration.dropped_keys, vec!["LegacyMotd".to_string()]);

    let rewritten: Value =
        serde_json::from_str(&migration.config.to_json().expect("serialize")).expect("parse");
    assert!(rewritten.get("LegacyMotd").is_none());
    assert!(rewritten["HomeCommand"].get("CancelWhenMove").is_none());
    assert_eq!(rewritten["HomeCommand"]["CancelTeleportWhenMove"], json!(false));
}

#[test]
fn test_rewritten_document_is_stable_on_second_pass() {
    // Arrange: migrate once and serialize, as the loader would persist it
    let first = legacy_config();
    let text = first.config.to_json().expect("serialize");

    // Act
    let second = migrate(&parse_document(&text).expect("parse")).expect("migrate");

    // Assert
    assert!(!second.requires_rewrite());
    assert_eq!(second.config, first.config);
}

#[test]
fn test_invalid_percentage_survives_migration_and_is_reported() {
    let mut doc = parse_document(&EssConfig::default().to_json().unwrap()).unwrap();
    doc.insert(
        "VehicleFeatures".to_string(),
        json!({ "RefuelPercentage": -5, "RepairPercentage": 70 }),
    );

    let cfg = migrate(&doc).expect("migrate").config;
    let violations = cfg.validate();

    assert_eq!(cfg.vehicle_features.refuel_percentage, -5);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "VehicleFeatures.RefuelPercentage");
}

#[test]
fn test_group_with_wrong_type_fails_migration() {
    let mut doc = parse_document(&EssConfig::default().to_json().unwrap()).unwrap();
    doc.insert("HomeCommand".to_string(), json!([1, 2, 3]));

    assert!(migrate(&doc).is_err());
}
