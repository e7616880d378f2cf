use crate::model::{
    discord::{UserGuild, MANAGE_GUILD},
    settings::{GuildSettings, SettingsUpdate},
};

/// Tests the documented default settings object.
#[test]
fn default_settings_match_documented_values() {
    let settings = GuildSettings::default();

    let value = serde_json::to_value(&settings).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "currency": "💰",
            "tax": 5,
            "prefix": "ve",
            "daily_amount": 3000,
            "drop_amount": 1000,
            "work_multiplier": 1.0,
            "cooldowns": { "drop_seconds": 3600 },
            "disabled_commands": []
        })
    );
}

/// Tests that deserializing `{}` yields the defaults.
#[test]
fn empty_record_deserializes_to_defaults() {
    let settings: GuildSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, GuildSettings::default());
}

/// Tests that a nested cooldowns object missing its field gets the default.
#[test]
fn cooldowns_field_defaults_independently() {
    let settings: GuildSettings =
        serde_json::from_str(r#"{"cooldowns": {}}"#).unwrap();
    assert_eq!(settings.cooldowns.drop_seconds, 3600);
}

/// Tests that an update payload only carries the submitted fields.
#[test]
fn update_payload_is_sparse() {
    let update: SettingsUpdate =
        serde_json::from_str(r#"{"currency": "🪙", "tax": 10}"#).unwrap();

    assert_eq!(update.currency.as_deref(), Some("🪙"));
    assert_eq!(update.tax, Some(10));
    assert!(update.prefix.is_none());
    assert!(update.daily_amount.is_none());
    assert!(update.cooldowns.is_none());
}

/// Tests parsing the permission bitmask from Discord's string encoding.
#[test]
fn permissions_parse_from_string() {
    let guild: UserGuild = serde_json::from_str(
        r#"{"id": "111", "name": "Test", "permissions": "2147483647"}"#,
    )
    .unwrap();

    assert_eq!(guild.permissions, 2147483647);
    assert!(guild.can_manage());
}

/// Tests parsing the permission bitmask from the legacy integer encoding.
#[test]
fn permissions_parse_from_integer() {
    let guild: UserGuild =
        serde_json::from_str(r#"{"id": "111", "name": "Test", "permissions": 32}"#).unwrap();

    assert_eq!(guild.permissions, MANAGE_GUILD);
    assert!(guild.can_manage());
}

/// Tests that a missing permissions field means no permissions.
#[test]
fn missing_permissions_default_to_zero() {
    let guild: UserGuild =
        serde_json::from_str(r#"{"id": "111", "name": "Test"}"#).unwrap();

    assert_eq!(guild.permissions, 0);
    assert!(!guild.can_manage());
}

/// Tests the Manage Guild bit check on masks with unrelated bits set.
#[test]
fn can_manage_checks_bit_five_only() {
    let mut guild: UserGuild =
        serde_json::from_str(r#"{"id": "111", "name": "Test", "permissions": 0}"#).unwrap();

    guild.permissions = !MANAGE_GUILD;
    assert!(!guild.can_manage());

    guild.permissions = MANAGE_GUILD;
    assert!(guild.can_manage());
}
