use crate::{
    data::settings::SettingsRepository,
    model::settings::{Cooldowns, GuildSettings},
};

/// Tests that a guild with no stored record reads back as `None`.
#[tokio::test]
async fn missing_guild_is_none() {
    let (_dir, store) = super::temp_store().await;

    let repo = SettingsRepository::new(&store);
    let record = repo.find_by_guild_id("123456789").await.unwrap();

    assert!(record.is_none());
}

/// Tests writing a record and reading it back unchanged.
#[tokio::test]
async fn upsert_round_trips() {
    let (_dir, store) = super::temp_store().await;
    let repo = SettingsRepository::new(&store);

    let record = GuildSettings {
        currency: "🪙".to_string(),
        tax: 10,
        prefix: "vx".to_string(),
        daily_amount: 5000,
        drop_amount: 1500,
        work_multiplier: 1.5,
        cooldowns: Cooldowns { drop_seconds: 1800 },
        disabled_commands: vec!["vecardclash".to_string()],
    };

    repo.upsert("123456789", &record).await.unwrap();

    let read_back = repo.find_by_guild_id("123456789").await.unwrap().unwrap();
    assert_eq!(read_back, record);
}

/// Tests that a partial stored record fills missing fields with defaults.
///
/// Records written by older versions of the dashboard only hold the fields
/// a manager ever submitted.
#[tokio::test]
async fn partial_record_fills_defaults() {
    let (dir, store) = super::temp_store().await;

    tokio::fs::write(
        dir.path().join("server_settings.json"),
        r#"{"123456789": {"currency": "🪙", "tax": 10}}"#,
    )
    .await
    .unwrap();

    let repo = SettingsRepository::new(&store);
    let record = repo.find_by_guild_id("123456789").await.unwrap().unwrap();

    assert_eq!(record.currency, "🪙");
    assert_eq!(record.tax, 10);
    assert_eq!(record.prefix, "ve");
    assert_eq!(record.daily_amount, 3000);
    assert_eq!(record.drop_amount, 1000);
    assert_eq!(record.work_multiplier, 1.0);
    assert_eq!(record.cooldowns.drop_seconds, 3600);
    assert!(record.disabled_commands.is_empty());
}

/// Tests that writing one guild leaves another guild's raw partial record
/// exactly as stored, rather than expanding it to the full field set.
#[tokio::test]
async fn upsert_preserves_other_guilds_raw_records() {
    let (dir, store) = super::temp_store().await;

    tokio::fs::write(
        dir.path().join("server_settings.json"),
        r#"{"111": {"tax": 9}}"#,
    )
    .await
    .unwrap();

    let repo = SettingsRepository::new(&store);
    repo.upsert("222", &GuildSettings::default()).await.unwrap();

    let settings = store.read_settings().await.unwrap();
    assert_eq!(settings["111"], serde_json::json!({"tax": 9}));
    assert!(settings.contains_key("222"));
}

/// Tests that upserting an existing guild replaces its record.
#[tokio::test]
async fn upsert_replaces_existing_record() {
    let (_dir, store) = super::temp_store().await;
    let repo = SettingsRepository::new(&store);

    let mut record = GuildSettings::default();
    repo.upsert("123456789", &record).await.unwrap();

    record.tax = 20;
    repo.upsert("123456789", &record).await.unwrap();

    let read_back = repo.find_by_guild_id("123456789").await.unwrap().unwrap();
    assert_eq!(read_back.tax, 20);
}
