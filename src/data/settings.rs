use crate::{
    data::store::JsonStore, error::store::StoreError, model::settings::GuildSettings,
};

/// Read/write access to per-guild settings records.
///
/// Reads go back to the document on every call; there is no caching layer.
pub struct SettingsRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the stored record for a guild, or `None` if the guild has
    /// never been configured. Missing fields of a partial record come back
    /// as their defaults.
    pub async fn find_by_guild_id(
        &self,
        guild_id: &str,
    ) -> Result<Option<GuildSettings>, StoreError> {
        let settings = self.store.read_settings().await?;

        let Some(record) = settings.get(guild_id) else {
            return Ok(None);
        };

        let record = serde_json::from_value::<GuildSettings>(record.clone()).map_err(
            |source| StoreError::Parse {
                path: self.store.settings_path().to_path_buf(),
                source,
            },
        )?;

        Ok(Some(record))
    }

    /// Writes a guild's record back, rewriting the whole document.
    ///
    /// Other guilds' records pass through as the raw values they were read
    /// as, so a partial record elsewhere in the document stays partial.
    pub async fn upsert(
        &self,
        guild_id: &str,
        record: &GuildSettings,
    ) -> Result<(), StoreError> {
        let mut settings = self.store.read_settings().await?;

        let value = serde_json::to_value(record).map_err(|source| StoreError::Parse {
            path: self.store.settings_path().to_path_buf(),
            source,
        })?;
        settings.insert(guild_id.to_string(), value);

        self.store.write_settings(&settings).await
    }
}
