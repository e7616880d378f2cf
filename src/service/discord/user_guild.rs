use crate::{
    error::{auth::AuthError, AppError},
    model::discord::UserGuild,
};

/// Permission checks against the user's live Discord guild list.
///
/// The guild list is fetched fresh for every call - listing and every
/// settings mutation alike - so a revoked Manage Guild permission takes
/// effect on the next request.
pub struct UserGuildService<'a> {
    http_client: &'a reqwest::Client,
    api_base: &'a str,
}

impl<'a> UserGuildService<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_base: &'a str) -> Self {
        Self {
            http_client,
            api_base,
        }
    }

    /// Fetches the user's guild memberships with their permission bitmasks.
    ///
    /// Any upstream failure, transport or non-success status, collapses into
    /// `failed_fetch`; the detail is logged server-side.
    pub async fn fetch_user_guilds(&self, access_token: &str) -> Result<Vec<UserGuild>, AppError> {
        let response = self
            .http_client
            .get(format!("{}/users/@me/guilds", self.api_base))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|err| {
                tracing::debug!("Guild list fetch failed: {}", err);
                AuthError::GuildFetchFailed
            })?;

        if !response.status().is_success() {
            tracing::debug!("Guild list fetch returned {}", response.status());
            return Err(AuthError::GuildFetchFailed.into());
        }

        let guilds = response.json::<Vec<UserGuild>>().await.map_err(|err| {
            tracing::debug!("Guild list body could not be parsed: {}", err);
            AuthError::GuildFetchFailed
        })?;

        Ok(guilds)
    }

    /// Fetches the user's guilds filtered down to those they can manage.
    pub async fn fetch_manageable_guilds(
        &self,
        access_token: &str,
    ) -> Result<Vec<UserGuild>, AppError> {
        let guilds = self.fetch_user_guilds(access_token).await?;
        Ok(Self::filter_manageable(guilds))
    }

    /// Authorizes a settings mutation for one guild.
    ///
    /// The guild must appear in the user's guild list with Manage Guild set.
    pub async fn require_manage(
        &self,
        access_token: &str,
        guild_id: &str,
    ) -> Result<UserGuild, AppError> {
        let guilds = self.fetch_user_guilds(access_token).await?;
        Self::find_manageable(guilds, guild_id)
    }

    pub fn filter_manageable(guilds: Vec<UserGuild>) -> Vec<UserGuild> {
        guilds.into_iter().filter(UserGuild::can_manage).collect()
    }

    pub fn find_manageable(guilds: Vec<UserGuild>, guild_id: &str) -> Result<UserGuild, AppError> {
        let Some(guild) = guilds.into_iter().find(|guild| guild.id == guild_id) else {
            return Err(AuthError::NoPermission.into());
        };

        if !guild.can_manage() {
            return Err(AuthError::NoPermission.into());
        }

        Ok(guild)
    }
}
