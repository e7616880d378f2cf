use std::path::PathBuf;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::{
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_BASE: &str = "https://discord.com/api";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_SECRET: &str = "change_this_secret";

pub struct Config {
    /// OAuth credentials are optional at startup so the site can run without
    /// a configured application; `/dashboard/login` rejects with 500 instead.
    pub discord_client_id: Option<String>,
    pub discord_client_secret: Option<String>,
    pub discord_redirect_url: Option<String>,

    pub session_secret: String,
    pub port: u16,

    pub settings_path: PathBuf,
    pub members_path: PathBuf,
    pub static_dir: PathBuf,

    pub discord_api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match optional_env("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            discord_client_id: optional_env("DISCORD_CLIENT_ID"),
            discord_client_secret: optional_env("DISCORD_CLIENT_SECRET"),
            discord_redirect_url: optional_env("REDIRECT_URI"),
            session_secret: optional_env("SESSION_SECRET")
                .unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_string()),
            port,
            settings_path: optional_env("SETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("server_settings.json")),
            members_path: optional_env("MEMBERS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("members.json")),
            static_dir: optional_env("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            discord_api_base: DISCORD_API_BASE.to_string(),
        })
    }

    /// Builds the Discord OAuth2 client from the configured credentials.
    ///
    /// Called per login/callback request rather than at startup so that a
    /// missing client id or redirect URI surfaces as a 500 on the login
    /// endpoint instead of preventing the site from serving at all.
    pub fn oauth_client(&self) -> Result<OAuth2Client, AppError> {
        let client_id = self
            .discord_client_id
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_CLIENT_ID".to_string()))?;
        let redirect_url = self
            .discord_redirect_url
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar("REDIRECT_URI".to_string()))?;

        let client = BasicClient::new(ClientId::new(client_id))
            .set_auth_uri(
                AuthUrl::new(DISCORD_AUTH_URL.to_string())
                    .map_err(|_| ConfigError::InvalidEndpoint(DISCORD_AUTH_URL))?,
            )
            .set_token_uri(
                TokenUrl::new(DISCORD_TOKEN_URL.to_string())
                    .map_err(|_| ConfigError::InvalidEndpoint(DISCORD_TOKEN_URL))?,
            )
            .set_redirect_uri(
                RedirectUrl::new(redirect_url)
                    .map_err(|_| ConfigError::InvalidEnvVar("REDIRECT_URI".to_string()))?,
            );

        let client = match self.discord_client_secret.clone() {
            Some(secret) => client.set_client_secret(ClientSecret::new(secret)),
            None => client,
        };

        Ok(client)
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
