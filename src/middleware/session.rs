//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the
//! methods relevant to its concern, preventing key typos and centralizing
//! session-related logic:
//! - `AuthSession` - the Discord access token and cached user profile
//! - `CsrfSession` - CSRF token round-trip for the OAuth flow

use tower_sessions::Session;

use crate::{error::AppError, model::discord::DiscordUser};

// Session key constants
const SESSION_AUTH_ACCESS_TOKEN: &str = "auth:access_token";
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Holds the Discord bearer token obtained from the OAuth code exchange and
/// the user profile cached at login time. Both live for one browser session;
/// nothing here enforces expiry beyond upstream token validity.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the Discord access token after a successful code exchange.
    pub async fn set_access_token(&self, access_token: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_ACCESS_TOKEN, access_token)
            .await?;
        Ok(())
    }

    /// Retrieves the Discord access token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - User is logged in
    /// - `Ok(None)` - No token in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn access_token(&self) -> Result<Option<String>, AppError> {
        let token = self
            .session
            .get::<String>(SESSION_AUTH_ACCESS_TOKEN)
            .await?;
        Ok(token)
    }

    /// Caches the user profile fetched during the OAuth callback.
    pub async fn set_user(&self, user: &DiscordUser) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the cached user profile.
    ///
    /// `None` is a valid logged-in state: the profile fetch during the
    /// callback is best-effort and a session can hold a token without one.
    pub async fn user(&self) -> Result<Option<DiscordUser>, AppError> {
        let user = self.session.get::<DiscordUser>(SESSION_AUTH_USER).await?;
        Ok(user)
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// A random token is stored when the login redirect is issued and must come
/// back as the `state` query parameter on the callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each login attempt can only be completed
    /// once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
