use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::discord::DiscordUser,
};

/// Access guard for the dashboard API endpoints.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires an authenticated session and returns its access token.
    pub async fn require_token(&self) -> Result<String, AppError> {
        let Some(token) = AuthSession::new(self.session).access_token().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        Ok(token)
    }

    /// Returns the cached user profile, if the callback managed to fetch one.
    pub async fn current_user(&self) -> Result<Option<DiscordUser>, AppError> {
        AuthSession::new(self.session).user().await
    }
}
