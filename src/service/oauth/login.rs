use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::service::oauth::DiscordAuthService;

impl<'a> DiscordAuthService<'a> {
    /// Builds the Discord authorization URL for the dashboard login.
    ///
    /// `identify` covers the profile fetch after the callback; `guilds`
    /// covers the per-request permission checks against the guild list.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url();

        (authorize_url, csrf_state)
    }
}
