use oauth2::{AuthorizationCode, RequestTokenError, TokenResponse};

use crate::{
    error::{auth::AuthError, AppError},
    model::discord::DiscordUser,
    service::oauth::DiscordAuthService,
};

impl<'a> DiscordAuthService<'a> {
    /// Exchanges an authorization code for a Discord access token.
    ///
    /// A rejection from the token endpoint surfaces the upstream error text
    /// to the caller; nothing is retried.
    pub async fn exchange_code(&self, authorization_code: String) -> Result<String, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| {
                let detail = match err {
                    RequestTokenError::ServerResponse(response) => response.to_string(),
                    other => other.to_string(),
                };
                AuthError::TokenExchange(detail)
            })?;

        Ok(token.access_token().secret().clone())
    }

    /// Retrieves the logged-in user's profile using the access token.
    pub async fn fetch_profile(
        &self,
        api_base: &str,
        access_token: &str,
    ) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(format!("{}/users/@me", api_base))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }
}
