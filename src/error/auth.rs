use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, ErrorMessageDto};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No access token in the session.
    ///
    /// The request hit an endpoint that requires a logged-in user but the
    /// session holds no Discord access token. Results in 401 Unauthorized.
    #[error("No access token in session")]
    NotLoggedIn,

    /// CSRF state validation failed during the OAuth callback.
    ///
    /// The `state` value in the callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid
    /// callback request. Results in 400 Bad Request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The Discord token endpoint rejected the authorization code.
    ///
    /// Carries the upstream error text, surfaced to the browser in plain
    /// text with a 400 Bad Request.
    #[error("Token error: {0}")]
    TokenExchange(String),

    /// Fetching the user's guild list from Discord failed.
    ///
    /// Covers both transport errors and non-success upstream responses.
    /// Results in 400 Bad Request with error code `failed_fetch`.
    #[error("Failed to fetch guilds from Discord")]
    GuildFetchFailed,

    /// The user does not hold Manage Guild on the target guild.
    ///
    /// Either the guild is absent from the user's guild list or permission
    /// bit 5 is unset. Results in 403 Forbidden with code `no_permission`.
    #[error("User lacks Manage Guild permission for the target guild")]
    NoPermission,

    /// A premium-gated field was submitted by a non-VRTEX+ user.
    ///
    /// Results in 403 Forbidden with code `premium_required`. Basic fields
    /// applied earlier in the same payload stay persisted.
    #[error("VRTEX+ membership required")]
    PremiumRequired,
}

/// Converts authentication errors into HTTP responses.
///
/// The OAuth endpoints (callback) respond in plain text since the client is
/// a redirecting browser; the dashboard API endpoints respond with the JSON
/// error codes the dashboard front end matches on.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "not_logged_in".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchange(detail) => {
                (StatusCode::BAD_REQUEST, format!("Token error: {}", detail)).into_response()
            }
            Self::GuildFetchFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "failed_fetch".to_string(),
                }),
            )
                .into_response(),
            Self::NoPermission => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "no_permission".to_string(),
                }),
            )
                .into_response(),
            Self::PremiumRequired => (
                StatusCode::FORBIDDEN,
                Json(ErrorMessageDto {
                    error: "premium_required".to_string(),
                    message: "VRTEX+ required to change this.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
