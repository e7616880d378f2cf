use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession, session::CsrfSession},
    service::oauth::DiscordAuthService,
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
///
/// Both fields are optional at the type level so that their absence maps to
/// the documented 400 responses instead of a generic extractor rejection.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// Authorization code from Discord for the token exchange.
    pub code: Option<String>,
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let oauth_client = state.config.oauth_client()?;
    let auth_service = DiscordAuthService::new(&state.http_client, oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(redirect_found(url.as_str()))
}

pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(code) = params.0.code else {
        return Err(AppError::BadRequest("No code provided".to_string()));
    };

    validate_csrf(&session, params.0.state.as_deref()).await?;

    let oauth_client = state.config.oauth_client()?;
    let auth_service = DiscordAuthService::new(&state.http_client, oauth_client);

    let access_token = auth_service.exchange_code(code).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.set_access_token(&access_token).await?;

    // Best-effort: a session without a cached profile is still logged in,
    // so a failure here must not block the login.
    match auth_service
        .fetch_profile(&state.config.discord_api_base, &access_token)
        .await
    {
        Ok(user) => auth_session.set_user(&user).await?,
        Err(err) => tracing::warn!("Profile fetch failed after login: {}", err),
    }

    Ok(redirect_found("/#dashboard"))
}

pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(redirect_found("/"))
}

/// Returns the cached profile of the logged-in user, or `{}` when the
/// session holds none. Never an error: the dashboard polls this to decide
/// whether to render the login button.
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).current_user().await?;

    let body = match user {
        Some(user) => serde_json::to_value(user)
            .map_err(|err| AppError::InternalError(err.to_string()))?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    };

    Ok((StatusCode::OK, Json(body)))
}

async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let (Some(stored), Some(state)) = (stored_state, csrf_state) {
        if stored == state {
            return Ok(());
        }
    }

    Err(AuthError::CsrfValidationFailed.into())
}

/// Plain 302 redirect, matching what browsers get from the dashboard flow.
fn redirect_found(location: &str) -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
}
