use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError, middleware::auth::AuthGuard, service::discord::UserGuildService,
    state::AppState,
};

/// Lists the guilds the logged-in user can manage.
pub async fn get_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let access_token = AuthGuard::new(&session).require_token().await?;

    let guild_service = UserGuildService::new(&state.http_client, &state.config.discord_api_base);
    let guilds = guild_service.fetch_manageable_guilds(&access_token).await?;

    Ok((StatusCode::OK, Json(guilds)))
}
