use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::membership::MembershipRepository,
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::{IsPlusDto, UpdateSettingsDto},
        discord::DiscordUser,
        settings::SettingsUpdate,
    },
    service::{discord::UserGuildService, settings::SettingsService},
    state::AppState,
};

pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _access_token = AuthGuard::new(&session).require_token().await?;

    let settings = SettingsService::new(&state.store).get(&guild_id).await?;

    Ok((StatusCode::OK, Json(settings)))
}

pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<String>,
    Json(update): Json<SettingsUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&session);
    let access_token = guard.require_token().await?;

    // Re-checked against the live guild list on every mutation.
    UserGuildService::new(&state.http_client, &state.config.discord_api_base)
        .require_manage(&access_token, &guild_id)
        .await?;

    let is_plus = session_is_plus(&state, guard.current_user().await?).await?;

    let settings = SettingsService::new(&state.store)
        .update(&guild_id, &update, is_plus)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UpdateSettingsDto {
            success: true,
            settings,
        }),
    ))
}

/// Reports VRTEX+ membership for the session user.
///
/// A session without a user (or no session at all) is `false`, not an error.
pub async fn is_plus(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).current_user().await?;
    let is_plus = session_is_plus(&state, user).await?;

    Ok((StatusCode::OK, Json(IsPlusDto { is_plus })))
}

async fn session_is_plus(
    state: &AppState,
    user: Option<DiscordUser>,
) -> Result<bool, AppError> {
    let Some(user) = user else {
        return Ok(false);
    };

    let is_plus = MembershipRepository::new(&state.store)
        .is_plus_member(&user.id)
        .await?;

    Ok(is_plus)
}
