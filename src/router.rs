use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    controller::{
        auth::{callback, get_user, login, logout},
        guild::get_guilds,
        settings::{get_settings, is_plus, update_settings},
    },
    state::AppState,
};

pub fn router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/dashboard/login", get(login))
        .route("/dashboard/callback", get(callback))
        .route("/dashboard/logout", get(logout))
        .route("/dashboard/api/user", get(get_user))
        .route("/dashboard/api/guilds", get(get_guilds))
        .route("/dashboard/api/get_settings/{guild_id}", get(get_settings))
        .route(
            "/dashboard/api/update_settings/{guild_id}",
            post(update_settings),
        )
        .route("/dashboard/api/is_plus", get(is_plus))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
}
