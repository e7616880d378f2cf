mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let http_client = startup::setup_reqwest_client()?;
    let store = startup::init_store(&config).await?;
    let session_layer = startup::setup_session_layer(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let static_dir = config.static_dir.clone();

    let app = router::router(&static_dir)
        .with_state(AppState::new(Arc::new(config), http_client, store))
        .layer(session_layer);

    tracing::info!("Starting VRTEX site + dashboard on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
