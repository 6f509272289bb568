pub mod chart;
pub mod config;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod state;
pub mod stats;
pub mod validation;

use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use config::Config;
use errors::AppError;
use middleware::trace_layer;
use models::Roster;
use state::AppState;
use stats::{NbaStatsClient, StatsProvider};

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(http::create_http_routes(state))
        .layer(trace_layer())
        .fallback(|| async { "404 Not Found" })
}

/// Loads the roster from `provider` and assembles the shared state.
pub async fn build_state(
    provider: Arc<dyn StatsProvider>,
    config: &Config,
) -> Result<AppState, AppError> {
    let players = provider.all_players().await.map_err(|e| {
        tracing::error!(
            "Failed to load player roster from {}/commonallplayers: {}",
            config.stats_base_url,
            e
        );
        e
    })?;
    let roster = Roster::new(players);
    tracing::info!("Loaded {} players", roster.len());

    Ok(AppState::new(roster, provider, config.chart.clone()))
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    if let Err(e) = chart::init_title_font(config.font_path.as_deref()) {
        tracing::warn!("Using the bundled title font: {}", e);
    }

    let provider: Arc<dyn StatsProvider> = Arc::new(NbaStatsClient::new(&config)?);
    let state = build_state(provider, &config).await?;
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::EnvError(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Shot chart server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            AppError::InternalError
        })?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
