//! HTTP routes and server lifecycle

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{info, warn};

use crate::api::dto::{AiResponse, HealthResponse};
use crate::api::validation::{parse_command_request, ValidationError};
use crate::command::IntentResolver;
use crate::core::config::ServerConfig;
use crate::core::error::Result;

#[derive(Clone)]
struct AppState {
    config: Arc<ServerConfig>,
}

/// Build the application router
pub fn router(config: ServerConfig) -> Router {
    let body_limit = config.max_body_bytes;
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/health", get(health))
        .route("/ai", post(ai))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!("device-assistant listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", err);
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn ai(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<AiResponse>, ValidationError> {
    let request = parse_command_request(&body, state.config.max_text_chars).map_err(|err| {
        warn!(errors = err.detail.len(), "rejected command request: {}", err);
        err
    })?;

    let resolution = IntentResolver::resolve(&request.text);
    let intent = resolution.intent;
    let response = AiResponse::from_resolution(resolution, request.device_id);

    info!(
        request_id = %response.request_id,
        device_id = response.device_id.as_deref().unwrap_or("-"),
        intent = intent.as_str(),
        "resolved command"
    );

    Ok(Json(response))
}
