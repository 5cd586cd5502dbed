use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use eyre::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ApiError;

pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/deploy", get(deploy).post(deploy))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// Deploys the configured artifact and relays what the tool printed.
///
/// Request bodies and query strings are ignored.
async fn deploy(State(config): State<Arc<Config>>) -> Result<Response, ApiError> {
    let command = config.stellar_deploy();

    let output = command
        .run()
        .await
        .map_err(|err| ApiError::deploy(command.tool().display(), err))?;

    let response = if output.success() {
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "output": output.stdout,
            })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "success": false,
                "error": output.stderr,
            })),
        )
    };

    Ok(response.into_response())
}

pub async fn run(
    config: Arc<Config>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> eyre::Result<()> {
    let addr = config.bind;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Binding to {addr}"))?;

    tracing::info!(
        address = %addr,
        tool = %config.tool.display(),
        wasm = %config.wasm.display(),
        source = %config.source,
        network = %config.network,
        "Deploy server listening"
    );

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Serving HTTP")?;

    tracing::info!("Deploy server shutdown complete");

    Ok(())
}
