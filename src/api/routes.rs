use axum::{
    Router,
    extract::{Json, State},
    routing::{any, post},
};

use crate::AppState;
use crate::api::models::{HealthResponse, VersionInfo};
use crate::config;
use crate::error::LookupError;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", any(health_handler))
        .route("/version", any(version_handler))
        .route("/lookup", post(lookup_handler))
        .with_state(app_state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn version_handler() -> Json<VersionInfo> {
    Json(VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: config::version(),
    })
}

/// POST /lookup — the request body is the topic, the response body is the
/// summary text. Any provider failure surfaces as a 500 "lookup error".
async fn lookup_handler(
    State(state): State<AppState>,
    topic: String,
) -> Result<String, LookupError> {
    tracing::info!(topic = %topic, "looking up summary");
    match state.provider.summary(&topic).await {
        Ok(summary) => {
            tracing::info!(topic = %topic, chars = summary.len(), "lookup succeeded");
            Ok(summary)
        }
        Err(err) => {
            tracing::warn!(topic = %topic, error = %err, "lookup failed");
            Err(err)
        }
    }
}
