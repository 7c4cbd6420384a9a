/// Health check endpoint
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::context::ApiContext;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub provider_config: String,
}

/// Health check handler
///
/// Reports whether provider settings are complete without naming the
/// missing variables; those only go to the log.
pub async fn handler(
    State(ctx): State<Arc<ApiContext>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let missing = ctx.config.provider_settings().missing();
    let healthy = missing.is_empty();

    if !healthy {
        warn!(
            "Health check degraded: missing environment variables: {}",
            missing.join(", ")
        );
    }

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: formrelay_core::VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            provider_config: if healthy { "ok" } else { "missing" }.to_string(),
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
