/// formrelay API - contact-form relay Lambda
///
/// Converts Lambda HTTP events into requests for an axum router that mounts
/// the relay endpoint and a health check.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router,
    body::Body as AxumBody,
    middleware as axum_middleware,
    routing::{any, get},
};
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tracing::debug;

/// Largest accepted POST body; contact forms are small
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Builds the router for the given context
pub fn router(ctx: Arc<ApiContext>) -> Router {
    Router::new()
        .route(&ctx.contact_path, any(api::contact::handler))
        .route("/health", get(api::health::handler))
        .fallback(api::not_found)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .with_state(ctx)
}

/// Main Lambda handler - converts Lambda HTTP request to Axum router
pub async fn handler(app: Router, event: Request) -> Result<Response<Body>, LambdaError> {
    debug!("Processing request: {} {}", event.method(), event.uri());

    // Convert Lambda HTTP request to Axum request
    let (parts, body) = event.into_parts();
    let axum_request = http::Request::from_parts(parts, AxumBody::from(body.to_vec()));

    let response = app.oneshot(axum_request).await?;

    // Convert Axum response body to Lambda response body
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await?;

    Ok(Response::from_parts(parts, Body::from(body_bytes.to_vec())))
}
