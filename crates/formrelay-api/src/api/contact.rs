/// Contact-form relay endpoint
use axum::{
    Json,
    body::{Body, Bytes},
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
};
use formrelay_core::{HandlerResult, RelayRequest};
use http_body_util::LengthLimitError;
use std::sync::Arc;
use tracing::warn;

use crate::{MAX_BODY_BYTES, context::ApiContext, error::ApiError};

/// Accepts every method; the relay answers non-POST requests with 405
///
/// The body is only read for POST, so the method guard runs before any
/// size limit applies.
pub async fn handler(State(ctx): State<Arc<ApiContext>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let body = if parts.method == Method::POST {
        match read_body(body).await {
            Ok(bytes) => bytes,
            Err(err) => return err.into_response(),
        }
    } else {
        Bytes::new()
    };

    let result = formrelay_core::handle(
        RelayRequest::new(&parts.method, &body),
        ctx.config.as_ref(),
        ctx.sender.as_ref(),
    )
    .await;

    into_response(result)
}

async fn read_body(body: Body) -> Result<Bytes, ApiError> {
    axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| {
            let inner = e.into_inner();
            if inner.downcast_ref::<LengthLimitError>().is_some() {
                warn!("Rejected request body larger than {} bytes", MAX_BODY_BYTES);
                ApiError::PayloadTooLarge
            } else {
                warn!("Failed to read request body: {}", inner);
                ApiError::BadRequest
            }
        })
}

fn into_response(result: HandlerResult) -> Response {
    let mut response = (result.status, Json(result.body)).into_response();
    if let Some(allow) = result.allow {
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static(allow));
    }
    response
}
