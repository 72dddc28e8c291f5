//! Middleware for logging requests and responses.

use std::time::Instant;

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Response bodies longer than this many bytes are truncated in the `info` logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// The request method and URI, and the response status, latency and body are
/// logged at the `info` level. If the response body is longer than
/// [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated and the full body is logged
/// at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    tracing::info!("Received request: {method} {uri}");

    let start = Instant::now();
    let response = next.run(request).await;
    let latency = start.elapsed();

    let (parts, body) = response.into_parts();
    let body_bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read the response body for {method} {uri}: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let body_text = String::from_utf8_lossy(&body_bytes);

    log_response(parts.status, latency.as_millis(), &body_text);

    Response::from_parts(parts, Body::from(body_bytes))
}

fn log_response(status: StatusCode, latency_ms: u128, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {status} in {latency_ms}ms\nbody: {}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {status} in {latency_ms}ms\nbody: {body:?}");
    }
}

/// Cut `text` to at most `limit` bytes without splitting a character.
fn truncate(text: &str, limit: usize) -> &str {
    let end = (0..=limit.min(text.len()))
        .rev()
        .find(|&index| text.is_char_boundary(index))
        .unwrap_or(0);

    &text[..end]
}
