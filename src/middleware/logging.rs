//! Logging middleware

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Response header carrying the id logged for the request
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware.
///
/// Tags every request with an id, records it on a span around the handler
/// and echoes it back in the response headers.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!("request", %request_id, %method, %path);
    let mut response = next.run(request).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    span.in_scope(|| {
        if status.is_server_error() {
            warn!(status = status.as_u16(), %duration_ms, "Request completed with server error");
        } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
            warn!(status = status.as_u16(), %duration_ms, "Request completed with client error");
        } else {
            info!(status = status.as_u16(), %duration_ms, "Request completed");
        }
    });

    response
}
