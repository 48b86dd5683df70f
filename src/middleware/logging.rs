//! Logging middleware
//!
//! Records HTTP request and response information

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Response header carrying the generated request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests slower than this are reported
const SLOW_REQUEST_SECS: u64 = 5;

/// Request logging middleware
///
/// Opens an `http_request` span per request and logs status and duration
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        path = %uri.path(),
    );

    let client_ip = get_client_ip(request.headers()).unwrap_or_else(|| "unknown".to_string());

    let mut response = async move {
        info!("Request started: {} {} - Client: {}", method, uri.path(), client_ip);

        let response = next.run(request).await;

        let duration = start_time.elapsed();
        let status = response.status();
        let millis = duration.as_secs_f64() * 1000.0;

        if status.is_server_error() {
            warn!("Server error: {} - Duration: {:.2}ms", status, millis);
        } else if status.is_client_error() {
            warn!("Client error: {} - Duration: {:.2}ms", status, millis);
        } else {
            info!("Request completed: {} - Duration: {:.2}ms", status, millis);
        }

        if duration.as_secs() > SLOW_REQUEST_SECS {
            warn!(
                "Slow request detected: {} {} - Duration: {:.2}s",
                method,
                uri.path(),
                duration.as_secs_f64()
            );
        }

        response
    }
    .instrument(span)
    .await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Get client IP address from proxy headers
fn get_client_ip(headers: &HeaderMap) -> Option<String> {
    let ip_headers = ["x-forwarded-for", "x-real-ip", "cf-connecting-ip"];

    for header_name in &ip_headers {
        if let Some(ip_str) = headers.get(*header_name).and_then(|v| v.to_str().ok()) {
            // X-Forwarded-For may contain multiple IPs, take the first one
            if let Some(first_ip) = ip_str.split(',').next() {
                let ip = first_ip.trim();
                if !ip.is_empty() && ip != "unknown" {
                    return Some(ip.to_string());
                }
            }
        }
    }

    None
}
