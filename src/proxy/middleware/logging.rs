// Request logging middleware
use axum::{extract::Request, middleware::Next, response::Response};

/// Logs method, URI and resulting status of every request
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    tracing::info!("Request: {} {}", method, uri);

    let response = next.run(request).await;
    let status = response.status();
    if status.is_server_error() {
        tracing::warn!("Response: {} {} -> {}", method, uri, status);
    } else {
        tracing::debug!("Response: {} {} -> {}", method, uri, status);
    }
    response
}
