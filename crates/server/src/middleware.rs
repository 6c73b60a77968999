use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Rewrite the body of any 404 response to a fixed plain-text payload,
/// keeping the status code. Every other response passes through untouched.
/// Must be registered as the outermost layer so the router's own
/// unmatched-route fallback is rewritten too.
pub async fn rewrite_not_found(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() == StatusCode::NOT_FOUND {
        return (StatusCode::NOT_FOUND, "Sorry, wrong query").into_response();
    }
    response
}
