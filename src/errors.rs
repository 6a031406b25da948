use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures the proxy surfaces itself. Upstream rejections are not listed
/// here — their status and body are relayed verbatim by the handler.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("API key not configured on the server")]
    MissingApiKey,

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Upstream request failed: {0}")]
    UpstreamTransport(#[from] reqwest::Error),
}

/// Everything the proxy catches collapses to a 500 with the error's message,
/// matching the single catch-all contract of the endpoint.
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
