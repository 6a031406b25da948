use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::errors::ProxyError;
use crate::models::ProxyRequest;
use crate::routes::ProxyState;

/// POST `/api/proxy` — forwards the chat history to the completion service
/// and relays the response.
///
/// Contract:
/// - body must decode to `{ "messages": [...] }`, otherwise 500 with the
///   parse error's message (the endpoint's single catch-all, not a 4xx);
/// - a missing server credential fails before any upstream call;
/// - an upstream rejection is relayed with its status and body untouched;
/// - an upstream success is piped through unbuffered as `text/event-stream`.
///
/// Non-POST methods never reach this handler; axum's method router answers
/// them with 405.
pub async fn proxy_handler(
    State(state): State<ProxyState>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request: ProxyRequest = serde_json::from_slice(&body)?;

    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(ProxyError::MissingApiKey)?;

    let upstream = state
        .upstream
        .stream_completion(api_key, &request.messages)
        .await?;

    let status = upstream.status();
    if !status.is_success() {
        warn!("upstream rejected the request with status {status}");
        let content_type = upstream
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/json")
            .to_string();
        let body = upstream.bytes().await?;
        let status =
            StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        return Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response());
    }

    // Pure pipe: the upstream SSE bytes flow to the client as they arrive.
    let stream = Body::from_stream(upstream.bytes_stream());
    Ok((
        [(header::CONTENT_TYPE, "text/event-stream")],
        stream,
    )
        .into_response())
}
