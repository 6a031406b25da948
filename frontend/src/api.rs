//! The streaming response consumer: one request to the proxy per assistant
//! turn, with the body consumed incrementally as it arrives.

use gloo_net::http::Request;
use js_sys::Uint8Array;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::ReadableStreamDefaultReader;

use crate::models::{Message, ProxyRequest};
use crate::sse::{SseEvent, SseParser};

const PROXY_URL: &str = "/api/proxy";

/// Error body relayed by the proxy: either its own flat
/// `{"error": "..."}` shape or the upstream's nested
/// `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Nested { message: String },
    Flat(String),
}

impl ErrorDetail {
    fn into_message(self) -> String {
        match self {
            ErrorDetail::Nested { message } => message,
            ErrorDetail::Flat(message) => message,
        }
    }
}

/// POSTs the full history to the proxy and decodes the streamed reply.
///
/// `on_fragment` fires once per extracted text fragment so the caller can
/// render the running accumulation. Returns the complete reply text, or the
/// failure's message when the request or the stream breaks — in which case
/// no fragment callback fires afterwards and the caller appends nothing to
/// history.
pub async fn stream_chat(
    history: &[Message],
    on_fragment: impl Fn(&str),
) -> Result<String, String> {
    let response = Request::post(PROXY_URL)
        .json(&ProxyRequest { messages: history })
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !response.ok() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error.into_message(),
            Err(_) => format!("Server error: {}", response.status()),
        };
        return Err(message);
    }

    let stream = response
        .body()
        .ok_or_else(|| "Response has no body".to_string())?;
    let reader: ReadableStreamDefaultReader = stream
        .get_reader()
        .dyn_into()
        .map_err(|_| "Streaming reads are not supported in this browser".to_string())?;

    let mut parser = SseParser::new();
    let mut full = String::new();

    loop {
        let next = JsFuture::from(reader.read())
            .await
            .map_err(|e| format!("Stream read failed: {e:?}"))?;

        let done = js_sys::Reflect::get(&next, &"done".into())
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(true);
        if done {
            break;
        }

        let value = js_sys::Reflect::get(&next, &"value".into())
            .map_err(|e| format!("Stream read failed: {e:?}"))?;
        let bytes = Uint8Array::new(&value).to_vec();
        let text = String::from_utf8_lossy(&bytes);

        let mut finished = false;
        for event in parser.push(&text) {
            match event {
                SseEvent::Fragment(fragment) => {
                    full.push_str(&fragment);
                    on_fragment(&fragment);
                }
                SseEvent::Done => finished = true,
            }
        }
        if finished {
            break;
        }
    }

    // A stream that ended without the sentinel may leave a final frame.
    if let Some(SseEvent::Fragment(fragment)) = parser.finish() {
        full.push_str(&fragment);
        on_fragment(&fragment);
    }

    Ok(full)
}
