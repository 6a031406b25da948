use tracing::debug;

use crate::models::{CompletionRequest, Message};

/// Client for the upstream chat-completion service.
///
/// Holds a `reqwest::Client` plus the fixed endpoint and model identifier.
/// One upstream request is issued per incoming proxy request — no batching,
/// no retry. The caller decides what to do with the response; this type
/// never buffers the body.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl CompletionClient {
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            model: model.to_string(),
        }
    }

    /// Sends the forwarded message sequence upstream with streaming enabled,
    /// authenticated with the server-held bearer credential.
    pub async fn stream_completion(
        &self,
        api_key: &str,
        messages: &[Message],
    ) -> Result<reqwest::Response, reqwest::Error> {
        debug!(
            "forwarding {} message(s) to {} (model {})",
            messages.len(),
            self.endpoint,
            self.model
        );
        self.client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages,
                stream: true,
            })
            .send()
            .await
    }
}
