use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation, in the upstream chat-completion wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Body the browser client sends to `POST /api/proxy`.
#[derive(Debug, Deserialize)]
pub struct ProxyRequest {
    pub messages: Vec<Message>,
}

/// Body the proxy sends to the upstream completion service.
/// Streaming is always requested; the model identifier is fixed by config.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub stream: bool,
}
