const DEFAULT_UPSTREAM_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Server-side proxy configuration, read from the environment once at startup.
///
/// The upstream credential is the server's own — it is never accepted from,
/// or exposed to, the browser client. A missing key is kept as `None` and
/// surfaced per request rather than silently defaulted.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub model: String,
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            upstream_url: std::env::var("STUDYBUDDY_UPSTREAM_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()),
            model: std::env::var("STUDYBUDDY_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}
