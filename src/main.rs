use tracing::{info, warn};

use studybuddy::config::ProxyConfig;
use studybuddy::routes::{app, ProxyState};
use studybuddy::upstream::CompletionClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studybuddy=debug,tower_http=debug".into()),
        )
        .init();

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let config = ProxyConfig::from_env();
    if config.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; /api/proxy will reject every request");
    }
    let upstream = CompletionClient::new(&config.upstream_url, &config.model);
    let state = ProxyState { config, upstream };

    // ── Listen ────────────────────────────────────────────────────────────────
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
