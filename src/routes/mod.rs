pub mod proxy_routes;

use axum::routing::post;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::upstream::CompletionClient;

/// Shared handler state: the environment-derived config and the upstream
/// client. Cheap to clone, cloned per request by axum.
#[derive(Clone)]
pub struct ProxyState {
    pub config: ProxyConfig,
    pub upstream: CompletionClient,
}

/// Builds the application router: the single API route plus static serving
/// of the compiled frontend bundle (same origin as the proxy).
pub fn app(state: ProxyState) -> Router {
    let assets = ServeDir::new("frontend/dist")
        .not_found_service(ServeFile::new("frontend/dist/index.html"));

    Router::new()
        .route("/api/proxy", post(proxy_routes::proxy_handler))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
