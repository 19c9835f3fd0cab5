//! Gateway server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the echo and health handlers
//! - Wire up middleware (tracing, timeout, inbound header mapping)
//! - Bind the server to a listener and shut down on Ctrl+C
//!
//! # Design Decisions
//! - `/health` is routed outside the mapping middleware so probes never
//!   fail on odd headers
//! - The mapper is built once from config and shared by `Arc`

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::BridgeConfig;
use crate::headers::MessageHeaders;
use crate::http::request::{map_request_headers, MappedHeaders};
use crate::http::response::reply_with_headers;
use crate::mapping::HeaderMapper;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub mapper: Arc<HeaderMapper>,
    pub reply_headers: Arc<MessageHeaders>,
}

/// HTTP gateway mapping request headers in and reply headers out.
pub struct GatewayServer {
    router: Router,
    config: BridgeConfig,
}

impl GatewayServer {
    /// Create a new gateway with the given configuration.
    pub fn new(config: BridgeConfig) -> Self {
        let mapper = Arc::new(HeaderMapper::from_config(&config.mapper));
        let reply_headers: MessageHeaders = config
            .server
            .reply_headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        let state = GatewayState {
            mapper,
            reply_headers: Arc::new(reply_headers),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    #[allow(deprecated)]
    fn build_router(config: &BridgeConfig, state: GatewayState) -> Router {
        Router::new()
            .route("/", any(echo_handler))
            .route("/{*path}", any(echo_handler))
            .layer(middleware::from_fn_with_state(
                state.mapper.clone(),
                map_request_headers,
            ))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.server.request_timeout_secs,
                    ))),
            )
    }

    /// The router, for serving in-process (tests, embedding).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Gateway starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Gateway stopped");
        Ok(())
    }
}

/// Echo the mapped request headers back as JSON.
async fn echo_handler(
    State(state): State<GatewayState>,
    MappedHeaders(headers): MappedHeaders,
    request: Request<Body>,
) -> Response {
    let method: &Method = request.method();
    tracing::debug!(method = %method, path = request.uri().path(), "Echoing headers");

    let body = Json(json!({
        "method": method.as_str(),
        "path": request.uri().path(),
        "headers": headers,
    }));
    reply_with_headers(&state.mapper, &state.reply_headers, body.into_response())
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn gateway() -> GatewayServer {
        let mut config = BridgeConfig::default();
        config.mapper.preset = Preset::Inbound;
        config
            .server
            .reply_headers
            .insert("Cache-Control".to_string(), "no-store".to_string());
        GatewayServer::new(config)
    }

    #[test]
    fn test_config_kept() {
        let server = gateway();
        assert_eq!(server.config().mapper.preset, Preset::Inbound);
        assert_eq!(server.config().server.reply_headers.len(), 1);
    }

    #[tokio::test]
    async fn test_health_ignores_malformed_headers() {
        let response = gateway()
            .router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("Accept", "bar")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_echo_maps_request_and_reply() {
        let response = gateway()
            .router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/orders/42")
                    .header("Content-Type", "text/plain")
                    .header("x-custom", "ignored")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["cache-control"], "no-store");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["method"], "POST");
        assert_eq!(json["path"], "/orders/42");
        assert_eq!(json["headers"]["contentType"], "text/plain");
        assert!(json["headers"].get("x-custom").is_none());
    }
}
