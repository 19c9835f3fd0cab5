//! Shared utilities for integration tests.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::{
    http::{HeaderMap, HeaderName, HeaderValue},
    Json, Router,
};
use tokio::net::TcpListener;

use header_bridge::config::BridgeConfig;
use header_bridge::headers::{MessageHeaders, ProtocolHeaders};
use header_bridge::http::GatewayServer;
use header_bridge::mapping::{HeaderMapper, MappingResult};

/// Map `headers` outbound with `mapper` into a fresh `ProtocolHeaders`.
#[allow(dead_code)]
pub fn map_out(mapper: &HeaderMapper, headers: &MessageHeaders) -> MappingResult<ProtocolHeaders> {
    let mut target = ProtocolHeaders::new();
    mapper.from_headers(headers, &mut target)?;
    Ok(target)
}

/// Build `ProtocolHeaders` from `(name, value)` pairs.
#[allow(dead_code)]
pub fn protocol(pairs: &[(&str, &str)]) -> ProtocolHeaders {
    let mut headers = ProtocolHeaders::new();
    for (name, value) in pairs {
        headers.append(*name, *value);
    }
    headers
}

/// Start a backend on an ephemeral port that echoes the request headers as a
/// JSON object and answers with `reply_headers`.
#[allow(dead_code)]
pub async fn start_echo_backend(reply_headers: &'static [(&'static str, &'static str)]) -> SocketAddr {
    let app = Router::new().fallback(move |request_headers: HeaderMap| async move {
        let echoed: BTreeMap<String, String> = request_headers
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let mut headers = HeaderMap::new();
        for (name, value) in reply_headers {
            headers.append(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        (headers, Json(echoed))
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Start the gateway on an ephemeral port.
#[allow(dead_code)]
pub async fn start_gateway(config: BridgeConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = GatewayServer::new(config);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });
    addr
}
