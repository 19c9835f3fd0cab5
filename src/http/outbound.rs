//! Outbound adapter: sends HTTP requests built from message headers.
//!
//! # Data Flow
//! ```text
//! MessageHeaders
//!     → HeaderMapper::from_headers (outbound rules)
//!     → reqwest request
//!     → response HeaderMap
//!     → HeaderMapper::to_headers (inbound rules)
//!     → OutboundReply
//! ```

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use thiserror::Error;

use crate::headers::{MessageHeaders, ProtocolHeaders};
use crate::mapping::{HeaderMapper, MappingError};

/// Errors from an outbound exchange.
#[derive(Debug, Error)]
pub enum OutboundError {
    #[error("Header mapping failed: {0}")]
    Mapping(#[from] MappingError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Reply to an outbound request, with headers already mapped inbound.
#[derive(Debug, Clone)]
pub struct OutboundReply {
    pub status: StatusCode,
    pub headers: MessageHeaders,
    pub body: String,
}

/// HTTP client applying a [`HeaderMapper`] in both directions.
#[derive(Debug, Clone)]
pub struct OutboundClient {
    client: reqwest::Client,
    mapper: Arc<HeaderMapper>,
}

impl OutboundClient {
    pub fn new(mapper: Arc<HeaderMapper>) -> Result<Self, OutboundError> {
        let client = reqwest::Client::builder().no_proxy().build()?;
        Ok(Self { client, mapper })
    }

    pub fn mapper(&self) -> &HeaderMapper {
        &self.mapper
    }

    /// Send `body` to `url`, with `headers` mapped onto the request.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &MessageHeaders,
        body: impl Into<reqwest::Body>,
    ) -> Result<OutboundReply, OutboundError> {
        let mut protocol = ProtocolHeaders::new();
        self.mapper.from_headers(headers, &mut protocol)?;

        tracing::debug!(%method, url, mapped = protocol.len(), "Sending outbound request");
        let response = self
            .client
            .request(method, url)
            .headers(protocol.to_header_map()?)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let reply_headers = self.mapper.to_headers(&ProtocolHeaders::from(response.headers()))?;
        let body = response.text().await?;

        Ok(OutboundReply {
            status,
            headers: reply_headers,
            body,
        })
    }
}
