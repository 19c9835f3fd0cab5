//! Inbound request header mapping.
//!
//! # Responsibilities
//! - Map incoming request headers into `MessageHeaders` before the handler runs
//! - Reject requests whose standard headers are malformed
//! - Hand the mapped headers to handlers through an extractor
//!
//! # Design Decisions
//! - Mapping runs as middleware so every route sees the same view
//! - Mapped headers travel as a request extension; the original
//!   `HeaderMap` is left untouched

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{request::Parts, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::headers::{MessageHeaders, ProtocolHeaders};
use crate::mapping::HeaderMapper;

/// Middleware mapping request headers with the inbound rules of `mapper`.
pub async fn map_request_headers(
    State(mapper): State<Arc<HeaderMapper>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let protocol = ProtocolHeaders::from(request.headers());
    match mapper.to_headers(&protocol) {
        Ok(headers) => {
            tracing::debug!(mapped = headers.len(), "Request headers mapped");
            request.extensions_mut().insert(headers);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!(
                header = e.header_name(),
                error = %e,
                "Rejecting request with malformed header"
            );
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Extractor for the headers produced by [`map_request_headers`].
#[derive(Debug, Clone)]
pub struct MappedHeaders(pub MessageHeaders);

impl<S> FromRequestParts<S> for MappedHeaders
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<MessageHeaders>()
            .cloned()
            .map(MappedHeaders)
            .ok_or((
                StatusCode::INTERNAL_SERVER_ERROR,
                "header mapping middleware not installed",
            ))
    }
}
