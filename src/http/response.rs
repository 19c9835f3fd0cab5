//! Reply header mapping.
//!
//! # Responsibilities
//! - Map reply `MessageHeaders` onto an outgoing response
//! - Turn mapping failures into 500 responses
//!
//! # Design Decisions
//! - Mapped headers replace same-named headers the handler already set
//! - A reply that cannot be mapped is a server-side bug, never a client error

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::headers::{MessageHeaders, ProtocolHeaders};
use crate::mapping::{HeaderMapper, MappingResult};

/// Apply the outbound rules of `mapper` to `headers` and merge the result
/// into `response`.
pub fn reply_with_headers(
    mapper: &HeaderMapper,
    headers: &MessageHeaders,
    mut response: Response,
) -> Response {
    match map_reply(mapper, headers) {
        Ok(map) => {
            response.headers_mut().extend(map);
            response
        }
        Err(e) => {
            tracing::error!(header = e.header_name(), error = %e, "Failed to map reply headers");
            (StatusCode::INTERNAL_SERVER_ERROR, "Reply headers could not be mapped").into_response()
        }
    }
}

fn map_reply(
    mapper: &HeaderMapper,
    headers: &MessageHeaders,
) -> MappingResult<axum::http::HeaderMap> {
    let mut protocol = ProtocolHeaders::new();
    mapper.from_headers(headers, &mut protocol)?;
    protocol.to_header_map()
}
