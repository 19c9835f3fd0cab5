//! HTTP adapters around the header mapper.
//!
//! # Data Flow
//! ```text
//! Inbound gateway:
//!     client request
//!     → request.rs (HeaderMap → MessageHeaders, 400 on malformed headers)
//!     → server.rs (echo handler)
//!     → response.rs (reply MessageHeaders → HeaderMap, 500 on failure)
//!     → client response
//!
//! Outbound adapter:
//!     MessageHeaders → outbound.rs (reqwest) → mapped reply headers
//! ```

pub mod outbound;
pub mod request;
pub mod response;
pub mod server;

pub use outbound::{OutboundClient, OutboundError, OutboundReply};
pub use request::{map_request_headers, MappedHeaders};
pub use response::reply_with_headers;
pub use server::{GatewayServer, GatewayState};
