//! Header mapping subsystem.
//!
//! # Data Flow
//! ```text
//! Outbound (message → HTTP):
//!     MessageHeaders
//!     → pattern.rs (outbound patterns, exclusions)
//!     → standard.rs (rule lookup: typed coercion) | custom (prefix added)
//!     → ProtocolHeaders
//!
//! Inbound (HTTP → message):
//!     ProtocolHeaders
//!     → pattern.rs (inbound patterns, exclusions)
//!     → standard.rs (rule lookup: typed parse, drop-or-fail) | custom (prefix stripped)
//!     → MessageHeaders
//! ```
//!
//! # Design Decisions
//! - Mapper configuration is fixed at construction; mapping is a pure function
//! - Inbound and outbound pattern sets are independent
//! - Deterministic: output order follows input order

pub mod error;
pub mod mapper;
pub mod pattern;
pub mod standard;

pub use error::{MappingError, MappingResult};
pub use mapper::{HeaderMapper, HeaderMapperBuilder};
pub use pattern::{HeaderNamePattern, NameMatcher, PatternSet, HTTP_REQUEST_HEADERS, HTTP_RESPONSE_HEADERS};
