//! Header data model shared by both mapping directions.
//!
//! # Data Flow
//! ```text
//! Messaging side                         HTTP side
//!     MessageHeaders                         ProtocolHeaders
//!     (name → MessageValue)   ◀── mapper ──▶  (name → [String])
//!           │                                      │
//!           └── value.rs / charset.rs          parse.rs / csv.rs / date.rs
//! ```
//!
//! # Design Decisions
//! - Names compare ignoring ASCII case, but keep the spelling they were stored with
//! - Both maps keep insertion order so output is deterministic
//! - Wire parsing lives in `parse.rs` so the typed readers on `ProtocolHeaders`
//!   and the mapper share one set of rules

pub mod charset;
pub mod csv;
pub mod date;
pub mod message;
pub mod parse;
pub mod protocol;
pub mod value;

pub use charset::Charset;
pub use message::{MessageHeaders, MessageHeadersBuilder};
pub use protocol::ProtocolHeaders;
pub use value::MessageValue;

/// Returns true if `name` starts with `prefix`, ignoring ASCII case.
pub(crate) fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
