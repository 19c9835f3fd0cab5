//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stdout via the fmt layer
//! ```
//!
//! # Design Decisions
//! - Structured fields (`header = ...`) rather than formatted messages
//! - HTTP request spans come from tower-http's TraceLayer

pub mod logging;
