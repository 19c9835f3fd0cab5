//! Header bridge
//!
//! Maps headers between HTTP requests/responses and the typed header maps
//! of a messaging system.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 HEADER BRIDGE                 │
//!                     │                                              │
//!   HTTP request      │  ┌──────────┐   ┌───────────┐   ┌─────────┐  │
//!   ──────────────────┼─▶│  http    │──▶│  mapping  │──▶│ headers │  │
//!                     │  │ gateway  │   │ to_headers│   │ Message │  │
//!                     │  └──────────┘   └───────────┘   └────┬────┘  │
//!                     │                                      │       │
//!   HTTP response     │  ┌──────────┐   ┌────────────┐       │       │
//!   ◀─────────────────┼──│ response │◀──│  mapping   │◀──────┘       │
//!                     │  │          │   │from_headers│               │
//!                     │  └──────────┘   └────────────┘               │
//!                     │                                              │
//!                     │  ┌────────────────────────────────────────┐  │
//!                     │  │  config (TOML)    observability (logs) │  │
//!                     │  └────────────────────────────────────────┘  │
//!                     └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod headers;
pub mod http;
pub mod mapping;
pub mod observability;

pub use headers::{MessageHeaders, MessageValue, ProtocolHeaders};
pub use mapping::{HeaderMapper, MappingError, MappingResult};
