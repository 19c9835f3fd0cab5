//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BridgeConfig (validated, immutable)
//!     → HeaderMapper::from_config (patterns compiled once)
//!     → shared via Arc with the gateway handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::BridgeConfig;
pub use schema::DirectionConfig;
pub use schema::MapperConfig;
pub use schema::ObservabilityConfig;
pub use schema::Preset;
pub use schema::ServerConfig;
