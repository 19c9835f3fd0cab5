//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the bridge.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the header bridge.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    /// Gateway server settings.
    pub server: ServerConfig,

    /// Header mapper settings.
    pub mapper: MapperConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Gateway server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Message headers attached to every echo reply, mapped outbound.
    pub reply_headers: BTreeMap<String, String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
            reply_headers: BTreeMap::new(),
        }
    }
}

/// Canned pattern sets for a gateway role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// No patterns: nothing maps unless configured.
    #[default]
    None,
    /// Receives HTTP requests: request headers in, response headers out.
    Inbound,
    /// Sends HTTP requests: request headers out, response headers in.
    Outbound,
}

/// Header mapper configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Preset supplying patterns for directions without explicit names.
    pub preset: Preset,

    /// Prefix added to custom headers outbound and stripped inbound.
    pub user_defined_header_prefix: String,

    /// HTTP → message rules.
    pub inbound: DirectionConfig,

    /// Message → HTTP rules.
    pub outbound: DirectionConfig,
}

/// Mapping rules for one direction.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectionConfig {
    /// Header name patterns; `None` falls back to the preset.
    pub header_names: Option<Vec<String>>,

    /// Standard headers dropped even when a pattern matches.
    pub excluded_standard_headers: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
