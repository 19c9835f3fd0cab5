//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, overridable via `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Mapping code only emits `debug`/`trace` events (dropped headers);
//!   the gateway emits `info`/`warn`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(log_level: &str) -> String {
    format!("header_bridge={log_level},tower_http=debug")
}

/// Install the global tracing subscriber. Call once per process.
pub fn init(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(&config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
