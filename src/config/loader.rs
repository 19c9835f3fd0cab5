//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::BridgeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<BridgeConfig, ConfigError> {
    let config: BridgeConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<BridgeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Preset;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [server]
            bind_address = "0.0.0.0:9000"

            [server.reply_headers]
            "X-Served-By" = "bridge"

            [mapper]
            preset = "inbound"
            user_defined_header_prefix = "X-"

            [mapper.inbound]
            header_names = ["HTTP_REQUEST_HEADERS", "x-trace-*"]

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.mapper.preset, Preset::Inbound);
        assert_eq!(config.mapper.inbound.header_names.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.server.reply_headers.get("X-Served-By").map(String::as_str), Some("bridge"));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[mapper\npreset = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error() {
        let err = parse_config("[server]\nrequest_timeout_secs = 0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: server.request_timeout_secs: must be greater than 0"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
