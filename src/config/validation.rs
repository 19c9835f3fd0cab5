//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parses)
//! - Check header names and patterns are usable on the wire
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BridgeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{BridgeConfig, DirectionConfig};
use crate::mapping::standard;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a parsed configuration.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "server.bind_address",
            format!("'{}' is not a socket address", config.server.bind_address),
        ));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "server.request_timeout_secs",
            "must be greater than 0",
        ));
    }
    for name in config.server.reply_headers.keys() {
        if !is_token(name) {
            errors.push(ValidationError::new(
                "server.reply_headers",
                format!("'{name}' is not a valid header name"),
            ));
        }
    }

    let prefix = &config.mapper.user_defined_header_prefix;
    if !prefix.is_empty() && !is_token(prefix) {
        errors.push(ValidationError::new(
            "mapper.user_defined_header_prefix",
            format!("'{prefix}' contains characters not allowed in header names"),
        ));
    }

    validate_direction("mapper.inbound", &config.mapper.inbound, &mut errors);
    validate_direction("mapper.outbound", &config.mapper.outbound, &mut errors);

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!(
                "'{}' is not one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_direction(field: &str, direction: &DirectionConfig, errors: &mut Vec<ValidationError>) {
    for pattern in direction.header_names.iter().flatten() {
        let literal = pattern.replace('*', "");
        if pattern.trim().is_empty() || (!literal.is_empty() && !is_token(&literal)) {
            errors.push(ValidationError::new(
                format!("{field}.header_names"),
                format!("'{pattern}' is not a valid header name pattern"),
            ));
        }
    }
    for name in &direction.excluded_standard_headers {
        if !standard::is_standard(name) {
            errors.push(ValidationError::new(
                format!("{field}.excluded_standard_headers"),
                format!("'{name}' is not a standard HTTP header"),
            ));
        }
    }
}

/// RFC 9110 token characters.
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&BridgeConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = BridgeConfig::default();
        config.server.bind_address = "nowhere".to_string();
        config.server.request_timeout_secs = 0;
        config.mapper.user_defined_header_prefix = "X :".to_string();
        config.mapper.inbound.header_names = Some(vec!["".to_string(), "foo bar*".to_string()]);
        config.mapper.outbound.excluded_standard_headers = vec!["X-Custom".to_string()];
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors[0].field, "server.bind_address");
        assert!(errors
            .iter()
            .any(|e| e.to_string() == "mapper.outbound.excluded_standard_headers: 'X-Custom' is not a standard HTTP header"));
    }

    #[test]
    fn test_patterns_and_tokens_accepted() {
        let mut config = BridgeConfig::default();
        config.mapper.inbound.header_names = Some(vec![
            "HTTP_REQUEST_HEADERS".to_string(),
            "*".to_string(),
            "x-*-id".to_string(),
        ]);
        config.mapper.user_defined_header_prefix = "X-".to_string();
        config.server.reply_headers.insert("X-Reply".to_string(), "1".to_string());
        assert!(validate_config(&config).is_ok());
    }
}
