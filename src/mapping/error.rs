//! Mapping error definitions.

use thiserror::Error;

use crate::headers::value::MessageValue;

/// Errors raised while converting headers in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A standard header value could not be parsed into its expected shape.
    #[error("Invalid value {value:?} for header '{name}': {reason}")]
    InvalidHeaderFormat {
        name: String,
        value: String,
        reason: String,
    },

    /// A value variant the header cannot carry (e.g. a charset for Content-Length).
    #[error("Header '{name}' does not accept a {kind} value")]
    UnsupportedValue { name: String, kind: &'static str },
}

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

impl MappingError {
    pub(crate) fn invalid(name: &str, value: &str, reason: impl Into<String>) -> Self {
        MappingError::InvalidHeaderFormat {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(name: &str, value: &MessageValue) -> Self {
        MappingError::UnsupportedValue {
            name: name.to_string(),
            kind: value.kind(),
        }
    }

    /// Name of the header that failed.
    pub fn header_name(&self) -> &str {
        match self {
            MappingError::InvalidHeaderFormat { name, .. } => name,
            MappingError::UnsupportedValue { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MappingError::invalid("Content-Length", "foo", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "Invalid value \"foo\" for header 'Content-Length': invalid digit found in string"
        );
        assert_eq!(err.header_name(), "Content-Length");

        let err = MappingError::unsupported("Content-Length", &MessageValue::from(mime::TEXT_XML));
        assert_eq!(
            err.to_string(),
            "Header 'Content-Length' does not accept a media type value"
        );
    }
}
