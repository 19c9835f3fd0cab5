//! HTTP headers as an ordered, case-preserving multi-map.
//!
//! # Responsibilities
//! - Store wire headers with the spelling they were written with
//! - Case-insensitive lookup (RFC 9110)
//! - Typed readers for the list/date/length fields the mapper writes
//! - Convert to and from `http::HeaderMap` for axum and reqwest
//!
//! # Design Decisions
//! - `http::HeaderMap` lowercases names, so it is only used at the edges
//! - List-typed fields are written as a single comma-joined value

use std::fmt;

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use mime::Mime;

use crate::headers::charset::Charset;
use crate::headers::parse;
use crate::mapping::error::{MappingError, MappingResult};

/// Ordered HTTP header multi-map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolHeaders {
    entries: Vec<(String, Vec<String>)>,
}

impl ProtocolHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))
    }

    /// Replace all values of `name` with a single value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set_all(name, vec![value.into()]);
    }

    /// Replace all values of `name`.
    pub fn set_all(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1 = values,
            None => self.entries.push((name, values)),
        }
    }

    /// Add a value to `name`, keeping existing ones.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1.push(value.into()),
            None => self.entries.push((name, vec![value.into()])),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.position(name).map(|i| self.entries.remove(i).1)
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.position(name).map(|i| self.entries[i].1.as_slice())
    }

    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    fn joined(&self, name: &str) -> Option<String> {
        self.get(name).map(|values| values.join(", "))
    }

    /// `Accept` media types; empty when absent.
    pub fn accept(&self) -> MappingResult<Vec<Mime>> {
        self.joined("Accept")
            .map(|v| parse::media_types("Accept", &v))
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    /// `Accept-Charset` charsets; empty when absent.
    pub fn accept_charset(&self) -> MappingResult<Vec<Charset>> {
        self.joined("Accept-Charset")
            .map(|v| parse::charsets("Accept-Charset", &v))
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    pub fn content_type(&self) -> MappingResult<Option<Mime>> {
        self.get_first("Content-Type")
            .map(|v| parse::media_type("Content-Type", v))
            .transpose()
    }

    pub fn content_length(&self) -> MappingResult<Option<u64>> {
        self.get_first("Content-Length")
            .map(|v| parse::length("Content-Length", v))
            .transpose()
    }

    /// A date header as epoch millis (whole seconds, as HTTP-dates are).
    pub fn date_millis(&self, name: &str) -> MappingResult<Option<i64>> {
        self.get_first(name)
            .map(|v| parse::http_date(name, v))
            .transpose()
    }

    /// `If-None-Match` entity tags; empty when absent.
    pub fn if_none_match(&self) -> Vec<String> {
        self.joined("If-None-Match")
            .and_then(|v| parse::entity_tags("If-None-Match", &v).ok())
            .unwrap_or_default()
    }

    /// Parse `Name: value` lines. Blank lines and lines starting with `#`
    /// are skipped; repeated names append.
    pub fn parse_lines(input: &str) -> MappingResult<Self> {
        let mut headers = Self::new();
        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, value) = line.split_once(':').ok_or_else(|| {
                MappingError::invalid(line, line, "expected `Name: value`")
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(MappingError::invalid(line, line, "empty header name"));
            }
            headers.append(name, value.trim());
        }
        Ok(headers)
    }

    /// Convert to an `http::HeaderMap`, failing on names or values that are
    /// not valid on the wire.
    pub fn to_header_map(&self) -> MappingResult<HeaderMap> {
        let mut map = HeaderMap::new();
        for (name, values) in self.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| MappingError::invalid(name, name, e.to_string()))?;
            for value in values {
                let header_value = HeaderValue::from_str(value)
                    .map_err(|e| MappingError::invalid(name, value, e.to_string()))?;
                map.append(header_name.clone(), header_value);
            }
        }
        Ok(map)
    }
}

impl From<&HeaderMap> for ProtocolHeaders {
    fn from(map: &HeaderMap) -> Self {
        let mut headers = Self::new();
        for (name, value) in map {
            headers.append(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        headers
    }
}

impl fmt::Display for ProtocolHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, values) in self.iter() {
            for value in values {
                writeln!(f, "{name}: {value}")?;
            }
        }
        Ok(())
    }
}
