//! Generic message headers.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::headers::value::MessageValue;
use crate::mapping::error::{MappingError, MappingResult};

/// Message-level name of the content type header.
pub const CONTENT_TYPE: &str = "contentType";

/// Ordered message headers with case-insensitive lookup.
///
/// Built once through [`MessageHeaders::builder`] or `FromIterator` and
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageHeaders {
    entries: Vec<(String, MessageValue)>,
}

impl MessageHeaders {
    pub fn builder() -> MessageHeadersBuilder {
        MessageHeadersBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&MessageValue> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The content type, stored either under `contentType` or `Content-Type`.
    pub fn content_type(&self) -> Option<&MessageValue> {
        self.get(CONTENT_TYPE).or_else(|| self.get("Content-Type"))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Build headers from a JSON object such as `{"Accept": ["text/xml"]}`.
    pub fn from_json(value: serde_json::Value) -> MappingResult<Self> {
        let serde_json::Value::Object(object) = value else {
            return Err(MappingError::UnsupportedValue {
                name: "<root>".to_string(),
                kind: "non-object JSON",
            });
        };
        let mut builder = Self::builder();
        for (name, value) in object {
            let value = MessageValue::from_json(value).ok_or_else(|| {
                MappingError::UnsupportedValue {
                    name: name.clone(),
                    kind: "JSON null, object or fractional",
                }
            })?;
            builder.insert(name, value);
        }
        Ok(builder.build())
    }
}

impl Serialize for MessageHeaders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for MessageHeaders
where
    K: Into<String>,
    V: Into<MessageValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut builder = Self::builder();
        for (name, value) in iter {
            builder.insert(name, value);
        }
        builder.build()
    }
}

/// Accumulates entries for a [`MessageHeaders`].
#[derive(Debug, Default)]
pub struct MessageHeadersBuilder {
    entries: Vec<(String, MessageValue)>,
}

impl MessageHeadersBuilder {
    /// Add or replace a header. A replaced header keeps its first spelling.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<MessageValue>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<MessageValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn build(self) -> MessageHeaders {
        MessageHeaders {
            entries: self.entries,
        }
    }
}
