//! Values carried by message headers.

use std::fmt;
use std::time::SystemTime;

use mime::Mime;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::headers::charset::Charset;
use crate::headers::date;

/// A message header value.
///
/// `List` stands in for every multi-valued input shape (arrays and
/// collections alike); the mapper flattens nested lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageValue {
    Str(String),
    Number(i64),
    Date(SystemTime),
    MediaType(Mime),
    Charset(Charset),
    List(Vec<MessageValue>),
}

impl MessageValue {
    /// Short variant name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            MessageValue::Str(_) => "string",
            MessageValue::Number(_) => "number",
            MessageValue::Date(_) => "date",
            MessageValue::MediaType(_) => "media type",
            MessageValue::Charset(_) => "charset",
            MessageValue::List(_) => "list",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MessageValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            MessageValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_media_type(&self) -> Option<&Mime> {
        match self {
            MessageValue::MediaType(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[MessageValue]> {
        match self {
            MessageValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert a JSON value. Strings, integers, booleans and arrays of those
    /// are accepted; `null`, objects and non-integral numbers are not.
    pub fn from_json(value: serde_json::Value) -> Option<MessageValue> {
        match value {
            serde_json::Value::String(s) => Some(MessageValue::Str(s)),
            serde_json::Value::Number(n) => n.as_i64().map(MessageValue::Number),
            serde_json::Value::Bool(b) => Some(MessageValue::Str(b.to_string())),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(MessageValue::from_json)
                .collect::<Option<Vec<_>>>()
                .map(MessageValue::List),
            serde_json::Value::Null | serde_json::Value::Object(_) => None,
        }
    }
}

impl fmt::Display for MessageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageValue::Str(s) => f.write_str(s),
            MessageValue::Number(n) => write!(f, "{n}"),
            MessageValue::Date(t) => {
                let millis = date::to_epoch_millis(*t);
                match date::format_http_date(millis) {
                    Some(s) => f.write_str(&s),
                    None => write!(f, "{millis}"),
                }
            }
            MessageValue::MediaType(m) => f.write_str(m.as_ref()),
            MessageValue::Charset(c) => f.write_str(c.name()),
            MessageValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for MessageValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MessageValue::Str(s) => serializer.serialize_str(s),
            MessageValue::Number(n) => serializer.serialize_i64(*n),
            MessageValue::Date(t) => serializer.serialize_i64(date::to_epoch_millis(*t)),
            MessageValue::MediaType(m) => serializer.serialize_str(m.as_ref()),
            MessageValue::Charset(c) => serializer.serialize_str(c.name()),
            MessageValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl From<&str> for MessageValue {
    fn from(value: &str) -> Self {
        MessageValue::Str(value.to_string())
    }
}

impl From<String> for MessageValue {
    fn from(value: String) -> Self {
        MessageValue::Str(value)
    }
}

impl From<i64> for MessageValue {
    fn from(value: i64) -> Self {
        MessageValue::Number(value)
    }
}

impl From<i32> for MessageValue {
    fn from(value: i32) -> Self {
        MessageValue::Number(value.into())
    }
}

impl From<u32> for MessageValue {
    fn from(value: u32) -> Self {
        MessageValue::Number(value.into())
    }
}

impl From<SystemTime> for MessageValue {
    fn from(value: SystemTime) -> Self {
        MessageValue::Date(value)
    }
}

impl From<Mime> for MessageValue {
    fn from(value: Mime) -> Self {
        MessageValue::MediaType(value)
    }
}

impl From<Charset> for MessageValue {
    fn from(value: Charset) -> Self {
        MessageValue::Charset(value)
    }
}

impl<T: Into<MessageValue>> From<Vec<T>> for MessageValue {
    fn from(values: Vec<T>) -> Self {
        MessageValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<MessageValue>, const N: usize> From<[T; N]> for MessageValue {
    fn from(values: [T; N]) -> Self {
        MessageValue::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_conversions() {
        assert_eq!(MessageValue::from("a"), MessageValue::Str("a".into()));
        assert_eq!(MessageValue::from(7), MessageValue::Number(7));
        assert_eq!(
            MessageValue::from(["a", "b"]),
            MessageValue::List(vec!["a".into(), "b".into()])
        );
        assert_eq!(
            MessageValue::from(mime::TEXT_XML).as_media_type(),
            Some(&mime::TEXT_XML)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MessageValue::from(["a", "b"]).to_string(), "a, b");
        assert_eq!(MessageValue::from(Charset::UTF_8).to_string(), "UTF-8");
        let date = UNIX_EPOCH + Duration::from_millis(12_345_678);
        assert_eq!(
            MessageValue::from(date).to_string(),
            "Thu, 01 Jan 1970 03:25:45 GMT"
        );
    }

    #[test]
    fn test_from_json() {
        let value = serde_json::json!(["text/xml", 3, true]);
        assert_eq!(
            MessageValue::from_json(value),
            Some(MessageValue::List(vec![
                "text/xml".into(),
                MessageValue::Number(3),
                "true".into(),
            ]))
        );
        assert_eq!(MessageValue::from_json(serde_json::json!(null)), None);
        assert_eq!(MessageValue::from_json(serde_json::json!({"a": 1})), None);
        assert_eq!(MessageValue::from_json(serde_json::json!(1.5)), None);
    }

    #[test]
    fn test_serialize() {
        let value = MessageValue::List(vec![
            MessageValue::MediaType(mime::TEXT_HTML),
            MessageValue::Number(1),
        ]);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            "[\"text/html\",1]"
        );
    }
}
