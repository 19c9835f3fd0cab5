//! Bidirectional header mapper.
//!
//! # Responsibilities
//! - Outbound: coerce message header values into wire headers
//! - Inbound: parse wire headers into typed message header values
//! - Gate every header on the direction's name patterns and exclusions
//! - Add (outbound) and strip (inbound) the user-defined prefix on custom headers
//!
//! # Design Decisions
//! - Immutable after construction, so one mapper is shared across threads via `Arc`
//! - Standard headers always go through the rule table, custom headers never do
//! - `Transfer-Encoding` is never written outbound; the transport owns it
//! - Malformed standard values fail the whole mapping, except where the
//!   rule table says `Malformed::Drop`

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::config::schema::{MapperConfig, Preset};
use crate::headers::message::{self, MessageHeaders};
use crate::headers::protocol::ProtocolHeaders;
use crate::headers::value::MessageValue;
use crate::headers::{csv, date, parse, starts_with_ignore_case};
use crate::mapping::error::{MappingError, MappingResult};
use crate::mapping::pattern::{
    HeaderNamePattern, NameMatcher, PatternSet, HTTP_REQUEST_HEADERS, HTTP_RESPONSE_HEADERS,
};
use crate::mapping::standard::{self, FieldKind, Malformed, StandardHeader};

/// Message headers that describe the message itself and never leave it.
pub const TRANSIENT_HEADERS: &[&str] = &["id", "timestamp"];

/// Patterns and exclusions for one direction.
#[derive(Debug, Clone, Default)]
struct Direction {
    patterns: PatternSet,
    excluded: Vec<String>,
}

impl Direction {
    fn allows(&self, name: &str) -> bool {
        !self.excluded.iter().any(|e| e.eq_ignore_ascii_case(name)) && self.patterns.matches(name)
    }
}

/// Converts between [`MessageHeaders`] and [`ProtocolHeaders`].
///
/// The default mapper has no patterns and maps nothing in either direction;
/// use [`HeaderMapper::outbound`], [`HeaderMapper::inbound`] or the builder.
#[derive(Debug, Clone, Default)]
pub struct HeaderMapper {
    inbound: Direction,
    outbound: Direction,
    prefix: String,
}

impl HeaderMapper {
    pub fn builder() -> HeaderMapperBuilder {
        HeaderMapperBuilder::default()
    }

    /// Mapper for a component that sends HTTP requests: standard request
    /// headers go out, standard response headers come back in.
    pub fn outbound() -> Self {
        Self::builder()
            .outbound_header_names([HTTP_REQUEST_HEADERS])
            .inbound_header_names([HTTP_RESPONSE_HEADERS])
            .build()
    }

    /// Mapper for a component that receives HTTP requests: standard request
    /// headers come in, standard response headers go back out.
    pub fn inbound() -> Self {
        Self::builder()
            .inbound_header_names([HTTP_REQUEST_HEADERS])
            .outbound_header_names([HTTP_RESPONSE_HEADERS])
            .build()
    }

    /// Build a mapper from configuration. Explicit `header_names` override
    /// the preset for that direction.
    pub fn from_config(config: &MapperConfig) -> Self {
        let (inbound_preset, outbound_preset): (&[&str], &[&str]) = match config.preset {
            Preset::Inbound => (&[HTTP_REQUEST_HEADERS], &[HTTP_RESPONSE_HEADERS]),
            Preset::Outbound => (&[HTTP_RESPONSE_HEADERS], &[HTTP_REQUEST_HEADERS]),
            Preset::None => (&[], &[]),
        };
        let names = |configured: &Option<Vec<String>>, preset: &[&str]| -> Vec<String> {
            configured
                .clone()
                .unwrap_or_else(|| preset.iter().map(|s| s.to_string()).collect())
        };

        Self::builder()
            .inbound_header_names(names(&config.inbound.header_names, inbound_preset))
            .outbound_header_names(names(&config.outbound.header_names, outbound_preset))
            .excluded_inbound_standard_headers(&config.inbound.excluded_standard_headers)
            .excluded_outbound_standard_headers(&config.outbound.excluded_standard_headers)
            .user_defined_header_prefix(&config.user_defined_header_prefix)
            .build()
    }

    pub fn user_defined_header_prefix(&self) -> &str {
        &self.prefix
    }

    /// Map message headers onto protocol headers (outbound).
    pub fn from_headers(
        &self,
        source: &MessageHeaders,
        target: &mut ProtocolHeaders,
    ) -> MappingResult<()> {
        for (name, value) in source.iter() {
            let name = if name == message::CONTENT_TYPE {
                "Content-Type"
            } else {
                name
            };

            if TRANSIENT_HEADERS.iter().any(|t| t.eq_ignore_ascii_case(name)) {
                continue;
            }
            if !self.outbound.allows(name) {
                trace!(header = name, "Header not mapped outbound");
                continue;
            }

            match standard::lookup(name) {
                Some(rule) if !rule.outbound => {
                    debug!(header = rule.name, "Dropping connection-level header");
                }
                Some(rule) => write_standard(rule, value, target)?,
                None => write_custom(&self.prefixed(name), value, target),
            }
        }
        Ok(())
    }

    /// Map protocol headers into message headers (inbound).
    pub fn to_headers(&self, source: &ProtocolHeaders) -> MappingResult<MessageHeaders> {
        let mut builder = MessageHeaders::builder();
        for (name, values) in source.iter() {
            if !self.inbound.allows(name) {
                trace!(header = name, "Header not mapped inbound");
                continue;
            }

            match standard::lookup(name) {
                Some(rule) => match read_standard(rule, values) {
                    Ok((key, value)) => builder.insert(key, value),
                    Err(e) if rule.malformed == Malformed::Drop => {
                        debug!(header = rule.name, error = %e, "Dropping malformed header");
                    }
                    Err(e) => return Err(e),
                },
                None => builder.insert(self.unprefixed(name), raw_value(values)),
            }
        }
        Ok(builder.build())
    }

    fn prefixed<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.prefix.is_empty() || starts_with_ignore_case(name, &self.prefix) {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("{}{}", self.prefix, name))
        }
    }

    fn unprefixed<'a>(&self, name: &'a str) -> &'a str {
        if !self.prefix.is_empty()
            && name.len() > self.prefix.len()
            && starts_with_ignore_case(name, &self.prefix)
        {
            &name[self.prefix.len()..]
        } else {
            name
        }
    }
}

/// Builder for [`HeaderMapper`].
#[derive(Debug, Default)]
pub struct HeaderMapperBuilder {
    mapper: HeaderMapper,
}

impl HeaderMapperBuilder {
    /// Patterns a header name must match to be mapped inbound.
    pub fn inbound_header_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.mapper.inbound.patterns =
            PatternSet::new(names.into_iter().map(|s| HeaderNamePattern::new(s.as_ref())));
        self
    }

    /// Patterns a header name must match to be mapped outbound.
    pub fn outbound_header_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.mapper.outbound.patterns =
            PatternSet::new(names.into_iter().map(|s| HeaderNamePattern::new(s.as_ref())));
        self
    }

    /// Standard headers never mapped inbound, even when a pattern matches.
    pub fn excluded_inbound_standard_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.mapper.inbound.excluded = names.into_iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Standard headers never mapped outbound, even when a pattern matches.
    pub fn excluded_outbound_standard_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.mapper.outbound.excluded = names.into_iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Prefix added to custom headers outbound and stripped inbound.
    pub fn user_defined_header_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.mapper.prefix = prefix.into();
        self
    }

    pub fn build(self) -> HeaderMapper {
        self.mapper
    }
}

fn write_standard(
    rule: &StandardHeader,
    value: &MessageValue,
    target: &mut ProtocolHeaders,
) -> MappingResult<()> {
    let name = rule.name;
    let wire = match rule.kind {
        FieldKind::MediaTypeList => {
            csv::join(collect_list(name, value, &parse::media_types, &|v: &MessageValue| {
                v.as_media_type().cloned()
            })?)
        }
        FieldKind::CharsetList => {
            csv::join(collect_list(name, value, &parse::charsets, &|v: &MessageValue| {
                match v {
                    MessageValue::Charset(c) => Some(*c),
                    _ => None,
                }
            })?)
        }
        FieldKind::EntityTagList => {
            let tags = collect_list(name, value, &parse::entity_tags, &|_: &MessageValue| None)?;
            csv::join(tags)
        }
        FieldKind::MethodList => {
            let methods = collect_list(name, value, &parse::methods, &|_: &MessageValue| None)?;
            csv::join(methods)
        }
        FieldKind::MediaType => match value {
            MessageValue::Str(s) => parse::media_type(name, s)?.to_string(),
            MessageValue::MediaType(m) => m.to_string(),
            other => return Err(MappingError::unsupported(name, other)),
        },
        FieldKind::Length => match value {
            MessageValue::Number(n) => u64::try_from(*n)
                .map_err(|_| MappingError::invalid(name, &n.to_string(), "negative length"))?
                .to_string(),
            MessageValue::Str(s) => parse::length(name, s)?.to_string(),
            other => return Err(MappingError::unsupported(name, other)),
        },
        FieldKind::Date => {
            let millis = match value {
                MessageValue::Number(n) => *n,
                MessageValue::Str(s) => parse::epoch_or_http_date(name, s)?,
                MessageValue::Date(t) => date::to_epoch_millis(*t),
                other => return Err(MappingError::unsupported(name, other)),
            };
            date::format_http_date(millis).ok_or_else(|| {
                MappingError::invalid(name, &millis.to_string(), "outside the HTTP-date range")
            })?
        }
        FieldKind::Text => match value {
            MessageValue::List(items) if items.is_empty() => {
                trace!(header = name, "Skipping empty list");
                return Ok(());
            }
            other => other.to_string(),
        },
    };
    target.set(name, wire);
    Ok(())
}

/// Flatten a single value, a delimited string, or a (nested) list into items.
fn collect_list<T>(
    name: &str,
    value: &MessageValue,
    parse_str: &dyn Fn(&str, &str) -> MappingResult<Vec<T>>,
    typed: &dyn Fn(&MessageValue) -> Option<T>,
) -> MappingResult<Vec<T>> {
    fn push_items<T>(
        name: &str,
        value: &MessageValue,
        parse_str: &dyn Fn(&str, &str) -> MappingResult<Vec<T>>,
        typed: &dyn Fn(&MessageValue) -> Option<T>,
        out: &mut Vec<T>,
    ) -> MappingResult<()> {
        match value {
            MessageValue::List(items) => {
                for item in items {
                    push_items(name, item, parse_str, typed, out)?;
                }
            }
            MessageValue::Str(s) => out.extend(parse_str(name, s)?),
            other => out.push(typed(other).ok_or_else(|| MappingError::unsupported(name, other))?),
        }
        Ok(())
    }

    let mut out = Vec::new();
    push_items(name, value, parse_str, typed, &mut out)?;
    if out.is_empty() {
        return Err(MappingError::invalid(name, &value.to_string(), "empty list"));
    }
    Ok(out)
}

fn write_custom(name: &str, value: &MessageValue, target: &mut ProtocolHeaders) {
    match value {
        MessageValue::List(items) if items.is_empty() => {}
        MessageValue::List(items) => {
            target.set_all(name, items.iter().map(ToString::to_string).collect());
        }
        other => target.set(name, other.to_string()),
    }
}

fn read_standard(
    rule: &StandardHeader,
    values: &[String],
) -> MappingResult<(&'static str, MessageValue)> {
    let name = rule.name;
    let joined = values.join(", ");
    let first = values.first().map(String::as_str).unwrap_or("");

    let value = match rule.kind {
        FieldKind::MediaTypeList => MessageValue::List(
            parse::media_types(name, &joined)?
                .into_iter()
                .map(MessageValue::MediaType)
                .collect(),
        ),
        FieldKind::CharsetList => MessageValue::List(
            parse::charsets(name, &joined)?
                .into_iter()
                .map(MessageValue::Charset)
                .collect(),
        ),
        FieldKind::MediaType => {
            return Ok((
                message::CONTENT_TYPE,
                MessageValue::MediaType(parse::media_type(name, first)?),
            ))
        }
        FieldKind::Length => {
            let length = parse::length(name, first)?;
            let length = i64::try_from(length)
                .map_err(|_| MappingError::invalid(name, first, "length out of range"))?;
            MessageValue::Number(length)
        }
        FieldKind::Date => MessageValue::Number(parse::http_date(name, first)?),
        FieldKind::EntityTagList => str_list(parse::entity_tags(name, &joined)?),
        FieldKind::MethodList => str_list(parse::methods(name, &joined)?),
        FieldKind::Text => raw_value(values),
    };
    Ok((name, value))
}

fn str_list(items: Vec<String>) -> MessageValue {
    MessageValue::List(items.into_iter().map(MessageValue::Str).collect())
}

fn raw_value(values: &[String]) -> MessageValue {
    match values {
        [single] => MessageValue::Str(single.clone()),
        many => str_list(many.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::Charset;

    fn outbound(headers: MessageHeaders) -> MappingResult<ProtocolHeaders> {
        let mut target = ProtocolHeaders::new();
        HeaderMapper::outbound().from_headers(&headers, &mut target)?;
        Ok(target)
    }

    #[test]
    fn test_mapper_is_send_sync() {
        fn check<T: Send + Sync>() {}
        check::<HeaderMapper>();
    }

    #[test]
    fn test_default_mapper_maps_nothing() {
        let headers = MessageHeaders::builder()
            .header("foo", "foo")
            .header("Accept", "text/xml")
            .build();
        let mut target = ProtocolHeaders::new();
        HeaderMapper::default().from_headers(&headers, &mut target).unwrap();
        assert!(target.is_empty());

        let mut wire = ProtocolHeaders::new();
        wire.set("Accept", "text/xml");
        assert!(HeaderMapper::default().to_headers(&wire).unwrap().is_empty());
    }

    #[test]
    fn test_accept_shapes_are_equivalent() {
        let shapes: Vec<MessageValue> = vec![
            "bar/foo, text/xml".into(),
            ["bar/foo", "text/xml"].into(),
            vec![
                "bar/foo".parse::<mime::Mime>().unwrap(),
                mime::TEXT_XML,
            ]
            .into(),
            MessageValue::List(vec!["bar/foo".into(), mime::TEXT_XML.into()]),
        ];
        for shape in shapes {
            let target = outbound(MessageHeaders::builder().header("Accept", shape).build()).unwrap();
            assert_eq!(target.get_first("Accept"), Some("bar/foo, text/xml"));
        }
    }

    #[test]
    fn test_content_type_alias_and_roundtrip() {
        let target = outbound(
            MessageHeaders::builder()
                .header(message::CONTENT_TYPE, mime::TEXT_HTML)
                .build(),
        )
        .unwrap();
        assert_eq!(target.get_first("Content-Type"), Some("text/html"));

        let back = HeaderMapper::inbound().to_headers(&target).unwrap();
        assert_eq!(back.content_type(), Some(&MessageValue::MediaType(mime::TEXT_HTML)));
    }

    #[test]
    fn test_transient_and_transfer_encoding_never_map() {
        let mapper = HeaderMapper::builder().outbound_header_names(["*"]).build();
        let headers = MessageHeaders::builder()
            .header("id", "1")
            .header("timestamp", 2)
            .header("Transfer-Encoding", "chunked")
            .header("foo", "bar")
            .build();
        let mut target = ProtocolHeaders::new();
        mapper.from_headers(&headers, &mut target).unwrap();
        assert_eq!(target.len(), 1);
        assert_eq!(target.get_first("foo"), Some("bar"));
    }

    #[test]
    fn test_unsupported_value_kind() {
        let err = outbound(
            MessageHeaders::builder()
                .header("Content-Length", Charset::UTF_8)
                .build(),
        )
        .unwrap_err();
        assert!(matches!(err, MappingError::UnsupportedValue { kind: "charset", .. }));
    }

    #[test]
    fn test_empty_accept_list_fails() {
        let err = outbound(
            MessageHeaders::builder()
                .header("Accept", MessageValue::List(Vec::new()))
                .build(),
        )
        .unwrap_err();
        assert!(matches!(err, MappingError::InvalidHeaderFormat { .. }));
    }

    #[test]
    fn test_negative_date_fails() {
        let err = outbound(MessageHeaders::builder().header("Date", -5).build()).unwrap_err();
        assert_eq!(err.header_name(), "Date");
    }

    #[test]
    fn test_prefix_added_outbound_and_stripped_inbound() {
        let mapper = HeaderMapper::builder()
            .outbound_header_names(["*"])
            .inbound_header_names(["*"])
            .user_defined_header_prefix("X-")
            .build();
        let headers = MessageHeaders::builder().header("foobar", "abc").build();
        let mut wire = ProtocolHeaders::new();
        mapper.from_headers(&headers, &mut wire).unwrap();
        assert_eq!(wire.get_first("X-foobar"), Some("abc"));

        let back = mapper.to_headers(&wire).unwrap();
        assert_eq!(back.names().collect::<Vec<_>>(), vec!["foobar"]);
    }

    #[test]
    fn test_from_config_presets_and_overrides() {
        let mut config = MapperConfig::default();
        config.preset = Preset::Outbound;
        config.outbound.excluded_standard_headers = vec!["Content-Length".to_string()];
        config.user_defined_header_prefix = "X-".to_string();
        let mapper = HeaderMapper::from_config(&config);
        assert_eq!(mapper.user_defined_header_prefix(), "X-");
        let headers = MessageHeaders::builder()
            .header("Accept", "text/xml")
            .header("Content-Length", 4)
            .build();
        let mut wire = ProtocolHeaders::new();
        mapper.from_headers(&headers, &mut wire).unwrap();
        assert!(wire.contains("Accept"));
        assert!(!wire.contains("Content-Length"));

        config.outbound.header_names = Some(vec!["x-*".to_string()]);
        let mapper = HeaderMapper::from_config(&config);
        let mut wire = ProtocolHeaders::new();
        mapper.from_headers(&headers, &mut wire).unwrap();
        assert!(wire.is_empty());
    }

    #[test]
    fn test_empty_text_list_not_written() {
        let headers = MessageHeaders::builder()
            .header("Cache-Control", MessageValue::List(Vec::new()))
            .header("Pragma", ["no-cache"])
            .build();
        let wire = outbound(headers).unwrap();
        assert!(!wire.contains("Cache-Control"));
        assert_eq!(wire.get_first("Pragma"), Some("no-cache"));
    }

    #[test]
    fn test_inbound_repeated_custom_header_becomes_list() {
        let mapper = HeaderMapper::builder().inbound_header_names(["x-*"]).build();
        let mut wire = ProtocolHeaders::new();
        wire.append("x-trace", "a");
        wire.append("x-trace", "b");
        let headers = mapper.to_headers(&wire).unwrap();
        assert_eq!(headers.get("x-trace"), Some(&MessageValue::from(["a", "b"])));
    }
}
