//! Parsers for standard header values.
//!
//! Every parser takes the header name so a failure can say which field it
//! came from.

use std::borrow::Cow;

use axum::http::Method;
use mime::Mime;

use crate::headers::charset::Charset;
use crate::headers::{csv, date};
use crate::mapping::error::{MappingError, MappingResult};

/// Parse one media type (`type/subtype` with optional parameters). A bare
/// `*` is read as `*/*`, as older clients send it in `Accept`.
pub fn media_type(name: &str, value: &str) -> MappingResult<Mime> {
    let trimmed = value.trim();
    let (essence, params) = trimmed.split_once(';').unwrap_or((trimmed, ""));
    let normalized = if essence.trim() == "*" {
        if params.is_empty() {
            Cow::Borrowed("*/*")
        } else {
            Cow::Owned(format!("*/*;{params}"))
        }
    } else {
        Cow::Borrowed(trimmed)
    };
    let mime: Mime = normalized
        .parse()
        .map_err(|e: mime::FromStrError| MappingError::invalid(name, value, e.to_string()))?;
    if mime.type_().as_str().is_empty() || mime.subtype().as_str().is_empty() {
        return Err(MappingError::invalid(name, value, "empty type or subtype"));
    }
    Ok(mime)
}

/// Parse a comma separated list of media types.
pub fn media_types(name: &str, value: &str) -> MappingResult<Vec<Mime>> {
    let types = csv::split_quoted(value)
        .into_iter()
        .map(|item| media_type(name, item))
        .collect::<MappingResult<Vec<_>>>()?;
    if types.is_empty() {
        return Err(MappingError::invalid(name, value, "no media types"));
    }
    Ok(types)
}

/// Parse a comma separated list of charsets. Quality parameters
/// (`;q=0.5`) are ignored.
pub fn charsets(name: &str, value: &str) -> MappingResult<Vec<Charset>> {
    let charsets = csv::split_quoted(value)
        .into_iter()
        .map(|item| {
            let charset_name = item.split(';').next().unwrap_or(item);
            charset_name
                .parse::<Charset>()
                .map_err(|e| MappingError::invalid(name, value, e.to_string()))
        })
        .collect::<MappingResult<Vec<_>>>()?;
    if charsets.is_empty() {
        return Err(MappingError::invalid(name, value, "no charsets"));
    }
    Ok(charsets)
}

/// Parse a non-negative content length.
pub fn length(name: &str, value: &str) -> MappingResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| MappingError::invalid(name, value, e.to_string()))
}

/// Parse a date given either as epoch millis or as an HTTP-date.
pub fn epoch_or_http_date(name: &str, value: &str) -> MappingResult<i64> {
    if let Ok(millis) = value.trim().parse::<i64>() {
        return Ok(millis);
    }
    http_date(name, value)
}

/// Parse a strict HTTP-date, as found on the wire.
pub fn http_date(name: &str, value: &str) -> MappingResult<i64> {
    date::parse_http_date(value)
        .ok_or_else(|| MappingError::invalid(name, value, "not an HTTP-date"))
}

/// Split an entity tag list. The values are kept verbatim, quotes included.
pub fn entity_tags(name: &str, value: &str) -> MappingResult<Vec<String>> {
    let tags: Vec<String> = csv::split_quoted(value)
        .into_iter()
        .map(str::to_string)
        .collect();
    if tags.is_empty() {
        return Err(MappingError::invalid(name, value, "no entity tags"));
    }
    Ok(tags)
}

/// Parse a comma separated list of HTTP method names.
pub fn methods(name: &str, value: &str) -> MappingResult<Vec<String>> {
    csv::split_quoted(value)
        .into_iter()
        .map(|item| {
            Method::from_bytes(item.as_bytes())
                .map(|method| method.as_str().to_string())
                .map_err(|e| MappingError::invalid(name, value, e.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type() {
        let mime = media_type("Content-Type", " text/html ").unwrap();
        assert_eq!(mime, mime::TEXT_HTML);
        assert!(media_type("Content-Type", "foo").is_err());
        assert!(media_type("Content-Type", "").is_err());
    }

    #[test]
    fn test_bare_star_is_any_media_type() {
        assert_eq!(media_type("Accept", "*").unwrap(), mime::STAR_STAR);
        let weighted = media_type("Accept", "*; q=.2").unwrap();
        assert_eq!(weighted.essence_str(), "*/*");
        assert_eq!(weighted.get_param("q").map(|q| q.as_str()), Some(".2"));
        assert!(media_type("Accept", "*/").is_err());
    }

    #[test]
    fn test_media_types() {
        let types = media_types("Accept", "bar/foo, text/xml").unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].as_ref(), "bar/foo");
        assert_eq!(types[1], mime::TEXT_XML);
        assert!(media_types("Accept", "bar").is_err());
        assert!(media_types("Accept", " , ").is_err());
    }

    #[test]
    fn test_charsets() {
        let charsets = charsets("Accept-Charset", "UTF-8, iso-8859-1;q=0.5").unwrap();
        assert_eq!(charsets, vec![Charset::UTF_8, Charset::ISO_8859_1]);
        let with_wildcard = super::charsets("Accept-Charset", "utf-8, *;q=0.1").unwrap();
        assert_eq!(with_wildcard, vec![Charset::UTF_8, Charset::ANY]);
        let err = super::charsets("Accept-Charset", "foo").unwrap_err();
        assert!(matches!(err, MappingError::InvalidHeaderFormat { .. }));
    }

    #[test]
    fn test_length() {
        assert_eq!(length("Content-Length", "1").unwrap(), 1);
        assert!(length("Content-Length", "foo").is_err());
        assert!(length("Content-Length", "-3").is_err());
    }

    #[test]
    fn test_dates() {
        assert_eq!(epoch_or_http_date("Date", "12345678").unwrap(), 12_345_678);
        assert_eq!(
            epoch_or_http_date("Date", "Thu, 01 Jan 1970 03:25:45 GMT").unwrap(),
            12_345_000
        );
        assert!(http_date("Expires", "-1").is_err());
    }

    #[test]
    fn test_entity_tags_and_methods() {
        assert_eq!(
            entity_tags("If-None-Match", "\"123,4567\", \"123\"").unwrap(),
            vec!["\"123,4567\"", "\"123\""]
        );
        assert_eq!(methods("Allow", "GET, POST").unwrap(), vec!["GET", "POST"]);
        assert!(methods("Allow", "GE T").is_err());
    }
}
