//! Standard HTTP header rule table.
//!
//! # Responsibilities
//! - List every header with dedicated semantics
//! - Record which side (request/response) each one belongs to
//! - Record the value shape the mapper coerces it to
//! - Record per-field policy: outbound suppression, malformed-value handling
//!
//! # Design Decisions
//! - One static table instead of per-field methods; lookups are a linear
//!   scan, which is fine for ~50 entries
//! - Malformed handling is per field: only `Expires` is tolerated, since
//!   servers commonly send `Expires: -1` or `0`

/// Shape a standard header value is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Comma separated media types (`Accept`).
    MediaTypeList,
    /// Comma separated charsets (`Accept-Charset`).
    CharsetList,
    /// A single media type (`Content-Type`).
    MediaType,
    /// A non-negative integer (`Content-Length`).
    Length,
    /// An HTTP-date, epoch millis on the message side.
    Date,
    /// Comma separated entity tags, split outside quotes (`If-None-Match`).
    EntityTagList,
    /// Comma separated HTTP methods (`Allow`).
    MethodList,
    /// Opaque text.
    Text,
}

/// What to do with a value that does not parse inbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    Fail,
    Drop,
}

/// A standard header and its mapping rule.
#[derive(Debug)]
pub struct StandardHeader {
    /// Canonical spelling, used when emitting.
    pub name: &'static str,
    pub kind: FieldKind,
    pub request: bool,
    pub response: bool,
    /// `false` for connection-level headers the transport controls.
    pub outbound: bool,
    pub malformed: Malformed,
}

const fn rule(name: &'static str, kind: FieldKind, request: bool, response: bool) -> StandardHeader {
    StandardHeader {
        name,
        kind,
        request,
        response,
        outbound: true,
        malformed: Malformed::Fail,
    }
}

const fn request(name: &'static str, kind: FieldKind) -> StandardHeader {
    rule(name, kind, true, false)
}

const fn response(name: &'static str, kind: FieldKind) -> StandardHeader {
    rule(name, kind, false, true)
}

const fn both(name: &'static str, kind: FieldKind) -> StandardHeader {
    rule(name, kind, true, true)
}

use FieldKind::*;

pub static STANDARD_HEADERS: &[StandardHeader] = &[
    // request
    request("Accept", MediaTypeList),
    request("Accept-Charset", CharsetList),
    request("Accept-Encoding", Text),
    request("Accept-Language", Text),
    request("Authorization", Text),
    request("Cookie", Text),
    request("Expect", Text),
    request("From", Text),
    request("Host", Text),
    request("If-Match", Text),
    request("If-Modified-Since", Date),
    request("If-None-Match", EntityTagList),
    request("If-Range", Text),
    request("If-Unmodified-Since", Date),
    request("Max-Forwards", Text),
    request("Proxy-Authorization", Text),
    request("Range", Text),
    request("Referer", Text),
    request("User-Agent", Text),
    // request and response
    both("Accept-Ranges", Text),
    both("Cache-Control", Text),
    both("Connection", Text),
    both("Content-Length", Length),
    both("Content-Type", MediaType),
    both("Date", Date),
    both("Pragma", Text),
    both("TE", Text),
    both("Upgrade", Text),
    both("Via", Text),
    both("Warning", Text),
    // response
    response("Age", Text),
    response("Allow", MethodList),
    response("Content-Disposition", Text),
    response("Content-Encoding", Text),
    response("Content-Language", Text),
    response("Content-Location", Text),
    response("Content-MD5", Text),
    response("Content-Range", Text),
    response("ETag", Text),
    StandardHeader {
        malformed: Malformed::Drop,
        ..response("Expires", Date)
    },
    response("Last-Modified", Date),
    response("Location", Text),
    response("Proxy-Authenticate", Text),
    response("Retry-After", Text),
    response("Server", Text),
    response("Set-Cookie", Text),
    response("Trailer", Text),
    StandardHeader {
        outbound: false,
        ..response("Transfer-Encoding", Text)
    },
    response("Vary", Text),
    response("WWW-Authenticate", Text),
];

/// Find the rule for a header name, ignoring case.
pub fn lookup(name: &str) -> Option<&'static StandardHeader> {
    STANDARD_HEADERS
        .iter()
        .find(|header| header.name.eq_ignore_ascii_case(name))
}

pub fn is_standard(name: &str) -> bool {
    lookup(name).is_some()
}

pub fn is_request_header(name: &str) -> bool {
    lookup(name).is_some_and(|header| header.request)
}

pub fn is_response_header(name: &str) -> bool {
    lookup(name).is_some_and(|header| header.response)
}
