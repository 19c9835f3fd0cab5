//! Character set names for `Accept-Charset`.
//!
//! # Design Decisions
//! - Closed registry: a name that is neither a canonical name nor an alias
//!   below is rejected rather than passed through
//! - The `*` wildcard is an entry of its own so `*;q=0.1` survives a round trip
//! - Lookup ignores ASCII case; display always uses the canonical spelling

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A known character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Charset(&'static str);

/// Error returned when a charset name is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported charset: {0}")]
pub struct UnsupportedCharset(pub String);

// (canonical name, aliases)
static REGISTRY: &[(&str, &[&str])] = &[
    // `Accept-Charset` wildcard
    ("*", &[]),
    ("UTF-8", &["utf8", "unicode-1-1-utf-8"]),
    ("US-ASCII", &["ascii", "us", "iso646-us", "ansi_x3.4-1968", "cp367", "csascii"]),
    ("ISO-8859-1", &["latin1", "l1", "iso8859_1", "iso8859-1", "iso_8859-1", "iso-ir-100", "cp819", "ibm819"]),
    ("UTF-16", &["utf16", "utf_16"]),
    ("UTF-16BE", &["utf_16be", "x-utf-16be"]),
    ("UTF-16LE", &["utf_16le", "x-utf-16le"]),
    ("UTF-32", &["utf32", "utf_32"]),
    ("UTF-32BE", &["utf_32be"]),
    ("UTF-32LE", &["utf_32le"]),
    ("ISO-8859-2", &["latin2", "l2", "iso8859_2", "iso_8859-2"]),
    ("ISO-8859-3", &["latin3", "l3", "iso8859_3", "iso_8859-3"]),
    ("ISO-8859-4", &["latin4", "l4", "iso8859_4", "iso_8859-4"]),
    ("ISO-8859-5", &["cyrillic", "iso8859_5", "iso_8859-5"]),
    ("ISO-8859-6", &["arabic", "iso8859_6", "iso_8859-6", "asmo-708", "ecma-114"]),
    ("ISO-8859-7", &["greek", "iso8859_7", "iso_8859-7"]),
    ("ISO-8859-8", &["hebrew", "iso8859_8", "iso_8859-8"]),
    ("ISO-8859-9", &["latin5", "l5", "iso8859_9", "iso_8859-9"]),
    ("ISO-8859-10", &["latin6", "l6", "iso8859_10", "iso_8859-10"]),
    ("ISO-8859-13", &["iso8859_13", "latin7"]),
    ("ISO-8859-14", &["latin8", "l8", "iso8859_14", "iso_8859-14"]),
    ("ISO-8859-15", &["latin9", "latin-9", "iso8859_15", "iso_8859-15"]),
    ("ISO-8859-16", &["latin10", "l10", "iso8859_16", "iso_8859-16"]),
    ("KOI8-R", &["koi8_r", "koi8", "cskoi8r"]),
    ("KOI8-U", &["koi8_u"]),
    ("windows-1250", &["cp1250", "cp5346"]),
    ("windows-1251", &["cp1251", "cp5347", "ansi-1251"]),
    ("windows-1252", &["cp1252", "cp5348"]),
    ("windows-1253", &["cp1253", "cp5349"]),
    ("windows-1254", &["cp1254", "cp5350"]),
    ("windows-1255", &["cp1255"]),
    ("windows-1256", &["cp1256"]),
    ("windows-1257", &["cp1257", "cp5353"]),
    ("windows-1258", &["cp1258"]),
    ("windows-874", &["cp874", "x-windows-874", "ms874"]),
    ("TIS-620", &["tis620", "tis620.2533"]),
    ("IBM437", &["cp437", "ibm-437", "437", "cspc8codepage437"]),
    ("IBM850", &["cp850", "ibm-850", "850", "cspc850multilingual"]),
    ("IBM852", &["cp852", "ibm-852", "852", "cspcp852"]),
    ("IBM855", &["cp855", "ibm-855", "855", "csibm855"]),
    ("IBM857", &["cp857", "ibm-857", "857", "csibm857"]),
    ("IBM862", &["cp862", "ibm-862", "862", "cspc862latinhebrew"]),
    ("IBM866", &["cp866", "ibm-866", "866", "csibm866"]),
    ("x-MacRoman", &["macintosh", "mac", "csmacintosh"]),
    ("x-MacCyrillic", &["x-mac-cyrillic"]),
    ("UTF-7", &["utf7", "unicode-1-1-utf-7"]),
    ("CESU-8", &["cesu8", "csCESU-8"]),
    ("Shift_JIS", &["sjis", "shift-jis", "ms_kanji", "x-sjis", "csshiftjis"]),
    ("EUC-JP", &["eucjp", "euc_jp", "x-euc-jp", "eucjis"]),
    ("ISO-2022-JP", &["iso2022jp", "jis", "csjisencoding"]),
    ("EUC-KR", &["euckr", "euc_kr", "ksc5601", "ks_c_5601-1987", "5601"]),
    ("GBK", &["cp936", "windows-936"]),
    ("GB2312", &["gb2312", "euc-cn", "euccn", "x-euc-cn"]),
    ("GB18030", &["gb18030-2000"]),
    ("Big5", &["csbig5"]),
    ("Big5-HKSCS", &["big5hk", "big5-hkscs", "big5hkscs"]),
    ("ISO-2022-KR", &["iso2022kr", "csiso2022kr"]),
    ("ISO-2022-CN", &["iso2022cn", "csiso2022cn"]),
    ("x-windows-949", &["ms949", "windows-949", "windows949"]),
    ("x-windows-950", &["ms950", "windows-950"]),
];

impl Charset {
    pub const UTF_8: Charset = Charset("UTF-8");
    pub const US_ASCII: Charset = Charset("US-ASCII");
    pub const ISO_8859_1: Charset = Charset("ISO-8859-1");
    /// `*` in `Accept-Charset`: any charset not listed explicitly.
    pub const ANY: Charset = Charset("*");

    /// Look up a charset by canonical name or alias.
    pub fn for_name(name: &str) -> Option<Charset> {
        let name = name.trim();
        REGISTRY
            .iter()
            .find(|(canonical, aliases)| {
                canonical.eq_ignore_ascii_case(name)
                    || aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
            })
            .map(|(canonical, _)| Charset(canonical))
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Charset::ANY
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl FromStr for Charset {
    type Err = UnsupportedCharset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::for_name(s).ok_or_else(|| UnsupportedCharset(s.trim().to_string()))
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
