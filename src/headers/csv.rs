//! Comma separated header values.

/// Split a header value on commas that are not inside double quotes.
///
/// Items are trimmed and empty items are skipped, so `"a, , b"` yields
/// `["a", "b"]` and an all-blank value yields nothing.
pub fn split_quoted(value: &str) -> Vec<&str> {
    let mut in_quotes = false;
    value
        .split(move |c| {
            if in_quotes {
                if c == '"' {
                    in_quotes = false;
                }
                false
            } else if c == ',' {
                true
            } else {
                if c == '"' {
                    in_quotes = true;
                }
                false
            }
        })
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Join values the way list-typed headers are written on the wire.
pub fn join<I, T>(values: I) -> String
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    let mut out = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&value.to_string());
    }
    out
}
