use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched by `encodeURIComponent`; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// User-entered search text, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Normalize raw input text into a query.
    /// - Leading and trailing whitespace is removed, using the browser's
    ///   notion of whitespace: U+FEFF counts, U+0085 does not.
    /// - Interior whitespace is kept as typed.
    /// - Returns `None` when nothing is left, which callers treat as "clear results".
    pub fn parse(input: &str) -> Option<Query> {
        let trimmed = input.trim_matches(is_form_whitespace);
        if trimmed.is_empty() {
            return None;
        }
        Some(Query(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The query as a URL query component.
    pub fn encoded(&self) -> String {
        encode_component(&self.0)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Percent-encode UTF-8 text the way browsers encode a single URI component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
