#![forbid(unsafe_code)]

//! XML/HTML entity escaping and literal replacement.
//!
//! The escape direction maps `< > " ' &` to their entity forms; the
//! unescape direction reverses it, decoding `&amp;` last so entities
//! that themselves contain `&` are not decoded twice.
//!
//! # Performance
//!
//! Inputs that need no work are returned borrowed (`Cow::Borrowed`)
//! after a byte scan, so the common clean-text case never allocates.
//!
//! # Example
//! ```
//! use braid_text::escape::{escape_xml, unescape_xml};
//!
//! let escaped = escape_xml("a<b>c&d");
//! assert_eq!(escaped, "a&lt;b&gt;c&amp;d");
//! assert_eq!(unescape_xml(&escaped), "a<b>c&d");
//! ```

use std::borrow::Cow;

use memchr::memchr;

/// Entity form of an XML-significant character, if it has one.
const fn entity_for(ch: char) -> Option<&'static str> {
    match ch {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        '&' => Some("&amp;"),
        _ => None,
    }
}

/// Decode table, `&amp;` deliberately last.
const ENTITIES: [(&str, &str); 5] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&amp;", "&"),
];

#[inline]
fn needs_xml_escape(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .any(|b| matches!(b, b'<' | b'>' | b'"' | b'\'' | b'&'))
}

/// Replace every non-overlapping occurrence of `from` with `to`,
/// scanning left to right. Literal matching, not a pattern.
///
/// Returns the input borrowed when `from` is empty or absent from the
/// input.
///
/// # Example
/// ```
/// use braid_text::escape::replace;
///
/// assert_eq!(replace("aabbcc", "ab", "dd"), "addbcc");
/// assert_eq!(replace("aabbcc", "xy", "dd"), "aabbcc");
/// ```
pub fn replace<'a>(input: &'a str, from: &str, to: &str) -> Cow<'a, str> {
    if from.is_empty() {
        return Cow::Borrowed(input);
    }
    // Fast path: first byte of the needle never occurs.
    if memchr(from.as_bytes()[0], input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    let Some(first) = input.find(from) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len());
    out.push_str(&input[..first]);
    out.push_str(to);
    let mut rest = &input[first + from.len()..];
    while let Some(pos) = rest.find(from) {
        out.push_str(&rest[..pos]);
        out.push_str(to);
        rest = &rest[pos + from.len()..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Escape XML-significant characters.
///
/// Maps `< > " ' &` to `&lt; &gt; &quot; &apos; &amp;`. Input without
/// any of those characters (including the empty string) is returned
/// borrowed.
pub fn escape_xml(input: &str) -> Cow<'_, str> {
    if !needs_xml_escape(input.as_bytes()) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match entity_for(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Decode the five XML entities produced by [`escape_xml`].
///
/// `&amp;` is decoded last: `"&amp;lt;"` becomes `"&lt;"`, not `"<"`.
/// Input without a `&` is returned borrowed.
pub fn unescape_xml(input: &str) -> Cow<'_, str> {
    if memchr(b'&', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    let mut out = input.to_owned();
    for (entity, ch) in ENTITIES {
        if out.contains(entity) {
            let next = replace(&out, entity, ch).into_owned();
            out = next;
        }
    }
    Cow::Owned(out)
}

/// Escape for HTML display: the [`escape_xml`] mapping plus
/// line-feed to `<br>`. Carriage-return is dropped, not translated, so
/// both `\n` and `\r\n` line endings produce a single `<br>`.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    if !needs_xml_escape(bytes) && memchr(b'\n', bytes).is_none() && memchr(b'\r', bytes).is_none()
    {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '\r' => {}
            '\n' => out.push_str("<br>"),
            _ => match entity_for(ch) {
                Some(entity) => out.push_str(entity),
                None => out.push(ch),
            },
        }
    }
    Cow::Owned(out)
}
