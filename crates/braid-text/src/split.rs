#![forbid(unsafe_code)]

//! Joining and the split family.
//!
//! Three split flavors are provided, matching three different needs:
//!
//! - [`split_at_char`] - literal single-character delimiter, preserves
//!   empty segments, never compiles a pattern
//! - [`split_list`] - runs of whitespace or comma, drops empty
//!   segments (the "human-written list" form)
//! - [`split_pattern`] - general regex split that omits zero-length
//!   segments
//!
//! # Example
//! ```
//! use braid_text::split::{join, split_at_char, split_list};
//!
//! assert_eq!(join(["str1", "", "str2", ""], "<>"), "str1<>str2");
//! assert_eq!(split_at_char(Some("a,,b"), ',', false), vec!["a", "", "b"]);
//! assert_eq!(split_list(Some("a, b  c")), Some(vec!["a", "b", "c"]));
//! ```

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

/// Runs of whitespace or commas, for [`split_list`].
static LIST_SEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("list separator regex is valid"));

/// Join the non-blank items with `sep` between them.
///
/// Each item is rendered through [`Display`]; items whose rendering is
/// empty after trimming are skipped entirely, so the output never has
/// a dangling or doubled separator. An empty iterator yields `""`.
pub fn join<I>(items: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    let mut first = true;
    for item in items {
        let rendered = item.to_string();
        if rendered.trim().is_empty() {
            continue;
        }
        if !first {
            out.push_str(sep);
        }
        out.push_str(&rendered);
        first = false;
    }
    out
}

/// Split into lines on `\n` or `\r\n`, preserving empty lines.
///
/// Returns `None` when the input is absent. A trailing line terminator
/// does not produce a final empty line.
pub fn split_lines(s: Option<&str>) -> Option<Vec<&str>> {
    s.map(|s| s.lines().collect())
}

/// Split on a single literal character, preserving empty segments.
///
/// The delimiter is never interpreted as a pattern. When `trim` is
/// set, every segment has leading and trailing whitespace removed.
/// Absent input yields an empty `Vec`; input without the delimiter
/// yields a single (optionally trimmed) segment.
///
/// # Example
/// ```
/// use braid_text::split::split_at_char;
///
/// let segments = split_at_char(Some("aa,bbb,, ,cc,"), ',', false);
/// assert_eq!(segments, vec!["aa", "bbb", "", " ", "cc", ""]);
/// ```
pub fn split_at_char(s: Option<&str>, delimiter: char, trim: bool) -> Vec<&str> {
    let Some(s) = s else {
        return Vec::new();
    };
    s.split(delimiter)
        .map(|segment| if trim { segment.trim() } else { segment })
        .collect()
}

/// [`split_at_char`] with trimming on. Shortcut for the common case.
pub fn split_at_char_trimmed(s: Option<&str>, delimiter: char) -> Vec<&str> {
    split_at_char(s, delimiter, true)
}

/// Split on runs of whitespace or commas, dropping empty segments.
///
/// This is the forgiving parse for human-written lists: `"a,, b  c"`
/// yields `["a", "b", "c"]`. Absent input yields `None`.
pub fn split_list(s: Option<&str>) -> Option<Vec<&str>> {
    split_pattern(s, &LIST_SEP)
}

/// Split on a regex, omitting zero-length segments.
///
/// Unlike [`str::split`], text between two adjacent delimiter matches
/// (or before a leading / after a trailing match) only appears in the
/// output when it is non-empty. Absent input yields `None`.
pub fn split_pattern<'a>(s: Option<&'a str>, pattern: &Regex) -> Option<Vec<&'a str>> {
    let s = s?;
    let mut out = Vec::new();
    let mut index = 0;
    for m in pattern.find_iter(s) {
        if index < m.start() {
            out.push(&s[index..m.start()]);
        }
        index = m.end();
    }
    if index < s.len() {
        out.push(&s[index..]);
    }
    Some(out)
}
