#![forbid(unsafe_code)]

//! Compact byte sizes, capitalization, punctuation removal.
//!
//! # Example
//! ```
//! use braid_text::fmt::{capitalize, compact_size, trim_punct};
//!
//! assert_eq!(compact_size(1023), "1,023B");
//! assert_eq!(compact_size(1024), "1K");
//! assert_eq!(capitalize("hello"), "Hello");
//! assert_eq!(trim_punct(Some("a,b.c")), "abc");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Unit suffixes for [`compact_size`], in 1024-step tiers.
const SIZE_UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];

/// Unicode punctuation plus the ASCII punctuation-and-symbols set
/// (`\p{P}` alone misses `$ + < = > ^ \x60 | ~`).
static PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}[:punct:]]").expect("punctuation regex is valid"));

/// Digit-grouping policy for [`compact_size_with`].
///
/// Locale-dependent formatting is injected rather than read from
/// process configuration. The decimal separator is carried for
/// completeness; the 1024-step integer scaling never produces a
/// fractional part today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingPolicy {
    /// Separator between three-digit groups.
    pub group_sep: char,
    /// Separator before fractional digits.
    pub decimal_sep: char,
}

impl Default for GroupingPolicy {
    fn default() -> Self {
        Self {
            group_sep: ',',
            decimal_sep: '.',
        }
    }
}

/// Format a byte count compactly: `1,023B`, `1K`, `16M`.
///
/// Scales by repeated division by 1024 through B/K/M/G/T and groups
/// digits with the default [`GroupingPolicy`]. Values past the T tier
/// saturate at T; there is no higher unit.
pub fn compact_size(bytes: u64) -> String {
    compact_size_with(bytes, GroupingPolicy::default())
}

/// [`compact_size`] with an explicit grouping policy.
pub fn compact_size_with(bytes: u64, policy: GroupingPolicy) -> String {
    let mut value = bytes;
    let mut tier = 0;
    while value >= 1024 && tier + 1 < SIZE_UNITS.len() {
        value /= 1024;
        tier += 1;
    }
    let mut out = group_digits(value, policy.group_sep);
    out.push_str(SIZE_UNITS[tier]);
    out
}

fn group_digits(value: u64, sep: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Upper-case the first code point, leaving the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first code point, leaving the rest unchanged.
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Remove all punctuation code points. Absent input yields `""`.
pub fn trim_punct(s: Option<&str>) -> String {
    match s {
        None => String::new(),
        Some(s) => PUNCT.replace_all(s, "").into_owned(),
    }
}
