#![forbid(unsafe_code)]

//! Pure-function string helpers.
//!
//! Every function in this crate is a stateless transformation of its
//! inputs: no shared state, no I/O, no interior mutability. The modules
//! group related helpers:
//!
//! - [`escape`] - XML/HTML entity escaping and literal replacement
//! - [`split`] - joining and the split family (lines, char, regex)
//! - [`byteslice`] - byte-indexed substrings, encoded lengths, `omit`
//! - [`pad`] - character replication and byte-aware padding
//! - [`hex`] - lowercase hex encoding and tolerant decoding
//! - [`vars`] - `${name}` variable substitution
//! - [`fmt`] - compact byte sizes, capitalization, punctuation removal
//! - [`nullsafe`] - `Option`-tolerant conversions and comparison
//!
//! # Absent inputs
//!
//! Where a contract distinguishes an absent value from an empty one,
//! the function takes `Option<&str>` and documents its default output.
//! Everything else takes plain `&str`.
//!
//! # Example
//! ```
//! use braid_text::{escape_xml, pad_end, split_at_char};
//!
//! assert_eq!(escape_xml("a<b"), "a&lt;b");
//! assert_eq!(pad_end("ab", '0', 4), "ab00");
//! assert_eq!(split_at_char(Some("a,,b"), ',', false), vec!["a", "", "b"]);
//! ```

pub mod byteslice;
pub mod escape;
pub mod fmt;
pub mod hex;
pub mod nullsafe;
pub mod pad;
pub mod split;
pub mod vars;

pub use byteslice::{
    CutAdjust, EncodingError, default_encoding, encoded_len, omit, omit_encoded, substr_bytes,
    substr_bytes_lenient,
};
pub use escape::{escape_html, escape_xml, replace, unescape_xml};
pub use fmt::{
    GroupingPolicy, capitalize, compact_size, compact_size_with, trim_punct, uncapitalize,
};
pub use hex::{hex_to_bytes, to_hex};
pub use nullsafe::{eq_nullable, is_empty, nullable, to_string_or};
pub use pad::{Measure, pad_end, pad_start, replicate};
pub use split::{
    join, split_at_char, split_at_char_trimmed, split_lines, split_list, split_pattern,
};
pub use vars::replace_vars;
