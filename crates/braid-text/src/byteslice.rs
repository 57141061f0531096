#![forbid(unsafe_code)]

//! Byte-indexed substrings, encoded lengths, and `omit` truncation.
//!
//! Fixed-width column layouts that mix single- and multi-byte
//! characters measure and cut text by encoded byte count, not by code
//! point. Cutting by byte offset can land inside a multi-byte
//! sequence; the helpers here follow the encode → slice → validate
//! scheme: a cut that fails validation yields empty, and the lenient
//! variant retries once with the end boundary moved by one byte.
//!
//! # Example
//! ```
//! use braid_text::byteslice::{CutAdjust, substr_bytes, substr_bytes_lenient};
//!
//! // "\u{6c49}" is three bytes in UTF-8; a cut at byte 2 lands inside it.
//! assert_eq!(substr_bytes("a\u{6c49}b", 0, 2), "");
//! assert_eq!(substr_bytes_lenient("a\u{6c49}b", 0, 2, CutAdjust::Shrink), "a");
//! ```

use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;

/// Error raised when an encoding label cannot be resolved.
///
/// The only failure surfaced by this crate; everything else degrades
/// to a documented default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The label did not resolve to a known encoding.
    #[error("unsupported encoding label: {0:?}")]
    Unsupported(String),
}

/// How to move the end boundary when a byte cut lands inside a
/// multi-byte character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutAdjust {
    /// Retry with the end boundary one byte later (include the split
    /// character).
    Grow,
    /// Retry with the end boundary one byte earlier (drop the split
    /// character).
    #[default]
    Shrink,
}

/// The double-byte-aware encoding used by [`encoded_len`].
const WIDE_ENCODING_LABEL: &str = "gb18030";

/// The literal that replaces the truncated tail in [`omit`].
const ELLIPSIS: &str = "...";

/// Substring by byte index over the UTF-8 representation.
///
/// `begin` and `end` are byte offsets; `end` clamps to the byte
/// length. Inverted or out-of-range indices yield `""`, as does a cut
/// whose bytes do not decode as valid UTF-8 (a boundary inside a
/// multi-byte character). Use [`substr_bytes_lenient`] to repair such
/// a boundary instead.
pub fn substr_bytes(src: &str, begin: usize, end: usize) -> String {
    let bytes = src.as_bytes();
    if begin >= bytes.len() || begin >= end {
        return String::new();
    }
    let end = end.min(bytes.len());
    match std::str::from_utf8(&bytes[begin..end]) {
        Ok(s) => s.to_owned(),
        Err(_) => String::new(),
    }
}

/// [`substr_bytes`], retrying once when the cut fails to decode.
///
/// If the byte-exact cut yields `""`, the end boundary is adjusted by
/// one byte in the direction given by `adjust` and the cut is retried.
/// One retry only; a boundary still inside a multi-byte sequence after
/// the adjustment yields `""`.
pub fn substr_bytes_lenient(src: &str, begin: usize, end: usize, adjust: CutAdjust) -> String {
    let exact = substr_bytes(src, begin, end);
    if !exact.is_empty() {
        return exact;
    }
    let retry_end = match adjust {
        CutAdjust::Grow => end.saturating_add(1),
        CutAdjust::Shrink => end.saturating_sub(1),
    };
    substr_bytes(src, begin, retry_end)
}

/// Byte length under the fixed double-byte-aware encoding (GB18030).
///
/// CJK characters measure two bytes here, matching fixed-width column
/// conventions for double-byte text. Falls back to the UTF-8 byte
/// length (with a warning) if the encoding is unavailable. Absent
/// input yields 0.
pub fn encoded_len(s: Option<&str>) -> usize {
    let Some(s) = s else {
        return 0;
    };
    match Encoding::for_label(WIDE_ENCODING_LABEL.as_bytes()) {
        Some(encoding) => {
            let (bytes, _, _) = encoding.encode(s);
            bytes.len()
        }
        None => {
            tracing::warn!(
                label = WIDE_ENCODING_LABEL,
                "encoding unavailable, falling back to UTF-8 length"
            );
            s.len()
        }
    }
}

/// Truncate to `max_len` UTF-8 bytes, marking truncation with `"..."`.
///
/// The final 3 bytes of a truncated result are the literal ellipsis.
/// Contracts:
///
/// - absent input yields `""`
/// - `max_len == 0` yields `"..."` regardless of input length
/// - input at or under `max_len` bytes is returned unchanged
/// - `max_len < 3` with an over-long input yields `"..."`
///
/// A truncation boundary inside a multi-byte character decodes that
/// character as U+FFFD rather than failing.
pub fn omit(s: Option<&str>, max_len: usize) -> String {
    omit_with(s, UTF_8, max_len)
}

/// [`omit`] measuring and cutting under a named encoding.
///
/// The label is resolved with [`Encoding::for_label`]; an unknown
/// label is the one unrecoverable error this crate surfaces.
pub fn omit_encoded(
    s: Option<&str>,
    encoding: &str,
    max_len: usize,
) -> Result<String, EncodingError> {
    let encoding = Encoding::for_label(encoding.as_bytes())
        .ok_or_else(|| EncodingError::Unsupported(encoding.to_owned()))?;
    Ok(omit_with(s, encoding, max_len))
}

fn omit_with(s: Option<&str>, encoding: &'static Encoding, max_len: usize) -> String {
    let Some(s) = s else {
        return String::new();
    };
    if max_len == 0 {
        return ELLIPSIS.to_owned();
    }
    let (bytes, _, _) = encoding.encode(s);
    if bytes.len() <= max_len {
        return s.to_owned();
    }
    if max_len < 3 {
        return ELLIPSIS.to_owned();
    }
    tracing::debug!(len = bytes.len(), max_len, "truncating over-long text");
    let (head, _) = encoding.decode_without_bom_handling(&bytes[..max_len - 3]);
    let mut out = head.into_owned();
    out.push_str(ELLIPSIS);
    out
}

/// Name of the process default encoding.
///
/// Rust strings are UTF-8 everywhere, so unlike platforms where the
/// default charset is a process-wide setting this is a constant.
pub fn default_encoding() -> &'static str {
    UTF_8.name()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== substr_bytes ==============

    #[test]
    fn substr_ascii() {
        assert_eq!(substr_bytes("abcdef", 0, 3), "abc");
        assert_eq!(substr_bytes("abcdef", 2, 4), "cd");
    }

    #[test]
    fn substr_end_clamps_to_length() {
        assert_eq!(substr_bytes("abc", 1, 100), "bc");
    }

    #[test]
    fn substr_out_of_range_or_inverted() {
        assert_eq!(substr_bytes("abc", 3, 5), "");
        assert_eq!(substr_bytes("abc", 2, 2), "");
        assert_eq!(substr_bytes("abc", 2, 1), "");
    }

    #[test]
    fn substr_mid_character_is_empty() {
        // '\u{6c49}' occupies bytes 1..4.
        assert_eq!(substr_bytes("a\u{6c49}b", 0, 2), "");
        assert_eq!(substr_bytes("a\u{6c49}b", 2, 5), "");
    }

    // ============== substr_bytes_lenient ==============

    #[test]
    fn lenient_exact_cut_passes_through() {
        assert_eq!(
            substr_bytes_lenient("abcdef", 0, 3, CutAdjust::Grow),
            "abc"
        );
    }

    #[test]
    fn lenient_shrink_drops_split_character() {
        assert_eq!(
            substr_bytes_lenient("a\u{6c49}b", 0, 2, CutAdjust::Shrink),
            "a"
        );
    }

    #[test]
    fn lenient_grow_includes_split_character() {
        // Growing the end from byte 2 to 3 completes the three-byte char.
        assert_eq!(
            substr_bytes_lenient("\u{6c49}b", 0, 2, CutAdjust::Grow),
            "\u{6c49}"
        );
        // Shrinking from byte 2 to 1 still lands inside it.
        assert_eq!(
            substr_bytes_lenient("\u{6c49}b", 0, 2, CutAdjust::Shrink),
            ""
        );
    }

    #[test]
    fn lenient_single_retry_only() {
        // Byte 1 of a three-byte char: one adjustment in either
        // direction still lands inside it.
        assert_eq!(
            substr_bytes_lenient("\u{6c49}b", 0, 1, CutAdjust::Grow),
            ""
        );
    }

    #[test]
    fn lenient_never_underflows() {
        assert_eq!(substr_bytes_lenient("abc", 0, 0, CutAdjust::Shrink), "");
    }

    // ============== encoded_len ==============

    #[test]
    fn encoded_len_counts_cjk_as_two_bytes() {
        assert_eq!(encoded_len(Some("a\u{6c49}")), 3);
        assert_eq!(encoded_len(Some("a\u{6c49}\u{5b57}")), 5);
        assert_eq!(encoded_len(Some("abc")), 3);
    }

    #[test]
    fn encoded_len_absent_is_zero() {
        assert_eq!(encoded_len(None), 0);
        assert_eq!(encoded_len(Some("")), 0);
    }

    // ============== omit ==============

    #[test]
    fn omit_contract_table() {
        assert_eq!(omit(Some("abcdef"), 8), "abcdef");
        assert_eq!(omit(Some("abcdef"), 6), "abcdef");
        assert_eq!(omit(Some("abcdef"), 5), "ab...");
        assert_eq!(omit(Some("abcdef"), 3), "...");
        assert_eq!(omit(Some("abcdef"), 2), "...");
        assert_eq!(omit(Some("abcdef"), 0), "...");
        assert_eq!(omit(Some("abc"), 3), "abc");
        assert_eq!(omit(Some("ab"), 2), "ab");
        assert_eq!(omit(Some("abc"), 2), "...");
        assert_eq!(omit(None, 5), "");
    }

    #[test]
    fn omit_zero_beats_short_input() {
        // Preserved asymmetry: a zero budget yields the ellipsis even
        // for input shorter than the ellipsis itself.
        assert_eq!(omit(Some("ab"), 0), "...");
    }

    #[test]
    fn omit_encoded_gbk() {
        // GBK: 2 bytes per CJK char, so "ab\u{6c49}ef" measures 6.
        assert_eq!(omit_encoded(Some("ab\u{6c49}ef"), "GBK", 7), Ok("ab\u{6c49}ef".to_owned()));
        assert_eq!(omit_encoded(Some("ab\u{6c49}ef"), "GBK", 6), Ok("ab\u{6c49}ef".to_owned()));
        // "\u{6c49}bcdef" measures 7; keep 5 - 3 = 2 bytes = the CJK char.
        assert_eq!(
            omit_encoded(Some("\u{6c49}bcdef"), "GBK", 5),
            Ok("\u{6c49}...".to_owned())
        );
    }

    #[test]
    fn omit_encoded_unknown_label() {
        let err = omit_encoded(Some("abc"), "no-such-encoding", 5);
        assert_eq!(
            err,
            Err(EncodingError::Unsupported("no-such-encoding".to_owned()))
        );
    }

    #[test]
    fn omit_utf8_mid_character_boundary_is_replaced() {
        // Keeping 4 bytes of "ab\u{6c49}x" (2 + 3 + 1) cuts the CJK
        // char after two of its three bytes.
        let out = omit(Some("ab\u{6c49}xyzw"), 7);
        assert_eq!(out, "ab\u{fffd}...");
    }

    // ============== default_encoding ==============

    #[test]
    fn default_encoding_is_utf8() {
        assert_eq!(default_encoding(), "UTF-8");
    }
}
