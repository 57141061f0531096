#![forbid(unsafe_code)]

//! Character replication and fixed-width padding.
//!
//! The fill helpers target fixed-width column layouts: widths are
//! measured in encoded bytes (or optionally code points for
//! [`pad_start`]), and over-long input is truncated through the
//! boundary-repairing cut from [`crate::byteslice`], so a multi-byte
//! character is never left half in the output.
//!
//! # Example
//! ```
//! use braid_text::pad::{Measure, pad_end, pad_start};
//!
//! assert_eq!(pad_end("ab", '0', 5), "ab000");
//! assert_eq!(pad_start("ab", '0', 5, Measure::Bytes), "000ab");
//! ```

use crate::byteslice::{CutAdjust, substr_bytes_lenient};

/// Which unit [`pad_start`] measures the source in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measure {
    /// UTF-8 byte count. The fixed-width-column default.
    #[default]
    Bytes,
    /// Unicode code point count.
    Chars,
}

/// Repeat `ch` `count` times. Zero count yields `""`.
pub fn replicate(ch: char, count: usize) -> String {
    std::iter::repeat_n(ch, count).collect()
}

/// Left-align `src` in a field of `target` bytes, filling with `ch`.
///
/// Padding is appended. Over-long input is truncated from the front of
/// the field via the lenient byte cut, dropping a split multi-byte
/// character rather than emitting half of it (so the result can come
/// up short of `target`).
pub fn pad_end(src: &str, ch: char, target: usize) -> String {
    let srclen = src.len();
    if srclen == target {
        return src.to_owned();
    }
    if srclen > target {
        return substr_bytes_lenient(src, 0, target, CutAdjust::Shrink);
    }
    let mut out = String::with_capacity(target);
    out.push_str(src);
    out.extend(std::iter::repeat_n(ch, target - srclen));
    out
}

/// Right-align `src` in a field of `target` units, filling with `ch`.
///
/// Padding is prepended. Over-long input keeps its trailing `target`
/// units: the last `target` bytes under [`Measure::Bytes`] (through
/// the lenient cut), the last `target` code points under
/// [`Measure::Chars`].
pub fn pad_start(src: &str, ch: char, target: usize, measure: Measure) -> String {
    let srclen = match measure {
        Measure::Bytes => src.len(),
        Measure::Chars => src.chars().count(),
    };
    if srclen == target {
        return src.to_owned();
    }
    if srclen > target {
        return match measure {
            Measure::Bytes => substr_bytes_lenient(src, srclen - target, srclen, CutAdjust::Shrink),
            Measure::Chars => src.chars().skip(srclen - target).collect(),
        };
    }
    let mut out = String::with_capacity(src.len() + (target - srclen));
    out.extend(std::iter::repeat_n(ch, target - srclen));
    out.push_str(src);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== replicate ==============

    #[test]
    fn replicate_counts() {
        assert_eq!(replicate('0', 10), "0000000000");
        assert_eq!(replicate('0', 1), "0");
        assert_eq!(replicate('0', 0), "");
    }

    // ============== pad_end ==============

    #[test]
    fn pad_end_fills_to_byte_length() {
        assert_eq!(pad_end("ab", '0', 5), "ab000");
        assert_eq!(pad_end("abc", '0', 3), "abc");
    }

    #[test]
    fn pad_end_counts_multibyte_source() {
        // "\u{6c49}" is 3 bytes, so only one fill byte is needed.
        let out = pad_end("abc\u{6c49}def", '0', 10);
        assert_eq!(out, "abc\u{6c49}def0");
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn pad_end_truncates_over_long_input() {
        assert_eq!(pad_end("abcdef", '0', 1), "a");
    }

    #[test]
    fn pad_end_truncation_drops_split_character() {
        // Cutting "\u{6c49}\u{5b57}" at 4 bytes lands inside the
        // second char; the shrink retry drops it entirely.
        assert_eq!(pad_end("\u{6c49}\u{5b57}", '0', 4), "\u{6c49}");
    }

    #[test]
    fn pad_end_empty_source() {
        assert_eq!(pad_end("", '0', 3), "000");
    }

    // ============== pad_start ==============

    #[test]
    fn pad_start_fills_to_byte_length() {
        assert_eq!(pad_start("ab", '0', 5, Measure::Bytes), "000ab");
        let out = pad_start("\u{6c49}\u{5b57}", '0', 10, Measure::Bytes);
        assert_eq!(out, "0000\u{6c49}\u{5b57}");
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn pad_start_char_measure() {
        assert_eq!(pad_start("\u{6c49}\u{5b57}", '0', 5, Measure::Chars), "000\u{6c49}\u{5b57}");
    }

    #[test]
    fn pad_start_keeps_trailing_bytes() {
        assert_eq!(pad_start("abcdef", '0', 2, Measure::Bytes), "ef");
    }

    #[test]
    fn pad_start_keeps_trailing_chars() {
        assert_eq!(pad_start("ab\u{6c49}\u{5b57}", '0', 2, Measure::Chars), "\u{6c49}\u{5b57}");
    }

    #[test]
    fn pad_start_exact_width_is_unchanged() {
        assert_eq!(pad_start("abc", '0', 3, Measure::Bytes), "abc");
    }
}
