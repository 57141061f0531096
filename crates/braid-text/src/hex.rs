#![forbid(unsafe_code)]

//! Lowercase hex encoding and tolerant decoding.
//!
//! # Example
//! ```
//! use braid_text::hex::{hex_to_bytes, to_hex};
//!
//! assert_eq!(to_hex(&[0x00, 0xff, 0x1a]), "00ff1a");
//! assert_eq!(hex_to_bytes(Some("00ff1a")), Some(vec![0x00, 0xff, 0x1a]));
//! ```

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encode bytes as lowercase hex, two zero-padded digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0F) as usize] as char);
    }
    out
}

/// Decode pairs of hex digits into bytes.
///
/// Tolerant by contract: absent input yields `None`, malformed input
/// (a non-hex digit) yields `Some(vec![])` rather than an error, and a
/// trailing unpaired digit is ignored. Both digit cases are accepted.
pub fn hex_to_bytes(hex: Option<&str>) -> Option<Vec<u8>> {
    let hex = hex?;
    Some(decode_pairs(hex).unwrap_or_default())
}

fn decode_pairs(hex: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(hex.len() / 2);
    for pair in hex.as_bytes().chunks_exact(2) {
        let hi = (pair[0] as char).to_digit(16)?;
        let lo = (pair[1] as char).to_digit(16)?;
        out.push(((hi << 4) | lo) as u8);
    }
    Some(out)
}
