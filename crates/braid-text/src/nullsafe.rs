#![forbid(unsafe_code)]

//! `Option`-tolerant conversions and comparison.
//!
//! Call sites that deal in optional text (database columns, config
//! lookups) want absent values folded into defaults, not matched on at
//! every use. These helpers give absent input a well-defined output
//! instead of an error.
//!
//! # Example
//! ```
//! use braid_text::nullsafe::{eq_nullable, is_empty, to_string_or};
//!
//! assert!(is_empty(None));
//! assert_eq!(to_string_or(None::<i32>, "n/a"), "n/a");
//! assert!(eq_nullable(None, None));
//! ```

use std::fmt::Display;

/// True iff the value is absent or zero-length.
pub fn is_empty(s: Option<&str>) -> bool {
    s.is_none_or(str::is_empty)
}

/// Render a value through [`Display`], substituting `default` when the
/// value is absent or renders empty.
pub fn to_string_or<T: Display>(value: Option<T>, default: &str) -> String {
    match value {
        None => default.to_owned(),
        Some(v) => {
            let rendered = v.to_string();
            if rendered.is_empty() {
                default.to_owned()
            } else {
                rendered
            }
        }
    }
}

/// [`to_string_or`] with an empty-string default.
pub fn nullable<T: Display>(value: Option<T>) -> String {
    to_string_or(value, "")
}

/// Null-safe equality: both absent is equal, exactly one absent is
/// not, otherwise literal comparison.
pub fn eq_nullable(a: Option<&str>, b: Option<&str>) -> bool {
    a == b
}
