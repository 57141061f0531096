#![forbid(unsafe_code)]

//! `${name}` variable substitution.
//!
//! # Example
//! ```
//! use std::collections::HashMap;
//! use braid_text::vars::replace_vars;
//!
//! let mut vars = HashMap::new();
//! vars.insert("host".to_owned(), "db1".to_owned());
//! assert_eq!(replace_vars("${host}:${port}", &vars), "db1:${port}");
//! ```

use std::collections::HashMap;

/// Replace each `${name}` token with the mapped value for `name`.
///
/// Unknown names are left in place as the literal token, so a partial
/// substitution pass is repeatable once the remaining names become
/// available. A `$` not followed by `{` (including a trailing `$`)
/// passes through literally, as does an unterminated `${...`.
pub fn replace_vars<S: AsRef<str>>(value: &str, vars: &HashMap<String, S>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev = 0;
    while let Some(pos) = value[prev..].find('$').map(|p| p + prev) {
        out.push_str(&value[prev..pos]);
        // Trailing "$" or "$" without an opening brace: literal.
        if pos + 1 == value.len() || value.as_bytes()[pos + 1] != b'{' {
            out.push('$');
            prev = pos + 1;
            continue;
        }
        match value[pos..].find('}') {
            // Unterminated "${...": copy the rest verbatim.
            None => {
                out.push_str(&value[pos..]);
                prev = value.len();
            }
            Some(rel) => {
                let end = pos + rel;
                let name = &value[pos + 2..end];
                match vars.get(name) {
                    Some(v) => out.push_str(v.as_ref()),
                    None => out.push_str(&value[pos..=end]),
                }
                prev = end + 1;
            }
        }
    }
    out.push_str(&value[prev..]);
    out
}
