//! JSON string escaping and quoting.

use std::fmt::Write;

/// Escapes the characters JSON cannot carry raw: the quote, the
/// backslash, and the C0 control range. Everything else, including
/// multi-byte Unicode, passes through untouched.
///
/// # Examples
///
/// ```
/// use json_stable::strings::escape;
///
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape("line1\nline2"), "line1\\nline2");
/// assert_eq!(escape("nul\0byte"), "nul\\u0000byte");
/// ```
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{000C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 => {
                // remaining control characters get the \u00XX form
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// Serializes text as a JSON string value: quote, escape, quote.
///
/// # Examples
///
/// ```
/// use json_stable::strings::to_json_string;
///
/// assert_eq!(to_json_string("hello"), "\"hello\"");
/// assert_eq!(to_json_string(""), "\"\"");
/// ```
pub fn to_json_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    out.push_str(&escape(s));
    out.push('"');
    out
}
