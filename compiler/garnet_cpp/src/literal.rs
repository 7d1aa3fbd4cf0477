//! C++ string literal quoting.

use std::fmt::Write;

/// Render `s` as a double-quoted C++ string literal.
///
/// Works on bytes: printable ASCII passes through, the common control
/// characters use their short escapes and every other byte becomes a
/// three-digit octal escape. Octal escapes stop after three digits, so a
/// following digit can never be absorbed into them (unlike `\x`).
pub fn cpp_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for byte in s.bytes() {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            // `??x` sequences are trigraphs in older C++ dialects
            b'?' => out.push_str("\\?"),
            0x20..=0x7e => out.push(char::from(byte)),
            _ => {
                // Writing to a String cannot fail
                let _ = write!(out, "\\{byte:03o}");
            }
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii() {
        assert_eq!(cpp_string_literal("hello"), "\"hello\"");
        assert_eq!(cpp_string_literal(""), "\"\"");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(cpp_string_literal("a\"b"), r#""a\"b""#);
        assert_eq!(cpp_string_literal("a\\b"), r#""a\\b""#);
        assert_eq!(cpp_string_literal("line\nbreak\t"), r#""line\nbreak\t""#);
        assert_eq!(cpp_string_literal("empty?"), r#""empty\?""#);
    }

    #[test]
    fn test_non_ascii_bytes_are_octal() {
        assert_eq!(cpp_string_literal("é"), r#""\303\251""#);
        assert_eq!(cpp_string_literal("\u{0}1"), r#""\0001""#);
    }
}
