/// Quote `input` as a double-quoted ASCII-only literal.
///
/// Printable ASCII passes through untouched. The usual single-letter escapes
/// are used where they exist, remaining control bytes become `\xNN`, and any
/// non-ASCII character becomes `\uXXXX` or `\UXXXXXXXX`. Hex digits are
/// lowercase.
pub fn quote_ascii(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('"');

    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            ' '..='~' => out.push(c),
            c if (c as u32) < 0x80 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }

    out.push('"');
    out
}
