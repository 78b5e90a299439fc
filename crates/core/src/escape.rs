//! The two HTML escaping regimes used by the renderer.

/// Escapes `&`, `<`, `>`, `"` and `'` for HTML output.
///
/// In strict mode every `&` becomes `&amp;`; this is what code spans
/// and fenced code need, where the input is literal text. In
/// non-strict mode an `&` that already opens a character reference
/// (`&name;`, `&#10;`, `&#xAB;`) is left alone, so entities encoded
/// upstream are not double-escaped.
pub fn escape_text(text: &str, strict: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        match ch {
            '&' if !strict && opens_reference(&text[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Returns true when `s`, which starts at an `&`, looks like a
/// character or entity reference (`&#?\w+;`).
fn opens_reference(s: &str) -> bool {
    let rest = &s[1..];
    let rest = rest.strip_prefix('#').unwrap_or(rest);
    match rest.find(';') {
        None | Some(0) => false,
        Some(end) => rest[..end]
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_'),
    }
}
