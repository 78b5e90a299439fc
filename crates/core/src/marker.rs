//! Marker codec: embedding and recovering source line numbers in raw
//! text fragments.
//!
//! A tagged line carries [`MARKER`] immediately followed by a
//! zero-padded decimal field of [`LINE_FIELD_WIDTH`] digits, at most
//! once per physical line. The codec recovers the line number, removes
//! the marker substring, and splices a zero-width anchor into the
//! rendered output so the marker never reaches visible HTML.

use crate::anchor::anchor_html;
use crate::escape::escape_text;

/// Sentinel token that opens a line-number field.
///
/// The tagging collaborator embeds this at most once per physical
/// source line. The token is long enough that colliding with
/// user-authored text is not a practical concern; guaranteeing that is
/// the tagger's contract, not enforced here.
pub const MARKER: &str = "9f2a6c04e7b35d18f40ac5be176d093e82c41f57";

/// Width of the zero-padded decimal field following [`MARKER`].
pub const LINE_FIELD_WIDTH: usize = 6;

/// Result of splicing anchors into a tagged fragment.
///
/// `tagged` is handed back to the rendered output; `raw` is what gets
/// fed to further formatting (slug derivation, delegation to default
/// formatters) so markdown semantics are computed on clean text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSplice {
    /// The fragment with each marker replaced by an anchor element
    /// prepended to its (cleaned, optionally escaped, optionally
    /// wrapped) line.
    pub tagged: String,
    /// Cleaned text of the marked lines only, each terminated by a
    /// line break. Empty when no line carried a marker, which callers
    /// must treat as "no line correspondence for this fragment".
    pub raw: String,
}

/// Returns the exact substring a tagger embeds for `line_number`.
///
/// This is the boundary contract between the tagging collaborator and
/// the codec: `MARKER` plus the zero-padded decimal field.
pub fn encode_marker(line_number: usize) -> String {
    format!("{}{:0width$}", MARKER, line_number, width = LINE_FIELD_WIDTH)
}

/// Scans `line` for a marker and reads the line number following it.
///
/// Returns `None` when the marker is absent, or when the fixed-width
/// field after it is truncated or not all digits. The first marker
/// occurrence wins; additional occurrences on one line are undefined
/// input and are ignored.
pub fn decode_line_number(line: &str) -> Option<usize> {
    let start = line.find(MARKER)? + MARKER.len();
    let field = line.get(start..start + LINE_FIELD_WIDTH)?;
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Removes one `MARKER` + zero-padded `line_number` substring from
/// `line`, leaving the remainder untouched.
///
/// A line without that exact substring is returned unchanged.
pub fn strip_marker(line: &str, line_number: usize) -> String {
    line.replacen(&encode_marker(line_number), "", 1)
}

/// Splits `text` on line breaks and splices anchors for marked lines.
///
/// For each line carrying a well-formed marker: the marker is
/// stripped, the cleaned line is escaped when `escape` is set, wrapped
/// in `wrap` when given, and prefixed with the line's anchor element.
/// The cleaned (unwrapped, unescaped) line is also appended to `raw`.
/// Unmarked lines pass through byte-identical and contribute nothing
/// to `raw`.
///
/// `wrap` is used by fenced code blocks, where each traced line gets
/// its own inline code element so the anchor can sit next to it
/// without breaking the enclosing block structure.
pub fn replace_all(text: &str, wrap: Option<(&str, &str)>, escape: bool) -> LineSplice {
    let mut tagged = String::with_capacity(text.len());
    let mut raw = String::new();

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            tagged.push('\n');
        }
        match decode_line_number(line) {
            Some(n) => {
                let cleaned = strip_marker(line, n);
                tagged.push_str(&anchor_html(n));
                if let Some((left, _)) = wrap {
                    tagged.push_str(left);
                }
                if escape {
                    tagged.push_str(&escape_text(&cleaned, true));
                } else {
                    tagged.push_str(&cleaned);
                }
                if let Some((_, right)) = wrap {
                    tagged.push_str(right);
                }
                raw.push_str(&cleaned);
                raw.push('\n');
            }
            None => tagged.push_str(line),
        }
    }

    LineSplice { tagged, raw }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::anchor_id;

    #[test]
    fn decode_mid_line() {
        let line = format!("hello {}world", encode_marker(42));
        assert_eq!(decode_line_number(&line), Some(42));
    }

    #[test]
    fn decode_absent() {
        assert_eq!(decode_line_number("no marker here"), None);
    }

    #[test]
    fn decode_truncated_field() {
        // Marker at end of line, no digits after it.
        let line = format!("tail {}", MARKER);
        assert_eq!(decode_line_number(&line), None);
        // Too few digits.
        let line = format!("{}12", MARKER);
        assert_eq!(decode_line_number(&line), None);
    }

    #[test]
    fn decode_non_digit_field() {
        let line = format!("{}12ab56", MARKER);
        assert_eq!(decode_line_number(&line), None);
    }

    #[test]
    fn decode_first_occurrence_wins() {
        let line = format!("{}{}", encode_marker(1), encode_marker(2));
        assert_eq!(decode_line_number(&line), Some(1));
    }

    #[test]
    fn strip_is_exact_and_idempotent() {
        let line = format!("<b>&amp;{}", encode_marker(7));
        assert_eq!(strip_marker(&line, 7), "<b>&amp;");
        assert_eq!(strip_marker("plain line", 3), "plain line");
    }

    #[test]
    fn strip_wrong_number_leaves_line() {
        let line = format!("x{}", encode_marker(7));
        assert_eq!(strip_marker(&line, 8), line);
    }

    #[test]
    fn replace_all_without_markers_is_identity() {
        let text = "alpha\nbeta & <gamma>\n";
        let splice = replace_all(text, None, false);
        assert_eq!(splice.tagged, text);
        assert!(splice.raw.is_empty());
    }

    #[test]
    fn replace_all_splices_anchor_and_accumulates_raw() {
        let text = format!("one {}two\nthree", encode_marker(5));
        let splice = replace_all(&text, None, false);
        assert_eq!(
            splice.tagged,
            format!("{}one two\nthree", anchor_html(5))
        );
        assert_eq!(splice.raw, "one two\n");
        assert!(!splice.tagged.contains(MARKER));
    }

    #[test]
    fn replace_all_every_line_marked_keeps_trailing_separator() {
        let text = format!("{}a\n{}b", encode_marker(1), encode_marker(2));
        let splice = replace_all(&text, None, false);
        assert_eq!(splice.raw, "a\nb\n");
    }

    #[test]
    fn replace_all_wraps_and_escapes_marked_lines_only() {
        let text = format!("{}a<b\nc<d", encode_marker(3));
        let splice = replace_all(&text, Some(("<code>", "</code>")), true);
        assert_eq!(
            splice.tagged,
            format!("{}<code>a&lt;b</code>\nc<d", anchor_html(3))
        );
        assert_eq!(splice.raw, "a<b\n");
    }

    #[test]
    fn spliced_anchor_decodes_back() {
        let text = format!("{}x", encode_marker(120));
        let splice = replace_all(&text, None, false);
        assert!(splice.tagged.contains(&anchor_id(120)));
    }
}
