//! Anchor generation: a zero-width, uniquely addressable element for a
//! source line.
//!
//! Anchor ids are the reversed marker token plus the zero-padded line
//! number, so ids derive deterministically from the marker without
//! ever containing it, and a consumer can rebuild the id for any line
//! it wants to navigate to.

use once_cell::sync::Lazy;

use crate::marker::{LINE_FIELD_WIDTH, MARKER};

/// Reversed marker token used as the anchor id prefix.
static ID_PREFIX: Lazy<String> = Lazy::new(|| MARKER.chars().rev().collect());

/// Builds the anchor id for a source line number.
pub fn anchor_id(line_number: usize) -> String {
    format!(
        "{}{:0width$}",
        ID_PREFIX.as_str(),
        line_number,
        width = LINE_FIELD_WIDTH
    )
}

/// Recovers the source line number from an anchor id.
///
/// This is the consumer-side inverse of [`anchor_id`]; ids that were
/// not produced by it return `None`.
pub fn line_for_anchor_id(id: &str) -> Option<usize> {
    let field = id.strip_prefix(ID_PREFIX.as_str())?;
    if field.len() != LINE_FIELD_WIDTH || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Builds the anchor element spliced into rendered output.
///
/// The element is self-closing in effect (empty body) and relatively
/// positioned so it occupies no space and never perturbs layout.
pub fn anchor_html(line_number: usize) -> String {
    let id = anchor_id(line_number);
    format!(r##"<a style="position: relative;" href="#{id}" id="{id}"></a>"##)
}
