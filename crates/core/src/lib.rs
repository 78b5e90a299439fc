#![deny(missing_docs)]
//! Anchormark core: the line-marker codec, anchor generation, HTML
//! escaping regimes, and heading slug generation.
//!
//! Everything here is a pure string transform. The markdown parser and
//! the HTML renderer live in `anchormark-html`; an editor embeds line
//! markers with [`encode_marker`] before parsing and jumps to the id
//! returned by [`anchor_id`] after rendering.

/// Anchor element generation and id reversal.
pub mod anchor;
/// The two HTML escaping regimes.
pub mod escape;
/// Marker encoding, decoding, and line splicing.
pub mod marker;
/// Heading slug generation.
pub mod slug;

pub use anchor::{anchor_html, anchor_id, line_for_anchor_id};
pub use escape::escape_text;
pub use marker::{
    LINE_FIELD_WIDTH, LineSplice, MARKER, decode_line_number, encode_marker, replace_all,
    strip_marker,
};
pub use slug::{Slugger, slugify};
