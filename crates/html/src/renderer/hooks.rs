//! Per-construct formatting hooks and the line-anchor override set.
//!
//! [`Hooks`] is a mapping from construct kind to formatting function.
//! [`Hooks::plain`] is the default table; [`Hooks::line_anchored`]
//! overrides each entry to strip markers from the construct's content,
//! splice the line anchors in, and delegate the structural question of
//! how the construct actually renders back to the default table with
//! cleaned text. The marker never reaches visible HTML.

use anchormark_core::{
    Slugger, anchor_html, decode_line_number, escape_text, replace_all, strip_marker,
};

use super::defaults;
use crate::Options;

/// Mutable state threaded through formatting hooks during one render
/// pass. Scoped to a single `render` call; nothing survives it.
pub struct HookState {
    slugger: Slugger,
    heading_prefix: String,
    breaks: bool,
}

impl HookState {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            slugger: Slugger::new(),
            heading_prefix: options.heading_prefix.clone(),
            breaks: options.breaks,
        }
    }

    /// Next unique slug for the given heading text.
    pub fn slug(&mut self, text: &str) -> String {
        self.slugger.next_slug(text)
    }

    /// Prefix prepended to generated heading ids.
    pub fn heading_prefix(&self) -> &str {
        &self.heading_prefix
    }

    /// Whether soft line breaks render as `<br />`.
    pub fn breaks(&self) -> bool {
        self.breaks
    }
}

/// Formatting functions for each construct the renderer emits through
/// the hook layer.
#[derive(Clone, Copy)]
pub struct Hooks {
    /// Heading: rendered inline HTML, plain text (slug source), depth.
    pub heading: fn(&mut HookState, &str, &str, u8) -> String,
    /// Paragraph content (rendered inline HTML).
    pub paragraph: fn(&mut HookState, &str) -> String,
    /// List item content plus the GFM task-list checked state.
    pub list_item: fn(&mut HookState, &str, Option<bool>) -> String,
    /// Table cell content, header flag, alignment attribute.
    pub table_cell: fn(&mut HookState, &str, bool, &str) -> String,
    /// Inline code span literal text.
    pub codespan: fn(&mut HookState, &str) -> String,
    /// Fenced code block literal text and info-string language.
    pub code_block: fn(&mut HookState, &str, Option<&str>) -> String,
    /// Link: destination, title, rendered text.
    pub link: fn(&mut HookState, &str, Option<&str>, &str) -> String,
    /// Image: source, title, alt text.
    pub image: fn(&mut HookState, &str, Option<&str>, &str) -> String,
    /// Raw HTML block or inline tag.
    pub html_block: fn(&mut HookState, &str) -> String,
}

impl Hooks {
    /// The unmodified formatting table.
    pub fn plain() -> Self {
        Self {
            heading: defaults::heading,
            paragraph: defaults::paragraph,
            list_item: defaults::list_item,
            table_cell: defaults::table_cell,
            codespan: defaults::codespan,
            code_block: defaults::code_block,
            link: defaults::link,
            image: defaults::image,
            html_block: defaults::html_block,
        }
    }

    /// The line-anchor override set.
    pub fn line_anchored() -> Self {
        Self {
            heading: anchored_heading,
            paragraph: anchored_paragraph,
            list_item: anchored_list_item,
            table_cell: anchored_table_cell,
            codespan: anchored_codespan,
            code_block: anchored_code_block,
            link: anchored_link,
            image: anchored_image,
            html_block: anchored_html_block,
        }
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::plain()
    }
}

/// Visible text carries the anchor; the slug is derived from cleaned
/// plain text so a tagged heading and its untagged twin share an id.
fn anchored_heading(st: &mut HookState, text: &str, plain: &str, depth: u8) -> String {
    let display = replace_all(text, None, false);
    let slug_source = replace_all(plain, None, false);
    if slug_source.raw.is_empty() {
        defaults::heading(st, &display.tagged, plain, depth)
    } else {
        defaults::heading(st, &display.tagged, slug_source.raw.trim_end(), depth)
    }
}

fn anchored_paragraph(st: &mut HookState, text: &str) -> String {
    defaults::paragraph(st, &replace_all(text, None, false).tagged)
}

fn anchored_list_item(st: &mut HookState, text: &str, checked: Option<bool>) -> String {
    defaults::list_item(st, &replace_all(text, None, false).tagged, checked)
}

fn anchored_table_cell(st: &mut HookState, text: &str, header: bool, align: &str) -> String {
    defaults::table_cell(st, &replace_all(text, None, false).tagged, header, align)
}

/// An anchor element cannot live inside `<code>`, so it goes
/// immediately before the default code-span output.
fn anchored_codespan(st: &mut HookState, text: &str) -> String {
    match decode_line_number(text) {
        Some(n) => {
            let mut out = anchor_html(n);
            out.push_str(&defaults::codespan(st, &strip_marker(text, n)));
            out
        }
        None => defaults::codespan(st, text),
    }
}

/// Fenced code keeps a single block container; each marked line is
/// re-wrapped in its own code element so its anchor can sit beside it.
/// The whole block is escaped up front, before splicing, so unmarked
/// lines stay correct too.
fn anchored_code_block(st: &mut HookState, code: &str, lang: Option<&str>) -> String {
    let escaped = escape_text(code, true);
    let splice = replace_all(&escaped, Some(("<code>", "</code>")), false);
    if splice.raw.is_empty() {
        return defaults::code_block(st, code, lang);
    }

    let mut out = String::from("<pre");
    if let Some(lang) = lang {
        out.push_str(&format!(" class=\"language-{}\"", escape_text(lang, true)));
    }
    out.push('>');
    out.push_str(&splice.tagged);
    out.push_str("\n</pre>\n");
    out
}

/// Only the link text is inspected; destinations and titles are never
/// tagged by the collaborator.
fn anchored_link(st: &mut HookState, href: &str, title: Option<&str>, text: &str) -> String {
    match decode_line_number(text) {
        Some(n) => anchor_html(n) + &defaults::link(st, href, title, &strip_marker(text, n)),
        None => defaults::link(st, href, title, text),
    }
}

fn anchored_image(st: &mut HookState, src: &str, title: Option<&str>, alt: &str) -> String {
    match decode_line_number(alt) {
        Some(n) => anchor_html(n) + &defaults::image(st, src, title, &strip_marker(alt, n)),
        None => defaults::image(st, src, title, alt),
    }
}

/// Raw HTML passes through as-is per Markdown semantics; anchors are
/// spliced line by line with no further delegation.
fn anchored_html_block(st: &mut HookState, html: &str) -> String {
    defaults::html_block(st, &replace_all(html, None, false).tagged)
}
