//! Rendering context for the mdast walk.

use std::collections::HashMap;

use anchormark_core::escape_text;

use super::hooks::{HookState, Hooks};
use crate::Options;

/// A reference-style link/image definition collected before rendering.
pub(crate) struct Definition {
    pub url: String,
    pub title: Option<String>,
}

/// Scopes entered while walking the tree. Only list scopes matter:
/// tight lists suppress `<p>` wrappers around item content.
pub(crate) enum Scope {
    List { spread: bool },
}

/// Tracks the output buffer, hook table, and per-pass state while the
/// tree is walked. All of it is request-scoped; a new context is built
/// for every render call.
pub(crate) struct Context {
    out: String,
    hooks: Hooks,
    st: HookState,
    stack: Vec<Scope>,
    pub definitions: HashMap<String, Definition>,
}

impl Context {
    pub fn new(options: &Options, hooks: Hooks) -> Self {
        Self {
            out: String::with_capacity(4096),
            hooks,
            st: HookState::new(options),
            stack: Vec::new(),
            definitions: HashMap::new(),
        }
    }

    /// Writes a raw string without escaping (for safe HTML tags).
    pub fn push_raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Writes text content with non-strict HTML escaping, so entity
    /// references the parser left literal are not double-escaped.
    pub fn push_text(&mut self, s: &str) {
        self.out.push_str(&escape_text(s, false));
    }

    /// Renders through `f` into a detached buffer and returns it,
    /// leaving the main buffer untouched. Used to hand a construct's
    /// fully rendered content to its formatting hook.
    pub fn capture(&mut self, f: impl FnOnce(&mut Self)) -> String {
        let saved = std::mem::take(&mut self.out);
        f(self);
        std::mem::replace(&mut self.out, saved)
    }

    pub fn enter(&mut self, scope: Scope) {
        self.stack.push(scope);
    }

    pub fn exit(&mut self) {
        self.stack.pop();
    }

    /// True when the nearest enclosing list is tight (not spread);
    /// such items hold bare phrasing content without `<p>` wrappers.
    pub fn is_in_tight_list(&self) -> bool {
        self.stack
            .iter()
            .rev()
            .find(|scope| matches!(scope, Scope::List { .. }))
            .is_some_and(|scope| matches!(scope, Scope::List { spread: false }))
    }

    pub fn emit_heading(&mut self, text: &str, plain: &str, depth: u8) {
        let html = (self.hooks.heading)(&mut self.st, text, plain, depth);
        self.out.push_str(&html);
    }

    pub fn emit_paragraph(&mut self, text: &str) {
        let html = (self.hooks.paragraph)(&mut self.st, text);
        self.out.push_str(&html);
    }

    pub fn emit_list_item(&mut self, text: &str, checked: Option<bool>) {
        let html = (self.hooks.list_item)(&mut self.st, text, checked);
        self.out.push_str(&html);
    }

    pub fn emit_table_cell(&mut self, text: &str, header: bool, align: &str) {
        let html = (self.hooks.table_cell)(&mut self.st, text, header, align);
        self.out.push_str(&html);
    }

    pub fn emit_codespan(&mut self, text: &str) {
        let html = (self.hooks.codespan)(&mut self.st, text);
        self.out.push_str(&html);
    }

    pub fn emit_code_block(&mut self, code: &str, lang: Option<&str>) {
        let html = (self.hooks.code_block)(&mut self.st, code, lang);
        self.out.push_str(&html);
    }

    pub fn emit_link(&mut self, href: &str, title: Option<&str>, text: &str) {
        let html = (self.hooks.link)(&mut self.st, href, title, text);
        self.out.push_str(&html);
    }

    pub fn emit_image(&mut self, src: &str, title: Option<&str>, alt: &str) {
        let html = (self.hooks.image)(&mut self.st, src, title, alt);
        self.out.push_str(&html);
    }

    pub fn emit_html_block(&mut self, html: &str) {
        let html = (self.hooks.html_block)(&mut self.st, html);
        self.out.push_str(&html);
    }

    /// Consumes the context and returns the accumulated HTML.
    pub fn finish(self) -> String {
        self.out
    }
}
