//! Heading slug generation for stable, addressable heading ids.
//!
//! Slugs are derived from cleaned heading text, so a tagged heading
//! and its untagged counterpart produce the same id.

use std::collections::HashMap;

/// Slugifies heading text: lowercase, with every run of non-word
/// characters collapsed to a single hyphen.
///
/// Unicode letters and digits are kept (lowercased where possible);
/// an empty result falls back to `"heading"`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch.to_ascii_lowercase());
            in_run = false;
        } else if !ch.is_ascii() && ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("heading");
    }
    slug
}

/// Per-document slug generator that keeps repeated headings unique.
#[derive(Debug, Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next slug for the given heading text, suffixing
    /// `-1`, `-2`, … on repeats.
    pub fn next_slug(&mut self, text: &str) -> String {
        let mut slug = slugify(text);
        let count = self.counts.entry(slug.clone()).or_insert(0);
        if *count > 0 {
            slug.push_str(&format!("-{}", *count));
        }
        *count += 1;
        slug
    }
}
