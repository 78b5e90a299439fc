//! Renderer configuration forwarded to the underlying parser.

use serde::{Deserialize, Serialize};

/// Parser-wide options, forwarded unchanged to markdown-rs.
///
/// None of these interact with the marker protocol; a marker-free
/// document renders identically whichever hook set is installed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// GitHub Flavored Markdown constructs (tables, strikethrough,
    /// task lists, autolink literals).
    #[serde(default = "default_true")]
    pub gfm: bool,
    /// Render soft line breaks inside paragraphs as `<br />`.
    #[serde(default)]
    pub breaks: bool,
    /// Let raw HTML blocks and inline tags pass through.
    #[serde(default = "default_true")]
    pub raw_html: bool,
    /// Recognize (and drop) YAML frontmatter.
    #[serde(default = "default_true")]
    pub frontmatter: bool,
    /// Prefix prepended to generated heading ids.
    #[serde(default)]
    pub heading_prefix: String,
}

fn default_true() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            gfm: true,
            breaks: false,
            raw_html: true,
            frontmatter: true,
            heading_prefix: String::new(),
        }
    }
}

impl Options {
    /// Converts to markdown-rs `ParseOptions`.
    pub(crate) fn to_parse_options(&self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            html_flow: self.raw_html,
            html_text: self.raw_html,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}
