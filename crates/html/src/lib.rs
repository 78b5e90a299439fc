#![deny(missing_docs)]
//! Line-anchored Markdown to HTML rendering.
//!
//! Given Markdown source in which some physical lines carry an
//! invisible marker (see [`anchormark_core::encode_marker`]), this
//! crate renders HTML where each tagged line is preceded by a
//! zero-width anchor element whose id encodes the source line number.
//! An editor preview pane can then scroll to the anchor for the line
//! under the cursor via [`anchormark_core::anchor_id`].
//!
//! Input without markers renders byte-identical to the unmodified
//! formatting table, so the annotation layer is strictly additive.
//!
//! ```
//! use anchormark_core::{anchor_id, encode_marker};
//! use anchormark_html::{Options, render};
//!
//! let source = format!("## {}Setup", encode_marker(4));
//! let html = render(&source, &Options::default()).unwrap();
//! assert!(html.contains(&anchor_id(4)));
//! ```

mod error;
mod options;
mod renderer;

pub use error::RenderError;
pub use options::Options;
pub use renderer::hooks::{HookState, Hooks};
pub use renderer::{render, render_with_hooks};
