//! The mdast-driven renderer: parse, walk, format through hooks.

mod context;
mod defaults;
pub mod hooks;
mod render;

use context::Context;
use hooks::Hooks;
use render::{collect_definitions, render_node};

use crate::{Options, RenderError};

/// Renders line-tagged Markdown to HTML with zero-width line anchors.
///
/// Equivalent to [`render_with_hooks`] with [`Hooks::line_anchored`].
/// Input with no markers renders byte-identical to the plain table.
pub fn render(input: &str, options: &Options) -> Result<String, RenderError> {
    render_with_hooks(input, options, Hooks::line_anchored())
}

/// Renders Markdown through an explicit formatting table.
pub fn render_with_hooks(
    input: &str,
    options: &Options,
    hooks: Hooks,
) -> Result<String, RenderError> {
    let tree = markdown::to_mdast(input, &options.to_parse_options())
        .map_err(RenderError::from_message)?;

    let mut ctx = Context::new(options, hooks);
    collect_definitions(&tree, &mut ctx);
    render_node(&tree, &mut ctx);
    Ok(ctx.finish())
}
