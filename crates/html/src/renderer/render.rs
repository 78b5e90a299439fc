//! Node rendering functions for the mdast walk.
//!
//! Constructs named in the hook table render their content into a
//! captured buffer and hand it to the installed hook; purely
//! structural constructs (lists, tables, emphasis, breaks) render
//! directly, since markers inside them always surface through a hooked
//! construct's content.

use markdown::mdast::{AlignKind, Node, Table, TableRow};

use super::context::{Context, Definition, Scope};

/// Collects reference-style definitions ahead of rendering so
/// `LinkReference` / `ImageReference` nodes can resolve through the
/// link/image hooks.
pub(crate) fn collect_definitions(node: &Node, ctx: &mut Context) {
    if let Node::Definition(def) = node {
        // First definition of a label wins.
        ctx.definitions
            .entry(def.identifier.clone())
            .or_insert_with(|| Definition {
                url: def.url.clone(),
                title: def.title.clone(),
            });
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_definitions(child, ctx);
        }
    }
}

/// Extracts plain text from inline nodes, used as the slug source for
/// headings.
pub(crate) fn plain_text(nodes: &[Node]) -> String {
    let mut text = String::new();
    for node in nodes {
        collect_plain(node, &mut text);
    }
    text.trim().to_string()
}

fn collect_plain(node: &Node, buffer: &mut String) {
    match node {
        Node::Text(t) => buffer.push_str(&t.value),
        Node::InlineCode(code) => buffer.push_str(&code.value),
        Node::Strong(n) => {
            for child in &n.children {
                collect_plain(child, buffer);
            }
        }
        Node::Emphasis(n) => {
            for child in &n.children {
                collect_plain(child, buffer);
            }
        }
        Node::Link(n) => {
            for child in &n.children {
                collect_plain(child, buffer);
            }
        }
        Node::Delete(n) => {
            for child in &n.children {
                collect_plain(child, buffer);
            }
        }
        _ => {}
    }
}

fn render_children(nodes: &[Node], ctx: &mut Context) {
    for node in nodes {
        render_node(node, ctx);
    }
}

fn render_table(table: &Table, ctx: &mut Context) {
    ctx.push_raw("<table>\n<thead>\n");
    if let Some(Node::TableRow(row)) = table.children.first() {
        render_table_row(row, ctx, true, &table.align);
    }
    ctx.push_raw("</thead>\n");

    if table.children.len() > 1 {
        ctx.push_raw("<tbody>\n");
        for row in table.children.iter().skip(1) {
            if let Node::TableRow(row) = row {
                render_table_row(row, ctx, false, &table.align);
            }
        }
        ctx.push_raw("</tbody>\n");
    }

    ctx.push_raw("</table>\n");
}

/// Cells go through the table-cell hook one at a time, never the whole
/// row, so marker handling cannot disturb column boundaries.
fn render_table_row(row: &TableRow, ctx: &mut Context, is_header: bool, aligns: &[AlignKind]) {
    ctx.push_raw("<tr>\n");
    for (i, cell) in row.children.iter().enumerate() {
        if let Node::TableCell(cell) = cell {
            let align = match aligns.get(i) {
                Some(AlignKind::Left) => " align=\"left\"",
                Some(AlignKind::Right) => " align=\"right\"",
                Some(AlignKind::Center) => " align=\"center\"",
                _ => "",
            };
            let text = ctx.capture(|ctx| render_children(&cell.children, ctx));
            ctx.emit_table_cell(&text, is_header, align);
        }
    }
    ctx.push_raw("</tr>\n");
}

/// Recursively renders an AST node into the context buffer.
pub(crate) fn render_node(node: &Node, ctx: &mut Context) {
    match node {
        Node::Root(root) => render_children(&root.children, ctx),
        Node::Text(text) => ctx.push_text(&text.value),
        Node::Paragraph(para) => {
            if ctx.is_in_tight_list() {
                // Tight list items hold bare phrasing content; any
                // markers surface through the list-item hook instead.
                render_children(&para.children, ctx);
            } else {
                let text = ctx.capture(|ctx| render_children(&para.children, ctx));
                ctx.emit_paragraph(&text);
            }
        }
        Node::Heading(heading) => {
            let text = ctx.capture(|ctx| render_children(&heading.children, ctx));
            let plain = plain_text(&heading.children);
            ctx.emit_heading(&text, &plain, heading.depth);
        }
        Node::Strong(strong) => {
            ctx.push_raw("<strong>");
            render_children(&strong.children, ctx);
            ctx.push_raw("</strong>");
        }
        Node::Emphasis(emphasis) => {
            ctx.push_raw("<em>");
            render_children(&emphasis.children, ctx);
            ctx.push_raw("</em>");
        }
        Node::Delete(delete) => {
            ctx.push_raw("<del>");
            render_children(&delete.children, ctx);
            ctx.push_raw("</del>");
        }
        Node::Blockquote(quote) => {
            ctx.push_raw("<blockquote>\n");
            render_children(&quote.children, ctx);
            ctx.push_raw("</blockquote>\n");
        }
        Node::InlineCode(code) => ctx.emit_codespan(&code.value),
        Node::Code(code) => ctx.emit_code_block(&code.value, code.lang.as_deref()),
        Node::List(list) => {
            let tag = if list.ordered { "ol" } else { "ul" };
            ctx.push_raw(&format!("<{tag}>\n"));
            ctx.enter(Scope::List {
                spread: list.spread,
            });
            render_children(&list.children, ctx);
            ctx.exit();
            ctx.push_raw(&format!("</{tag}>\n"));
        }
        Node::ListItem(item) => {
            let text = ctx.capture(|ctx| render_children(&item.children, ctx));
            ctx.emit_list_item(&text, item.checked);
        }
        Node::Table(table) => render_table(table, ctx),
        Node::TableRow(_) | Node::TableCell(_) => {}
        Node::Link(link) => {
            let text = ctx.capture(|ctx| render_children(&link.children, ctx));
            ctx.emit_link(&link.url, link.title.as_deref(), &text);
        }
        Node::Image(image) => ctx.emit_image(&image.url, image.title.as_deref(), &image.alt),
        Node::LinkReference(link) => {
            let text = ctx.capture(|ctx| render_children(&link.children, ctx));
            match ctx.definitions.get(&link.identifier) {
                Some(def) => {
                    let (url, title) = (def.url.clone(), def.title.clone());
                    ctx.emit_link(&url, title.as_deref(), &text);
                }
                None => {
                    // Unresolved references fall back to literal text.
                    ctx.push_raw("[");
                    ctx.push_raw(&text);
                    ctx.push_raw("]");
                }
            }
        }
        Node::ImageReference(image) => match ctx.definitions.get(&image.identifier) {
            Some(def) => {
                let (url, title) = (def.url.clone(), def.title.clone());
                ctx.emit_image(&url, title.as_deref(), &image.alt);
            }
            None => {
                ctx.push_raw("[");
                ctx.push_text(&image.alt);
                ctx.push_raw("]");
            }
        },
        Node::Html(html) => ctx.emit_html_block(&html.value),
        Node::Break(_) => ctx.push_raw("<br />\n"),
        Node::ThematicBreak(_) => ctx.push_raw("<hr />\n"),
        Node::Definition(_) => {}
        Node::Yaml(_) | Node::Toml(_) => {}
        other => {
            log::warn!("unhandled markdown node: {:?}", other);
        }
    }
}
