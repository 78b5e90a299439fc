//! Default per-construct formatting: the delegation target every hook
//! set composes with. Structural output and escaping live here so
//! override sets never reimplement them.

use anchormark_core::escape_text;

use super::hooks::HookState;

pub(crate) fn heading(st: &mut HookState, text: &str, plain: &str, depth: u8) -> String {
    let slug = st.slug(plain);
    format!(
        "<h{depth} id=\"{}{}\">{text}</h{depth}>\n",
        st.heading_prefix(),
        slug
    )
}

pub(crate) fn paragraph(st: &mut HookState, text: &str) -> String {
    if st.breaks() {
        format!("<p>{}</p>\n", text.replace('\n', "<br />\n"))
    } else {
        format!("<p>{text}</p>\n")
    }
}

pub(crate) fn list_item(_st: &mut HookState, text: &str, checked: Option<bool>) -> String {
    match checked {
        Some(done) => format!(
            "<li class=\"task-list-item\"><input type=\"checkbox\" disabled{} /> {text}</li>\n",
            if done { " checked" } else { "" }
        ),
        None => format!("<li>{text}</li>\n"),
    }
}

pub(crate) fn table_cell(_st: &mut HookState, text: &str, header: bool, align: &str) -> String {
    let tag = if header { "th" } else { "td" };
    format!("<{tag}{align}>{text}</{tag}>\n")
}

pub(crate) fn codespan(_st: &mut HookState, text: &str) -> String {
    format!("<code>{}</code>", escape_text(text, true))
}

pub(crate) fn code_block(_st: &mut HookState, code: &str, lang: Option<&str>) -> String {
    match lang {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">{}\n</code></pre>\n",
            escape_text(lang, true),
            escape_text(code, true)
        ),
        None => format!("<pre><code>{}\n</code></pre>\n", escape_text(code, true)),
    }
}

pub(crate) fn link(_st: &mut HookState, href: &str, title: Option<&str>, text: &str) -> String {
    let mut out = format!("<a href=\"{}\"", escape_text(href, true));
    if let Some(title) = title {
        out.push_str(&format!(" title=\"{}\"", escape_text(title, true)));
    }
    out.push('>');
    out.push_str(text);
    out.push_str("</a>");
    out
}

pub(crate) fn image(_st: &mut HookState, src: &str, title: Option<&str>, alt: &str) -> String {
    let mut out = format!(
        "<img src=\"{}\" alt=\"{}\"",
        escape_text(src, true),
        escape_text(alt, true)
    );
    if let Some(title) = title {
        out.push_str(&format!(" title=\"{}\"", escape_text(title, true)));
    }
    out.push_str(" />");
    out
}

pub(crate) fn html_block(_st: &mut HookState, html: &str) -> String {
    html.to_string()
}
