//! End-to-end properties of the line-anchor protocol.

use anchormark_core::{MARKER, anchor_html, anchor_id, encode_marker, line_for_anchor_id};
use anchormark_html::{Hooks, Options, render, render_with_hooks};

fn defaults() -> Options {
    Options::default()
}

#[test]
fn passthrough_is_byte_identical_without_markers() {
    let input = "\
# One

A paragraph with **bold**, *em*, ~~del~~, `span`, and a [link](https://a.b \"t\").

- first
- second

| h1 | h2 |
| :- | -: |
| a  | b  |

```rust
fn main() {}
```

![pic](img.png)

<div class=\"raw\">kept</div>

---
";
    let anchored = render(input, &defaults()).unwrap();
    let plain = render_with_hooks(input, &defaults(), Hooks::plain()).unwrap();
    assert_eq!(anchored, plain);
    assert!(!anchored.contains(MARKER));
}

#[test]
fn every_tagged_line_gets_exactly_one_decodable_anchor() {
    let input = format!(
        "# {}Title\n\n{}first para\n\n- {}item one\n- item two\n",
        encode_marker(1),
        encode_marker(3),
        encode_marker(5)
    );
    let html = render(&input, &defaults()).unwrap();

    for line in [1usize, 3, 5] {
        let id = anchor_id(line);
        assert_eq!(html.matches(&id).count(), 2, "href + id for line {line}");
        assert_eq!(line_for_anchor_id(&id), Some(line));
    }
    assert!(!html.contains(MARKER));
}

#[test]
fn heading_slug_is_stable_under_tagging() {
    let tagged = render(&format!("## {}Setup", encode_marker(1)), &defaults()).unwrap();
    let untagged = render("## Setup", &defaults()).unwrap();

    assert_eq!(untagged, "<h2 id=\"setup\">Setup</h2>\n");
    assert_eq!(
        tagged,
        format!("<h2 id=\"setup\">{}Setup</h2>\n", anchor_html(1))
    );
}

#[test]
fn fenced_code_keeps_single_block_and_wraps_marked_lines() {
    let input = format!(
        "```rust\n{}fn main() {{}}\nlet x = a < b;\n{}done()\n```\n",
        encode_marker(10),
        encode_marker(12)
    );
    let html = render(&input, &defaults()).unwrap();

    assert_eq!(
        html,
        format!(
            "<pre class=\"language-rust\">{}<code>fn main() {{}}</code>\nlet x = a &lt; b;\n{}<code>done()</code>\n</pre>\n",
            anchor_html(10),
            anchor_html(12)
        )
    );
    assert_eq!(html.matches("<pre").count(), 1);
    assert!(!html.contains(MARKER));
}

#[test]
fn fenced_code_without_markers_uses_default_block() {
    let html = render("```rust\nlet x = a < b;\n```\n", &defaults()).unwrap();
    assert_eq!(
        html,
        "<pre><code class=\"language-rust\">let x = a &lt; b;\n</code></pre>\n"
    );
}

#[test]
fn marked_table_cell_leaves_siblings_untouched() {
    let input = format!(
        "| a | b |\n| - | - |\n| {}x | y |\n",
        encode_marker(3)
    );
    let html = render(&input, &defaults()).unwrap();

    assert_eq!(
        html,
        format!(
            "<table>\n<thead>\n<tr>\n<th>a</th>\n<th>b</th>\n</tr>\n</thead>\n<tbody>\n<tr>\n<td>{}x</td>\n<td>y</td>\n</tr>\n</tbody>\n</table>\n",
            anchor_html(3)
        )
    );
}

#[test]
fn table_alignment_is_preserved() {
    let input = "| a | b |\n| :- | -: |\n| c | d |\n";
    let html = render(input, &defaults()).unwrap();
    assert!(html.contains("<th align=\"left\">a</th>"));
    assert!(html.contains("<th align=\"right\">b</th>"));
    assert!(html.contains("<td align=\"left\">c</td>"));
    assert!(html.contains("<td align=\"right\">d</td>"));
}

#[test]
fn codespan_anchor_sits_outside_the_code_element() {
    let input = format!("Use `{}rm -rf`.", encode_marker(5));
    let html = render(&input, &defaults()).unwrap();
    assert_eq!(
        html,
        format!("<p>Use {}<code>rm -rf</code>.</p>\n", anchor_html(5))
    );
}

#[test]
fn link_text_marker_moves_before_the_anchor_element() {
    let input = format!(
        "[{}docs](https://example.com \"T\")",
        encode_marker(7)
    );
    let html = render(&input, &defaults()).unwrap();
    assert_eq!(
        html,
        format!(
            "<p>{}<a href=\"https://example.com\" title=\"T\">docs</a></p>\n",
            anchor_html(7)
        )
    );
}

#[test]
fn image_alt_marker_is_stripped() {
    let input = format!("![{}alt text](img.png)", encode_marker(9));
    let html = render(&input, &defaults()).unwrap();
    assert_eq!(
        html,
        format!(
            "<p>{}<img src=\"img.png\" alt=\"alt text\" /></p>\n",
            anchor_html(9)
        )
    );
}

#[test]
fn raw_html_block_passes_through_with_anchor() {
    let input = format!("<div class=\"x\">{}\n</div>\n", encode_marker(2));
    let html = render(&input, &defaults()).unwrap();
    assert!(html.starts_with(&anchor_html(2)));
    assert!(html.contains("<div class=\"x\">"));
    assert!(html.contains("</div>"));
    assert!(!html.contains(MARKER));
}

#[test]
fn tight_list_items_carry_anchors() {
    let input = format!("- {}one\n- two\n", encode_marker(4));
    let html = render(&input, &defaults()).unwrap();
    assert_eq!(
        html,
        format!(
            "<ul>\n<li>{}one</li>\n<li>two</li>\n</ul>\n",
            anchor_html(4)
        )
    );
}

#[test]
fn task_list_items_keep_checkbox_and_anchor() {
    let input = format!("- [x] {}done\n- [ ] open\n", encode_marker(8));
    let html = render(&input, &defaults()).unwrap();
    assert!(html.contains(&format!(
        "<li class=\"task-list-item\"><input type=\"checkbox\" disabled checked /> {}done</li>",
        anchor_html(8)
    )));
    assert!(html.contains(
        "<li class=\"task-list-item\"><input type=\"checkbox\" disabled /> open</li>"
    ));
}

#[test]
fn malformed_marker_field_renders_without_anchor() {
    // Truncated digit field: no line info, marker passes through
    // verbatim and rendering does not fail.
    let input = format!("before {}12 after", MARKER);
    let html = render(&input, &defaults()).unwrap();
    assert!(html.contains(MARKER));
    assert!(!html.contains("<a "));
}

#[test]
fn duplicate_line_numbers_emit_duplicate_anchors() {
    // A mis-tagging collaborator is not corrected here.
    let input = format!("{}a\n\n{}b\n", encode_marker(6), encode_marker(6));
    let html = render(&input, &defaults()).unwrap();
    assert_eq!(html.matches(&format!("id=\"{}\"", anchor_id(6))).count(), 2);
}

#[test]
fn whole_document_snapshot() {
    let input = format!(
        "# {}Title\n\nbody {}text\n",
        encode_marker(1),
        encode_marker(3)
    );
    let html = render(&input, &defaults()).unwrap();
    // Swap the reversed-marker id prefix for something readable.
    let id_prefix: String = MARKER.chars().rev().collect();
    let normalized = html.replace(&id_prefix, "line-");
    insta::assert_snapshot!(normalized.trim_end(), @r##"
    <h1 id="title"><a style="position: relative;" href="#line-000001" id="line-000001"></a>Title</h1>
    <p><a style="position: relative;" href="#line-000003" id="line-000003"></a>body text</p>
    "##);
}
