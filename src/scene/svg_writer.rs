use crate::scene::node::SceneNode;

/// Serializes a scene tree to SVG markup.
///
/// Output is deterministic: attributes appear in insertion order and child
/// elements in append order. Elements without children or text self-close.
#[must_use]
pub fn write_svg(node: &SceneNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &SceneNode, out: &mut String) {
    let tag = node.kind().tag_name();
    out.push('<');
    out.push_str(tag);
    for (name, value) in node.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }

    if node.children().is_empty() && node.text().is_none() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(text) = node.text() {
        escape_into(text, out);
    }
    for child in node.children() {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
