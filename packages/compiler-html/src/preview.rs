//! Quick preview markup used by the editor's "export HTML" action.
//!
//! Unlike [`compile_to_html`](crate::compile_to_html) the preview embeds its
//! own minimal `<style>` block, renders sections as plain `div`s and images as
//! a bare `<img />`, and silently drops unknown node types.

use crate::compiler::{
    escape_html, CompileOptions, Context, DEFAULT_BUTTON_TEXT, DEFAULT_HEADING_TEXT,
    DEFAULT_IMAGE_ALT, DEFAULT_IMAGE_SRC, DEFAULT_TEXT,
};
use serde_json::Value;
use webbuilder_schema::{camel_to_kebab, NodeType, Props, SchemaNode};

const PREVIEW_STYLES: [&str; 5] = [
    "body { font-family: Arial, sans-serif; margin: 0; padding: 20px; }",
    ".section { padding: 20px; margin: 10px; }",
    ".heading { font-size: 24px; font-weight: bold; margin: 10px 0; }",
    ".text { font-size: 16px; margin: 10px 0; }",
    ".button { padding: 10px 20px; background-color: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer; }",
];

/// Render the editor preview document
pub fn render_preview(nodes: &[SchemaNode]) -> String {
    let mut ctx = Context::new(CompileOptions::default());

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line("<title>Exported Web Builder Content</title>");
    ctx.add_line("<style>");
    ctx.indent();
    for rule in PREVIEW_STYLES {
        ctx.add_line(rule);
    }
    ctx.dedent();
    ctx.add_line("</style>");
    ctx.dedent();
    ctx.add_line("</head>");
    ctx.add_line("<body>");
    ctx.indent();
    for node in nodes {
        preview_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add("</html>");

    ctx.get_output()
}

fn preview_node(node: &SchemaNode, ctx: &mut Context) {
    let style = preview_style_string(&node.props);
    let text = |default: &str| escape_html(&node.display_prop("text").unwrap_or_else(|| default.to_string()));

    match &node.node_type {
        NodeType::Section => {
            ctx.add_line(&format!("<div class=\"section\" style=\"{}\">", style));
            ctx.indent();
            for child in &node.children {
                preview_node(child, ctx);
            }
            ctx.dedent();
            ctx.add_line("</div>");
        }
        NodeType::Heading => ctx.add_line(&format!(
            "<h2 class=\"heading\" style=\"{}\">{}</h2>",
            style,
            text(DEFAULT_HEADING_TEXT)
        )),
        NodeType::Text => ctx.add_line(&format!(
            "<p class=\"text\" style=\"{}\">{}</p>",
            style,
            text(DEFAULT_TEXT)
        )),
        NodeType::Button => ctx.add_line(&format!(
            "<button class=\"button\" style=\"{}\">{}</button>",
            style,
            text(DEFAULT_BUTTON_TEXT)
        )),
        NodeType::Image => {
            let src = node.display_prop("src").unwrap_or_else(|| DEFAULT_IMAGE_SRC.to_string());
            let alt = node.display_prop("alt").unwrap_or_else(|| DEFAULT_IMAGE_ALT.to_string());
            ctx.add_line(&format!(
                "<img src=\"{}\" alt=\"{}\" style=\"{}\" />",
                escape_html(&src),
                escape_html(&alt),
                style
            ));
        }
        NodeType::Unknown(_) => {}
    }
}

/// `key: value;` pairs joined by spaces. Booleans are included, objects,
/// arrays and nulls are skipped.
pub fn preview_style_string(props: &Props) -> String {
    props
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some(format!("{}: {};", camel_to_kebab(key), value))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
