use tracing::{debug, warn};
use webbuilder_compiler_css::STYLESHEET_FILE;
use webbuilder_schema::{camel_to_kebab, prop_as_style_value, NodeType, Props, SchemaNode};

pub const DEFAULT_HEADING_TEXT: &str = "Heading";
pub const DEFAULT_TEXT: &str = "Sample text content";
pub const DEFAULT_BUTTON_TEXT: &str = "Button";
pub const DEFAULT_IMAGE_SRC: &str = "https://placehold.co/300x200";
pub const DEFAULT_IMAGE_ALT: &str = "Placeholder image";

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Document title
    pub title: String,
    /// Indentation string
    pub indent: String,
    /// Append the inline service worker registration script
    pub register_service_worker: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            title: "Generated Web App".to_string(),
            indent: "  ".to_string(),
            register_service_worker: true,
        }
    }
}

pub(crate) struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    pub(crate) fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub(crate) fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn add_line(&mut self, text: &str) {
        self.add_indent();
        self.add(text);
        self.add("\n");
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    pub(crate) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub(crate) fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a schema forest to a complete HTML document
///
/// Nodes are emitted depth-first in array order. Unknown node types become a
/// visible diagnostic block instead of failing the document.
pub fn compile_to_html(nodes: &[SchemaNode], options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    compile_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<div class=\"app-container\">");
    ctx.indent();

    for node in nodes {
        compile_node(node, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");

    if ctx.options.register_service_worker {
        compile_registration_script(&mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add("</html>");

    debug!(roots = nodes.len(), "Compiled HTML document");
    ctx.get_output()
}

/// Compile a forest to the node fragments only, without the document shell
pub fn compile_fragments(nodes: &[SchemaNode], options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    for node in nodes {
        compile_node(node, &mut ctx);
    }
    ctx.get_output()
}

fn compile_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
    ctx.add_line(&title);
    ctx.add_line(&format!("<link rel=\"stylesheet\" href=\"{}\">", STYLESHEET_FILE));
    ctx.add_line("<link rel=\"manifest\" href=\"manifest.json\">");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_registration_script(ctx: &mut Context) {
    const SCRIPT: [&str; 11] = [
        "if ('serviceWorker' in navigator) {",
        "  window.addEventListener('load', function() {",
        "    navigator.serviceWorker.register('service-worker.js')",
        "      .then(function(registration) {",
        "        console.log('ServiceWorker registration successful');",
        "      })",
        "      .catch(function(err) {",
        "        console.log('ServiceWorker registration failed');",
        "      });",
        "  });",
        "}",
    ];

    ctx.add_line("<script>");
    ctx.indent();
    for line in SCRIPT {
        ctx.add_line(line);
    }
    ctx.dedent();
    ctx.add_line("</script>");
}

pub(crate) fn compile_node(node: &SchemaNode, ctx: &mut Context) {
    let style = generate_style_string(&node.props);

    match &node.node_type {
        NodeType::Section => {
            let open = format!("<section class=\"section\" style=\"{}\">", style);
            if node.children.is_empty() {
                ctx.add_line(&format!("{}</section>", open));
                return;
            }

            ctx.add_line(&open);
            ctx.indent();
            for child in &node.children {
                compile_node(child, ctx);
            }
            ctx.dedent();
            ctx.add_line("</section>");
        }

        NodeType::Heading => {
            let text = text_or(node, DEFAULT_HEADING_TEXT);
            ctx.add_line(&format!(
                "<h2 class=\"heading\" style=\"{}\">{}</h2>",
                style, text
            ));
        }

        NodeType::Text => {
            let text = text_or(node, DEFAULT_TEXT);
            ctx.add_line(&format!("<p class=\"text\" style=\"{}\">{}</p>", style, text));
        }

        NodeType::Image => {
            let src = node.display_prop("src").unwrap_or_else(|| DEFAULT_IMAGE_SRC.to_string());
            let alt = node.display_prop("alt").unwrap_or_else(|| DEFAULT_IMAGE_ALT.to_string());
            ctx.add_line(&format!(
                "<div class=\"image-container\"><img class=\"image\" src=\"{}\" alt=\"{}\" style=\"{}\"></div>",
                escape_html(&src),
                escape_html(&alt),
                style
            ));
        }

        NodeType::Button => {
            let text = text_or(node, DEFAULT_BUTTON_TEXT);
            ctx.add_line(&format!(
                "<button class=\"button\" style=\"{}\">{}</button>",
                style, text
            ));
        }

        NodeType::Unknown(name) => {
            warn!(node_id = %node.id, node_type = %name, "Rendering unknown element type as placeholder");
            ctx.add_line(&format!(
                "<div class=\"unknown\" style=\"color: #999; font-style: italic;\">Unknown element type: {}</div>",
                escape_html(name)
            ));
        }
    }
}

fn text_or(node: &SchemaNode, default: &str) -> String {
    escape_html(&node.display_prop("text").unwrap_or_else(|| default.to_string()))
}

/// Convert props to an inline style attribute value
///
/// One `kebab-key:value;` fragment per string or number prop, in prop order.
/// Values are emitted verbatim. If two keys map to the same CSS property
/// (`fontSize` and `font-size`), the later value replaces the earlier one in
/// the earlier position.
pub fn generate_style_string(props: &Props) -> String {
    style_declarations(props)
        .into_iter()
        .map(|(property, value)| format!("{}:{};", property, value))
        .collect()
}

pub(crate) fn style_declarations(props: &Props) -> Vec<(String, String)> {
    let mut declarations: Vec<(String, String)> = Vec::with_capacity(props.len());

    for (key, value) in props {
        let Some(value) = prop_as_style_value(value) else {
            continue;
        };
        let property = camel_to_kebab(key);
        match declarations.iter_mut().find(|(existing, _)| *existing == property) {
            Some(slot) => slot.1 = value,
            None => declarations.push((property, value)),
        }
    }

    declarations
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
