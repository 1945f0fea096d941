use serde_json::Value;
use webbuilder_schema::{NodeType, Props};

pub const DEFAULT_IMPORTED_SRC: &str = "https://placehold.co/300x200";
pub const DEFAULT_IMPORTED_ALT: &str = "Imported image";

const MAX_BUTTON_TEXT: usize = 50;

const HEADING_DEFAULTS: &[(&str, &str)] = &[
    ("fontSize", "24px"),
    ("fontWeight", "bold"),
    ("color", "#1f2937"),
    ("margin", "10px 0"),
];

const TEXT_DEFAULTS: &[(&str, &str)] = &[
    ("fontSize", "16px"),
    ("color", "#374151"),
    ("lineHeight", "1.5"),
    ("margin", "10px 0"),
];

const IMAGE_DEFAULTS: &[(&str, &str)] = &[("width", "100%"), ("borderRadius", "4px")];

const BUTTON_DEFAULTS: &[(&str, &str)] = &[
    ("backgroundColor", "#3b82f6"),
    ("color", "#ffffff"),
    ("padding", "10px 20px"),
    ("borderRadius", "6px"),
    ("border", "none"),
    ("cursor", "pointer"),
    ("fontSize", "16px"),
];

const SECTION_DEFAULTS: &[(&str, &str)] = &[
    ("padding", "20px"),
    ("margin", "10px"),
    ("backgroundColor", "#ffffff"),
    ("borderRadius", "8px"),
];

/// Element content the enrichment step reads
#[derive(Debug, Default, Clone)]
pub struct ElementContent {
    /// Trimmed descendant text
    pub text: String,
    pub title: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
}

/// Baseline style props per type, used to fill gaps after extraction
pub fn style_defaults(node_type: &NodeType) -> &'static [(&'static str, &'static str)] {
    match node_type {
        NodeType::Heading => HEADING_DEFAULTS,
        NodeType::Text => TEXT_DEFAULTS,
        NodeType::Image => IMAGE_DEFAULTS,
        NodeType::Button => BUTTON_DEFAULTS,
        NodeType::Section => SECTION_DEFAULTS,
        NodeType::Unknown(_) => &[],
    }
}

/// Set content props from the element, then fill missing style props
pub fn enrich_props(node_type: &NodeType, content: &ElementContent, props: &mut Props) {
    match node_type {
        NodeType::Heading => {
            set(props, "text", non_empty(&content.text).unwrap_or("Heading"));
        }
        NodeType::Text => {
            set(props, "text", non_empty(&content.text).unwrap_or("Sample text content"));
        }
        NodeType::Button => {
            let text = non_empty(&content.text)
                .or_else(|| content.title.as_deref().and_then(non_empty))
                .unwrap_or("Button");
            let text: String = text.chars().take(MAX_BUTTON_TEXT).collect();
            set(props, "text", &text);
        }
        NodeType::Image => {
            let src = content.src.as_deref().and_then(non_empty).unwrap_or(DEFAULT_IMPORTED_SRC);
            let alt = content.alt.as_deref().and_then(non_empty).unwrap_or(DEFAULT_IMPORTED_ALT);
            set(props, "src", src);
            set(props, "alt", alt);
        }
        NodeType::Section | NodeType::Unknown(_) => {}
    }

    for (key, value) in style_defaults(node_type) {
        let missing = props
            .get(*key)
            .map_or(true, |v| v.as_str().is_some_and(str::is_empty));
        if missing {
            set(props, key, value);
        }
    }
}

fn set(props: &mut Props, key: &str, value: &str) {
    props.insert(key.to_string(), Value::String(value.to_string()));
}

fn non_empty(text: &str) -> Option<&str> {
    Some(text).filter(|t| !t.is_empty())
}
