use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::path::Path;
use tracing::{debug, info, warn};
use webbuilder_schema::{Forest, IdGenerator, SchemaNode};

use crate::classify::{ClassificationStrategy, DefaultClassifier, ElementInfo};
use crate::enrich::{enrich_props, ElementContent};
use crate::error::ImportError;
use crate::styles::{
    class_styles, layer_styles, parse_css, parse_declarations, CssRules, StylePrecedence,
};

/// Tags that never produce schema nodes
pub const SKIPPED_TAGS: [&str; 5] = ["script", "style", "link", "meta", "title"];

/// Wrapper the HTML compiler puts around the whole page
const APP_CONTAINER_CLASS: &str = "app-container";
/// Wrapper the HTML compiler puts around every image
const IMAGE_CONTAINER_CLASS: &str = "image-container";

/// Options for HTML import
pub struct ImportOptions {
    pub classifier: Box<dyn ClassificationStrategy>,
    pub precedence: StylePrecedence,
    /// Look through the wrappers emitted by the HTML compiler
    pub unwrap_export_wrappers: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            classifier: Box::new(DefaultClassifier::default()),
            precedence: StylePrecedence::default(),
            unwrap_export_wrappers: true,
        }
    }
}

impl std::fmt::Debug for ImportOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportOptions")
            .field("precedence", &self.precedence)
            .field("unwrap_export_wrappers", &self.unwrap_export_wrappers)
            .finish_non_exhaustive()
    }
}

/// Converts HTML documents into schema forests
pub struct Importer {
    options: ImportOptions,
    ids: IdGenerator,
}

impl Importer {
    /// `id_seed` keys the generated ids, typically the source file path
    pub fn new(options: ImportOptions, id_seed: &str) -> Self {
        Self {
            options,
            ids: IdGenerator::new(id_seed),
        }
    }

    /// Import the body of an HTML document
    pub fn import(&mut self, html: &str, css: Option<&str>) -> Forest {
        let rules = css.map(parse_css).unwrap_or_default();
        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let forest = match find_element(&dom.document, "body") {
            Some(body) => self.import_children(&body, &rules, true),
            None => Vec::new(),
        };

        info!(
            roots = forest.len(),
            nodes = forest.iter().map(SchemaNode::subtree_len).sum::<usize>(),
            css_rules = rules.len(),
            "HTML import complete"
        );
        forest
    }

    fn import_children(
        &mut self,
        parent: &Handle,
        rules: &CssRules,
        top_level: bool,
    ) -> Vec<SchemaNode> {
        let mut nodes = Vec::new();

        for child in element_children(parent) {
            let tag = tag_name(&child).unwrap_or_default();
            if SKIPPED_TAGS.contains(&tag.as_str()) {
                continue;
            }

            if self.options.unwrap_export_wrappers {
                if top_level && tag == "div" && has_class(&child, APP_CONTAINER_CLASS) {
                    nodes.extend(self.import_children(&child, rules, false));
                    continue;
                }
                if let Some(img) = wrapped_image(&child) {
                    nodes.push(self.import_element(&img, rules));
                    continue;
                }
            }

            nodes.push(self.import_element(&child, rules));
        }

        nodes
    }

    fn import_element(&mut self, handle: &Handle, rules: &CssRules) -> SchemaNode {
        let info = ElementInfo {
            tag: tag_name(handle).unwrap_or_default(),
            class: attr(handle, "class").unwrap_or_default(),
            element_child_count: element_children(handle).len(),
        };
        let node_type = self.options.classifier.classify(&info);

        let inline = parse_declarations(&attr(handle, "style").unwrap_or_default());
        let class = class_styles(&info.class, rules);
        let mut props = layer_styles(inline, class, self.options.precedence);

        let content = ElementContent {
            text: text_content(handle).trim().to_string(),
            title: attr(handle, "title"),
            src: attr(handle, "src"),
            alt: attr(handle, "alt"),
        };
        enrich_props(&node_type, &content, &mut props);

        let id = self.ids.next_id(&node_type);
        debug!(node_id = %id, tag = %info.tag, node_type = %node_type, "Imported element");

        SchemaNode {
            id,
            node_type,
            props,
            children: self.import_children(handle, rules, false),
        }
    }
}

/// Import an HTML string, seeding ids with `"inline"`
pub fn import_html(html: &str, css: Option<&str>, options: ImportOptions) -> Forest {
    Importer::new(options, "inline").import(html, css)
}

/// Import an HTML file, optionally with a stylesheet
///
/// An unreadable stylesheet is not fatal: the import continues without
/// class-derived styles.
pub fn import_files(
    html_path: &Path,
    css_path: Option<&Path>,
    options: ImportOptions,
) -> Result<Forest, ImportError> {
    let html = std::fs::read_to_string(html_path).map_err(|source| ImportError::Io {
        path: html_path.to_path_buf(),
        source,
    })?;

    let css = css_path.and_then(|path| match std::fs::read_to_string(path) {
        Ok(css) => Some(css),
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "CSS file not found or readable, proceeding without CSS"
            );
            None
        }
    });

    let mut importer = Importer::new(options, &html_path.display().to_string());
    Ok(importer.import(&html, css.as_deref()))
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if tag_name(handle).as_deref() == Some(tag) {
        return Some(handle.clone());
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

fn tag_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_string().to_ascii_lowercase()),
        _ => None,
    }
}

fn attr(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

fn has_class(handle: &Handle, class: &str) -> bool {
    attr(handle, "class").is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

fn element_children(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// `<div class="image-container"><img></div>` → the `img`
fn wrapped_image(handle: &Handle) -> Option<Handle> {
    if tag_name(handle).as_deref() != Some("div") || !has_class(handle, IMAGE_CONTAINER_CLASS) {
        return None;
    }
    match element_children(handle).as_slice() {
        [only] if tag_name(only).as_deref() == Some("img") => Some(only.clone()),
        _ => None,
    }
}

/// Concatenated text of all descendants
fn text_content(handle: &Handle) -> String {
    fn collect(handle: &Handle, out: &mut String) {
        if let NodeData::Text { contents } = &handle.data {
            out.push_str(&contents.borrow());
        }
        for child in handle.children.borrow().iter() {
            collect(child, out);
        }
    }

    let mut out = String::new();
    collect(handle, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use webbuilder_schema::NodeType;

    fn import(html: &str) -> Forest {
        import_html(html, None, ImportOptions::default())
    }

    #[test]
    fn test_skips_non_visual_tags() {
        let forest = import(
            "<html><head><title>x</title></head><body><script>var a;</script><style>p{}</style><p>Hi</p></body></html>",
        );
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].node_type, NodeType::Text);
        assert_eq!(forest[0].props["text"], "Hi");
    }

    #[test]
    fn test_ids_are_unique_and_typed() {
        let forest = import("<body><h1>A</h1><h2>B</h2><p>C</p></body>");
        assert_eq!(forest[0].id.split('-').next(), Some("heading"));
        assert_ne!(forest[0].id, forest[1].id);
        assert!(webbuilder_schema::duplicate_ids(&forest).is_empty());
    }

    #[test]
    fn test_nested_structure_mirrors_dom() {
        let forest = import(
            r#"<body><div class="wrapper"><h2>Title</h2><p>Body</p><button>Go</button></div></body>"#,
        );
        assert_eq!(forest.len(), 1);
        let section = &forest[0];
        assert_eq!(section.node_type, NodeType::Section);
        let types: Vec<&NodeType> = section.children.iter().map(|c| &c.node_type).collect();
        assert_eq!(types, [&NodeType::Heading, &NodeType::Text, &NodeType::Button]);
    }

    #[test]
    fn test_custom_classifier() {
        let options = ImportOptions {
            classifier: Box::new(|info: &ElementInfo| {
                if info.tag == "article" {
                    NodeType::Section
                } else {
                    NodeType::Text
                }
            }),
            ..Default::default()
        };
        let forest = import_html("<body><article><h1>x</h1></article></body>", None, options);
        assert_eq!(forest[0].node_type, NodeType::Section);
        assert_eq!(forest[0].children[0].node_type, NodeType::Text);
    }

    #[test]
    fn test_export_wrappers_can_be_kept() {
        let html = r#"<body><div class="app-container"><h2>A</h2></div></body>"#;

        let unwrapped = import(html);
        assert_eq!(unwrapped[0].node_type, NodeType::Heading);

        let options = ImportOptions {
            unwrap_export_wrappers: false,
            ..Default::default()
        };
        let kept = import_html(html, None, options);
        assert_eq!(kept[0].node_type, NodeType::Section);
        assert_eq!(kept[0].children[0].node_type, NodeType::Heading);
    }
}
