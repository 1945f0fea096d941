//! Element → node type classification.
//!
//! The importer never inspects tags directly; it hands an [`ElementInfo`] to a
//! [`ClassificationStrategy`]. Any `Fn(&ElementInfo) -> NodeType` closure is a
//! strategy too, so alternate heuristics can be swapped in without touching
//! the tree walk.

use webbuilder_schema::NodeType;

/// What a classifier gets to see about an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    /// Lowercase tag name
    pub tag: String,
    /// Raw `class` attribute, empty when absent
    pub class: String,
    /// Number of direct element children
    pub element_child_count: usize,
}

impl ElementInfo {
    pub fn new(tag: impl Into<String>, class: impl Into<String>, element_child_count: usize) -> Self {
        Self {
            tag: tag.into(),
            class: class.into(),
            element_child_count,
        }
    }
}

/// Decides which schema type an HTML element becomes
pub trait ClassificationStrategy {
    fn classify(&self, element: &ElementInfo) -> NodeType;
}

impl<F> ClassificationStrategy for F
where
    F: Fn(&ElementInfo) -> NodeType,
{
    fn classify(&self, element: &ElementInfo) -> NodeType {
        self(element)
    }
}

pub const CONTAINER_KEYWORDS: [&str; 8] = [
    "container", "row", "col", "section", "wrapper", "box", "card", "panel",
];

/// Tag-table classifier with the container heuristic
///
/// First match wins:
/// - `h1`..`h6` → heading
/// - `img` → image
/// - `button`, `a` → button
/// - anything else → section when it looks like a container, text otherwise
///
/// An element looks like a container when it has more than
/// `max_leaf_children` element children, or its class attribute contains one
/// of `container_keywords` (case-insensitive substring match).
#[derive(Debug, Clone)]
pub struct DefaultClassifier {
    pub container_keywords: Vec<String>,
    pub max_leaf_children: usize,
}

impl Default for DefaultClassifier {
    fn default() -> Self {
        Self {
            container_keywords: CONTAINER_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            max_leaf_children: 2,
        }
    }
}

impl DefaultClassifier {
    pub fn is_likely_container(&self, element: &ElementInfo) -> bool {
        if element.element_child_count > self.max_leaf_children {
            return true;
        }

        let class = element.class.to_lowercase();
        self.container_keywords
            .iter()
            .any(|keyword| class.contains(keyword.as_str()))
    }
}

impl ClassificationStrategy for DefaultClassifier {
    fn classify(&self, element: &ElementInfo) -> NodeType {
        match element.tag.as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => NodeType::Heading,
            "img" => NodeType::Image,
            "button" | "a" => NodeType::Button,
            _ if self.is_likely_container(element) => NodeType::Section,
            _ => NodeType::Text,
        }
    }
}
