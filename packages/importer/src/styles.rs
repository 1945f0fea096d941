//! Inline style and class rule extraction.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use webbuilder_schema::{kebab_to_camel, Props};

/// Class name (without the leading dot) → declarations with camelCase keys
pub type CssRules = HashMap<String, Props>;

/// One `selector { declarations }` block with no nested braces
static RULE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^{}]+)\{([^{}]*)\}").expect("rule block pattern"));

/// A selector that is exactly one class
static CLASS_SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.(-?[A-Za-z_][\w-]*)$").expect("class selector pattern"));

/// Which source wins when an inline style and a class rule set the same property
///
/// `ClassOverInline` layers class rules on top of inline styles. That is the
/// opposite of browser cascade order but it is how imports have always
/// behaved, so it stays the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePrecedence {
    #[default]
    ClassOverInline,
    InlineOverClass,
}

impl FromStr for StylePrecedence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class-over-inline" => Ok(StylePrecedence::ClassOverInline),
            "inline-over-class" => Ok(StylePrecedence::InlineOverClass),
            other => Err(format!(
                "Unknown style precedence: {}. Use: class-over-inline or inline-over-class",
                other
            )),
        }
    }
}

impl fmt::Display for StylePrecedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StylePrecedence::ClassOverInline => f.write_str("class-over-inline"),
            StylePrecedence::InlineOverClass => f.write_str("inline-over-class"),
        }
    }
}

/// Parse `prop: value; prop: value` into camelCase props
///
/// Each declaration is split at its first `:`. Declarations with an empty
/// name or value are dropped.
pub fn parse_declarations(text: &str) -> Props {
    let mut props = Props::new();

    for declaration in text.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        props.insert(kebab_to_camel(property), Value::String(value.to_string()));
    }

    props
}

/// Extract single-class rules from a stylesheet
///
/// Only blocks whose selector is a single class (`.name { ... }`) are kept.
/// In a selector list (`.a, .b { ... }`) each single-class entry gets the
/// declarations. Element, id, compound and descendant selectors are skipped.
/// Rules nested in at-rule blocks are read like top-level ones. A later block
/// for the same class replaces an earlier one.
pub fn parse_css(css: &str) -> CssRules {
    let mut rules = CssRules::new();

    for captures in RULE_BLOCK.captures_iter(css) {
        let declarations = parse_declarations(&captures[2]);
        for selector in captures[1].split(',') {
            if let Some(class) = CLASS_SELECTOR.captures(selector.trim()) {
                rules.insert(class[1].to_string(), declarations.clone());
            }
        }
    }

    rules
}

/// Merge the rules of every class on an element, later classes winning
pub fn class_styles(class_attr: &str, rules: &CssRules) -> Props {
    let mut props = Props::new();

    for class in class_attr.split_whitespace() {
        if let Some(rule) = rules.get(class) {
            for (key, value) in rule {
                props.insert(key.clone(), value.clone());
            }
        }
    }

    props
}

/// Layer inline and class-derived styles according to `precedence`
pub fn layer_styles(inline: Props, class: Props, precedence: StylePrecedence) -> Props {
    let (mut base, overlay) = match precedence {
        StylePrecedence::ClassOverInline => (inline, class),
        StylePrecedence::InlineOverClass => (class, inline),
    };

    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(props: &'a Props, key: &str) -> Option<&'a str> {
        props.get(key).and_then(Value::as_str)
    }

    #[test]
    fn test_parse_inline_declarations() {
        let props = parse_declarations("font-size: 18px; color:red ;; background-color : #fff;");
        assert_eq!(get(&props, "fontSize"), Some("18px"));
        assert_eq!(get(&props, "color"), Some("red"));
        assert_eq!(get(&props, "backgroundColor"), Some("#fff"));
        assert_eq!(props.len(), 3);
    }

    #[test]
    fn test_value_keeps_everything_after_first_colon() {
        let props = parse_declarations("background: url(http://example.com/a.png)");
        assert_eq!(get(&props, "background"), Some("url(http://example.com/a.png)"));
    }

    #[test]
    fn test_parse_declarations_drops_incomplete() {
        let props = parse_declarations("color; : red; margin:");
        assert!(props.is_empty());
    }

    #[test]
    fn test_parse_css_class_rules() {
        let css = r#"
            body { margin: 0; }
            .card { padding: 16px; border-radius: 8px; }
            .title{font-weight:700}
            #main { color: blue; }
        "#;

        let rules = parse_css(css);
        assert_eq!(rules.len(), 2);
        assert_eq!(get(&rules["card"], "padding"), Some("16px"));
        assert_eq!(get(&rules["card"], "borderRadius"), Some("8px"));
        assert_eq!(get(&rules["title"], "fontWeight"), Some("700"));
    }

    #[test]
    fn test_decimal_values_do_not_swallow_later_rules() {
        let css = "body { margin: 0.5rem; }\n.card { padding: 16px; line-height: 1.5; }";
        let rules = parse_css(css);
        assert_eq!(rules.keys().collect::<Vec<_>>(), ["card"]);
        assert_eq!(get(&rules["card"], "padding"), Some("16px"));
        assert_eq!(get(&rules["card"], "lineHeight"), Some("1.5"));
    }

    #[test]
    fn test_selector_lists_and_complex_selectors() {
        let css = r#"
            .a, .b { color: red; }
            .card .title { color: blue; }
            div.card { margin: 0; }
            .x:hover { color: green; }
            @media (max-width: 640px) { .c { padding: 2px; } }
        "#;

        let rules = parse_css(css);
        assert_eq!(get(&rules["a"], "color"), Some("red"));
        assert_eq!(get(&rules["b"], "color"), Some("red"));
        assert_eq!(get(&rules["c"], "padding"), Some("2px"));
        assert!(!rules.contains_key("title"));
        assert!(!rules.contains_key("card"));
        assert!(!rules.contains_key("x"));
        assert_eq!(rules.len(), 3);
    }

    #[test]
    fn test_class_styles_later_class_wins() {
        let rules = parse_css(".a { color: red; margin: 1px; } .b { color: blue; }");

        let ab = class_styles("a b", &rules);
        assert_eq!(get(&ab, "color"), Some("blue"));
        assert_eq!(get(&ab, "margin"), Some("1px"));

        let ba = class_styles("b  a unknown", &rules);
        assert_eq!(get(&ba, "color"), Some("red"));
    }

    #[test]
    fn test_precedence_class_over_inline() {
        let inline = parse_declarations("color: red; padding: 4px");
        let class = parse_declarations("color: blue; margin: 2px");

        let props = layer_styles(inline, class, StylePrecedence::ClassOverInline);
        assert_eq!(get(&props, "color"), Some("blue"));
        assert_eq!(get(&props, "padding"), Some("4px"));
        assert_eq!(get(&props, "margin"), Some("2px"));
    }

    #[test]
    fn test_precedence_inline_over_class() {
        let inline = parse_declarations("color: red; padding: 4px");
        let class = parse_declarations("color: blue; margin: 2px");

        let props = layer_styles(inline, class, StylePrecedence::InlineOverClass);
        assert_eq!(get(&props, "color"), Some("red"));
        assert_eq!(get(&props, "padding"), Some("4px"));
        assert_eq!(get(&props, "margin"), Some("2px"));
    }

    #[test]
    fn test_precedence_parse_and_display() {
        assert_eq!("inline-over-class".parse::<StylePrecedence>(), Ok(StylePrecedence::InlineOverClass));
        assert!("cascade".parse::<StylePrecedence>().is_err());
        assert_eq!(StylePrecedence::default().to_string(), "class-over-inline");
    }
}
