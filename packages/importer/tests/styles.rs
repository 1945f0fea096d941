//! Inline style / class rule layering through the full import path.

use webbuilder_importer::{
    import_files, import_html, write_schema, ImportError, ImportOptions, StylePrecedence,
};
use webbuilder_schema::{load_forest, NodeType};

const HTML: &str = r#"<body><p class="lead muted" style="color: red; margin: 4px">Hello</p></body>"#;
const CSS: &str = ".lead { color: blue; font-size: 20px; } .muted { font-size: 14px; }";

#[test]
fn test_class_rules_override_inline_by_default() {
    let forest = import_html(HTML, Some(CSS), ImportOptions::default());
    let props = &forest[0].props;

    assert_eq!(props["color"], "blue");
    assert_eq!(props["margin"], "4px");
    assert_eq!(props["fontSize"], "14px");
}

#[test]
fn test_inline_over_class_policy() {
    let options = ImportOptions {
        precedence: StylePrecedence::InlineOverClass,
        ..Default::default()
    };
    let forest = import_html(HTML, Some(CSS), options);
    let props = &forest[0].props;

    assert_eq!(props["color"], "red");
    assert_eq!(props["fontSize"], "14px");
}

#[test]
fn test_without_css_defaults_fill_in() {
    let forest = import_html(HTML, None, ImportOptions::default());
    let props = &forest[0].props;

    assert_eq!(props["color"], "red");
    assert_eq!(props["fontSize"], "16px");
    assert_eq!(props["lineHeight"], "1.5");
}

#[test]
fn test_import_files_with_missing_css_continues() {
    let dir = tempfile::tempdir().unwrap();
    let html_path = dir.path().join("page.html");
    std::fs::write(&html_path, HTML).unwrap();

    let missing_css = dir.path().join("missing.css");
    let forest = import_files(&html_path, Some(&missing_css), ImportOptions::default()).unwrap();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].node_type, NodeType::Text);
    assert_eq!(forest[0].props["color"], "red");
}

#[test]
fn test_import_files_missing_html_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = import_files(&dir.path().join("nope.html"), None, ImportOptions::default());
    assert!(matches!(result, Err(ImportError::Io { .. })));
}

#[test]
fn test_write_schema_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let html_path = dir.path().join("page.html");
    let css_path = dir.path().join("page.css");
    std::fs::write(&html_path, HTML).unwrap();
    std::fs::write(&css_path, CSS).unwrap();

    let forest = import_files(&html_path, Some(&css_path), ImportOptions::default()).unwrap();
    let out = dir.path().join("export/output-schema.json");
    write_schema(&out, &forest).unwrap();

    assert_eq!(load_forest(&out).unwrap(), forest);
}

#[test]
fn test_class_rule_after_decimal_value_applies() {
    let css = "body { margin: 0.5rem; }\n.lead { color: blue; }";
    let forest = import_html(HTML, Some(css), ImportOptions::default());
    assert_eq!(forest[0].props["color"], "blue");
}
