use crate::commands::resolve;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use webbuilder_importer::{import_files, write_schema, ImportOptions, StylePrecedence};
use webbuilder_schema::SchemaNode;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// HTML file to import
    pub html: String,

    /// Stylesheet with class rules
    #[arg(short, long)]
    pub css: Option<String>,

    /// Output schema file (overrides config)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Which side wins when inline styles and class rules collide
    #[arg(short, long)]
    pub precedence: Option<StylePrecedence>,
}

pub fn import(args: ImportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let html_path = resolve(cwd, &args.html);
    let css_path = args.css.as_deref().map(|css| resolve(cwd, css));
    let out_path = match &args.out {
        Some(path) => resolve(cwd, path),
        None => config.get_import_output(cwd),
    };

    println!("{}", "📥 Importing HTML...".bright_blue().bold());

    let options = ImportOptions {
        precedence: args.precedence.unwrap_or(config.style_precedence),
        ..Default::default()
    };
    let forest = import_files(&html_path, css_path.as_deref(), options)
        .with_context(|| format!("Failed to import {}", html_path.display()))?;

    write_schema(&out_path, &forest)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    let total: usize = forest.iter().map(SchemaNode::subtree_len).sum();
    println!(
        "  {} {} → {}",
        "✓".green(),
        args.html,
        out_path.display()
    );
    println!();
    println!(
        "{} Imported {} nodes ({} top-level)",
        "✅".green(),
        total,
        forest.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use webbuilder_schema::load_forest;

    const PAGE: &str = r#"<html><body>
        <h1 class="title" style="color: red">Hello</h1>
        <p>World</p>
    </body></html>"#;

    fn setup() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), PAGE).unwrap();
        std::fs::write(dir.path().join("page.css"), ".title { color: blue; }").unwrap();
        let cwd = dir.path().display().to_string();
        (dir, cwd)
    }

    #[test]
    fn test_import_writes_configured_output() {
        let (dir, cwd) = setup();
        let args = ImportArgs {
            html: "page.html".to_string(),
            css: Some("page.css".to_string()),
            out: None,
            precedence: None,
        };
        import(args, &cwd).unwrap();

        let forest = load_forest(&dir.path().join("export/output-schema.json")).unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].props["color"], "blue");
    }

    #[test]
    fn test_precedence_flag() {
        let (dir, cwd) = setup();
        let args = ImportArgs {
            html: "page.html".to_string(),
            css: Some("page.css".to_string()),
            out: Some("out.json".to_string()),
            precedence: Some(StylePrecedence::InlineOverClass),
        };
        import(args, &cwd).unwrap();

        let forest = load_forest(&dir.path().join("out.json")).unwrap();
        assert_eq!(forest[0].props["color"], "red");
    }

    #[test]
    fn test_missing_html_fails() {
        let (_dir, cwd) = setup();
        let args = ImportArgs {
            html: "missing.html".to_string(),
            css: None,
            out: None,
            precedence: None,
        };
        assert!(import(args, &cwd).is_err());
    }
}
