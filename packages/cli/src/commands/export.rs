use crate::commands::resolve;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;
use webbuilder_compiler_html::{export_schema_file, CompileOptions};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Schema JSON file (overrides config)
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Document title
    #[arg(long, default_value = "Generated Web App")]
    pub title: String,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let schema_path = match &args.schema {
        Some(path) => resolve(cwd, path),
        None => config.get_schema_path(cwd),
    };
    let out_dir = match &args.out {
        Some(path) => resolve(cwd, path),
        None => config.get_out_dir(cwd),
    };

    println!("{}", "🔨 Exporting site...".bright_blue().bold());

    let options = CompileOptions {
        title: args.title,
        ..Default::default()
    };
    let output = export_schema_file(&schema_path, &out_dir, options)
        .with_context(|| format!("Failed to export {}", schema_path.display()))?;

    let written = [
        &output.html_path,
        &output.css_path,
        &output.pwa.manifest_path,
        &output.pwa.service_worker_path,
        &output.pwa.icons_dir,
    ];
    for path in written {
        println!("  {} {}", "✓".green(), relative(path, &out_dir));
    }

    println!();
    println!("{} Site exported to {}", "✅".green(), out_dir.display());

    Ok(())
}

fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use webbuilder_schema::{save_forest, NodeType, SchemaNode};

    fn cwd(dir: &tempfile::TempDir) -> String {
        dir.path().display().to_string()
    }

    #[test]
    fn test_export_uses_config_paths() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = vec![SchemaNode::new("s", NodeType::Section)];
        save_forest(&dir.path().join("export/input.json"), &nodes).unwrap();

        let args = ExportArgs {
            schema: None,
            out: None,
            title: "Site".to_string(),
        };
        export(args, &cwd(&dir)).unwrap();

        let dist = dir.path().join("export/dist");
        assert!(dist.join("index.html").is_file());
        assert!(dist.join("styles.css").is_file());
        assert!(dist.join("manifest.json").is_file());
        assert!(dist.join("service-worker.js").is_file());
        assert!(dist.join("icons").is_dir());
    }

    #[test]
    fn test_export_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        save_forest(&dir.path().join("page.json"), &[]).unwrap();

        let args = ExportArgs {
            schema: Some("page.json".to_string()),
            out: Some("public".to_string()),
            title: "Site".to_string(),
        };
        export(args, &cwd(&dir)).unwrap();

        let html = std::fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(html.contains("<title>Site</title>"));
    }

    #[test]
    fn test_export_missing_schema_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = ExportArgs {
            schema: None,
            out: None,
            title: "Site".to_string(),
        };
        let err = export(args, &cwd(&dir)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to export"));
        assert!(!dir.path().join("export/dist").exists());
    }
}
