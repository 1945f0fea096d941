use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use webbuilder_schema::{save_forest, NodeType, SchemaNode};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing web builder project...".bright_blue().bold()
    );

    let config = Config::default();

    // Sample schema, never overwritten
    let schema_path = config.get_schema_path(cwd);
    if !schema_path.exists() {
        save_forest(&schema_path, &sample_schema())?;
        println!("  {} Created {}", "✓".green(), config.schema_path);
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", config.schema_path);
    println!("  2. Run: webbuilder export");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}

fn sample_schema() -> Vec<SchemaNode> {
    vec![SchemaNode::new("root-section-1", NodeType::Section)
        .with_prop("padding", "20px")
        .with_prop("margin", "10px")
        .with_prop("backgroundColor", "#f9fafb")
        .with_children(vec![
            SchemaNode::new("heading-1", NodeType::Heading)
                .with_prop("text", "Welcome")
                .with_prop("fontSize", "32px")
                .with_prop("fontWeight", "bold"),
            SchemaNode::new("text-1", NodeType::Text)
                .with_prop("text", "Edit export/input.json and run webbuilder export.")
                .with_prop("fontSize", "16px"),
            SchemaNode::new("button-1", NodeType::Button)
                .with_prop("text", "Get started")
                .with_prop("padding", "10px 20px")
                .with_prop("backgroundColor", "#3b82f6")
                .with_prop("color", "#ffffff"),
        ])]
}
