use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use webbuilder_importer::StylePrecedence;

pub const DEFAULT_CONFIG_NAME: &str = "webbuilder.config.json";

/// Web builder configuration file format
///
/// Every path is relative to the directory the config is loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Schema the exporter reads
    #[serde(default = "default_schema_path")]
    pub schema_path: String,

    /// Directory the exported site is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Schema file the importer writes
    #[serde(default = "default_import_output")]
    pub import_output: String,

    /// Inline style vs class rule precedence during import
    #[serde(default)]
    pub style_precedence: StylePrecedence,
}

fn default_schema_path() -> String {
    "export/input.json".to_string()
}

fn default_out_dir() -> String {
    "export/dist".to_string()
}

fn default_import_output() -> String {
    "export/output-schema.json".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_schema_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.schema_path)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    pub fn get_import_output(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.import_output)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_path: default_schema_path(),
            out_dir: default_out_dir(),
            import_output: default_import_output(),
            style_precedence: StylePrecedence::default(),
        }
    }
}
