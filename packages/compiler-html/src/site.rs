use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use webbuilder_compiler_css::{generate_css, STYLESHEET_FILE};
use webbuilder_pwa::{build_pwa, PwaAssets, PwaError};
use webbuilder_schema::{load_forest, SchemaError, SchemaNode};

use crate::compiler::{compile_to_html, CompileOptions};

pub const INDEX_FILE: &str = "index.html";

/// Errors that can occur while exporting a site
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PWA generation failed: {0}")]
    Pwa(#[from] PwaError),
}

/// Files produced by [`export_site`]
#[derive(Debug, Clone)]
pub struct SiteOutput {
    pub html_path: PathBuf,
    pub css_path: PathBuf,
    pub pwa: PwaAssets,
}

/// Write `index.html`, `styles.css` and the PWA assets for `nodes` into `out_dir`
pub fn export_site(
    nodes: &[SchemaNode],
    out_dir: &Path,
    options: CompileOptions,
) -> Result<SiteOutput, ExportError> {
    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let html_path = out_dir.join(INDEX_FILE);
    write_file(&html_path, &compile_to_html(nodes, options))?;

    let css_path = out_dir.join(STYLESHEET_FILE);
    write_file(&css_path, &generate_css())?;

    info!(out_dir = %out_dir.display(), roots = nodes.len(), "HTML and CSS generated");

    let pwa = build_pwa(out_dir)?;

    Ok(SiteOutput { html_path, css_path, pwa })
}

/// Load a schema JSON file and export it
///
/// No validation beyond the JSON shape is performed; malformed input
/// surfaces as [`SchemaError::Json`].
pub fn export_schema_file(
    schema_path: &Path,
    out_dir: &Path,
    options: CompileOptions,
) -> Result<SiteOutput, ExportError> {
    info!(schema = %schema_path.display(), out_dir = %out_dir.display(), "Starting export");
    let nodes = load_forest(schema_path)?;
    export_site(&nodes, out_dir, options)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
