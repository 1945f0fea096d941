//! # Web Builder Importer
//!
//! Best-effort HTML/CSS → schema conversion.
//!
//! ```text
//! HTML ──html5ever──▶ DOM ──classify──▶ NodeType
//!                      │                  │
//! inline style ────────┼──layer styles────┼──enrich──▶ SchemaNode
//! CSS class rules ─────┘                  │
//! ```
//!
//! Classification is pluggable through [`ClassificationStrategy`], and the
//! order in which inline styles and class rules are layered is an explicit
//! [`StylePrecedence`].
//!
//! ```rust,ignore
//! use webbuilder_importer::{import_files, write_schema, ImportOptions};
//!
//! let forest = import_files("page.html".as_ref(), Some("page.css".as_ref()), ImportOptions::default())?;
//! write_schema("export/output-schema.json".as_ref(), &forest)?;
//! ```

mod classify;
mod enrich;
mod error;
mod importer;
mod styles;

pub use classify::{ClassificationStrategy, DefaultClassifier, ElementInfo, CONTAINER_KEYWORDS};
pub use enrich::{enrich_props, style_defaults, ElementContent, DEFAULT_IMPORTED_ALT, DEFAULT_IMPORTED_SRC};
pub use error::ImportError;
pub use importer::{import_files, import_html, ImportOptions, Importer, SKIPPED_TAGS};
pub use styles::{
    class_styles, layer_styles, parse_css, parse_declarations, CssRules, StylePrecedence,
};

use std::path::Path;
use webbuilder_schema::{save_forest, SchemaNode};

/// Write an imported forest as pretty JSON, creating parent directories
pub fn write_schema(path: &Path, forest: &[SchemaNode]) -> Result<(), ImportError> {
    save_forest(path, forest)?;
    tracing::info!(path = %path.display(), "Schema written");
    Ok(())
}
