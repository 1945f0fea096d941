//! Schema → static site compilation.
//!
//! - [`compile_to_html`] renders a forest to an `index.html` document
//! - [`render_preview`] renders the editor's quick preview
//! - [`export_site`] writes the full site (HTML, CSS, PWA assets)

mod compiler;
mod preview;
mod site;

pub use compiler::{
    compile_fragments, compile_to_html, generate_style_string, CompileOptions,
    DEFAULT_BUTTON_TEXT, DEFAULT_HEADING_TEXT, DEFAULT_IMAGE_ALT, DEFAULT_IMAGE_SRC, DEFAULT_TEXT,
};
pub use preview::{preview_style_string, render_preview};
pub use site::{export_schema_file, export_site, ExportError, SiteOutput, INDEX_FILE};
