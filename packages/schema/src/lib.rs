//! # Web Builder Schema
//!
//! The JSON page model shared by every other package.
//!
//! A schema is an ordered forest of [`SchemaNode`]s. Each node carries an id,
//! a [`NodeType`], a flat property map and its children:
//!
//! ```text
//! [
//!   { "id": "root-section-1", "type": "section",
//!     "props": { "padding": "20px" },
//!     "children": [
//!       { "id": "heading-1", "type": "heading", "props": { "text": "Hi" }, "children": [] }
//!     ] }
//! ]
//! ```
//!
//! The exporter reads it, the importer and the editor produce it.

pub mod case;
pub mod error;
pub mod forest;
pub mod id_generator;
pub mod node;

pub use case::{camel_to_kebab, kebab_to_camel};
pub use error::{SchemaError, SchemaResult};
pub use forest::{
    duplicate_ids, forest_from_json, forest_to_json, load_forest, save_forest, Forest,
};
pub use id_generator::{id_seed, IdGenerator};
pub use node::{prop_as_style_value, NodeType, Props, SchemaNode};
