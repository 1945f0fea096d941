//! # Web Builder Editor
//!
//! Canvas state for the visual builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI: palette, canvas, properties panel       │
//! └─────────────────────────────────────────────┘
//!                     ↓ EditorEvent
//! ┌─────────────────────────────────────────────┐
//! │ editor: Editor state machine                │
//! │  - drag/drop from the palette               │
//! │  - single selection + prop patches          │
//! │  - delete, load, export                     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ arena: SchemaArena slot table ⇄ Forest      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use webbuilder_editor::{template, Editor, INITIAL_ROOT_ID};
//! use webbuilder_schema::NodeType;
//!
//! let mut editor = Editor::new();
//! let heading = template(&NodeType::Heading).unwrap();
//!
//! editor.drag_start(&heading);
//! let id = editor.drop(Some(INITIAL_ROOT_ID)).unwrap().unwrap();
//!
//! editor.select_node(Some(&id));
//! editor.patch_prop("text", "Welcome");
//!
//! let json = editor.export_json().unwrap();
//! assert!(json.contains("Welcome"));
//! ```

mod arena;
mod editor;
mod errors;
mod events;
mod palette;

pub use arena::{ArenaNode, NodeIndex, SchemaArena};
pub use editor::{Editor, INITIAL_ROOT_ID};
pub use errors::EditorError;
pub use events::EditorEvent;
pub use palette::{palette, template, ElementTemplate};
