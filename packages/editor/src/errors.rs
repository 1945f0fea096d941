//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Unknown element template: {0}")]
    UnknownTemplate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
