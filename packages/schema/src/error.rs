use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving a schema forest
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SchemaResult<T> = Result<T, SchemaError>;
