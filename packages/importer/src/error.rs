use std::path::PathBuf;
use thiserror::Error;
use webbuilder_schema::SchemaError;

/// Errors that can occur during HTML import
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
