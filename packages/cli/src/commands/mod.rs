pub mod export;
pub mod import;
pub mod init;

pub use export::{export, ExportArgs};
pub use import::{import, ImportArgs};
pub use init::{init, InitArgs};

use std::path::PathBuf;

/// Resolve a flag value the same way config paths are resolved
pub(crate) fn resolve(cwd: &str, path: &str) -> PathBuf {
    PathBuf::from(cwd).join(path)
}
