//! Progressive web app scaffolding for exported sites.
//!
//! [`build_pwa`] writes `manifest.json`, `service-worker.js` and an empty
//! `icons/` directory into an output directory. The content is fixed, so
//! running it twice produces identical bytes.

mod manifest;
mod service_worker;

pub use manifest::{generate_manifest, Icon, Manifest, ICON_SIZES};
pub use service_worker::{generate_service_worker, CACHE_NAME, PRECACHE_URLS};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const SERVICE_WORKER_FILE: &str = "service-worker.js";
pub const ICONS_DIR: &str = "icons";

#[derive(Error, Debug)]
pub enum PwaError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Paths written by [`build_pwa`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PwaAssets {
    pub manifest_path: PathBuf,
    pub service_worker_path: PathBuf,
    pub icons_dir: PathBuf,
}

/// Write the PWA assets into `out_dir`, creating it if needed
pub fn build_pwa(out_dir: &Path) -> Result<PwaAssets, PwaError> {
    create_dir(out_dir)?;

    let manifest_path = out_dir.join(MANIFEST_FILE);
    write_file(&manifest_path, &generate_manifest()?)?;

    let service_worker_path = out_dir.join(SERVICE_WORKER_FILE);
    write_file(&service_worker_path, &generate_service_worker())?;

    let icons_dir = out_dir.join(ICONS_DIR);
    create_dir(&icons_dir)?;

    info!(out_dir = %out_dir.display(), "PWA assets generated");

    Ok(PwaAssets {
        manifest_path,
        service_worker_path,
        icons_dir,
    })
}

fn create_dir(path: &Path) -> Result<(), PwaError> {
    std::fs::create_dir_all(path).map_err(|source| PwaError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), PwaError> {
    std::fs::write(path, contents).map_err(|source| PwaError::Io {
        path: path.to_path_buf(),
        source,
    })
}
