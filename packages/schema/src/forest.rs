//! Operations over a whole schema forest.

use crate::error::{SchemaError, SchemaResult};
use crate::node::SchemaNode;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Ordered list of root nodes
pub type Forest = Vec<SchemaNode>;

/// Ids that occur more than once, in first-repeat order
pub fn duplicate_ids(nodes: &[SchemaNode]) -> Vec<String> {
    fn walk(nodes: &[SchemaNode], seen: &mut HashSet<String>, dupes: &mut Vec<String>) {
        for node in nodes {
            if !seen.insert(node.id.clone()) && !dupes.contains(&node.id) {
                dupes.push(node.id.clone());
            }
            walk(&node.children, seen, dupes);
        }
    }

    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    walk(nodes, &mut seen, &mut dupes);
    dupes
}

pub fn forest_from_json(source: &str) -> SchemaResult<Forest> {
    Ok(serde_json::from_str(source)?)
}

/// Pretty JSON, two-space indentation
pub fn forest_to_json(nodes: &[SchemaNode]) -> SchemaResult<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

pub fn load_forest(path: &Path) -> SchemaResult<Forest> {
    let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let forest = forest_from_json(&source)?;
    debug!(path = %path.display(), roots = forest.len(), "Loaded schema");
    Ok(forest)
}

/// Write the forest as JSON, creating parent directories as needed
pub fn save_forest(path: &Path, nodes: &[SchemaNode]) -> SchemaResult<()> {
    let io_err = |source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, forest_to_json(nodes)?).map_err(io_err)?;
    debug!(path = %path.display(), roots = nodes.len(), "Saved schema");
    Ok(())
}
