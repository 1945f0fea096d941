//! Node ids.
//!
//! An id reads `<type>-<seed>-<n>`, e.g. `heading-5d3c9a1e-4`. The seed is a
//! CRC32 of where the nodes come from (the imported HTML path, the editor
//! session name), so two imports of the same page produce the same ids while
//! nodes from different sources do not collide.

use crate::node::NodeType;
use crc32fast::Hasher;

/// Hex CRC32 of a source key
pub fn id_seed(source: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(source.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hands out node ids for one import or one editor session
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    issued: u64,
}

impl IdGenerator {
    pub fn new(source: &str) -> Self {
        Self {
            seed: id_seed(source),
            issued: 0,
        }
    }

    /// Id for the next node of `node_type`
    ///
    /// The counter is shared by all types, so ids never repeat within one
    /// generator.
    pub fn next_id(&mut self, node_type: &NodeType) -> String {
        self.issued += 1;
        format!("{}-{}-{}", node_type, self.seed, self.issued)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
