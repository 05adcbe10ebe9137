use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::core::NodeId;
use crate::foundation::error::{TreeframesError, TreeframesResult};
use crate::graph::store::GraphStore;

/// Serialized graph topology: `{ "edges": [[source, target], ...] }` in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSpec {
    /// Edges in the order they are added.
    pub edges: Vec<(NodeId, NodeId)>,
}

impl GraphSpec {
    /// Load a graph spec from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> TreeframesResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TreeframesError::validation(format!("open graph JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a graph spec from JSON.
    pub fn from_reader(r: impl Read) -> TreeframesResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TreeframesError::validation(format!("parse graph JSON: {e}")))
    }

    /// Build a fresh, fully unvisited [`GraphStore`].
    pub fn build(&self) -> GraphStore {
        GraphStore::from_edges(self.edges.iter().copied())
    }
}

/// The 23-edge sample tree rendered by `treeframes demo`.
pub fn demo_tree() -> GraphStore {
    const EDGES: [(u64, u64); 23] = [
        (0, 1),
        (0, 2),
        (1, 3),
        (1, 4),
        (2, 20),
        (20, 200),
        (20, 201),
        (200, 2000),
        (200, 2001),
        (2001, 20010),
        (201, 2010),
        (201, 2011),
        (2010, 20100),
        (20100, 201000),
        (20100, 201001),
        (201001, 2010010),
        (4, 5),
        (4, 6),
        (4, 7),
        (5, 50),
        (5, 51),
        (51, 510),
        (510, 5100),
    ];
    GraphStore::from_edges(EDGES.iter().map(|&(s, t)| (NodeId(s), NodeId(t))))
}

#[cfg(test)]
#[path = "../../tests/unit/graph/spec.rs"]
mod tests;
