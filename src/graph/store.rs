use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::core::NodeId;
use crate::foundation::error::{TreeframesError, TreeframesResult};

/// Visitation state of one edge. Only ever moves `Unvisited -> Visited`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeState {
    /// Not yet processed by the traversal.
    #[default]
    Unvisited,
    /// Processed by the traversal.
    Visited,
}

/// Directed edge owned by its source node's adjacency list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Child node.
    pub target: NodeId,
    /// Current visitation state.
    pub state: EdgeState,
}

impl Edge {
    /// Return `true` once the traversal has processed this edge.
    pub fn is_visited(&self) -> bool {
        self.state == EdgeState::Visited
    }
}

/// Adjacency-list tree with per-edge visitation state.
///
/// Built once through [`GraphStore::add_edge`], then mutated only through
/// [`GraphStore::mark_visited`]. Insertion order of a node's edges is its left-to-right child
/// order for both layout and traversal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStore {
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl GraphStore {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph by adding `edges` in order.
    pub fn from_edges(edges: impl IntoIterator<Item = (NodeId, NodeId)>) -> Self {
        let mut g = Self::new();
        for (source, target) in edges {
            g.add_edge(source, target);
        }
        g
    }

    /// Append an unvisited edge `source -> target`. Duplicates and cycles are not checked here;
    /// see [`GraphStore::validate_tree`].
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) {
        self.adjacency.entry(source).or_default().push(Edge {
            target,
            state: EdgeState::Unvisited,
        });
    }

    /// Ordered outgoing edges of `node`; empty when the node has none.
    pub fn children(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mark the `index`-th outgoing edge of `source` as visited. Re-marking a visited edge is
    /// allowed and leaves it visited.
    pub fn mark_visited(&mut self, source: NodeId, index: usize) -> TreeframesResult<()> {
        let edge = self
            .adjacency
            .get_mut(&source)
            .and_then(|edges| edges.get_mut(index))
            .ok_or_else(|| {
                TreeframesError::precondition(format!(
                    "node {source} has no outgoing edge at index {index}"
                ))
            })?;
        edge.state = EdgeState::Visited;
        Ok(())
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Number of edges currently in [`EdgeState::Visited`].
    pub fn visited_count(&self) -> usize {
        self.adjacency
            .values()
            .flatten()
            .filter(|e| e.is_visited())
            .count()
    }

    /// Check that the part of the graph reachable from `root` is a tree: every reachable node is
    /// reached through exactly one edge and `root` is never re-entered.
    pub fn validate_tree(&self, root: NodeId) -> TreeframesResult<()> {
        let mut seen = BTreeSet::from([root]);
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for edge in self.children(node) {
                if !seen.insert(edge.target) {
                    return Err(TreeframesError::malformed(format!(
                        "node {} is reached more than once (edge {node} -> {})",
                        edge.target, edge.target
                    )));
                }
                stack.push(edge.target);
            }
        }
        Ok(())
    }

    /// Return `true` when `node` is `root` or a descendant of it.
    pub fn reaches(&self, root: NodeId, node: NodeId) -> bool {
        let mut seen = BTreeSet::from([root]);
        let mut stack = vec![root];
        while let Some(cur) = stack.pop() {
            if cur == node {
                return true;
            }
            for edge in self.children(cur) {
                if seen.insert(edge.target) {
                    stack.push(edge.target);
                }
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/store.rs"]
mod tests;
