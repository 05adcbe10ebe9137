use std::collections::BTreeSet;

use crate::config::scene::{SceneConfig, Subdivision};
use crate::foundation::core::{Interval, NodeId, PixelPoint};
use crate::foundation::error::{TreeframesError, TreeframesResult};
use crate::graph::store::{EdgeState, GraphStore};

/// Where one node lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The placed node.
    pub node: NodeId,
    /// Depth below the root (root is `0`).
    pub level: u32,
    /// Horizontal interval allotted to the node's subtree.
    pub interval: Interval,
    /// Center of the node's point.
    pub position: PixelPoint,
    /// Parent's position, `None` for the root.
    pub parent: Option<PixelPoint>,
    /// State of the edge leading into this node, `None` for the root.
    pub incoming: Option<EdgeState>,
}

/// Maps tree structure to canvas positions.
///
/// Positions depend only on topology and config, never on visitation state, so the same graph
/// lays out identically in every frame.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEngine {
    canvas: i32,
    point: i32,
    spacing: i32,
    offset: i32,
    subdivision: Subdivision,
}

impl LayoutEngine {
    /// Build an engine from scene geometry.
    pub fn new(cfg: &SceneConfig) -> Self {
        Self {
            canvas: cfg.canvas_i32(),
            point: cfg.point_i32(),
            spacing: cfg.spacing_i32(),
            offset: cfg.offset_i32(),
            subdivision: cfg.subdivision,
        }
    }

    /// Interval given to the root: the full canvas width.
    pub fn root_interval(&self) -> Interval {
        Interval::new(0, self.canvas)
    }

    /// Node center for `interval` at depth `level`.
    ///
    /// The center is shifted left by half a point so the drawn square stays inside the interval.
    pub fn position(&self, interval: Interval, level: u32) -> PixelPoint {
        let level = i32::try_from(level).unwrap_or(i32::MAX);
        PixelPoint::new(
            interval.start + (interval.width() - self.point) / 2,
            self.offset.saturating_add(level.saturating_mul(self.spacing)),
        )
    }

    /// Split `interval` into `k` consecutive child intervals. `k == 0` yields nothing.
    pub fn subdivide(&self, interval: Interval, k: usize) -> Vec<Interval> {
        let Ok(k) = i32::try_from(k) else {
            return Vec::new();
        };
        if k == 0 {
            return Vec::new();
        }
        let step = interval.width() / k;
        match self.subdivision {
            Subdivision::Truncate => (0..k)
                .map(|i| Interval::new(interval.start + i * step, interval.start + (i + 1) * step))
                .collect(),
            Subdivision::Distribute => {
                let rem = interval.width() - step * k;
                (0..k)
                    .map(|i| {
                        let start = interval.start + i * step + i.min(rem);
                        let extra = if i < rem { 1 } else { 0 };
                        Interval::new(start, start + step + extra)
                    })
                    .collect()
            }
        }
    }

    /// Lay out every node reachable from the root, in pre-order (parent before children,
    /// children left to right).
    pub fn compute(&self, graph: &GraphStore) -> TreeframesResult<Vec<Placement>> {
        let root = self.root_interval();
        let mut out = Vec::new();
        let mut seen = BTreeSet::new();
        let mut stack = vec![Placement {
            node: NodeId::ROOT,
            level: 0,
            interval: root,
            position: self.position(root, 0),
            parent: None,
            incoming: None,
        }];

        while let Some(placed) = stack.pop() {
            if !seen.insert(placed.node) {
                return Err(TreeframesError::malformed(format!(
                    "node {} is placed more than once",
                    placed.node
                )));
            }
            let edges = graph.children(placed.node);
            let slots = self.subdivide(placed.interval, edges.len());
            let level = placed.level.saturating_add(1);
            // Reverse push keeps the leftmost child on top of the stack.
            for (edge, slot) in edges.iter().zip(slots).rev() {
                stack.push(Placement {
                    node: edge.target,
                    level,
                    interval: slot,
                    position: self.position(slot, level),
                    parent: Some(placed.position),
                    incoming: Some(edge.state),
                });
            }
            out.push(placed);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tree.rs"]
mod tests;
