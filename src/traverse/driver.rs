use std::collections::VecDeque;

use crate::config::scene::SceneConfig;
use crate::encode::sink::AnimationSink;
use crate::foundation::core::NodeId;
use crate::foundation::error::{TreeframesError, TreeframesResult};
use crate::graph::store::GraphStore;
use crate::render::frame::FrameCause;
use crate::render::snapshot::Renderer;

/// Flavor of breadth-first traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BfsVariant {
    /// Queue-driven sweep followed by two re-mark passes: every edge out of the start node, then
    /// every edge out of its children. Each re-mark emits a frame even though nothing changes.
    #[default]
    Literal,
    /// Queue-driven sweep only.
    Clean,
}

/// Which traversal to animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// Pre-order depth-first.
    Dfs,
    /// Level-order breadth-first.
    Bfs(BfsVariant),
}

/// Runs one traversal over a graph it borrows exclusively, collecting a frame after every
/// state change.
pub struct TraversalDriver<'g> {
    graph: &'g mut GraphStore,
    renderer: Renderer,
    anim: AnimationSink,
}

impl<'g> TraversalDriver<'g> {
    /// Validate `cfg` and take exclusive use of `graph` for one run.
    pub fn new(graph: &'g mut GraphStore, cfg: &SceneConfig) -> TreeframesResult<Self> {
        cfg.validate()?;
        Ok(Self {
            graph,
            renderer: Renderer::new(cfg),
            anim: AnimationSink::new(),
        })
    }

    /// The graph must be a tree under [`NodeId::ROOT`] and `start` must be reachable from it.
    fn check_start(&self, start: NodeId) -> TreeframesResult<()> {
        self.graph.validate_tree(NodeId::ROOT)?;
        if !self.graph.reaches(NodeId::ROOT, start) {
            return Err(TreeframesError::malformed(format!(
                "start node {start} is not reachable from root {}",
                NodeId::ROOT
            )));
        }
        Ok(())
    }

    fn emit(&mut self, cause: FrameCause) -> TreeframesResult<()> {
        let frame = self.renderer.snapshot(self.graph, cause)?;
        tracing::debug!(index = self.anim.len(), ?cause, "frame");
        self.anim.append(frame);
        Ok(())
    }

    fn visit(&mut self, source: NodeId, index: usize) -> TreeframesResult<NodeId> {
        let edge = *self.graph.children(source).get(index).ok_or_else(|| {
            TreeframesError::precondition(format!("node {source} has no edge {index}"))
        })?;
        let target = edge.target;
        self.graph.mark_visited(source, index)?;
        if edge.is_visited() {
            self.emit(FrameCause::Revisit { source, target })?;
        } else {
            self.emit(FrameCause::Visit { source, target })?;
        }
        Ok(target)
    }

    /// Depth-first: one initial frame, then one frame per edge in pre-order.
    ///
    /// Fails with [`TreeframesError::MalformedGraph`] before rendering when the graph is not a
    /// tree under the root or `start` is not in it.
    pub fn dfs(mut self, start: NodeId) -> TreeframesResult<AnimationSink> {
        self.check_start(start)?;
        self.emit(FrameCause::Initial)?;
        self.dfs_from(start)?;
        Ok(self.anim)
    }

    fn dfs_from(&mut self, node: NodeId) -> TreeframesResult<()> {
        for i in 0..self.graph.children(node).len() {
            let child = self.visit(node, i)?;
            self.dfs_from(child)?;
        }
        Ok(())
    }

    /// Breadth-first: one initial frame, one frame per edge in level order, then the trailing
    /// re-mark frames when `variant` is [`BfsVariant::Literal`].
    ///
    /// Already visited edges are skipped by the sweep and their targets are not enqueued.
    /// Malformed graphs are rejected as in [`TraversalDriver::dfs`].
    pub fn bfs(mut self, start: NodeId, variant: BfsVariant) -> TreeframesResult<AnimationSink> {
        self.check_start(start)?;
        self.emit(FrameCause::Initial)?;

        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for i in 0..self.graph.children(node).len() {
                if self.graph.children(node)[i].is_visited() {
                    continue;
                }
                let child = self.visit(node, i)?;
                queue.push_back(child);
            }
        }

        if variant == BfsVariant::Literal {
            let children: Vec<NodeId> = self
                .graph
                .children(start)
                .iter()
                .map(|e| e.target)
                .collect();
            for i in 0..children.len() {
                self.visit(start, i)?;
            }
            for child in children {
                for i in 0..self.graph.children(child).len() {
                    self.visit(child, i)?;
                }
            }
        }

        Ok(self.anim)
    }
}

/// Animate a traversal of `graph` from `start`.
///
/// The graph must be a tree under [`NodeId::ROOT`] and `start` must be reachable from the
/// root; otherwise a [`TreeframesError::MalformedGraph`] is returned before any frame is
/// rendered. Every frame renders the whole tree from the root.
#[tracing::instrument(skip(graph, cfg))]
pub fn run_traversal(
    graph: &mut GraphStore,
    mode: TraversalMode,
    start: NodeId,
    cfg: &SceneConfig,
) -> TreeframesResult<AnimationSink> {
    let driver = TraversalDriver::new(graph, cfg)?;
    let anim = match mode {
        TraversalMode::Dfs => driver.dfs(start)?,
        TraversalMode::Bfs(variant) => driver.bfs(start, variant)?,
    };
    tracing::info!(frames = anim.len(), "traversal animated");
    Ok(anim)
}

#[cfg(test)]
#[path = "../../tests/unit/traverse/driver.rs"]
mod tests;
