use crate::config::scene::{LINE, SceneConfig, VISITED};
use crate::foundation::error::TreeframesResult;
use crate::graph::store::{EdgeState, GraphStore};
use crate::layout::tree::LayoutEngine;
use crate::raster::canvas::Canvas;
use crate::render::frame::{Frame, FrameCause};

/// Palette index used to draw an edge, and its target point, in `state`.
pub(crate) fn edge_color(state: EdgeState) -> u8 {
    match state {
        EdgeState::Unvisited => LINE,
        EdgeState::Visited => VISITED,
    }
}

/// Draws the whole tree, in its current visitation state, onto a fresh canvas.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    layout: LayoutEngine,
    size: u32,
    point: i32,
    delay: u16,
}

impl Renderer {
    /// Build a renderer from scene geometry. `cfg` is expected to be validated.
    pub fn new(cfg: &SceneConfig) -> Self {
        Self {
            layout: LayoutEngine::new(cfg),
            size: cfg.canvas_size,
            point: cfg.point_i32(),
            delay: cfg.frame_delay,
        }
    }

    /// Render the graph starting from the root.
    ///
    /// For each node the connecting line from its parent is drawn first, then its point, so
    /// points cover line ends. Both use the color of the incoming edge; the root uses
    /// [`VISITED`].
    pub fn render(&self, graph: &GraphStore) -> TreeframesResult<Canvas> {
        let mut canvas = Canvas::new(self.size, self.size);
        for placed in self.layout.compute(graph)? {
            let ci = placed.incoming.map(edge_color).unwrap_or(VISITED);
            if let Some(parent) = placed.parent {
                canvas.draw_line(parent, placed.position, ci);
            }
            canvas.draw_point(placed.position, self.point, ci);
        }
        Ok(canvas)
    }

    /// Render and wrap the result into a [`Frame`] with the configured delay.
    pub fn snapshot(&self, graph: &GraphStore, cause: FrameCause) -> TreeframesResult<Frame> {
        Ok(Frame::new(self.render(graph)?, self.delay, cause))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/snapshot.rs"]
mod tests;
