//! treeframes renders the traversal of a small tree as an ordered list of indexed-color frames.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `add_edge` calls (or a [`GraphSpec`]) produce a [`GraphStore`]
//! 2. **Traverse**: [`run_traversal`] walks the tree depth-first or breadth-first, marking edges
//!    visited one at a time
//! 3. **Render**: after every change the [`Renderer`] lays the whole tree out with the
//!    [`LayoutEngine`] and draws it onto a fresh [`Canvas`], producing a [`Frame`]
//! 4. **Collect / encode**: frames accumulate in an [`AnimationSink`], which can stream them into
//!    any [`FrameSink`] such as [`GifSink`]
//!
//! Everything is single-threaded and deterministic: the same graph and config always yield the
//! same frames in the same order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod encode;
mod foundation;
mod graph;
mod layout;
mod raster;
mod render;
mod traverse;

pub use config::scene::{BACKGROUND, LINE, Palette, SceneConfig, Subdivision, VISITED};
pub use encode::gif::{GifSink, GifSinkOpts, ensure_parent_dir};
pub use encode::sink::{AnimationSink, FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{FrameIndex, Interval, NodeId, PixelPoint};
pub use foundation::error::{TreeframesError, TreeframesResult};
pub use graph::spec::{GraphSpec, demo_tree};
pub use graph::store::{Edge, EdgeState, GraphStore};
pub use layout::tree::{LayoutEngine, Placement};
pub use raster::canvas::Canvas;
pub use render::frame::{Frame, FrameCause};
pub use render::snapshot::Renderer;
pub use traverse::driver::{BfsVariant, TraversalDriver, TraversalMode, run_traversal};
