use crate::config::scene::Palette;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TreeframesError, TreeframesResult};
use crate::render::frame::Frame;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Colors for the three palette indices.
    pub palette: Palette,
}

/// Sink contract for consuming frames in emission order.
///
/// Ordering contract: `push_frame` is called with strictly increasing [`FrameIndex`] values,
/// starting at `0`, between one `begin` and one `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> TreeframesResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> TreeframesResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> TreeframesResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Frame)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, Frame)] {
        &self.frames
    }

    /// Return `true` once `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> TreeframesResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> TreeframesResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> TreeframesResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Ordered, append-only list of frames produced by one traversal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnimationSink {
    frames: Vec<Frame>,
}

impl AnimationSink {
    /// Create an empty animation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame. No deduplication, no cap.
    pub fn append(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Frames in emission order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames collected so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when no frame has been appended.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Take ownership of the frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Stream every frame, in order, into `sink`.
    #[tracing::instrument(skip(self, sink, palette), fields(frames = self.frames.len()))]
    pub fn finalize(&self, sink: &mut dyn FrameSink, palette: Palette) -> TreeframesResult<()> {
        let first = self
            .frames
            .first()
            .ok_or_else(|| TreeframesError::encode("animation has no frames"))?;
        sink.begin(SinkConfig {
            width: first.canvas().width(),
            height: first.canvas().height(),
            palette,
        })?;
        for (i, frame) in (0u64..).zip(&self.frames) {
            sink.push_frame(FrameIndex(i), frame)?;
        }
        sink.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
