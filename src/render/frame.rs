use crate::config::scene::Palette;
use crate::foundation::core::NodeId;
use crate::raster::canvas::Canvas;

/// Why a frame was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameCause {
    /// State before any edge is visited.
    Initial,
    /// Edge `source -> target` was just marked visited.
    Visit {
        /// Parent side of the edge.
        source: NodeId,
        /// Child side of the edge.
        target: NodeId,
    },
    /// An already visited edge was marked again (BFS trailing passes).
    Revisit {
        /// Parent side of the edge.
        source: NodeId,
        /// Child side of the edge.
        target: NodeId,
    },
}

/// A finished raster plus its display delay. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    canvas: Canvas,
    delay: u16,
    cause: FrameCause,
}

impl Frame {
    pub(crate) fn new(canvas: Canvas, delay: u16, cause: FrameCause) -> Self {
        Self {
            canvas,
            delay,
            cause,
        }
    }

    /// The indexed-color raster.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Display delay in GIF time units (1/100 s).
    pub fn delay(&self) -> u16 {
        self.delay
    }

    /// What triggered this frame.
    pub fn cause(&self) -> FrameCause {
        self.cause
    }

    /// Expand to RGBA8 for encoders that do not take palette input.
    pub fn to_rgba(&self, palette: &Palette) -> image::RgbaImage {
        self.canvas.to_rgba(palette)
    }

    /// Stable 64-bit digest of dimensions, pixels and delay.
    pub fn fingerprint(&self) -> u64 {
        let mut h = xxhash_rust::xxh3::Xxh3::new();
        h.update(&self.canvas.width().to_le_bytes());
        h.update(&self.canvas.height().to_le_bytes());
        h.update(&self.delay.to_le_bytes());
        h.update(self.canvas.pixels());
        h.digest()
    }
}
