use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TreeframesError, TreeframesResult};
use crate::render::frame::Frame;

/// Options for [`GifSink`] output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
}

impl GifSinkOpts {
    /// Create options for writing a GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Sink that writes an infinitely looping animated GIF.
pub struct GifSink {
    opts: GifSinkOpts,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl GifSink {
    /// Create a sink writing to `opts.out_path`. The file is created in `begin`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for GifSink {
    #[tracing::instrument(skip(self), fields(out = %self.opts.out_path.display()))]
    fn begin(&mut self, cfg: SinkConfig) -> TreeframesResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(TreeframesError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(TreeframesError::validation(
                "gif sink width/height must fit in 16 bits",
            ));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(TreeframesError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let f = File::create(&self.opts.out_path)
            .with_context(|| format!("create gif '{}'", self.opts.out_path.display()))?;
        let mut encoder = GifEncoder::new(BufWriter::new(f));
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| TreeframesError::encode(format!("set gif repeat: {e}")))?;

        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> TreeframesResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| TreeframesError::encode("gif sink: push_frame before begin"))?;
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(TreeframesError::encode(format!(
                "gif sink: frame index {} is not after {}",
                idx.0, last.0
            )));
        }
        if frame.canvas().width() != cfg.width || frame.canvas().height() != cfg.height {
            return Err(TreeframesError::encode(format!(
                "gif sink: frame {} is {}x{}, expected {}x{}",
                idx.0,
                frame.canvas().width(),
                frame.canvas().height(),
                cfg.width,
                cfg.height
            )));
        }
        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| TreeframesError::encode("gif sink: encoder already closed"))?;

        // GIF delays are in 1/100 s.
        let delay = image::Delay::from_numer_denom_ms(u32::from(frame.delay()) * 10, 1);
        let rgba = frame.to_rgba(&cfg.palette);
        encoder
            .encode_frame(image::Frame::from_parts(rgba, 0, 0, delay))
            .map_err(|e| TreeframesError::encode(format!("encode gif frame {}: {e}", idx.0)))?;

        self.last_idx = Some(idx);
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(out = %self.opts.out_path.display()))]
    fn end(&mut self) -> TreeframesResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| TreeframesError::encode("gif sink: end before begin"))?;
        if self.last_idx.is_none() {
            return Err(TreeframesError::encode("gif sink: no frames were pushed"));
        }
        // Dropping the encoder writes the GIF trailer.
        drop(encoder);
        tracing::info!(frames = self.last_idx.map_or(0, |i| i.0 + 1), "wrote gif");
        Ok(())
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> TreeframesResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
