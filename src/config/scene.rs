use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::error::{TreeframesError, TreeframesResult};

/// Palette index of the canvas background.
pub const BACKGROUND: u8 = 0;
/// Palette index of unvisited edges and their end points.
pub const LINE: u8 = 1;
/// Palette index of visited edges, their end points and the root marker.
pub const VISITED: u8 = 2;

/// How a node's horizontal interval is split among `k` children when the width is not a
/// multiple of `k`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subdivision {
    /// `step = width / k` for every child; the remainder is dropped and the last child stops
    /// short of the parent's end.
    #[default]
    Truncate,
    /// Same base step, but the first `width % k` children get one extra pixel each so the
    /// children tile the parent exactly.
    Distribute,
}

/// RGB values for the three palette entries, indexed by [`BACKGROUND`], [`LINE`], [`VISITED`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette(pub [[u8; 3]; 3]);

impl Default for Palette {
    fn default() -> Self {
        Self([[255, 255, 255], [0, 0, 0], [0, 0, 255]])
    }
}

impl Palette {
    /// Opaque RGBA for a palette index. Unknown indices map to the background color.
    pub fn rgba(&self, index: u8) -> [u8; 4] {
        let [r, g, b] = self
            .0
            .get(usize::from(index))
            .copied()
            .unwrap_or(self.0[usize::from(BACKGROUND)]);
        [r, g, b, 255]
    }
}

/// Geometry and timing knobs for layout, rendering and encoding.
///
/// All values are in pixels except `frame_delay`, which uses GIF time units (1/100 s).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Width and height of the square canvas.
    pub canvas_size: u32,
    /// Side length of the square drawn for each node.
    pub point_size: u32,
    /// Vertical distance between consecutive tree levels.
    pub level_spacing: u32,
    /// Vertical coordinate of the root.
    pub root_offset: u32,
    /// Display delay attached to every frame.
    pub frame_delay: u16,
    /// Remainder policy for interval subdivision.
    pub subdivision: Subdivision,
    /// Colors used when frames are expanded for encoding.
    pub palette: Palette,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400,
            point_size: 12,
            level_spacing: 50,
            root_offset: 10,
            frame_delay: 50,
            subdivision: Subdivision::Truncate,
            palette: Palette::default(),
        }
    }
}

impl SceneConfig {
    /// Load and validate a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> TreeframesResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TreeframesError::validation(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse and validate a config from JSON. Missing fields take their defaults.
    pub fn from_reader(r: impl Read) -> TreeframesResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| TreeframesError::validation(format!("parse scene config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject geometry that cannot produce a meaningful frame.
    pub fn validate(&self) -> TreeframesResult<()> {
        if self.canvas_size == 0 {
            return Err(TreeframesError::validation("canvas_size must be > 0"));
        }
        if i32::try_from(self.canvas_size).is_err() {
            return Err(TreeframesError::validation(
                "canvas_size must fit in a signed 32-bit coordinate",
            ));
        }
        if self.point_size == 0 {
            return Err(TreeframesError::validation("point_size must be > 0"));
        }
        if self.point_size > self.canvas_size {
            return Err(TreeframesError::validation(
                "point_size must not exceed canvas_size",
            ));
        }
        if self.root_offset >= self.canvas_size {
            return Err(TreeframesError::validation(
                "root_offset must be inside the canvas",
            ));
        }
        if self.level_spacing > self.canvas_size {
            return Err(TreeframesError::validation(
                "level_spacing must not exceed canvas_size",
            ));
        }
        if self.frame_delay == 0 {
            return Err(TreeframesError::validation("frame_delay must be > 0"));
        }
        Ok(())
    }

    pub(crate) fn canvas_i32(&self) -> i32 {
        i32::try_from(self.canvas_size).unwrap_or(i32::MAX)
    }

    pub(crate) fn point_i32(&self) -> i32 {
        i32::try_from(self.point_size).unwrap_or(i32::MAX)
    }

    pub(crate) fn spacing_i32(&self) -> i32 {
        i32::try_from(self.level_spacing).unwrap_or(i32::MAX)
    }

    pub(crate) fn offset_i32(&self) -> i32 {
        i32::try_from(self.root_offset).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene.rs"]
mod tests;
