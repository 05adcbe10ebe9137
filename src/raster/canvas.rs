use crate::config::scene::{BACKGROUND, Palette};
use crate::foundation::core::PixelPoint;

/// Fixed-size indexed-color raster, row-major, one palette index per pixel.
///
/// Writes outside the raster are clipped silently.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas cleared to [`BACKGROUND`].
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; len],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Palette indices, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Palette index at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        self.offset(x, y).and_then(|i| self.pixels.get(i).copied())
    }

    /// Number of pixels holding palette index `ci`.
    pub fn count(&self, ci: u8) -> usize {
        self.pixels.iter().filter(|&&p| p == ci).count()
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Set one pixel; no-op outside the raster.
    pub fn set(&mut self, x: i32, y: i32, ci: u8) {
        if let Some(i) = self.offset(x, y)
            && let Some(p) = self.pixels.get_mut(i)
        {
            *p = ci;
        }
    }

    fn set_wide(&mut self, x: i64, y: i64, ci: u8) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set(x, y, ci);
        }
    }

    /// Fill the square `[x - size/2, x + size/2) x [y - size/2, y + size/2)`, clipped.
    pub fn draw_point(&mut self, center: PixelPoint, size: i32, ci: u8) {
        let half = size / 2;
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        let xs = center.x.saturating_sub(half).max(0)..center.x.saturating_add(half).min(w);
        let ys = center.y.saturating_sub(half).max(0)..center.y.saturating_add(half).min(h);
        for x in xs {
            for y in ys.clone() {
                self.set(x, y, ci);
            }
        }
    }

    /// Draw a segment between `a` and `b`, both endpoints inclusive.
    ///
    /// General segments are drawn twice, once stepping x and once stepping y with the other axis
    /// interpolated through the slope, so neither steep nor shallow lines leave gaps.
    /// Axis-aligned segments are filled directly. Only steps landing inside the raster are
    /// walked.
    pub fn draw_line(&mut self, a: PixelPoint, b: PixelPoint, ci: u8) {
        let w = i64::from(self.width);
        let h = i64::from(self.height);
        let (ax, ay, bx, by) = (
            i64::from(a.x),
            i64::from(a.y),
            i64::from(b.x),
            i64::from(b.y),
        );

        if ax == bx {
            for y in ay.min(by).max(0)..=ay.max(by).min(h - 1) {
                self.set_wide(ax, y, ci);
            }
            return;
        }
        if ay == by {
            for x in ax.min(bx).max(0)..=ax.max(bx).min(w - 1) {
                self.set_wide(x, ay, ci);
            }
            return;
        }

        let k = (by - ay) as f64 / (bx - ax) as f64;

        let ((fx, fy), (tx, _)) = if ax <= bx {
            ((ax, ay), (bx, by))
        } else {
            ((bx, by), (ax, ay))
        };
        for i in (-fx).max(0)..=(tx - fx).min(w - 1 - fx) {
            self.set_wide(fx + i, fy.saturating_add((k * i as f64) as i64), ci);
        }

        let ((fx, fy), (_, ty)) = if ay <= by {
            ((ax, ay), (bx, by))
        } else {
            ((bx, by), (ax, ay))
        };
        for i in (-fy).max(0)..=(ty - fy).min(h - 1 - fy) {
            self.set_wide(fx.saturating_add((i as f64 / k) as i64), fy + i, ci);
        }
    }

    /// Expand to straight-alpha RGBA8 through `palette`.
    pub fn to_rgba(&self, palette: &Palette) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let ci = self
                .pixels
                .get((y as usize) * (self.width as usize) + (x as usize))
                .copied()
                .unwrap_or(BACKGROUND);
            image::Rgba(palette.rgba(ci))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
