/// Identifier of a tree node. Unique within one graph; node `0` is the render root.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u64);

impl NodeId {
    /// The node every render starts from.
    pub const ROOT: NodeId = NodeId(0);
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Absolute 0-based index of a frame in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Integer pixel position on the canvas. May lie outside the canvas; drawing clips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelPoint {
    /// Create a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Half-open horizontal pixel range `[start, end)` allotted to a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Inclusive start column.
    pub start: i32,
    /// Exclusive end column.
    pub end: i32, // exclusive
}

impl Interval {
    /// Create an interval. No ordering check: degenerate intervals simply place
    /// their node off-center.
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Width in pixels (`end - start`).
    pub fn width(self) -> i32 {
        self.end - self.start
    }

    /// Return `true` when `x` is inside `[start, end)`.
    pub fn contains(self, x: i32) -> bool {
        self.start <= x && x < self.end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
