//! Layout helpers: rectangles, centering, padding.

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether the point lies inside. The right and bottom edges are
    /// exclusive.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && py >= self.y
            && (px as i64) < self.x as i64 + self.w as i64
            && (py as i64) < self.y as i64 + self.h as i64
    }
}

/// Padding specification for all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Top padding in pixels.
    pub top: u16,
    /// Right padding in pixels.
    pub right: u16,
    /// Bottom padding in pixels.
    pub bottom: u16,
    /// Left padding in pixels.
    pub left: u16,
}

impl Padding {
    /// Create symmetric padding (horizontal and vertical).
    pub const fn symmetric(h: u16, v: u16) -> Self {
        Self {
            top: v,
            right: h,
            bottom: v,
            left: h,
        }
    }

    /// Total horizontal padding (left + right).
    pub fn horizontal(&self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// Total vertical padding (top + bottom).
    pub fn vertical(&self) -> u32 {
        self.top as u32 + self.bottom as u32
    }
}

/// Compute centered position of a child within a parent.
pub fn center(parent_size: u32, child_size: u32) -> i32 {
    ((parent_size as i32 - child_size as i32) / 2).max(0)
}
