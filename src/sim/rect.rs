//! Axis-aligned rectangle geometry for actors and the world
//!
//! A rectangle is defined in screen space (y grows downward) by:
//! - pos: top-left corner
//! - size: width and height, both non-negative

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An integer axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Rectangle of the given size centred on `center`
    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        Self {
            pos: center - size / 2,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    pub fn set_left(&mut self, left: i32) {
        self.pos.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.pos.x = right - self.size.x;
    }

    pub fn set_top(&mut self, top: i32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.pos.y = bottom - self.size.y;
    }

    pub fn set_center_x(&mut self, cx: i32) {
        self.pos.x = cx - self.size.x / 2;
    }

    pub fn set_center_y(&mut self, cy: i32) {
        self.pos.y = cy - self.size.y / 2;
    }

    /// Copy of this rectangle moved by `delta`
    #[inline]
    pub fn translated(&self, delta: IVec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// Strict overlap test: both axis intervals must intersect with non-zero
    /// extent, so rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point test, inclusive of the top/left edges and exclusive of the
    /// bottom/right edges
    pub fn contains_point(&self, p: IVec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// True if every edge lies inside `outer` (touching is allowed)
    pub fn is_within(&self, outer: &Rect) -> bool {
        self.left() >= outer.left()
            && self.right() <= outer.right()
            && self.top() >= outer.top()
            && self.bottom() <= outer.bottom()
    }
}
