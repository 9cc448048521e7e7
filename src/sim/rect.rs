//! Axis-aligned rectangles for the court, paddles and ball
//!
//! Screen convention: origin top-left, y grows downward.

use glam::Vec2;

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_size(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn top_left(&self) -> Vec2 {
        self.pos
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Midpoint of the left edge
    pub fn mid_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.center_y())
    }

    /// Midpoint of the right edge
    pub fn mid_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.center_y())
    }

    /// Copy of this rect whose left-edge midpoint sits at `anchor`
    pub fn with_mid_left(&self, anchor: Vec2) -> Self {
        Self {
            pos: Vec2::new(anchor.x, anchor.y - self.size.y / 2.0),
            size: self.size,
        }
    }

    /// Copy of this rect whose right-edge midpoint sits at `anchor`
    pub fn with_mid_right(&self, anchor: Vec2) -> Self {
        Self {
            pos: Vec2::new(anchor.x - self.size.x, anchor.y - self.size.y / 2.0),
            size: self.size,
        }
    }

    /// Moved copy
    pub fn translate(&self, delta: Vec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// Inclusive point test
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// True iff every corner of `inner` lies inside `self` (edges inclusive)
    pub fn contains(&self, inner: &Rect) -> bool {
        inner.left() >= self.left()
            && inner.right() <= self.right()
            && inner.top() >= self.top()
            && inner.bottom() <= self.bottom()
    }

    /// True iff the rectangles overlap on both axes. Touching edges do not collide.
    pub fn collide(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
