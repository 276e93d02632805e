//! Geometry vocabulary: pixel dimensions and axis-aligned rectangles.
//!
//! All values are floats; fractional pixel positions are legal everywhere
//! except the final canvas size, which the planner truncates.

use serde::{Deserialize, Serialize};

/// Pixel size of an image or canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f32,
    pub height: f32,
}

impl Dimension {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Length of the shorter side.
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

impl From<(u32, u32)> for Dimension {
    fn from((width, height): (u32, u32)) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }
}

/// Axis-aligned rectangle in canvas or source-image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square rectangle with the given side length.
    pub fn square(x: f32, y: f32, side: f32) -> Self {
        Self::new(x, y, side, side)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two rectangles overlap with positive area.
    ///
    /// Rectangles that merely share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
