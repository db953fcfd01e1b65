// File: crates/walkchart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math: plot rectangle and 2D vertices.

use crate::types::Insets;

/// Pixel-space vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        Vec2::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

/// Plot area inside the margins of a `width x height` surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    /// `None` when the margins leave no room.
    pub fn inside(width: u32, height: u32, insets: &Insets) -> Option<Self> {
        if insets.hsum() >= width || insets.vsum() >= height {
            return None;
        }
        Some(Self {
            left: insets.left as f64,
            top: insets.top as f64,
            width: (width - insets.hsum()) as f64,
            height: (height - insets.vsum()) as f64,
        })
    }
}
