// File: crates/walkchart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, timing, stroke style).

use std::time::Duration;

/// Default total surface width in pixels (plot + margins).
pub const WIDTH: u32 = 750;
/// Default total surface height in pixels (plot + margins).
pub const HEIGHT: u32 = 400;

/// Default duration of axis and line transitions.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Horizontal distance between consecutive samples, in data units.
pub const X_STEP: f64 = 12.07;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    /// Create new insets in CSS order (top, right, bottom, left).
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Same inset on all four sides.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(80)
    }
}

/// Static stroke style of the line visual. Reasserted on every update.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// CSS color used in SVG output.
    pub stroke: String,
    pub stroke_width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { stroke: "green".to_string(), stroke_width: 1.5 }
    }
}
