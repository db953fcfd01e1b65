// File: crates/walkchart-core/src/error.rs
// Summary: Error type shared by chart construction, mounting and rendering.

use thiserror::Error;

/// Result alias for walkchart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Margins leave no room for the plot area.
    #[error("invalid layout: {width}x{height} cannot fit margins {hsum}px/{vsum}px")]
    InvalidLayout { width: u32, height: u32, hsum: u32, vsum: u32 },

    /// Transitions need a positive duration (the tick period is derived from it).
    #[error("transition duration must be positive")]
    InvalidDuration,

    /// The host document has no element matching the mount selector.
    #[error("container not found: {selector}")]
    ContainerNotFound { selector: String },

    /// Skia failed to allocate a surface or encode its contents.
    #[error("surface error: {0}")]
    Surface(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    pub fn container_not_found(selector: impl Into<String>) -> Self {
        Self::ContainerNotFound { selector: selector.into() }
    }
}
