// File: crates/walkchart-core/src/lib.rs
// Summary: Core library entry point; exports the random-walk generator, chart state and renderers.

pub mod axis;
pub mod chart;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod host;
pub mod line;
pub mod raster;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod transition;
pub mod types;
pub mod walk;

pub use axis::{Axis, AxisLayout, Orient, TickMark};
pub use chart::{ChartConfig, ChartState, Frame, LineFrame};
pub use driver::Driver;
pub use error::{ChartError, Result};
pub use host::{HostPage, CHART_SELECTOR};
pub use raster::RasterOptions;
pub use scale::LinearScale;
pub use series::{Point, Series};
pub use theme::Theme;
pub use walk::{generate, RandomWalk};
