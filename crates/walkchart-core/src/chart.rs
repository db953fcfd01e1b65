// File: crates/walkchart-core/src/chart.rs
// Summary: Chart state (scales, axes, persistent line visual) with initialize/update and frame sampling.

use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::axis::{Axis, AxisLayout, TickMark};
use crate::error::{ChartError, Result};
use crate::geometry::{PlotRect, Vec2};
use crate::line;
use crate::scale::{LinearScale, DEFAULT_TICKS};
use crate::series::Series;
use crate::transition::Transition;
use crate::types::{Insets, LineStyle, HEIGHT, TRANSITION_DURATION, WIDTH};

/// Layout and timing of one chart. Fixed for the lifetime of a [`ChartState`].
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margins: Insets,
    pub transition: Duration,
    pub x_label: String,
    pub y_label: String,
    pub line_style: LineStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margins: Insets::default(),
            transition: TRANSITION_DURATION,
            x_label: "x axis".to_string(),
            y_label: "y axis".to_string(),
            line_style: LineStyle::default(),
        }
    }
}

impl ChartConfig {
    /// Plot area left after the margins, or an error if there is none.
    pub fn plot_rect(&self) -> Result<PlotRect> {
        if self.transition.is_zero() {
            return Err(ChartError::InvalidDuration);
        }
        PlotRect::inside(self.width, self.height, &self.margins).ok_or(ChartError::InvalidLayout {
            width: self.width,
            height: self.height,
            hsum: self.margins.hsum(),
            vsum: self.margins.vsum(),
        })
    }

    /// Timer period driving regeneration: twice the transition duration.
    pub fn tick_period(&self) -> Duration {
        self.transition * 2
    }
}

/// Static text element placed relative to the plot group.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees applied around the group origin before positioning.
    pub rotate: f64,
}

// Scale plus the transition that is moving its axis towards the current domain.
#[derive(Clone, Debug)]
struct AnimatedAxis {
    axis: Axis,
    scale: LinearScale,
    previous: LinearScale,
    /// Ticks on screen when the running transition started.
    shown: Vec<TickMark>,
    transition: Option<Transition>,
}

impl AnimatedAxis {
    fn new(axis: Axis, scale: LinearScale) -> Self {
        let shown = axis.layout(&scale).ticks;
        Self { axis, scale, previous: scale, shown, transition: None }
    }

    fn progress(&self, now: Instant) -> f64 {
        self.transition.map_or(1.0, |tr| tr.eased(now))
    }

    fn retarget(&mut self, domain: [f64; 2], transition: Option<Transition>, now: Instant) {
        self.shown = self.layout(now).ticks;
        self.previous = self.scale;
        self.scale.set_domain(domain);
        self.transition = transition;
    }

    fn layout(&self, now: Instant) -> AxisLayout {
        let t = self.progress(now);
        self.axis.layout_between(&self.shown, &self.previous, &self.scale, t)
    }
}

/// The single `path.line` visual bound to the latest series.
#[derive(Clone, Debug)]
struct LineVisual {
    from: Vec<Vec2>,
    to: Vec<Vec2>,
    transition: Option<Transition>,
    style: LineStyle,
}

impl LineVisual {
    fn displayed(&self, now: Instant) -> Vec<Vec2> {
        match self.transition {
            Some(tr) if !tr.is_done(now) => line::interpolate(&self.from, &self.to, tr.eased(now)),
            _ => self.to.clone(),
        }
    }
}

/// Chart state created once by [`ChartState::initialize`] and mutated by every update.
#[derive(Clone, Debug)]
pub struct ChartState {
    config: ChartConfig,
    plot: PlotRect,
    x: AnimatedAxis,
    y: AnimatedAxis,
    labels: [AxisLabel; 2],
    line: Option<LineVisual>,
    updates: u64,
}

impl ChartState {
    /// Compute the layout, build scales (nice-rounded initial domain) and axes,
    /// and place the static axis labels.
    pub fn initialize(config: ChartConfig) -> Result<Self> {
        let plot = config.plot_rect()?;
        let (w, h) = (plot.width, plot.height);

        let mut x_scale = LinearScale::new([0.0, w]);
        x_scale.nice(DEFAULT_TICKS);
        let mut y_scale = LinearScale::new([h, 0.0]);
        y_scale.nice(DEFAULT_TICKS);

        let labels = [
            AxisLabel {
                text: config.x_label.clone(),
                x: w / 2.0,
                y: h + config.margins.bottom as f64 / 2.0,
                rotate: 0.0,
            },
            AxisLabel {
                text: config.y_label.clone(),
                x: -h / 2.0,
                y: -(config.margins.left as f64) / 2.0,
                rotate: -90.0,
            },
        ];

        debug!(width = config.width, height = config.height, plot_w = w, plot_h = h, "chart initialized");
        Ok(Self {
            x: AnimatedAxis::new(Axis::bottom(), x_scale),
            y: AnimatedAxis::new(Axis::left(), y_scale),
            config,
            plot,
            labels,
            line: None,
            updates: 0,
        })
    }

    /// Rescale both axes to `[0, max]` and re-bind the line to `series`, animating
    /// from whatever is on screen at `now`. Returns without waiting for the animation.
    pub fn update(&mut self, series: &Series, now: Instant) {
        let transition = Transition::new(now, self.config.transition);
        self.apply(series, now, Some(transition));
    }

    /// Same as [`update`](Self::update) but jumps straight to the final state.
    pub fn snap(&mut self, series: &Series, now: Instant) {
        self.apply(series, now, None);
    }

    fn apply(&mut self, series: &Series, now: Instant, transition: Option<Transition>) {
        let (Some(x_max), Some(y_max)) = (series.x_max(), series.y_max()) else {
            warn!("ignoring update with an empty series");
            return;
        };

        // Lower bounds stay at zero even if the series dips below it.
        self.x.retarget([0.0, x_max], transition, now);
        self.y.retarget([0.0, y_max], transition, now);

        let target = line::project(series, &self.x.scale, &self.y.scale);
        let style = self.config.line_style.clone();
        match self.line.as_mut() {
            // enter: the first shape is drawn as-is
            None => self.line = Some(LineVisual { from: Vec::new(), to: target, transition: None, style }),
            // merge: animate from what is displayed right now
            Some(visual) => {
                visual.from = visual.displayed(now);
                visual.to = target;
                visual.transition = transition;
                visual.style = style;
            }
        }

        self.updates += 1;
        debug!(update = self.updates, points = series.len(), x_max, y_max, "chart updated");
    }

    /// Sample the scene at `now`.
    pub fn frame(&self, now: Instant) -> Frame {
        let frame = Frame {
            width: self.config.width,
            height: self.config.height,
            margins: self.config.margins,
            plot: self.plot,
            x_axis: self.x.layout(now),
            y_axis: self.y.layout(now),
            labels: self.labels.to_vec(),
            line: self.line.as_ref().map(|l| LineFrame { vertices: l.displayed(now), style: l.style.clone() }),
        };
        trace!(ticks_x = frame.x_axis.ticks.len(), ticks_y = frame.y_axis.ticks.len(), "frame sampled");
        frame
    }

    /// True while any axis or line transition is still running.
    pub fn is_animating(&self, now: Instant) -> bool {
        let running = |tr: Option<Transition>| tr.is_some_and(|t| !t.is_done(now));
        running(self.x.transition)
            || running(self.y.transition)
            || self.line.as_ref().is_some_and(|l| running(l.transition))
    }

    pub fn x_scale(&self) -> &LinearScale { &self.x.scale }
    pub fn y_scale(&self) -> &LinearScale { &self.y.scale }
    pub fn x_domain(&self) -> [f64; 2] { self.x.scale.domain() }
    pub fn y_domain(&self) -> [f64; 2] { self.y.scale.domain() }
    pub fn plot(&self) -> &PlotRect { &self.plot }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn labels(&self) -> &[AxisLabel] { &self.labels }

    /// Number of line visuals in the scene: 0 before the first update, 1 after.
    pub fn line_count(&self) -> usize {
        usize::from(self.line.is_some())
    }

    pub fn update_count(&self) -> u64 {
        self.updates
    }
}

/// Line geometry and style at one instant, in plot-group coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LineFrame {
    pub vertices: Vec<Vec2>,
    pub style: LineStyle,
}

impl LineFrame {
    pub fn path_data(&self) -> String {
        line::path_data(&self.vertices)
    }
}

/// Everything a backend needs to paint the chart at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub margins: Insets,
    pub plot: PlotRect,
    /// Laid out along the plot's bottom edge (group translated by `plot.height`).
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub labels: Vec<AxisLabel>,
    pub line: Option<LineFrame>,
}
