// File: crates/walkchart-core/src/axis.rs
// Summary: Bottom/left axis model: tick layout for a scale and interpolated layout between two scales.

use crate::scale::{LinearScale, Value, DEFAULT_TICKS};
use crate::transition::lerp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    /// Ticks hang below a horizontal line; labels under the ticks.
    Bottom,
    /// Ticks point left of a vertical line; labels left of the ticks.
    Left,
}

impl Orient {
    /// +1 for ticks growing down/right of the axis line, -1 for up/left.
    pub fn direction(&self) -> f64 {
        match self {
            Orient::Bottom => 1.0,
            Orient::Left => -1.0,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orient::Bottom)
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub tick_count: usize,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl Axis {
    pub fn new(orient: Orient) -> Self {
        Self { orient, tick_count: DEFAULT_TICKS, tick_size_inner: 6.0, tick_size_outer: 6.0, tick_padding: 3.0 }
    }

    pub fn bottom() -> Self {
        Self::new(Orient::Bottom)
    }

    pub fn left() -> Self {
        Self::new(Orient::Left)
    }

    /// Settled layout for one scale.
    pub fn layout(&self, scale: &LinearScale) -> AxisLayout {
        let fmt = scale.tick_format(self.tick_count);
        let ticks = scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|v| TickMark { value: v, offset: scale.map(v), label: fmt.format(v), opacity: 1.0 })
            .collect();
        self.finish(scale, ticks)
    }

    /// Layout part-way (`t` in `[0, 1]`, already eased) through a change to `to`.
    ///
    /// `shown` are the ticks on screen when the change started and `previous` is the
    /// scale the axis was last retargeted to. Ticks already shown slide and fade from
    /// where they are; new ticks fade in from where `previous` would place them;
    /// dropped ticks slide to their `to` position while fading out and disappear
    /// once `t` reaches 1.
    pub fn layout_between(&self, shown: &[TickMark], previous: &LinearScale, to: &LinearScale, t: f64) -> AxisLayout {
        if t >= 1.0 {
            return self.layout(to);
        }
        let new_values = to.ticks(self.tick_count);
        let new_fmt = to.tick_format(self.tick_count);

        let mut ticks = Vec::with_capacity(shown.len() + new_values.len());
        for &v in &new_values {
            let end = to.map(v);
            let (start, opacity) = match shown.iter().find(|s| same_value(s.value, v)) {
                Some(s) => (s.offset, lerp(s.opacity, 1.0, t)),
                None => {
                    let start = previous.map(v);
                    (if start.is_finite() { start } else { end }, t)
                }
            };
            ticks.push(TickMark { value: v, offset: lerp(start, end, t), label: new_fmt.format(v), opacity });
        }
        for s in shown.iter().filter(|s| s.opacity > 0.0 && !new_values.iter().any(|&v| same_value(s.value, v))) {
            ticks.push(TickMark {
                value: s.value,
                offset: lerp(s.offset, to.map(s.value), t),
                label: s.label.clone(),
                opacity: s.opacity * (1.0 - t),
            });
        }
        self.finish(to, ticks)
    }

    fn finish(&self, scale: &LinearScale, ticks: Vec<TickMark>) -> AxisLayout {
        AxisLayout {
            orient: self.orient,
            ticks,
            range: scale.range(),
            tick_size_inner: self.tick_size_inner,
            tick_size_outer: self.tick_size_outer,
            tick_padding: self.tick_padding,
        }
    }
}

fn same_value(a: Value, b: Value) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

/// One tick: data value, pixel offset along the axis, formatted label, opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: Value,
    pub offset: f64,
    pub label: String,
    pub opacity: f64,
}

/// Axis geometry in the axis group's local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub orient: Orient,
    pub ticks: Vec<TickMark>,
    /// Pixel extent of the domain line.
    pub range: [f64; 2],
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl AxisLayout {
    /// Domain line with outer ticks, in SVG path syntax.
    pub fn domain_path(&self) -> String {
        let k = self.orient.direction();
        let outer = k * self.tick_size_outer;
        let [r0, r1] = self.range;
        match self.orient {
            Orient::Bottom => format!("M{r0},{outer}V0H{r1}V{outer}"),
            Orient::Left => format!("M{outer},{r0}H0V{r1}H{outer}"),
        }
    }

    /// Tick line end point relative to the tick origin.
    pub fn tick_end(&self) -> (f64, f64) {
        let len = self.orient.direction() * self.tick_size_inner;
        if self.orient.is_horizontal() { (0.0, len) } else { (len, 0.0) }
    }

    /// Label anchor relative to the tick origin.
    pub fn label_anchor(&self) -> (f64, f64) {
        let d = self.orient.direction() * (self.tick_size_inner.max(0.0) + self.tick_padding);
        if self.orient.is_horizontal() { (0.0, d) } else { (d, 0.0) }
    }

    /// Ticks that are at least partially visible.
    pub fn visible_ticks(&self) -> impl Iterator<Item = &TickMark> {
        self.ticks.iter().filter(|t| t.opacity > 0.0)
    }
}
