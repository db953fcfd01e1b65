// File: crates/walkchart-core/src/scale.rs
// Summary: Linear domain -> pixel scale with nice rounding, tick generation and tick formatting.

/// Data coordinate.
pub type Value = f64;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Tick count used when callers do not ask for one.
pub const DEFAULT_TICKS: usize = 10;

/// Linear map from a settable domain to a fixed pixel range.
///
/// The range may be inverted (`[height, 0]` for a y axis growing upward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [Value; 2],
    range: [f64; 2],
}

impl LinearScale {
    /// Scale with the unit domain `[0, 1]`.
    pub fn new(range: [f64; 2]) -> Self {
        Self { domain: [0.0, 1.0], range }
    }

    pub fn with_domain(mut self, domain: [Value; 2]) -> Self {
        self.domain = domain;
        self
    }

    pub fn domain(&self) -> [Value; 2] {
        self.domain
    }

    pub fn set_domain(&mut self, domain: [Value; 2]) {
        self.domain = domain;
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a data value to pixels. Values outside the domain extrapolate.
    #[inline]
    pub fn map(&self, v: Value) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        // Degenerate domain collapses onto the middle of the range.
        let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Map pixels back to a data value.
    #[inline]
    pub fn invert(&self, px: f64) -> Value {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (px - r0) / span };
        d0 + t * (d1 - d0)
    }

    /// Extend the domain so both ends land on multiples of the tick step.
    pub fn nice(&mut self, count: usize) -> &mut Self {
        let [d0, d1] = self.domain;
        let reversed = d1 < d0;
        let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
        if !(start < stop) || !start.is_finite() || !stop.is_finite() || count == 0 {
            return self;
        }
        let mut prestep = f64::NAN;

        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if step == prestep {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
        }

        self.domain = if reversed { [stop, start] } else { [start, stop] };
        self
    }

    /// Round tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        ticks(self.domain[0], self.domain[1], count as f64)
    }

    /// Formatter matching `ticks(count)`: fixed decimals from the tick step, comma grouping.
    pub fn tick_format(&self, count: usize) -> TickFormat {
        let [d0, d1] = self.domain;
        let step = tick_step(d0, d1, count as f64);
        TickFormat { decimals: precision_fixed(step) }
    }
}

/// Fixed-precision number formatter produced by [`LinearScale::tick_format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickFormat {
    pub decimals: usize,
}

impl TickFormat {
    pub fn format(&self, v: Value) -> String {
        let text = format!("{:.*}", self.decimals, v.abs());
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let mut out = String::with_capacity(text.len() + 4);
        // Negative zero after rounding prints without a sign.
        let is_zero = text.bytes().all(|b| b == b'0' || b == b'.');
        if v < 0.0 && !is_zero {
            out.push('\u{2212}');
        }
        out.push_str(&group_thousands(int_part));
        if let Some(f) = frac_part {
            out.push('.');
            out.push_str(f);
        }
        out
    }
}

fn group_thousands(digits: &str) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---- tick math ----------------------------------------------------------------

/// (i1, i2, inc): ticks are `i * inc` for positive inc, `i / -inc` for negative inc.
fn tick_bounds(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };

    let mut i1;
    let mut i2;
    let inc;
    if power < 0.0 {
        let pos = 10f64.powf(-power) / factor;
        i1 = (start * pos).round();
        i2 = (stop * pos).round();
        if i1 / pos < start { i1 += 1.0; }
        if i2 / pos > stop { i2 -= 1.0; }
        inc = -pos;
    } else {
        let pos = 10f64.powf(power) * factor;
        i1 = (start / pos).round();
        i2 = (stop / pos).round();
        if i1 * pos < start { i1 += 1.0; }
        if i2 * pos > stop { i2 -= 1.0; }
        inc = pos;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_bounds(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed tick increment: positive means a step of `inc`, negative a step of `1 / -inc`.
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_bounds(start, stop, count).2
}

/// Absolute tick step between `start` and `stop` (order independent).
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reversed = stop < start;
    let inc = if reversed { tick_increment(stop, start, count) } else { tick_increment(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reversed { -step } else { step }
}

/// Round values between `start` and `stop`, roughly `count` of them.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reversed = stop < start;
    let (i1, i2, inc) = if reversed { tick_bounds(stop, start, count) } else { tick_bounds(start, stop, count) };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reversed {
        out.reverse();
    }
    out
}

fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let exponent = step.log10().floor();
    if exponent >= 0.0 { 0 } else { (-exponent) as usize }
}
