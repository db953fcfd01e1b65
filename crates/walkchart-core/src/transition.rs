// File: crates/walkchart-core/src/transition.rs
// Summary: Timed transitions with cubic in-out easing; sampled by the caller, never awaited.

use std::time::{Duration, Instant};

/// A running interpolation from an old value to a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub start: Instant,
    pub duration: Duration,
}

impl Transition {
    pub fn new(start: Instant, duration: Duration) -> Self {
        Self { start, duration }
    }

    /// Linear progress in `[0, 1]`. A zero duration is complete immediately.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased progress in `[0, 1]`.
    pub fn eased(&self, now: Instant) -> f64 {
        ease_cubic_in_out(self.progress(now))
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Symmetric cubic easing: slow start, fast middle, slow end.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
