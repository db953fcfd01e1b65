// File: crates/walkchart-core/src/driver.rs
// Summary: Fixed-period timer that regenerates the walk and updates the chart on each tick.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

use crate::chart::{ChartState, Frame};
use crate::walk::RandomWalk;

/// Owns the chart, the generator parameters and the random source.
///
/// The caller owns the clock: it calls [`poll`](Driver::poll) whenever it wakes up
/// and paints [`frame`](Driver::frame) as often as it likes.
#[derive(Debug)]
pub struct Driver<R: Rng> {
    chart: ChartState,
    walk: RandomWalk,
    rng: R,
    period: Duration,
    next_tick: Instant,
    ticks: u64,
}

impl<R: Rng> Driver<R> {
    /// The first tick fires one period after `start`; the period is twice the
    /// chart's transition duration.
    pub fn new(chart: ChartState, walk: RandomWalk, rng: R, start: Instant) -> Self {
        let period = chart.config().tick_period();
        Self { chart, walk, rng, period, next_tick: start + period, ticks: 0 }
    }

    /// Fire at most one tick if one is due. Deadlines missed while the caller was
    /// away are dropped rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.tick(now);
        while self.next_tick <= now {
            self.next_tick += self.period;
        }
        true
    }

    /// Generate a fresh series and hand it to the chart, regardless of the schedule.
    pub fn tick(&mut self, now: Instant) {
        let series = self.walk.generate_with(&mut self.rng);
        self.chart.update(&series, now);
        self.ticks += 1;
        debug!(tick = self.ticks, points = series.len(), "tick");
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_tick
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn chart(&self) -> &ChartState {
        &self.chart
    }

    pub fn frame(&self, now: Instant) -> Frame {
        self.chart.frame(now)
    }
}
