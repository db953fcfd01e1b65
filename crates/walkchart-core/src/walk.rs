// File: crates/walkchart-core/src/walk.rs
// Summary: Bounded random-walk generator feeding the chart on every tick.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::series::{Point, Series};
use crate::types::X_STEP;

/// Default number of steps after the origin.
pub const DEFAULT_COUNT: usize = 1024;
/// Default exclusive upper bound on the magnitude of a single step.
pub const DEFAULT_MAX_STEP: u32 = 50;

/// Generate a walk of `count` steps starting at `(0, 0)`.
///
/// Each step draws `r` uniformly from `[0, max_step)`. On a fair coin flip the
/// step tries to go down; a step that would take the walk below zero goes up
/// by `r` instead. The other half of the flips go up by `r`.
///
/// Point `k` sits at `x = k * X_STEP`; the result always holds `count + 1` points.
pub fn generate<R: Rng + ?Sized>(count: usize, max_step: u32, rng: &mut R) -> Series {
    let mut series = Series::with_capacity(count + 1);
    series.push(Point::ORIGIN);

    let mut y = 0.0f64;
    for i in 1..=count {
        let r = if max_step == 0 { 0.0 } else { rng.gen_range(0..max_step) as f64 };

        if rng.gen_bool(0.5) {
            if y - r < 0.0 {
                y += r;
            } else {
                y -= r;
            }
        } else {
            y += r;
        }

        series.push(Point::new(i as f64 * X_STEP, y));
    }
    series
}

/// Generator parameters used by the driver on every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomWalk {
    pub count: usize,
    pub max_step: u32,
}

impl RandomWalk {
    pub const fn new(count: usize, max_step: u32) -> Self {
        Self { count, max_step }
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Series {
        generate(self.count, self.max_step, rng)
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT, DEFAULT_MAX_STEP)
    }
}

/// Reproducible generator for tests and `--seed` runs.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// OS-seeded generator for live runs.
pub fn entropy_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}
