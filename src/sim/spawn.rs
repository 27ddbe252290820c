//! Procedural pipe generation
//!
//! The random source is a trait so tests can script exact gap positions.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Pipe;
use crate::tuning::Tuning;

/// Uniform random numbers for spawn placement
pub trait SpawnSource {
    /// Next sample in [0, 1)
    fn next_unit(&mut self) -> f32;
}

impl SpawnSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedSource {
    samples: Vec<f32>,
    next: usize,
}

impl FixedSource {
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples, next: 0 }
    }
}

impl SpawnSource for FixedSource {
    fn next_unit(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.next % self.samples.len()];
        self.next += 1;
        sample.clamp(0.0, 1.0)
    }
}

/// Whether this tick is a spawn tick
#[inline]
pub fn is_spawn_tick(frames: u64, tuning: &Tuning) -> bool {
    // A zero period means every tick
    frames % tuning.spawn_period.max(1) == 0
}

/// New pair at the right edge with a randomly placed gap
pub fn spawn_pipe(rng: &mut impl SpawnSource, tuning: &Tuning) -> Pipe {
    let u = rng.next_unit();
    Pipe {
        x: tuning.width,
        y: -tuning.spawn_scale * (u + 1.0),
    }
}
