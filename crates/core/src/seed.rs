//! Seeded pseudo-random stream threaded through every placement and sampling call.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

use crate::types::Direction;

pub struct BoardRng {
    inner: ChaCha8Rng,
}

impl BoardRng {
    pub fn seeded(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform value in `0..bound`.
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.inner.next_u64() % bound as u64) as usize
    }

    pub fn range_inclusive(&mut self, min_value: usize, max_value: usize) -> usize {
        debug_assert!(min_value <= max_value);
        min_value + self.below(max_value - min_value + 1)
    }

    /// True with probability `percent / 100`.
    pub fn chance(&mut self, percent: u32) -> bool {
        (self.below(100) as u32) < percent
    }

    pub fn direction(&mut self) -> Direction {
        Direction::ALL[self.below(Direction::ALL.len())]
    }

    pub fn pick<T: Copy>(&mut self, slice: &[T]) -> T {
        slice[self.below(slice.len())]
    }
}
