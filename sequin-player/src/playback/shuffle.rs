//! Shuffle bag permutation sources
//!
//! Random mode draws from a bag holding a permutation of all playlist
//! indices. Where that permutation comes from is pluggable so that tests can
//! script exact orders.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Produces a permutation of `0..len` for a fresh shuffle bag
pub trait ShuffleSource: Send {
    /// Must return every index in `0..len` exactly once
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

fn shuffled(len: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    // Fisher-Yates
    order.shuffle(rng);
    order
}

/// Default source: a generator re-seeded from the wall clock's nanoseconds
/// every time a bag is created. Runs are not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockShuffle;

impl ClockShuffle {
    fn seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    }
}

impl ShuffleSource for ClockShuffle {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(Self::seed());
        shuffled(len, &mut rng)
    }
}

/// Deterministic source: one generator seeded once, shared by every bag
#[derive(Debug, Clone)]
pub struct SeededShuffle {
    rng: StdRng,
}

impl SeededShuffle {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ShuffleSource for SeededShuffle {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        shuffled(len, &mut self.rng)
    }
}
