//! Pseudo-random numbers with a pluggable algorithm.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::RuntimeConfig;

pub trait RngAlgorithm {
    fn next_u64(&self, state: &mut u64) -> u64;
}

/// 64-bit linear congruential generator (Knuth's MMIX constants).
pub struct Lcg64;

impl RngAlgorithm for Lcg64 {
    fn next_u64(&self, state: &mut u64) -> u64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        *state
    }
}

pub struct Random {
    state: Cell<u64>,
    algo: Box<dyn RngAlgorithm>,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self::with_algorithm(seed, Box::new(Lcg64))
    }

    pub fn with_algorithm(seed: u64, algo: Box<dyn RngAlgorithm>) -> Self {
        Self {
            state: Cell::new(seed),
            algo,
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(config.rng_seed.unwrap_or_else(clock_seed))
    }

    pub fn next_u64(&self) -> u64 {
        let mut state = self.state.get();
        let v = self.algo.next_u64(&mut state);
        self.state.set(state);
        v
    }

    /// Uniform in `[0, 1)`.
    pub fn next_double(&self) -> f64 {
        // Top 53 bits; the low bits of an LCG are weak.
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform in `[0, i32::MAX]`.
    pub fn next_int(&self) -> i32 {
        (self.next_u64() >> 33) as i32
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
