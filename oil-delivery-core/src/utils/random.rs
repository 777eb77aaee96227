#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Picks a value uniformly distributed on the half-open interval [0, bound).
    /// Returns zero when bound is zero.
    fn pick(&self, bound: usize) -> usize;

    /// Shuffles given indices in place.
    fn shuffle(&self, indices: &mut [usize]);
}

/// A default random implementation backed by a small, fast, non-cryptographic generator.
///
/// The generator is not shared between threads: each worker is expected to own its instance.
pub struct DefaultRandom {
    rng: RefCell<SmallRng>,
}

impl DefaultRandom {
    /// Creates a generator which produces the same sequence for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
    }

    /// Creates a repeatable generator when seed is specified, an entropy seeded one otherwise.
    pub fn new_with_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::default, Self::new_repeatable)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..max + 1)
    }

    fn pick(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }

        self.rng.borrow_mut().gen_range(0..bound)
    }

    fn shuffle(&self, indices: &mut [usize]) {
        indices.shuffle(&mut *self.rng.borrow_mut());
    }
}
