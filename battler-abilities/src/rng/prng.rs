use std::any::Any;

use rand::Rng;

/// A pseudo-random number generator that can be deterministically replayed.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// The seed the generator was created with.
    fn initial_seed(&self) -> u64;

    /// Returns the next integer in the sequence.
    fn next(&mut self) -> u64;

    /// Mutable cast to [`Any`] for tests.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A linear congruential generator, the standard implementation of
/// [`PseudoRandomNumberGenerator`].
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    seed: u64,
}

impl RealPseudoRandomNumberGenerator {
    const MULTIPLIER: u64 = 0x5D588B656C078965;
    const INCREMENT: u64 = 0x0000000000269EC3;

    /// Creates a new generator.
    ///
    /// Two generators created with the same seed produce the same sequence. A random seed is used
    /// if none is given.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            initial_seed: seed,
            seed,
        }
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.seed = self
            .seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        // Lower bits are predictable.
        self.seed >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
