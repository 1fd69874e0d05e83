//! Deterministic randomness for ability effects.
//!
//! The ability engine never owns random state. Every roll draws from the generator exposed by the
//! battle, so a battle replayed from the same seed resolves every chance-based effect the same way.

mod prng;
pub mod rand_util;

pub use prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
