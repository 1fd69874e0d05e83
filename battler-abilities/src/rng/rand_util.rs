use crate::rng::PseudoRandomNumberGenerator;

/// Returns a random integer in the range `[0, n)`.
///
/// Returns 0 when `n` is 0.
pub fn random_int(prng: &mut dyn PseudoRandomNumberGenerator, n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    prng.next() % n
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    random_int(prng, max.saturating_sub(min)) + min
}

/// Returns whether an event with probability `numerator / denominator` occurs.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    random_int(prng, denominator) < numerator
}

/// Returns whether an event with the given percent chance occurs.
///
/// Always consumes one value from the generator, even for 0% and 100%.
pub fn percent(prng: &mut dyn PseudoRandomNumberGenerator, chance: u32) -> bool {
    random_int(prng, 100) < chance as u64
}

/// Returns a random element from the given slice.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    match slice.len() {
        0 => None,
        1 => slice.first(),
        len => slice.get(random_int(prng, len as u64) as usize),
    }
}
