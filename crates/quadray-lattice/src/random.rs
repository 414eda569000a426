//! Randomisation helpers.
//!
//! Every function takes the RNG explicitly. Seed a `ChaCha8Rng` for
//! reproducible layouts.

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform in-place permutation (Fisher–Yates).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
