//! Seeded candidate shuffle.
//!
//! QuickBundles-style oracles depend on input order. Shuffling with a fixed,
//! explicit seed removes the bias of the upstream ordering while keeping
//! every run on the same input identical.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Permute `items` in place with a ChaCha8 stream seeded from `seed`.
pub fn deterministic_shuffle<T>(items: &mut [T], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}
