//! Sample identifier generation.
//!
//! The `sample` command prints random identifiers as tokens, which is handy
//! for eyeballing the alphabet or seeding fixtures. All randomness comes
//! from a seeded ChaCha8 RNG, so the same seed always prints the same
//! tokens.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `count` identifiers of `len` random bytes each.
pub fn generate_ids(seed: u64, count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| generate_id(&mut rng, len)).collect()
}

fn generate_id(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    let mut id = vec![0u8; len];
    rng.fill(&mut id[..]);
    id
}
