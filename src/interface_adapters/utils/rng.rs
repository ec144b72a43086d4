use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws a seed for a run that was not given one.
///
/// The seed is logged when the run spawns, so an unseeded run can still be
/// replayed by passing it back through `ENZYME_SIM_SEED`.
pub fn fresh_seed() -> u64 {
    rand::thread_rng().gen()
}

/// Portable, reproducible generator for a given seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
