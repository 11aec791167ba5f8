//! Seeded random sub-streams for deterministic parallel simulation.
//!
//! One xoshiro256** stream per path, separated by `jump()` (each jump
//! advances the state by 2^128 draws), so output is bit-identical for a
//! given seed regardless of how rayon schedules the paths.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Build one independent RNG stream per path from a single seed.
pub fn path_streams(seed: u64, npaths: usize) -> Vec<Xoshiro256StarStar> {
    let mut base = Xoshiro256StarStar::seed_from_u64(seed);
    (0..npaths)
        .map(|_| {
            let stream = base.clone();
            base.jump();
            stream
        })
        .collect()
}
