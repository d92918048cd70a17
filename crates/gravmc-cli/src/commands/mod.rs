pub mod redshift;
pub mod zeropoint;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// Seeded generator for reproducible runs, entropy-seeded otherwise.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!(seed, "Using seeded random stream");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
