//! Per-call random number generator construction.

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Build the generator backing a single sampling call.
///
/// `Some(seed)` yields a reproducible stream; `None` draws fresh entropy.
/// Each call owns its generator, so seeded calls are deterministic and
/// concurrent callers never share state.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}
