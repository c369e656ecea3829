use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds the generator used for every random decision in a search or match. A fixed seed makes
/// runs reproducible; `None` seeds from the operating system.
pub fn create_rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
