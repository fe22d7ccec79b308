use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Source of treap priorities.
///
/// Uses the xoshiro256** PRNG, so a seeded source yields the same tree shape
/// on every run.
///
/// # Examples
///
/// ```
/// use bst_forest::priority::PrioritySource;
///
/// let mut a = PrioritySource::seed_from_u64(7);
/// let mut b = PrioritySource::seed_from_u64(7);
/// assert_eq!(a.next_priority(), b.next_priority());
/// ```
#[derive(Clone, Debug)]
pub struct PrioritySource {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl PrioritySource {
    /// Create a source with an optional seed.
    ///
    /// If no seed is provided, a random seed is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Create a source from a small integer seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_exact_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    pub fn next_priority(&mut self) -> u64 {
        self.rng.gen()
    }
}

impl Default for PrioritySource {
    fn default() -> Self {
        Self::new(None)
    }
}
