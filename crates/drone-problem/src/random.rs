//! The random source shared by every generator in a run.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seeded pseudo-random generator passed explicitly to each generator.
///
/// The seed is always known, even when it was drawn from the thread RNG, so
/// any generated problem can be reproduced by reusing [`RandomSource::seed`].
///
/// # Example
///
/// ```
/// use drone_problem::RandomSource;
/// use rand::Rng;
///
/// let mut first = RandomSource::seeded(2026);
/// let mut second = RandomSource::seeded(first.seed());
///
/// let a: u64 = first.random();
/// let b: u64 = second.random();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a deterministic source from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source from a fresh seed drawn from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Returns the seed this source was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst);
    }
}
