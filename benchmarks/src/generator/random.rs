use rand::distributions::{DistIter, Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Uniformly distributed values in `[0, range)`.
///
/// Without a seed, the generator draws its seed from system entropy
/// and every iteration yields a different stream.
#[derive(Clone, Copy, Debug)]
pub struct RandomUniformGenerator {
    range: u64,
    seed: Option<u64>,
}

impl RandomUniformGenerator {
    pub fn new(range: u64, seed: Option<u64>) -> Self {
        assert!(range > 0, "RandomUniformGenerator range must be positive.");
        RandomUniformGenerator { range, seed }
    }
}

impl IntoIterator for RandomUniformGenerator {
    type IntoIter = DistIter<Uniform<u64>, StdRng, u64>;
    type Item = u64;

    fn into_iter(self) -> Self::IntoIter {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Uniform::new(0, self.range).sample_iter(rng)
    }
}
