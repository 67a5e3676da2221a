use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness owned by one game session, so a seed replays the same AI choices.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Fair coin flip.
    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.random_range(0..9usize), b.random_range(0..9usize));
            assert_eq!(a.random_bool(), b.random_bool());
        }
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(SessionRng::new(42).seed(), 42);
    }

    #[test]
    fn test_random_range_stays_in_bounds() {
        let mut rng = SessionRng::from_random();
        for _ in 0..100 {
            let value = rng.random_range(0..3usize);
            assert!(value < 3);
        }
    }
}
