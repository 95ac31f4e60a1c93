use crate::domain::ports::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Process-wide thread-local generator; the production randomness source.
#[derive(Debug, Clone, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn pick_index(&mut self, n: usize) -> usize {
        rand::thread_rng().gen_range(0..n)
    }
}

/// Deterministic generator for reproducible draws and tests.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: StdRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRng {
    fn pick_index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_stays_in_range() {
        let mut rng = ThreadRngSource::new();
        for _ in 0..1000 {
            assert!(rng.pick_index(5) < 5);
        }
        assert_eq!(rng.pick_index(1), 0);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = SeededRng::new(99);
        let mut b = SeededRng::new(99);
        let draws_a: Vec<usize> = (0..32).map(|_| a.pick_index(10)).collect();
        let draws_b: Vec<usize> = (0..32).map(|_| b.pick_index(10)).collect();
        assert_eq!(draws_a, draws_b);
    }
}
