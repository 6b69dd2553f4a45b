/// Random selection primitives and the injectable random sources behind them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// Internal condition that lexicon validation should have ruled out.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Probability expressed as `hits` chances out of `out_of`.
pub type Odds = (usize, usize);

/// Source of uniform integer draws.
///
/// Every generation decision goes through [`RandomSource::below`]. Concurrent
/// units never share a source: each one gets its own from
/// [`RandomSource::fork`].
pub trait RandomSource: Send {
    /// Uniform draw over `[0, n)`. Callers never pass `n == 0`.
    fn below(&mut self, n: usize) -> usize;

    /// Derive an independent source for another unit of work.
    fn fork(&mut self) -> Self
    where
        Self: Sized;
}

/// Default source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn below(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    fn fork(&mut self) -> Self {
        Self::from_seed(self.rng.gen())
    }
}

/// Pick a uniformly random element of `items`.
pub fn pick<'a, R, T>(rng: &mut R, items: &'a [T]) -> Result<&'a T, GenerationError>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return Err(GenerationError::InvariantViolation(
            "selection from an empty collection".to_string(),
        ));
    }
    Ok(&items[rng.below(items.len())])
}

/// One draw from `[0, n)`; true when it lands below `k`, so exactly `k/n`.
pub fn chance<R>(rng: &mut R, (k, n): Odds) -> bool
where
    R: RandomSource + ?Sized,
{
    rng.below(n) < k
}
