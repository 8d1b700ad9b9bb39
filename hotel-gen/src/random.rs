//! Random selection utilities
//!
//! Every roll in the crate goes through [`RandomSource`] so callers decide
//! between ambient randomness ([`ThreadRandom`]) and a reproducible stream
//! ([`SeededRandom`]).

use crate::error::{GenError, GenResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform randomness
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn uniform01(&mut self) -> f64;

    /// Uniform integer in `[min, max]` inclusive; bounds are swapped if inverted
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = hi - lo;
        let offset = (self.uniform01() * (span + 1) as f64).floor() as i64;
        lo + offset.clamp(0, span)
    }

    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.uniform01() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform01(&mut self) -> f64 {
        (**self).uniform01()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn uniform01(&mut self) -> f64 {
        (**self).uniform01()
    }
}

/// Ambient, unseeded randomness from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform01(&mut self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// Reproducible randomness: identical seeds give identical catalogs
#[derive(Debug, Clone)]
pub struct SeededRandom(ChaCha8Rng);

impl SeededRandom {
    /// Create a new source seeded from the given `u64` value
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn uniform01(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

/// Uniform pick by index `floor(u * len)`
pub fn pick_random<'a, T, R>(rng: &mut R, items: &'a [T]) -> GenResult<&'a T>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return Err(GenError::EmptyPool { pool: "selection" });
    }
    let index = (rng.uniform01() * items.len() as f64).floor() as usize;
    Ok(&items[index.min(items.len() - 1)])
}

/// Uniform integer in `[min, max]` inclusive
pub fn random_int<R: RandomSource + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.int_in_range(min, max)
}

/// Keep each item independently with probability `p`, preserving order
pub fn keep_each<T, R>(rng: &mut R, items: &[T], p: f64) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    items.iter().filter(|_| rng.chance(p)).cloned().collect()
}

/// Test double replaying a fixed script of uniform values, then repeating the last one
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty());
        Self { values, pos: 0 }
    }

    /// Always returns `value`
    pub(crate) fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn uniform01(&mut self) -> f64 {
        let value = self.values[self.pos.min(self.values.len() - 1)];
        self.pos += 1;
        value
    }
}
