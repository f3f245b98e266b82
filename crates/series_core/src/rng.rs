//! Random rate generation.
//!
//! This module provides [`RateRng`], a PRNG wrapper that is passed
//! explicitly to whatever needs randomness, and [`RateBounds`], the
//! half-open integer interval rates are drawn from.
//!
//! Unseeded generators draw from OS entropy, so their output differs
//! between runs. Seeded generators reproduce the same sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::SeriesError;

/// Default inclusive lower bound for generated rates.
pub const DEFAULT_RATE_MIN: i64 = -10;

/// Default exclusive upper bound for generated rates.
pub const DEFAULT_RATE_MAX: i64 = 10;

/// Half-open interval `[min, max)` for generated rates.
///
/// # Examples
///
/// ```rust
/// use series_core::rng::RateBounds;
///
/// let bounds = RateBounds::default();
/// assert!(bounds.contains(-10));
/// assert!(!bounds.contains(10));
///
/// assert!(RateBounds::new(5, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateBounds {
    min: i64,
    max: i64,
}

impl RateBounds {
    /// Creates bounds with an inclusive `min` and exclusive `max`.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::InvalidBounds` unless `min < max`.
    pub fn new(min: i64, max: i64) -> Result<Self, SeriesError> {
        if min >= max {
            return Err(SeriesError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Inclusive lower bound.
    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Exclusive upper bound.
    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Returns whether `rate` lies in `[min, max)`.
    #[inline]
    pub fn contains(&self, rate: i64) -> bool {
        self.min <= rate && rate < self.max
    }
}

impl Default for RateBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_RATE_MIN,
            max: DEFAULT_RATE_MAX,
        }
    }
}

/// Random number generator for daily rates.
///
/// # Examples
///
/// ```rust
/// use series_core::rng::{RateBounds, RateRng};
///
/// let bounds = RateBounds::default();
/// let mut rng1 = RateRng::from_seed(12345);
/// let mut rng2 = RateRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_rates(10, &bounds), rng2.gen_rates(10, &bounds));
/// ```
#[derive(Debug, Clone)]
pub struct RateRng {
    inner: StdRng,
    /// `None` when initialised from entropy.
    seed: Option<u64>,
}

impl RateRng {
    /// Creates a generator initialised with the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a generator initialised from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Creates a seeded generator when `seed` is given, unseeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draws one rate uniformly from `[bounds.min(), bounds.max())`.
    #[inline]
    pub fn gen_rate(&mut self, bounds: &RateBounds) -> i64 {
        self.inner.gen_range(bounds.min..bounds.max)
    }

    /// Draws `count` independent rates.
    pub fn gen_rates(&mut self, count: usize, bounds: &RateBounds) -> Vec<i64> {
        (0..count).map(|_| self.gen_rate(bounds)).collect()
    }
}
