//! Lazy Fibonacci sequence using the standard additive recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

/// Lazy iterator over the Fibonacci sequence, starting from 0, 1.
///
/// The accumulators are arbitrary precision, so the sequence never overflows.
///
/// # Example
/// ```
/// use basics_core::fibonacci::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|v| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator {
    first: BigUint,
    second: BigUint,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            first: BigUint::zero(),
            second: BigUint::one(),
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let next = &self.first + &self.second;
        let second = std::mem::replace(&mut self.second, next);
        let term = std::mem::replace(&mut self.first, second);
        trace!(%term, "emit");
        Some(term)
    }
}

/// The first `n` terms of the sequence.
///
/// `terms(0)` is empty and `terms(1)` yields only `0`.
pub fn terms(n: usize) -> std::iter::Take<FibIterator> {
    FibIterator::new().take(n)
}
