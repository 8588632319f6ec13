//! Unbounded arithmetic sequence.
//!
//! Starting at `s`, the k-th produced value is `s + k`. The cursor never
//! signals exhaustion; the caller bounds consumption externally, typically
//! with `take` or by breaking out of a loop.
//!
//! # Python equivalent
//!
//! ```python
//! class InfiniteCounter:
//!     def __next__(self):
//!         current_value = self.current
//!         self.current += 1
//!         return current_value
//! ```

use crate::producer::{AcquireError, Producer};

/// Infinite stream of integers starting from a given value.
///
/// # Example
///
/// ```
/// use lazyseq::Counter;
///
/// let bounded: Vec<i64> = Counter::new(10).take_while(|&n| n <= 14).collect();
/// assert_eq!(bounded, vec![10, 11, 12, 13, 14]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    current: i64,
}

impl Counter {
    /// Creates a counter whose first produced value is `start`.
    #[must_use]
    pub fn new(start: i64) -> Self {
        Counter { current: start }
    }
}

impl Default for Counter {
    /// Starts at 0, matching the Python snippet's `start=0` default.
    fn default() -> Self {
        Counter::new(0)
    }
}

impl Iterator for Counter {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current;
        self.current += 1;
        Some(value)
    }
}

impl Producer for Counter {
    type Item = i64;
    type Cursor = Counter;

    fn start(self) -> Result<Self::Cursor, AcquireError> {
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kth_value_is_start_plus_k() {
        let mut counter = Counter::new(10);
        for k in 0..100 {
            assert_eq!(counter.next(), Some(10 + k));
        }
    }

    #[test]
    fn default_starts_at_zero() {
        let first_five: Vec<i64> = Counter::default().take(5).collect();
        assert_eq!(first_five, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn negative_start_counts_up() {
        let crossing: Vec<i64> = Counter::new(-2).take(5).collect();
        assert_eq!(crossing, vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn never_exhausts_within_bounded_consumption() {
        // 10_000 pulls, every one yields a value
        assert_eq!(Counter::new(0).take(10_000).count(), 10_000);
    }
}
