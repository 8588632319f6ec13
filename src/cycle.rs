//! Endless repetition of a finite backing vector.
//!
//! The n-th produced element is `data[n % data.len()]`, so the cursor
//! never exhausts once the backing vector is non-empty. An empty backing
//! vector is the one documented edge case: exhaustion on the very first
//! `next()`, not an error.
//!
//! # Python equivalent
//!
//! ```python
//! class Cycle:
//!     def __next__(self):
//!         if not self.data:
//!             raise StopIteration
//!         result = self.data[self.index % len(self.data)]
//!         self.index += 1
//!         return result
//! ```

use crate::producer::{AcquireError, Producer};

/// Cycles through a backing vector forever.
///
/// # Example
///
/// ```
/// use lazyseq::Cycle;
///
/// let first_ten: Vec<i32> = Cycle::new(vec![1, 2, 3]).take(10).collect();
/// assert_eq!(first_ten, vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Cycle<T> {
    data: Vec<T>,
    index: usize,
}

impl<T> Cycle<T> {
    /// Creates a cyclic sequence over `data`, starting at the first element.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Cycle { data, index: 0 }
    }

    /// Number of elements in the backing vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the backing vector is empty (and the cursor exhausts immediately).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Clone> Iterator for Cycle<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.data.is_empty() {
            return None;
        }
        let value = self.data[self.index % self.data.len()].clone();
        // The index only ever moves forward; wrapping keeps the modular
        // law intact for arbitrarily long runs.
        self.index = self.index.wrapping_add(1);
        Some(value)
    }
}

impl<T: Clone> Producer for Cycle<T> {
    type Item = T;
    type Cursor = Cycle<T>;

    fn start(self) -> Result<Self::Cursor, AcquireError> {
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_element_follows_modular_law() {
        let data = vec!['a', 'b', 'c'];
        let mut cycler = Cycle::new(data.clone());
        for n in 0..20 {
            assert_eq!(cycler.next(), Some(data[n % data.len()]));
        }
    }

    #[test]
    fn empty_backing_exhausts_on_first_call() {
        let mut cycler: Cycle<i32> = Cycle::new(vec![]);
        assert_eq!(cycler.next(), None);
        assert_eq!(cycler.next(), None);
    }

    #[test]
    fn single_element_repeats() {
        let repeated: Vec<i32> = Cycle::new(vec![7]).take(5).collect();
        assert_eq!(repeated, vec![7, 7, 7, 7, 7]);
    }

    #[test]
    fn matches_python_usage_block() {
        // cycler = Cycle([1, 2, 3]); 10 pulls print 1 2 3 1 2 3 1 2 3 1
        let pulls: Vec<i32> = Cycle::new(vec![1, 2, 3]).take(10).collect();
        assert_eq!(pulls, vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn len_and_is_empty_reflect_backing() {
        let cycler = Cycle::new(vec![1, 2]);
        assert_eq!(cycler.len(), 2);
        assert!(!cycler.is_empty());
        assert!(Cycle::<i32>::new(vec![]).is_empty());
    }
}
