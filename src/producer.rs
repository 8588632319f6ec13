//! The explicit sequence-producer contract.
//!
//! Python leaves the iteration contract implicit: anything with an
//! `__iter__`/`__next__` pair is an iterable. Here the contract is a
//! trait with exactly two operations:
//!
//! - [`Producer::start`] prepares iteration and hands back a cursor. For
//!   in-memory variants this never fails; for resource-backed variants it
//!   is the acquisition point, and a missing resource is a hard failure
//!   surfaced immediately as [`AcquireError`].
//! - *advance* is the cursor's `Iterator::next`. `Some(item)` yields the
//!   next element; `None` is the exhaustion marker. Exhaustion is not an
//!   error kind and never appears in [`AcquireError`].

use std::io;
use std::path::PathBuf;

/// Failure to acquire the backing resource of a sequence at start time.
///
/// Distinct from exhaustion: exhaustion is `None` from the cursor and is
/// expected; an `AcquireError` aborts iteration before it begins.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AcquireError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A source of elements that can be turned into a cursor.
///
/// The cursor is an ordinary [`Iterator`], so exhaustion is `None` and all
/// standard combinators apply. Restartable sources implement `Producer`
/// on a borrow (see `&BinaryTree<T>`), deriving a fresh cursor per call;
/// single-shot sources consume themselves.
///
/// # Example
///
/// ```
/// use lazyseq::{Counter, Producer};
///
/// let cursor = Counter::new(10).start().unwrap();
/// let first: Vec<i64> = cursor.take(3).collect();
/// assert_eq!(first, vec![10, 11, 12]);
/// ```
pub trait Producer: Sized {
    /// The element type produced.
    type Item;

    /// The cursor driving iteration; `next()` is the advance operation.
    type Cursor: Iterator<Item = Self::Item>;

    /// Prepares the producer for iteration.
    ///
    /// In-memory variants always return `Ok`. Resource-backed variants
    /// acquire their resource here; the resource stays held until the
    /// cursor reaches exhaustion, is closed, or is dropped.
    fn start(self) -> Result<Self::Cursor, AcquireError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Counter, Cycle};

    #[test]
    fn in_memory_start_is_infallible() {
        assert!(Cycle::new(vec![1, 2, 3]).start().is_ok());
        assert!(Counter::default().start().is_ok());
    }

    #[test]
    fn acquire_error_reports_path() {
        let err = AcquireError::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn cursors_compose_with_std_combinators() {
        let cursor = Cycle::new(vec![1, 2]).start().unwrap();
        let doubled: Vec<i32> = cursor.map(|x| x * 2).take(4).collect();
        assert_eq!(doubled, vec![2, 4, 2, 4]);
    }
}
