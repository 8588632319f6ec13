//! # lazyseq
//!
//! A small collection of Python iterator-protocol snippets rebuilt as
//! idiomatic, lazy Rust sequences. Each module is self-contained: a cyclic
//! sequence over a fixed backing vector, an unbounded counter, a
//! file-backed line sequence with scoped resource release, a lazy in-order
//! walk over a binary tree, and the classic nested-closure capture demo.
//!
//! ## Key mappings
//!
//! Python's informal "has `__iter__`/`__next__`" contract becomes explicit:
//!
//! | Python | Idiomatic Rust |
//! |--------|----------------|
//! | `__iter__` | [`Producer::start`] (or `iter()` / `IntoIterator`) |
//! | `__next__` | `Iterator::next` |
//! | `raise StopIteration` | return `None` |
//! | `open()` inside `__iter__` | fallible `start()` returning `Result` |
//! | file closed on `StopIteration` | reader dropped at end-of-file (and on `Drop`) |
//!
//! Exhaustion is a normal control signal, not an error: every cursor here
//! is a plain [`Iterator`], so `None` means "no more elements" and the
//! whole combinator vocabulary (`map`, `filter`, `take`, `zip`, ...) comes
//! for free.
//!
//! ## Modules
//!
//! - [`producer`]: the explicit start/advance contract shared by all variants
//! - [`cycle`]: endless repetition of a finite backing vector
//! - [`counter`]: unbounded arithmetic sequence
//! - [`lines`]: line-by-line file reading with acquire-once/release-once discipline
//! - [`tree`]: lazy, restartable in-order traversal of a binary tree
//! - [`closures`]: nested-closure environment capture

pub mod closures;
pub mod counter;
pub mod cycle;
pub mod lines;
pub mod producer;
pub mod tree;

// Re-export the main types for convenience
pub use counter::Counter;
pub use cycle::Cycle;
pub use lines::{FileLines, Lines};
pub use producer::{AcquireError, Producer};
pub use tree::{BinaryTree, InOrder, TreeNode};
