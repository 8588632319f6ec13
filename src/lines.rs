//! Line-by-line file reading with acquire-once/release-once discipline.
//!
//! [`FileLines`] holds only a path. `start()` is the acquisition point:
//! it opens the file (a missing file is a hard failure, surfaced
//! immediately) and returns a [`Lines`] cursor. The cursor yields one
//! `io::Result<String>` per line with the trailing newline stripped; at
//! end-of-file it drops its reader — releasing the handle exactly once —
//! and signals exhaustion. Every call after that signals exhaustion again
//! without re-acquiring anything.
//!
//! The Python snippet this comes from leaks its handle when the caller
//! stops early, because the file is only closed on `StopIteration`:
//!
//! ```python
//! def __next__(self):
//!     line = self.file.readline()
//!     if line == '':
//!         self.file.close()
//!         raise StopIteration
//!     return line.strip()
//! ```
//!
//! Here the cursor owns its reader, so abandoning iteration releases the
//! handle on `Drop`; [`Lines::close`] is the explicit early-release entry
//! point for callers who want the handle gone before the cursor goes away.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::producer::{AcquireError, Producer};

/// A sequence of lines backed by a file on disk.
///
/// Holding a `FileLines` holds no resource; the file is opened by
/// [`Producer::start`].
///
/// # Example
///
/// ```no_run
/// use lazyseq::{FileLines, Producer};
///
/// let cursor = FileLines::new("example.txt").start()?;
/// for line in cursor {
///     println!("{}", line?);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileLines {
    path: PathBuf,
}

impl FileLines {
    /// Creates a file-backed line sequence for `path`. Nothing is opened yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLines { path: path.into() }
    }

    /// The path the cursor will read from.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Producer for FileLines {
    type Item = io::Result<String>;
    type Cursor = Lines;

    /// Opens the file. This is the single acquisition point; failure here
    /// aborts iteration before it begins.
    fn start(self) -> Result<Lines, AcquireError> {
        let file = File::open(&self.path).map_err(|source| AcquireError::Open {
            path: self.path.clone(),
            source,
        })?;
        Ok(Lines {
            reader: Some(BufReader::new(file).lines()),
        })
    }
}

/// Cursor over the lines of an opened file.
///
/// The reader is dropped at end-of-file, on [`close`](Lines::close), or
/// when the cursor itself is dropped — whichever comes first, and exactly
/// once. After release the cursor stays exhausted.
#[derive(Debug)]
pub struct Lines {
    reader: Option<io::Lines<BufReader<File>>>,
}

impl Lines {
    /// Releases the file handle early, before exhaustion is reached.
    ///
    /// Subsequent `next()` calls signal exhaustion. Calling `close` on an
    /// already-closed cursor is a no-op.
    pub fn close(&mut self) {
        self.reader = None;
    }

    /// Whether the file handle is still held.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }
}

impl Iterator for Lines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.as_mut()?.next() {
            Some(line) => Some(line),
            None => {
                // End-of-file: release the handle, then stay exhausted.
                self.reader = None;
                None
            }
        }
    }
}
