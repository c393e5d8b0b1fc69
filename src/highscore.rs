//! Best-ever bankroll, persisted across sessions.
//!
//! The record is a single integer. Reading is forgiving: a missing or
//! unreadable record falls back to a default. Writing is best effort: a failed
//! write is logged and play carries on.

use alloc::string::ToString;

use tracing::{debug, warn};

use crate::error::StoreError;

/// Default file name of the on-disk record.
pub const DEFAULT_FILE_NAME: &str = "highscore.txt";

/// Durable storage for the high score.
pub trait HighScoreStore {
    /// Reads the stored record, `Ok(None)` if there is none yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be read or parsed.
    fn read(&mut self) -> Result<Option<u64>, StoreError>;

    /// Replaces the stored record with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn write(&mut self, value: u64) -> Result<(), StoreError>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for &mut S {
    fn read(&mut self) -> Result<Option<u64>, StoreError> {
        (**self).read()
    }

    fn write(&mut self, value: u64) -> Result<(), StoreError> {
        (**self).write(value)
    }
}

/// Parses a plain-text record: one integer, surrounding whitespace ignored.
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] if the text is not a non-negative integer.
pub fn parse_record(text: &str) -> Result<Option<u64>, StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| StoreError::Malformed(trimmed.to_string()))
}

/// Keeps the record in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            writes: 0,
            fail_writes: false,
        }
    }

    /// Creates a store already holding `value`.
    #[must_use]
    pub const fn with_value(value: u64) -> Self {
        Self {
            value: Some(value),
            writes: 0,
            fail_writes: false,
        }
    }

    /// Makes every subsequent write fail with [`StoreError::Unavailable`].
    #[must_use]
    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// The stored value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<u64> {
        self.value
    }

    /// Number of successful writes.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn read(&mut self) -> Result<Option<u64>, StoreError> {
        Ok(self.value)
    }

    fn write(&mut self, value: u64) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable);
        }
        self.value = Some(value);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::FileStore;

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{HighScoreStore, parse_record};
    use crate::error::StoreError;

    /// Keeps the record in a plain-text file.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        /// Creates a store backed by the file at `path`.
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Path of the backing file.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Default for FileStore {
        fn default() -> Self {
            Self::new(super::DEFAULT_FILE_NAME)
        }
    }

    impl HighScoreStore for FileStore {
        fn read(&mut self) -> Result<Option<u64>, StoreError> {
            match fs::read_to_string(&self.path) {
                Ok(text) => parse_record(&text),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn write(&mut self, value: u64) -> Result<(), StoreError> {
            fs::write(&self.path, value.to_string())?;
            Ok(())
        }
    }
}

/// The high score together with the store it is written through to.
#[derive(Debug, Clone)]
pub struct HighScore<S> {
    value: u64,
    store: S,
}

impl<S: HighScoreStore> HighScore<S> {
    /// Reads the record from `store`, using `fallback` when there is none or
    /// it cannot be read.
    pub fn load(mut store: S, fallback: u64) -> Self {
        let value = match store.read() {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(fallback, "no high score recorded yet");
                fallback
            }
            Err(err) => {
                warn!(%err, fallback, "could not read high score, using default");
                fallback
            }
        };
        Self { value, store }
    }

    /// Current high score.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Borrows the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Raises the record to `bankroll` if it is higher, writing it through
    /// immediately. Returns whether the record changed.
    ///
    /// A failed write is logged and otherwise ignored; the in-memory record
    /// is still raised so it never goes down.
    pub fn record_if_higher(&mut self, bankroll: u64) -> bool {
        if bankroll <= self.value {
            return false;
        }
        self.value = bankroll;
        if let Err(err) = self.store.write(bankroll) {
            warn!(%err, high_score = bankroll, "could not persist high score");
        }
        true
    }
}
