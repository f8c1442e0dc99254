//! # Positive Sizes
//!
//! Windowing and bounded take/drop operations need a strictly positive
//! size. [`PositiveSize`] is checked once, here, so the lazy machinery never
//! sees a zero or negative size.
//!
//! ## Example
//!
//! ```
//! use stream_common::size::PositiveSize;
//!
//! let size = PositiveSize::new(3).unwrap();
//! assert_eq!(size.get(), 3);
//!
//! assert!(PositiveSize::new(0).is_err());
//! assert!(PositiveSize::new(-2).is_err());
//! ```

use std::fmt;

use crate::error::{Outcome, StreamError};

/// A size known to be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveSize(usize);

impl PositiveSize {
    /// The smallest valid size.
    pub const ONE: PositiveSize = PositiveSize(1);

    /// Validates a raw integer.
    ///
    /// Returns [`StreamError::InvalidSize`] for `raw <= 0`.
    pub fn new(raw: i64) -> Outcome<Self> {
        if raw <= 0 {
            return Err(StreamError::InvalidSize(raw));
        }
        usize::try_from(raw)
            .map(PositiveSize)
            .map_err(|_| StreamError::InvalidSize(raw))
    }

    /// Validates an unsigned count; only zero is rejected.
    pub fn from_count(count: usize) -> Outcome<Self> {
        if count == 0 {
            Err(StreamError::InvalidSize(0))
        } else {
            Ok(PositiveSize(count))
        }
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for PositiveSize {
    type Error = StreamError;

    fn try_from(raw: i64) -> Outcome<Self> {
        Self::new(raw)
    }
}

impl fmt::Display for PositiveSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
