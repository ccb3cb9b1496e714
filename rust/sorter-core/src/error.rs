//! Precondition violations reported by the bounded sorts.

use thiserror::Error;

/// Error type for sorts that place keys by value (histogram and radix).
///
/// Every variant is a caller error detected before any output is produced;
/// the index identifies the first offending element of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A key exceeds the inclusive upper bound given to the histogram sort.
    #[error("key {value} at index {index} is outside [0, {max_key}]")]
    InvalidBound { index: usize, value: i64, max_key: i64 },

    /// A key needs more decimal digits than the radix sort was told to process.
    #[error("key {value} at index {index} does not fit in {num_digits} decimal digit(s)")]
    InvalidDigitCount {
        index: usize,
        value: i64,
        num_digits: u32,
    },

    /// Bounded counting sort and radix sort only accept non-negative keys.
    #[error("negative key {value} at index {index}")]
    NegativeKey { index: usize, value: i64 },

    /// The histogram for `max_key` cannot be allocated.
    #[error("histogram for max key {max_key} is too large to allocate")]
    HistogramTooLarge { max_key: i64 },
}

impl SortError {
    /// Index of the offending input element, when the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            SortError::InvalidBound { index, .. }
            | SortError::InvalidDigitCount { index, .. }
            | SortError::NegativeKey { index, .. } => Some(*index),
            SortError::HistogramTooLarge { .. } => None,
        }
    }
}
