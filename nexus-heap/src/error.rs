//! Error types for heap construction and access.

use thiserror::Error;

/// Invalid construction parameters.
///
/// No heap is created when any of these is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Capacity was zero.
    #[error("heap capacity must be > 0")]
    ZeroCapacity,
    /// Raw order kind did not map to [`Order`](crate::Order).
    #[error("unknown heap order kind: {0}")]
    InvalidOrder(u32),
    /// No comparator was supplied to the builder.
    #[error("heap requires a comparator")]
    MissingComparator,
}

/// Error returned when pushing onto a full heap.
///
/// Carries the rejected item back to the caller; the heap is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("heap is at capacity")]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Failed lookup or removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap holds no items.
    #[error("heap is empty")]
    Empty,
    /// No resident item compares equal to the probe.
    #[error("no matching item in heap")]
    NotFound,
}
