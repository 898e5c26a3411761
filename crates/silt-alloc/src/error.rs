//! Allocation error types.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Errors that can occur while acquiring storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The bound memory resource could not satisfy the request.
    Exhausted {
        /// The layout that was requested.
        layout: Layout,
    },
    /// The requested element count describes a byte size too large for any
    /// single allocation.
    CapacityOverflow,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { layout } => {
                write!(
                    f,
                    "memory resource exhausted: requested {} bytes aligned to {}",
                    layout.size(),
                    layout.align()
                )
            }
            Self::CapacityOverflow => {
                write!(f, "requested capacity overflows the maximum allocation size")
            }
        }
    }
}

impl Error for AllocError {}
