//! Shared helpers for silt benchmarks.

#![deny(rustdoc::broken_intra_doc_links)]

use silt::SmallArray;

/// Build an array of `len` sequential values with inline capacity `N`.
pub fn sequential<const N: usize>(len: u64) -> SmallArray<u64, N> {
    (0..len).collect()
}
