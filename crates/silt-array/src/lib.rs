//! A growable array with a small-buffer optimization.
//!
//! [`SmallArray<T, N>`] owns a contiguous run of `T`. The first `N` elements
//! live in a buffer embedded in the container itself; growth beyond that
//! spills the contents into storage obtained from a
//! [`MemoryResource`](silt_alloc::MemoryResource) through the array's bound
//! [`Alloc<T>`](silt_alloc::Alloc).
//!
//! # Storage modes
//!
//! ```text
//! SmallArray<T, N>
//! ├── Storage::Inline([MaybeUninit<T>; N])   capacity N, no allocation
//! └── Storage::Heap { ptr, capacity }        after the first spill
//! ```
//!
//! `Inline → Heap` is the only transition. `clear` keeps heap storage so
//! that repeated clear/fill cycles do not re-promote quadratically; only
//! dropping the array releases the buffer.
//!
//! # Growth and invalidation
//!
//! Capacity grows to the smallest power of two covering the request. A grow
//! migrates the elements in order and frees the old buffer, so raw pointers
//! obtained from [`as_ptr`](SmallArray::as_ptr) before a grow are dangling
//! after it. References and iterators are borrows of the buffer and are
//! invalidated the usual way: the borrow checker refuses mutation while any
//! are live.
//!
//! # Failure policy
//!
//! Allocation failure is recoverable: the `try_*` methods return
//! [`AllocError`](silt_alloc::AllocError) from the operation that triggered
//! growth. The un-prefixed methods are convenience wrappers that panic on
//! the same error. Contract violations — an index out of bounds, an
//! insertion position past the end, an inverted drain range — panic
//! unconditionally; the `unsafe` surface ([`set_len`](SmallArray::set_len),
//! the slice `*_unchecked` accessors) is the opt-out with undefined
//! behavior on misuse.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod iter;

pub use array::{erase_if, erase_value, DynArray, SmallArray};
pub use iter::{Drain, IntoIter};

/// Construct a [`SmallArray`] from a list of values or a `value; count`
/// splat, mirroring the array literal forms.
///
/// ```
/// use silt_array::{small_array, SmallArray};
///
/// let literal: SmallArray<u32, 4> = small_array![1, 2, 3];
/// assert_eq!(literal.as_slice(), &[1, 2, 3]);
///
/// let splat: SmallArray<u8, 8> = small_array![0; 5];
/// assert_eq!(splat.len(), 5);
/// ```
#[macro_export]
macro_rules! small_array {
    () => {
        $crate::SmallArray::new()
    };
    ($value:expr; $count:expr) => {
        $crate::SmallArray::from_elem($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SmallArray::from([$($value),+])
    };
}
