//! A growable array with a small-buffer optimization over pluggable,
//! capability-based memory resources.
//!
//! This is the facade crate: it re-exports the public API of the silt
//! sub-crates. For most users, adding `silt` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use silt::prelude::*;
//!
//! let mut tags: SmallArray<u32, 4> = small_array![7, 11, 13];
//! tags.push(17);            // fourth element, still inline
//! assert!(!tags.spilled());
//!
//! tags.push(19);            // outgrows the inline buffer
//! assert!(tags.spilled());
//! assert_eq!(tags.capacity(), 8);
//! assert_eq!(tags.as_slice(), &[7, 11, 13, 17, 19]);
//!
//! tags.insert(1, 8);
//! let removed: Vec<u32> = tags.drain(3..5).collect();
//! assert_eq!(removed, vec![13, 17]);
//! assert_eq!(tags.as_slice(), &[7, 8, 11, 19]);
//! ```
//!
//! # Custom memory resources
//!
//! Arrays bind to a [`MemoryResource`] at construction; the default
//! forwards to the global allocator. Any `Sync` type implementing the
//! trait can serve:
//!
//! ```rust
//! use silt::{GlobalResource, SmallArray};
//!
//! static ARENA: GlobalResource = GlobalResource; // stand-in for a real arena
//!
//! let mut scratch: SmallArray<u8, 16> = SmallArray::with_resource(&ARENA);
//! scratch.extend_from_slice(b"spills into ARENA once past 16 bytes");
//! assert!(scratch.spilled());
//! ```
//!
//! There is no `emplace`: construct the value and [`push`](SmallArray::push)
//! it, then reach it through `last_mut()` if it needs follow-up mutation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use silt_alloc::{
    default_resource, set_default_resource, Alloc, AllocError, GlobalResource, MemoryResource,
};
pub use silt_array::{erase_if, erase_value, small_array, Drain, DynArray, IntoIter, SmallArray};

/// The commonly used subset of the API, for glob import.
pub mod prelude {
    pub use silt_array::{erase_if, erase_value, small_array, DynArray, SmallArray};
}
