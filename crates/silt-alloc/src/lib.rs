//! Memory resource capability and typed allocator front-end for silt
//! containers.
//!
//! # Architecture
//!
//! Storage flows through two layers:
//!
//! ```text
//! SmallArray<T, N>  (silt-array)
//! └── Alloc<T>                 typed front-end: element counts → Layout
//!     └── &dyn MemoryResource  raw capability: allocate / deallocate / is_equal
//!         └── GlobalResource   default implementation over std::alloc
//! ```
//!
//! A [`MemoryResource`] is a polymorphic capability for raw byte blocks.
//! Containers never talk to it directly; they hold an [`Alloc<T>`], a copyable
//! value type that binds an element type to a resource and does the
//! `Layout::array` byte math. Two allocators compare equal exactly when a
//! block obtained through one may be released through the other, which is the
//! query container move logic branches on.
//!
//! The process-wide default resource is reachable through
//! [`default_resource`] and forwards to the global allocator. It can be
//! replaced with [`set_default_resource`], but only before the default has
//! been observed: the binding is set-once, so the replace-while-allocating
//! race cannot be expressed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod global;
pub mod resource;
pub mod typed;

pub use error::AllocError;
pub use global::{default_resource, set_default_resource, GlobalResource};
pub use resource::MemoryResource;
pub use typed::Alloc;
