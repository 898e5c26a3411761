//! The typed allocator front-end.

use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::AllocError;
use crate::global::default_resource;
use crate::resource::MemoryResource;

/// A value-type allocator binding an element type to a memory resource.
///
/// `Alloc<T>` translates element counts into [`Layout::array`] byte requests
/// against the resource it wraps. It is `Copy` — containers hold one by
/// value and hand copies to helper structures (owning iterators, staged
/// buffers) freely.
///
/// Equality delegates to [`MemoryResource::is_equal`] and means
/// interchangeability: `a == b` exactly when a buffer allocated through `b`
/// may be released through `a`.
pub struct Alloc<T> {
    resource: &'static dyn MemoryResource,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Alloc<T> {
    /// Bind the element type to `resource`.
    pub fn new(resource: &'static dyn MemoryResource) -> Self {
        Self {
            resource,
            _marker: PhantomData,
        }
    }

    /// The bound memory resource.
    pub fn resource(&self) -> &'static dyn MemoryResource {
        self.resource
    }

    /// Allocate storage for `count` elements of `T`.
    ///
    /// `count` must be non-zero and `T` must not be zero-sized; containers
    /// never issue such requests. Returns [`AllocError::CapacityOverflow`]
    /// when `count * size_of::<T>()` overflows the maximum allocation size,
    /// or [`AllocError::Exhausted`] when the resource fails.
    pub fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        debug_assert!(count != 0, "zero-count allocation request");
        debug_assert!(std::mem::size_of::<T>() != 0, "allocation for zero-sized type");

        let layout = Layout::array::<T>(count).map_err(|_| AllocError::CapacityOverflow)?;
        Ok(self.resource.allocate(layout)?.cast())
    }

    /// Release storage for `count` elements previously obtained from
    /// [`allocate`](Alloc::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate(count)` on this allocator or one it
    /// compares equal to, with the same `count`. The block must not be used
    /// afterwards.
    pub unsafe fn deallocate(&self, ptr: NonNull<T>, count: usize) {
        // Layout validity was established when the block was allocated.
        let layout = Layout::array::<T>(count).expect("deallocate count matches a prior allocate");
        // SAFETY: same pointer/layout pair as the original allocation, per
        // the caller contract.
        unsafe { self.resource.deallocate(ptr.cast(), layout) };
    }

    /// Whether a buffer allocated through `other` may be released through
    /// `self`. This is the query allocator-aware moves branch on.
    pub fn can_release(&self, other: &Alloc<T>) -> bool {
        self.resource.is_equal(other.resource)
    }
}

impl<T> Default for Alloc<T> {
    fn default() -> Self {
        Self::new(default_resource())
    }
}

impl<T> Clone for Alloc<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Alloc<T> {}

impl<T> PartialEq for Alloc<T> {
    fn eq(&self, other: &Self) -> bool {
        self.can_release(other)
    }
}

impl<T> fmt::Debug for Alloc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The erased resource has no useful Debug form; show the address
        // used for identity comparisons.
        f.debug_struct("Alloc")
            .field(
                "resource",
                &(self.resource as *const dyn MemoryResource).cast::<()>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records the byte size and alignment of the last request.
    struct Recording {
        last_size: AtomicUsize,
        last_align: AtomicUsize,
    }

    impl Recording {
        const fn new() -> Self {
            Self {
                last_size: AtomicUsize::new(0),
                last_align: AtomicUsize::new(0),
            }
        }
    }

    impl MemoryResource for Recording {
        fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
            self.last_size.store(layout.size(), Ordering::Relaxed);
            self.last_align.store(layout.align(), Ordering::Relaxed);
            crate::GlobalResource.allocate(layout)
        }

        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            // SAFETY: forwarded allocation, same pair forwarded back.
            unsafe { crate::GlobalResource.deallocate(ptr, layout) };
        }
    }

    #[test]
    fn count_translates_to_bytes_and_alignment() {
        static RECORDING: Recording = Recording::new();
        let alloc: Alloc<u64> = Alloc::new(&RECORDING);

        let ptr = alloc.allocate(4).unwrap();
        assert_eq!(RECORDING.last_size.load(Ordering::Relaxed), 32);
        assert_eq!(RECORDING.last_align.load(Ordering::Relaxed), 8);
        // SAFETY: allocated just above with count 4.
        unsafe { alloc.deallocate(ptr, 4) };
    }

    #[test]
    fn overflowing_count_is_reported() {
        let alloc: Alloc<u64> = Alloc::default();
        assert_eq!(
            alloc.allocate(usize::MAX / 4).unwrap_err(),
            AllocError::CapacityOverflow
        );
    }

    #[test]
    fn equality_follows_resource_identity() {
        static FIRST: Recording = Recording::new();
        static SECOND: Recording = Recording::new();

        let a: Alloc<u32> = Alloc::new(&FIRST);
        let b: Alloc<u32> = Alloc::new(&FIRST);
        let c: Alloc<u32> = Alloc::new(&SECOND);

        assert_eq!(a, b);
        assert!(a.can_release(&b));
        assert_ne!(a, c);
        assert!(!a.can_release(&c));
    }

    #[test]
    fn default_binds_the_default_resource() {
        let alloc: Alloc<u8> = Alloc::default();
        assert!(alloc.resource().is_equal(default_resource()));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn byte_math_scales_with_count(count in 1usize..512) {
                static RECORDING: Recording = Recording::new();
                let alloc: Alloc<u64> = Alloc::new(&RECORDING);
                let ptr = alloc.allocate(count).unwrap();
                prop_assert_eq!(
                    RECORDING.last_size.load(Ordering::Relaxed),
                    count * std::mem::size_of::<u64>()
                );
                // SAFETY: allocated just above with the same count.
                unsafe { alloc.deallocate(ptr, count) };
            }
        }
    }
}
