//! The process-wide default memory resource.

use std::alloc::{self, Layout};
use std::ptr::NonNull;
use std::sync::OnceLock;

use crate::error::AllocError;
use crate::resource::MemoryResource;

/// A memory resource forwarding to the process's general-purpose allocator.
///
/// This is the implementation behind [`default_resource`] when no
/// replacement has been installed. All instances are functionally
/// interchangeable, but `is_equal` keeps the identity default; code that
/// cares about O(1) transfers should share one instance, which using
/// [`default_resource`] does automatically.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalResource;

impl MemoryResource for GlobalResource {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() != 0, "zero-size allocation request");

        // SAFETY: layout has a non-zero size per the trait contract.
        let ptr = unsafe { alloc::alloc(layout) };
        NonNull::new(ptr).ok_or(AllocError::Exhausted { layout })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: the caller guarantees the pointer/layout pair came from
        // `allocate` on an interchangeable resource, and every
        // `GlobalResource` forwards to the same underlying allocator.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    }
}

static GLOBAL: GlobalResource = GlobalResource;
static DEFAULT: OnceLock<&'static dyn MemoryResource> = OnceLock::new();

/// Access the process-wide default memory resource.
///
/// Containers constructed without an explicit resource bind to this. Unless
/// [`set_default_resource`] installed a replacement before the first call,
/// it is a [`GlobalResource`].
pub fn default_resource() -> &'static dyn MemoryResource {
    *DEFAULT.get_or_init(|| &GLOBAL)
}

/// Install `resource` as the process-wide default.
///
/// The default binding is set-once: this succeeds only if neither
/// `set_default_resource` nor [`default_resource`] has run yet, and returns
/// `false` otherwise. Call it during initialization, before any container
/// is constructed. There is no way to swap the default while allocation
/// traffic is in flight.
pub fn set_default_resource(resource: &'static dyn MemoryResource) -> bool {
    DEFAULT.set(resource).is_ok()
}
