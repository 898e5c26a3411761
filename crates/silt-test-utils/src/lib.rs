//! Instrumented memory resources for silt development.
//!
//! Provides [`MemoryResource`] implementations that make allocation traffic
//! observable ([`CountingResource`]) or controllable ([`QuotaResource`],
//! [`ExhaustedResource`]) so container tests can assert on buffer transfers,
//! release bookkeeping, and failure paths.
//!
//! All three are `const`-constructible, so each test can declare its own
//! `static` instance and stay isolated from the others.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::alloc::Layout;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};

use silt_alloc::{AllocError, GlobalResource, MemoryResource};

/// A resource that forwards to [`GlobalResource`] while counting traffic.
///
/// Tracks the number of allocations and deallocations and the bytes
/// currently outstanding. By drop time of everything allocated through it,
/// `live_bytes()` returns to zero and the two counters match.
pub struct CountingResource {
    allocations: AtomicUsize,
    deallocations: AtomicUsize,
    live_bytes: AtomicUsize,
}

impl CountingResource {
    pub const fn new() -> Self {
        Self {
            allocations: AtomicUsize::new(0),
            deallocations: AtomicUsize::new(0),
            live_bytes: AtomicUsize::new(0),
        }
    }

    /// Number of successful allocations observed.
    pub fn allocations(&self) -> usize {
        self.allocations.load(Ordering::Relaxed)
    }

    /// Number of deallocations observed.
    pub fn deallocations(&self) -> usize {
        self.deallocations.load(Ordering::Relaxed)
    }

    /// Bytes allocated and not yet released.
    pub fn live_bytes(&self) -> usize {
        self.live_bytes.load(Ordering::Relaxed)
    }
}

impl Default for CountingResource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryResource for CountingResource {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let ptr = GlobalResource.allocate(layout)?;
        self.allocations.fetch_add(1, Ordering::Relaxed);
        self.live_bytes.fetch_add(layout.size(), Ordering::Relaxed);
        Ok(ptr)
    }

    #[allow(unsafe_code)]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.deallocations.fetch_add(1, Ordering::Relaxed);
        self.live_bytes.fetch_sub(layout.size(), Ordering::Relaxed);
        // SAFETY: forwarding the caller's pointer/layout pair to the
        // resource that produced it.
        unsafe { GlobalResource.deallocate(ptr, layout) };
    }
}

/// A resource that satisfies a fixed number of allocations, then fails.
///
/// Useful for driving a container into its recoverable-failure path at a
/// precise point, e.g. "the second growth fails".
pub struct QuotaResource {
    remaining: AtomicUsize,
}

impl QuotaResource {
    pub const fn new(allocations: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(allocations),
        }
    }

    /// Allocations still permitted.
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Relaxed)
    }
}

impl MemoryResource for QuotaResource {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let mut current = self.remaining.load(Ordering::Relaxed);
        loop {
            if current == 0 {
                return Err(AllocError::Exhausted { layout });
            }
            match self.remaining.compare_exchange_weak(
                current,
                current - 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return GlobalResource.allocate(layout),
                Err(observed) => current = observed,
            }
        }
    }

    #[allow(unsafe_code)]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarding the caller's pointer/layout pair to the
        // resource that produced it.
        unsafe { GlobalResource.deallocate(ptr, layout) };
    }
}

/// A resource that refuses every request.
pub struct ExhaustedResource;

impl MemoryResource for ExhaustedResource {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        Err(AllocError::Exhausted { layout })
    }

    #[allow(unsafe_code)]
    unsafe fn deallocate(&self, _ptr: NonNull<u8>, _layout: Layout) {
        unreachable!("ExhaustedResource never hands out memory");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_tracks_live_bytes() {
        static RESOURCE: CountingResource = CountingResource::new();
        let layout = Layout::array::<u64>(8).unwrap();

        let ptr = RESOURCE.allocate(layout).unwrap();
        assert_eq!(RESOURCE.allocations(), 1);
        assert_eq!(RESOURCE.live_bytes(), 64);

        // SAFETY: allocated just above with this layout.
        #[allow(unsafe_code)]
        unsafe {
            RESOURCE.deallocate(ptr, layout)
        };
        assert_eq!(RESOURCE.deallocations(), 1);
        assert_eq!(RESOURCE.live_bytes(), 0);
    }

    #[test]
    fn quota_fails_after_budget() {
        static RESOURCE: QuotaResource = QuotaResource::new(1);
        let layout = Layout::array::<u8>(16).unwrap();

        let ptr = RESOURCE.allocate(layout).unwrap();
        assert!(matches!(
            RESOURCE.allocate(layout),
            Err(AllocError::Exhausted { .. })
        ));

        // SAFETY: allocated just above with this layout.
        #[allow(unsafe_code)]
        unsafe {
            RESOURCE.deallocate(ptr, layout)
        };
    }

    #[test]
    fn exhausted_always_fails() {
        let layout = Layout::array::<u8>(1).unwrap();
        assert!(ExhaustedResource.allocate(layout).is_err());
    }
}
