// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Owned block of uninitialized slots.
//!
//! `RawBuf<T>` only knows how many slots it owns. It never reads, writes or
//! drops a `T`; tracking which slots are live is the caller's job. Dropping a
//! `RawBuf` releases the block without touching its contents.

// Crate imports
use crate::error::Error;

// Core imports
use core::{alloc::Layout, marker::PhantomData, mem, ptr::NonNull};

pub(crate) struct RawBuf<T> {
    // `None` iff `cap == 0`.
    ptr: Option<NonNull<T>>,
    cap: usize,
    _owns: PhantomData<T>,
}

// SAFETY: `RawBuf<T>` uniquely owns its block, like `Box<[MaybeUninit<T>]>`.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access hands out nothing but the raw pointer.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// A buffer with no storage.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            ptr: None,
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Acquires a block of exactly `cap` uninitialized slots.
    ///
    /// Zero-sized element types never reach the allocator: their block is a
    /// dangling, well-aligned pointer.
    pub(crate) fn allocate(cap: usize) -> Result<Self, Error> {
        if cap == 0 {
            return Ok(Self::new());
        }
        let layout = Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow)?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: `layout` has a non-zero size.
            let raw = unsafe { alloc::alloc::alloc(layout) };
            match NonNull::new(raw.cast::<T>()) {
                Some(ptr) => ptr,
                None => {
                    log::debug!("allocation of {} bytes failed", layout.size());
                    return Err(Error::AllocFailed { layout });
                }
            }
        };
        log::trace!(
            "allocated {cap} slots of {} bytes at {ptr:p}",
            mem::size_of::<T>()
        );
        Ok(Self {
            ptr: Some(ptr),
            cap,
            _owns: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        self.ptr.is_some()
    }

    /// Base pointer of the block, or a dangling (never dereferenceable) pointer
    /// when there is no storage.
    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.unwrap_or(NonNull::dangling()).as_ptr()
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let Some(ptr) = self.ptr else {
            return;
        };
        // The same layout was accepted by `allocate`.
        let Ok(layout) = Layout::array::<T>(self.cap) else {
            return;
        };
        log::trace!("releasing {} slots at {ptr:p}", self.cap);
        if layout.size() != 0 {
            // SAFETY: `ptr` was returned by `alloc` for exactly this layout.
            unsafe { alloc::alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::RawBuf;
    use crate::Error;

    #[test]
    fn test_zero_capacity_has_no_storage() {
        let buf: RawBuf<u32> = RawBuf::allocate(0).unwrap();
        assert!(!buf.is_allocated());
        assert_eq!(buf.capacity(), 0);
        assert!(!buf.as_ptr().is_null());
    }

    #[test]
    fn test_allocate_is_aligned_and_sized() {
        let buf: RawBuf<u64> = RawBuf::allocate(7).unwrap();
        assert!(buf.is_allocated());
        assert_eq!(buf.capacity(), 7);
        assert_eq!(buf.as_ptr() as usize % core::mem::align_of::<u64>(), 0);
    }

    #[test]
    fn test_zero_sized_slots_are_tracked_without_allocating() {
        let buf: RawBuf<()> = RawBuf::allocate(usize::MAX).unwrap();
        assert!(buf.is_allocated());
        assert_eq!(buf.capacity(), usize::MAX);
    }

    #[test]
    fn test_layout_overflow_is_capacity_overflow() {
        let err = RawBuf::<u64>::allocate(usize::MAX).err();
        assert_eq!(err, Some(Error::CapacityOverflow));
    }

    #[test]
    fn test_distinct_blocks() {
        let a: RawBuf<u8> = RawBuf::allocate(4).unwrap();
        let b: RawBuf<u8> = RawBuf::allocate(4).unwrap();
        assert_ne!(a.as_ptr(), b.as_ptr());
    }
}
