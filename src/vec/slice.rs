// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

// Core imports
use core::{ops::Range, slice};

impl<T> GrowableArray<T> {
    /// Returns the live range `[0, len)` as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: by invariant `[0, len)` is live, and `as_ptr` is non-null and
        // aligned even without storage (then `len == 0`).
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the live range `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns the base pointer of the live range.
    ///
    /// The pointer is valid for reads of `len()` elements until the next
    /// mutating call. Without storage it is dangling (but never null) and must
    /// not be dereferenced.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable variant of [`as_ptr`](GrowableArray::as_ptr).
    ///
    /// Writing past `len()` does not make the written slots live.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// Returns the begin/end pointer pair of the live range.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }
}
