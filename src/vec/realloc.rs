// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity management.
//!
//! [`GrowableArray::reallocate`] is the only place that swaps one block for
//! another. It moves the live elements bitwise, which runs no user code, so an
//! allocation error is its only failure and it happens before anything is
//! touched.

// Crate imports
use crate::{error::Error, raw::RawBuf, vec::GrowableArray};

// Core imports
use core::ptr;

impl<T> GrowableArray<T> {
    /// Moves the live elements into a fresh block of exactly `new_cap` slots.
    ///
    /// `new_cap == 0` releases the storage. On `Err`, `self` is unchanged.
    pub(crate) fn reallocate(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap >= self.len, "reallocate below len");
        let new_buf: RawBuf<T> = RawBuf::allocate(new_cap)?;
        log::trace!("reallocating {} -> {} slots", self.capacity(), new_cap);
        // SAFETY: both blocks hold at least `len` slots and are distinct. The
        // old block only loses ownership of the moved values; `RawBuf::drop`
        // releases it without dropping them.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_ptr(), self.len) };
        self.buf = new_buf;
        debug_assert_eq!(self.buf.is_allocated(), new_cap != 0);
        Ok(())
    }

    /// Capacity to grow to so that at least `required` slots exist: the larger
    /// of `required` and twice the current capacity (at least 1).
    pub(crate) fn grown_capacity(&self, required: usize) -> Result<usize, Error> {
        let doubled = match self.capacity() {
            0 => 1,
            cap => cap.checked_mul(2).ok_or(Error::CapacityOverflow)?,
        };
        Ok(doubled.max(required))
    }

    /// Grows so that one more element fits. No-op if there is a spare slot.
    pub(crate) fn grow_for_one(&mut self) -> Result<(), Error> {
        if self.len < self.capacity() {
            return Ok(());
        }
        let required = self.len.checked_add(1).ok_or(Error::CapacityOverflow)?;
        let new_cap = self.grown_capacity(required)?;
        self.reallocate(new_cap)
    }

    /// Ensures the capacity is at least `new_cap`, reallocating to exactly
    /// `new_cap` slots if it is not. Unlike `Vec::reserve`, the argument is a
    /// total capacity, not an additional count.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through `handle_alloc_error` if the
    /// allocator fails. The array is unchanged in both cases.
    #[inline]
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).unwrap_or_else(|e| e.raise())
    }

    /// Fallible variant of [`reserve`](GrowableArray::reserve).
    ///
    /// On `Err` the array (length, capacity and elements) is unchanged.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), Error> {
        if new_cap > self.capacity() {
            self.reallocate(new_cap)?;
        }
        Ok(())
    }

    /// Reallocates to exactly `len()` slots if there are spare ones. An empty
    /// array releases its storage.
    ///
    /// # Panics
    ///
    /// Aborts through `handle_alloc_error` if the allocator fails, leaving the
    /// array unchanged.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().unwrap_or_else(|e| e.raise())
    }

    /// Fallible variant of [`shrink_to_fit`](GrowableArray::shrink_to_fit).
    pub fn try_shrink_to_fit(&mut self) -> Result<(), Error> {
        if self.capacity() != self.len {
            self.reallocate(self.len)?;
        }
        Ok(())
    }
}
