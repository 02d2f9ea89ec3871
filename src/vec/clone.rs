// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawBuf, vec::GrowableArray};

// Core imports
use core::ptr;

// External imports - scopeguard
use scopeguard::ScopeGuard;

/// Clones every item of `items` into consecutive slots starting at `dst` and
/// returns how many were written.
///
/// If a clone panics, the clones already written are dropped before the panic
/// continues, so the slots are uninitialized again either way.
///
/// # Safety
///
/// `dst` must be valid for writes of as many `T` as `items` yields, and those
/// slots must not hold live values.
pub(crate) unsafe fn clone_into_uninit<'a, T, I>(dst: *mut T, items: I) -> usize
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut written = scopeguard::guard(0usize, |n| {
        // SAFETY: exactly `n` slots from `dst` were initialized below.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(dst, n)) }
    });
    for item in items {
        let value = item.clone();
        // SAFETY: the caller guarantees room for every item.
        unsafe { dst.add(*written).write(value) };
        *written += 1;
    }
    ScopeGuard::into_inner(written)
}

impl<T: Clone> GrowableArray<T> {
    /// Fallible variant of [`Clone::clone`].
    ///
    /// The clone owns a fresh block of exactly `len()` slots.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let buf: RawBuf<T> = RawBuf::allocate(self.len)?;
        // SAFETY: `buf` holds `len` uninitialized slots. On panic the guard
        // drops the partial clones and `buf` releases the block.
        let len = unsafe { clone_into_uninit(buf.as_ptr(), self.iter()) };
        Ok(Self { buf, len })
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    /// # Panics
    ///
    /// Propagates a panic from `T::clone`; no clone is leaked. Aborts through
    /// `handle_alloc_error` if the allocator fails.
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| e.raise())
    }

    /// Replaces the contents of `self` with a copy of `source`.
    ///
    /// The copy is built completely before `self` is touched. If anything
    /// fails, `self` keeps its old elements and capacity. On success the old
    /// elements are dropped and `self` takes the copy's capacity.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap_with(&mut copy);
    }
}
