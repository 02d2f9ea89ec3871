// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bulk appends.
//!
//! Cloning appends are all-or-nothing. When the new elements fit, they are
//! cloned straight into the spare slots; otherwise a fresh block is allocated,
//! the new elements are cloned into its tail, and only then are the existing
//! elements moved over. Either way a panicking `T::clone` leaves the array as
//! it was.

// Crate imports
use crate::{
    error::Error,
    raw::RawBuf,
    vec::{clone::clone_into_uninit, GrowableArray},
};

// Core imports
use core::{iter, ptr};

impl<T: Clone> GrowableArray<T> {
    /// Appends clones of exactly `items.len()` elements, all or nothing.
    fn try_append_cloned<'a, I>(&mut self, items: I) -> Result<(), Error>
    where
        T: 'a,
        I: ExactSizeIterator<Item = &'a T>,
    {
        let count = items.len();
        if count == 0 {
            return Ok(());
        }
        let required = self.len.checked_add(count).ok_or(Error::CapacityOverflow)?;

        if required <= self.capacity() {
            // SAFETY: `[len, len + count)` are spare slots of the current block.
            let written =
                unsafe { clone_into_uninit(self.as_mut_ptr().add(self.len), items.take(count)) };
            self.len += written;
            return Ok(());
        }

        let new_cap = self.grown_capacity(required)?;
        let new_buf: RawBuf<T> = RawBuf::allocate(new_cap)?;
        // SAFETY: `new_buf` has room for `len + count` slots, none live. On
        // panic, the guard drops the partial clones and `new_buf` is released
        // while `self` still owns its old block.
        let written =
            unsafe { clone_into_uninit(new_buf.as_ptr().add(self.len), items.take(count)) };
        log::trace!("reallocating {} -> {} slots", self.capacity(), new_cap);
        // SAFETY: distinct blocks, both with at least `len` slots.
        unsafe { ptr::copy_nonoverlapping(self.as_ptr(), new_buf.as_ptr(), self.len) };
        self.buf = new_buf;
        self.len += written;
        Ok(())
    }

    /// Appends clones of every element of `other`, in order.
    ///
    /// # Panics
    ///
    /// Propagates a panic from `T::clone`, panics on capacity overflow, and
    /// aborts through `handle_alloc_error` if the allocator fails. In every
    /// case the array is unchanged.
    #[inline]
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.try_extend_from_slice(other).unwrap_or_else(|e| e.raise())
    }

    /// Fallible variant of [`extend_from_slice`](GrowableArray::extend_from_slice).
    #[inline]
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> Result<(), Error> {
        self.try_append_cloned(other.iter())
    }

    /// Resizes to `new_len` elements.
    ///
    /// Shrinking drops the tail like [`truncate`](GrowableArray::truncate).
    /// Growing appends clones of `value`, with the same all-or-nothing
    /// behavior as [`extend_from_slice`](GrowableArray::extend_from_slice).
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: &T) {
        self.try_resize(new_len, value).unwrap_or_else(|e| e.raise())
    }

    /// Fallible variant of [`resize`](GrowableArray::resize).
    pub fn try_resize(&mut self, new_len: usize, value: &T) -> Result<(), Error> {
        match new_len.checked_sub(self.len) {
            None => {
                self.truncate(new_len);
                Ok(())
            }
            Some(extra) => self.try_append_cloned(iter::repeat_n(value, extra)),
        }
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    /// Appends every item in order, growing by the iterator's lower size
    /// bound up front.
    ///
    /// Each item is appended with [`push`](GrowableArray::push); if the
    /// iterator panics, the items appended so far stay.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Some(required) = self.len.checked_add(lower) {
            if required > self.capacity() {
                let grown = self.grown_capacity(required);
                let reserved = grown.and_then(|cap| self.try_reserve(cap));
                if let Err(e) = reserved {
                    e.raise()
                }
            }
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().cloned())
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}
