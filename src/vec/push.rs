// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowableArray};

// Core imports
use core::ptr;

impl<T> GrowableArray<T> {
    /// Appends `value`, growing to `max(1, 2 * capacity)` slots when full.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through `handle_alloc_error` if the
    /// allocator fails. The array is unchanged in both cases.
    #[inline]
    pub fn push(&mut self, value: T) {
        if let Err(e) = self.try_push(value) {
            e.raise()
        }
    }

    /// Fallible variant of [`push`](GrowableArray::push).
    ///
    /// On `Err` the array is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), Error> {
        self.grow_for_one()?;
        // SAFETY: `grow_for_one` left slot `len` inside the block and it is
        // uninitialized by invariant.
        unsafe { self.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Appends a clone of `value`.
    ///
    /// The clone is taken before any growth, so if `T::clone` panics the
    /// array is untouched, capacity included.
    ///
    /// # Panics
    ///
    /// Propagates a panic from `T::clone`. Panics on capacity overflow; aborts
    /// through `handle_alloc_error` if the allocator fails.
    #[inline]
    pub fn push_back(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push(value.clone());
    }

    /// Fallible variant of [`push_back`](GrowableArray::push_back).
    #[inline]
    pub fn try_push_back(&mut self, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.try_push(value.clone())
    }

    /// Appends a clone of the element currently at `index`.
    ///
    /// This is `push_back(&self[index])` for the case the borrow checker
    /// cannot express: the source lives in the storage that growth replaces.
    /// The element is cloned out of the current block before growing, so the
    /// appended value is always the one that was at `index` when called.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`, and otherwise as [`push_back`].
    ///
    /// [`push_back`]: GrowableArray::push_back
    #[track_caller]
    pub fn push_from_within(&mut self, index: usize)
    where
        T: Clone,
    {
        assert!(
            index < self.len,
            "push_from_within index {index} out of bounds (len {})",
            self.len
        );
        let value = self.as_slice()[index].clone();
        self.push(value);
    }

    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was live and is now outside
        // the live range, so ownership moves out exactly once.
        Some(unsafe { ptr::read(self.as_ptr().add(self.len)) })
    }

    /// Drops the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    #[track_caller]
    pub fn pop_back(&mut self) {
        assert!(self.len > 0, "pop_back() called on an empty GrowableArray");
        self.truncate(self.len - 1);
    }
}
