// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowableArray`](crate::GrowableArray).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Dropping it early drops the
//!   elements not yet yielded.
//! - `&GrowableArray` and `&mut GrowableArray` iterate as slices.

// Crate imports
use crate::{raw::RawBuf, vec::GrowableArray};

// Core imports
use core::{fmt, iter::FusedIterator, mem, mem::ManuallyDrop, ptr, slice};

/// Owned iterator returned by `GrowableArray::into_iter()`.
///
/// Owns the array's block; slots `[front, back)` are the elements not yet
/// yielded.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` are live and owned by the iterator.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.front), self.back - self.front) }
    }

    /// Moves the element at `i` out. The caller must already have excluded
    /// `i` from `[front, back)`.
    unsafe fn read_at(&mut self, i: usize) -> T {
        // SAFETY: `i` was live and is no longer reachable.
        unsafe { ptr::read(self.buf.as_ptr().add(i)) }
    }

    /// Drops `[from, to)` in index order.
    unsafe fn drop_range(&mut self, from: usize, to: usize) {
        // SAFETY: the caller hands over `[from, to)`, all live.
        unsafe {
            let range = ptr::slice_from_raw_parts_mut(self.buf.as_ptr().add(from), to - from);
            ptr::drop_in_place(range);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` just left the live range.
            Some(unsafe { self.read_at(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        let from = self.front;
        self.front += skip;
        // SAFETY: `[from, from + skip)` just left the live range.
        unsafe { self.drop_range(from, from + skip) };
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` just left the live range.
            Some(unsafe { self.read_at(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        let to = self.back;
        self.back -= skip;
        // SAFETY: `[to - skip, to)` just left the live range.
        unsafe { self.drop_range(to - skip, to) };
        self.next_back()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        // SAFETY: the remaining elements are dropped once; `buf` then frees
        // the block.
        unsafe { self.drop_range(front, back) };
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        // The iterator takes over the block and the elements in it.
        let mut this = ManuallyDrop::new(self);
        IntoIter {
            buf: mem::take(&mut this.buf),
            front: 0,
            back: this.len,
        }
    }
}
