// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowableArray` type and its inherent API.
//!
//! `GrowableArray<T>` owns one contiguous heap block and a logical length.
//! Every capacity change goes through a single reallocation routine
//! (see `realloc.rs`), and every operation is either infallible or leaves the
//! container exactly as it found it when it fails.

mod clone;
mod erase;
mod extend;
mod from;
mod insert;
mod new;
mod push;
mod realloc;
mod slice;

// Crate imports
use crate::raw::RawBuf;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
    ptr,
};

/// A growable, contiguous, heap-allocated array.
///
/// `GrowableArray<T>` keeps its elements in a single block of `capacity()`
/// slots, of which the first `len()` are live. Growth doubles the capacity
/// (starting at 1), so appending is amortized `O(1)`.
///
/// # Layout and invariants
///
/// - The block pointer is null exactly when `capacity() == 0`.
/// - Slots `[0, len)` hold live values; `[len, capacity)` are uninitialized.
/// - `len() <= capacity()`.
/// - Cloning allocates a fresh block: two arrays never share storage.
///
/// These hold between calls and also after an operation fails, whether it
/// failed by returning an [`Error`](crate::Error) or because `T::clone`
/// panicked.
///
/// # Failure guarantees
///
/// - **Never fail**: `new`, `len`, indexing, `front`/`back`, `pop_back`,
///   `clear`, `truncate`, `swap_with`, `erase`, `erase_range`, `retain`, `Drop`.
/// - **Strong** (unchanged on failure): `clone`, `clone_from`, `reserve`,
///   `shrink_to_fit`, `push`, `push_back`, `push_from_within`, `insert`,
///   `extend_from_slice`, `resize`, and all `try_*` variants.
///
/// The infallible forms abort through `handle_alloc_error` when the allocator
/// fails; the `try_*` forms report it as [`Error::AllocFailed`](crate::Error).
///
/// # Bounds
///
/// Precondition violations panic, exactly like slice indexing: `v[i]` with
/// `i >= len`, `front`/`back`/`pop_back` on an empty array, `insert` or
/// `erase` past the end. Use `get`, `first`, `last` or `pop` to branch
/// instead.
///
/// # Examples
///
/// ```rust
/// use growable_array::GrowableArray;
///
/// let mut v = GrowableArray::new();
/// for i in 0..4 {
///     v.push_back(&i);
/// }
/// assert_eq!(v.capacity(), 4);
///
/// v.erase_range(1..3);
/// assert_eq!(v.as_slice(), &[0, 3]);
///
/// v.shrink_to_fit();
/// assert_eq!(v.capacity(), 2);
/// ```
pub struct GrowableArray<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> GrowableArray<T> {
    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently reserved.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(x) => x,
            None => panic!("front() called on an empty GrowableArray"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(x) => x,
            None => panic!("front_mut() called on an empty GrowableArray"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(x) => x,
            None => panic!("back() called on an empty GrowableArray"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(x) => x,
            None => panic!("back_mut() called on an empty GrowableArray"),
        }
    }

    /// Drops every live element in index order. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements `[new_len, len)` in index order; a no-op if
    /// `new_len >= len`. Capacity is kept.
    pub fn truncate(&mut self, new_len: usize) {
        let Some(count) = self.len.checked_sub(new_len) else {
            return;
        };
        // Shrink `len` first so a panicking `Drop` cannot lead to the tail
        // being dropped twice.
        self.len = new_len;
        // SAFETY: `[new_len, new_len + count)` were live and are no longer
        // reachable through `self`.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(new_len), count);
            ptr::drop_in_place(tail);
        }
    }

    /// Exchanges storage, length and capacity with `other`. Never allocates
    /// and never fails.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        // Elements first, in index order; `RawBuf` then releases the block.
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq> PartialEq<[T]> for GrowableArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq> Eq for GrowableArray<T> {}
impl<T: Ord> Ord for GrowableArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for GrowableArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for GrowableArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for GrowableArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
