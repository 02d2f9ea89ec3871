// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawBuf, vec::GrowableArray};

impl<T> GrowableArray<T> {
    /// Constructs an empty array without storage. Never allocates.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Constructs an empty array with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through `handle_alloc_error` if the
    /// allocator fails.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| e.raise())
    }

    /// Fallible variant of [`with_capacity`](GrowableArray::with_capacity).
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::allocate(capacity)?,
            len: 0,
        })
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
