// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowableArray`.
//!
//! Only the `try_*` operations return these. Their infallible counterparts turn
//! [`Error::AllocFailed`] into [`alloc::alloc::handle_alloc_error`] and panic on
//! the other variants.

// Core imports
use core::{alloc::Layout, error::Error as CoreError, fmt};

/// Errors returned by the fallible operations of
/// [`GrowableArray`](crate::GrowableArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity does not fit in `isize::MAX` bytes, or doubling
    /// the current capacity overflowed.
    CapacityOverflow,
    /// The global allocator could not provide a block for `layout`.
    AllocFailed {
        /// Layout of the block that was requested.
        layout: Layout,
    },
    /// A position argument was outside the current logical bounds.
    OutOfBounds,
}

impl Error {
    /// Turns an error from an infallible entry point into the matching
    /// diverging behavior.
    #[cold]
    pub(crate) fn raise(self) -> ! {
        match self {
            Self::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
            other => panic!("{other}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed { .. } => f.write_str("memory allocation failed"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}
