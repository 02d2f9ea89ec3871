// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growable-array`
//!
//! A `no_std` (plus `alloc`), growable, contiguous, heap-allocated array that
//! manages its own storage and gives a precise answer to "what state is it in
//! after a failure?".
//!
//! The core type, [`GrowableArray<T>`], owns one heap block of `capacity()`
//! slots, of which the first `len()` hold live elements. It dereferences to
//! `[T]`, so the whole slice API is available on top of its own methods.
//!
//! ## Failure model
//!
//! Two things can go wrong while the array is being changed: the allocator can
//! refuse a block, and `T::clone` can panic.
//!
//! - Reallocation moves elements bitwise and never runs user code, so growing
//!   or shrinking can only fail by not getting memory. That happens before
//!   anything is touched.
//! - Operations that clone (`push_back`, `insert`, `extend_from_slice`,
//!   `resize`, `clone`, `clone_from`) build the new elements first, in spare
//!   slots or in a fresh block, and only then commit. A panicking clone drops
//!   whatever it had already produced and leaves the array exactly as it was.
//! - Allocation failure is reported as [`Error`] by the `try_*` forms. The
//!   plain forms abort through [`handle_alloc_error`] instead, or panic with
//!   "capacity overflow" if the requested size is not representable.
//!
//! ## Growth
//!
//! Appending to a full array grows it to `max(1, 2 * capacity)`. Bulk appends
//! grow to at least the size they need. [`GrowableArray::reserve`] takes a
//! total capacity and allocates exactly that much;
//! [`GrowableArray::shrink_to_fit`] trims to `len()`, and an empty array gives
//! its block back.
//!
//! ## Bounds
//!
//! Indexing and positional operations follow slice semantics and panic when
//! out of range. Checked alternatives are `get`, `first`, `last`, `pop` and
//! [`GrowableArray::try_insert`].
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` as a plain sequence.
//!
//! ## Logging
//!
//! Storage changes are reported through the [`log`] facade at `trace` level,
//! allocation failures at `debug` level. Nothing is printed unless the
//! application installs a logger.
//!
//! ## Example
//!
//! ```rust
//! use growable_array::GrowableArray;
//!
//! let mut v: GrowableArray<String> = GrowableArray::new();
//! v.push("a".to_string());
//! v.push_back(&"b".to_string());
//! v.insert(1, &"between".to_string());
//! assert_eq!(v.as_slice(), &["a", "between", "b"]);
//!
//! // Appending a copy of an element of the array itself.
//! v.push_from_within(0);
//! assert_eq!(v.back(), "a");
//! ```
//!
//! [`handle_alloc_error`]: alloc::alloc::handle_alloc_error

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::GrowableArray;
