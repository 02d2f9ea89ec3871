// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

// Core imports
use core::ops::{Bound, RangeBounds};

impl<T> GrowableArray<T> {
    /// Removes the element at `index`, shifting `[index + 1, len)` one slot to
    /// the left, and returns `index` (now the position of the element that
    /// followed the removed one, or `len()` if it was the last).
    ///
    /// `index == len()` removes nothing and returns `len()`. Capacity is kept.
    /// The removed element is rotated to the end and dropped there.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        assert!(index <= len, "erase index {index} out of bounds (len {len})");
        if index < len {
            self.as_mut_slice()[index..].rotate_left(1);
            self.truncate(len - 1);
        }
        index
    }

    /// Removes the elements in `range`, shifting the tail left, and returns
    /// the range start (now the position of the first element after the
    /// removed range).
    ///
    /// An empty range removes nothing. Capacity is kept.
    ///
    /// The removed elements are rotated to the tail in their original order and
    /// dropped first to last. This differs from popping them off one at a
    /// time, which would drop them last to first.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than its end, or if the end is
    /// greater than `len()`.
    #[track_caller]
    pub fn erase_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.saturating_add(1),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("erase range start > end: {start} > {end}");
        }
        if end > len {
            panic!("erase range end {end} exceeds length {len}");
        }

        let count = end - start;
        if count != 0 {
            self.as_mut_slice()[start..].rotate_left(count);
            self.truncate(len - count);
        }
        start
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving
    /// their order. Capacity is kept.
    ///
    /// Kept elements are swapped forward; the rejected ones end up in the tail
    /// and are dropped together at the end. If `keep` panics, every element is
    /// still owned by the array (possibly reordered) and nothing leaks.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len;
        let mut write = 0;
        for read in 0..len {
            if keep(&self.as_slice()[read]) {
                if write != read {
                    self.as_mut_slice().swap(write, read);
                }
                write += 1;
            }
        }
        self.truncate(write);
    }
}
