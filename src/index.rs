// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowableArray`](crate::GrowableArray).
//!
//! Anything that indexes a slice indexes the array, with the same panics:
//! positions and ranges are checked against `len()`, never `capacity()`.

// Crate imports
use crate::vec::GrowableArray;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for GrowableArray<T> {
    type Output = I::Output;

    #[inline]
    #[track_caller]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowableArray<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowableArray;

    #[test]
    fn test_indexing_and_ranges_full_suite() {
        let mut v: GrowableArray<i32> = GrowableArray::from(&[0, 1, 2, 3, 4][..]);

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        v[4] = 40;
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 40]);
    }

    #[test]
    fn test_empty_ranges_work() {
        let v: GrowableArray<i32> = GrowableArray::from(&[1, 2, 3][..]);
        assert_eq!(&v[1..1], &[] as &[i32]);
        assert_eq!(&v[3..3], &[] as &[i32]);
    }

    #[test]
    #[should_panic]
    fn test_index_at_len_panics_even_with_spare_capacity() {
        let mut v: GrowableArray<i32> = GrowableArray::with_capacity(8);
        v.push(1);
        let _ = v[1];
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let v: GrowableArray<i32> = GrowableArray::from(&[1, 2, 3][..]);
        let _ = &v[2..1];
    }

    #[test]
    #[should_panic]
    fn test_inclusive_mut_upper_oob_panics() {
        let mut v: GrowableArray<i32> = GrowableArray::from(&[1, 2, 3][..]);
        let _ = &mut v[..=3];
    }

    #[test]
    fn test_get_is_the_checked_form() {
        let v: GrowableArray<i32> = GrowableArray::from(&[1, 2][..]);
        assert_eq!(v.get(1), Some(&2));
        assert_eq!(v.get(2), None);
        assert_eq!(v.first(), Some(&1));
        assert_eq!(v.last(), Some(&2));
    }
}
