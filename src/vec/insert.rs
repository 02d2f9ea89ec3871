// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowableArray};

impl<T: Clone> GrowableArray<T> {
    /// Inserts a clone of `value` at `index`, shifting `[index, len)` one slot
    /// to the right. Returns `index`, the position of the new element.
    ///
    /// `index == len()` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`, and otherwise as
    /// [`push_back`](GrowableArray::push_back). If `T::clone` panics or growth
    /// fails, the array is unchanged.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: &T) -> usize {
        assert!(
            index <= self.len,
            "insertion index {index} out of bounds (len {})",
            self.len
        );
        self.try_insert(index, value).unwrap_or_else(|e| e.raise())
    }

    /// Fallible variant of [`insert`](GrowableArray::insert).
    ///
    /// Returns [`Error::OutOfBounds`] instead of panicking when
    /// `index > len()`. On `Err` the array is unchanged.
    pub fn try_insert(&mut self, index: usize, value: &T) -> Result<usize, Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        self.try_push(value.clone())?;
        // Rotating moves values bitwise and cannot fail.
        self.as_mut_slice()[index..].rotate_right(1);
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{vec::tests::assert_invariants, Error, GrowableArray};

    #[test]
    fn test_insert_positions() {
        let mut v: GrowableArray<i32> = GrowableArray::new();
        assert_eq!(v.insert(0, &2), 0);
        assert_eq!(v.insert(0, &0), 0);
        assert_eq!(v.insert(1, &1), 1);
        assert_eq!(v.insert(3, &3), 3);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3]);
        assert_invariants(&v);
    }

    #[test]
    fn test_insert_grows_when_full() {
        let mut v: GrowableArray<i32> = GrowableArray::from(&[1, 3][..]);
        assert_eq!(v.capacity(), 2);
        v.insert(1, &2);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_insert_past_end_panics() {
        let mut v: GrowableArray<i32> = GrowableArray::from(&[1][..]);
        v.insert(2, &0);
    }

    #[test]
    fn test_try_insert_out_of_bounds_is_untouched() {
        let mut v: GrowableArray<i32> = GrowableArray::from(&[1, 2][..]);
        assert_eq!(v.try_insert(3, &9), Err(Error::OutOfBounds));
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);
    }
}
