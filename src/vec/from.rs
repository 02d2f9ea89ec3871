// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    /// Clones `src` into a fresh block of exactly `src.len()` slots.
    fn from(src: &[T]) -> Self {
        let mut out = Self::with_capacity(src.len());
        out.extend_from_slice(src);
        out
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for GrowableArray<T> {
    fn from(src: &[T; N]) -> Self {
        Self::from(&src[..])
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    /// Moves the elements of `src` into a block of exactly `N` slots.
    fn from(src: [T; N]) -> Self {
        let mut out = Self::with_capacity(N);
        let src = ManuallyDrop::new(src);
        // SAFETY: `out` has `N` spare slots; `src` will not drop the moved
        // values.
        unsafe { ptr::copy_nonoverlapping(src.as_ptr(), out.as_mut_ptr(), N) };
        out.len = N;
        out
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    /// Moves the elements of `src` into a block of exactly `src.len()` slots.
    fn from(mut src: Vec<T>) -> Self {
        let len = src.len();
        let mut out = Self::with_capacity(len);
        // SAFETY: `out` has `len` spare slots, and clearing the length of
        // `src` first hands ownership of the values over.
        unsafe {
            src.set_len(0);
            ptr::copy_nonoverlapping(src.as_ptr(), out.as_mut_ptr(), len);
        }
        out.len = len;
        out
    }
}

impl<T> From<GrowableArray<T>> for Vec<T> {
    fn from(src: GrowableArray<T>) -> Self {
        src.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{vec::tests::assert_invariants, GrowableArray};
    use alloc::{
        rc::Rc,
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    #[test]
    fn test_from_slice_is_exact() {
        let v: GrowableArray<i32> = GrowableArray::from(&[1, 2, 3][..]);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        let e: GrowableArray<i32> = GrowableArray::from(&[][..]);
        assert_eq!(e.capacity(), 0);
        assert_invariants(&e);
    }

    #[test]
    fn test_from_array_moves() {
        let rc = Rc::new(());
        let v: GrowableArray<Rc<()>> = [rc.clone(), rc.clone()].into();
        assert_eq!(v.capacity(), 2);
        assert_eq!(Rc::strong_count(&rc), 3);
        drop(v);
        assert_eq!(Rc::strong_count(&rc), 1);

        let r: GrowableArray<i32> = (&[4, 5]).into();
        assert_eq!(r.as_slice(), &[4, 5]);
    }

    #[test]
    fn test_vec_round_trip() {
        let src = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let v: GrowableArray<String> = src.into();
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &["a", "b", "c"]);
        let back: Vec<String> = v.into();
        assert_eq!(back, ["a", "b", "c"]);
    }
}
