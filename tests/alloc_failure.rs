// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! An allocator refusal surfaces as `Error::AllocFailed` from the `try_*`
//! operations and leaves the array exactly as it was: same block, same
//! capacity, same elements.

use growable_array::{Error, GrowableArray};
use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

macro_rules! log_prelude {
    () => {
        let _ = simple_logger::SimpleLogger::new().without_timestamps().init();
    };
}

thread_local! {
    /// Set to refuse the next allocation made on this thread.
    static FAIL_NEXT: Cell<bool> = const { Cell::new(false) };
}

/// `System`, except that it returns null once when asked to.
struct Refusing;

impl Refusing {
    fn refuse() -> bool {
        FAIL_NEXT.try_with(|f| f.replace(false)).unwrap_or(false)
    }
}

unsafe impl GlobalAlloc for Refusing {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if Self::refuse() {
            return std::ptr::null_mut();
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if Self::refuse() {
            return std::ptr::null_mut();
        }
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static GLOBAL: Refusing = Refusing;

/// Runs `f` with the next allocation refused, and checks that `f` actually
/// asked for one.
fn refusing_next<R>(f: impl FnOnce() -> R) -> R {
    FAIL_NEXT.with(|flag| flag.set(true));
    let out = f();
    let pending = FAIL_NEXT.with(|flag| flag.replace(false));
    assert!(!pending, "no allocation was attempted");
    out
}

fn failed(slots: usize) -> Result<(), Error> {
    Err(Error::AllocFailed {
        layout: Layout::array::<u32>(slots).unwrap(),
    })
}

fn snapshot(v: &GrowableArray<u32>) -> (*const u32, usize, Vec<u32>) {
    (v.as_ptr(), v.capacity(), v.iter().copied().collect())
}

#[test]
fn test_try_reserve_refused() {
    log_prelude!();
    let mut v: GrowableArray<u32> = GrowableArray::from(&[1, 2, 3][..]);
    let before = snapshot(&v);

    assert_eq!(refusing_next(|| v.try_reserve(64)), failed(64));
    assert_eq!(snapshot(&v), before);

    // The allocator recovers and the same call goes through.
    v.reserve(64);
    assert_eq!(v.capacity(), 64);
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_try_push_on_full_array_refused() {
    log_prelude!();
    let mut v: GrowableArray<u32> = GrowableArray::from(&[1, 2, 3][..]);
    assert_eq!(v.len(), v.capacity());
    let before = snapshot(&v);

    assert_eq!(refusing_next(|| v.try_push(4)), failed(6));
    assert_eq!(snapshot(&v), before);
}

#[test]
fn test_try_push_with_spare_slot_does_not_allocate() {
    let mut v: GrowableArray<u32> = GrowableArray::with_capacity(2);
    v.push(1);
    FAIL_NEXT.with(|flag| flag.set(true));
    assert_eq!(v.try_push(2), Ok(()));
    assert!(FAIL_NEXT.with(|flag| flag.replace(false)));
    assert_eq!(v.as_slice(), &[1, 2]);
}

#[test]
fn test_try_extend_from_slice_refused() {
    log_prelude!();
    let mut v: GrowableArray<u32> = GrowableArray::from(&[1, 2, 3][..]);
    let before = snapshot(&v);
    let extra = [0u32; 61];

    assert_eq!(refusing_next(|| v.try_extend_from_slice(&extra)), failed(64));
    assert_eq!(snapshot(&v), before);
}

#[test]
fn test_try_resize_and_try_insert_refused() {
    log_prelude!();
    let mut v: GrowableArray<u32> = GrowableArray::from(&[1, 2, 3][..]);
    let before = snapshot(&v);

    assert_eq!(refusing_next(|| v.try_resize(10, &7)), failed(10));
    assert_eq!(snapshot(&v), before);

    assert_eq!(refusing_next(|| v.try_insert(0, &0)).map(drop), failed(6));
    assert_eq!(snapshot(&v), before);
}

#[test]
fn test_try_clone_refused() {
    log_prelude!();
    let v: GrowableArray<u32> = GrowableArray::from(&[1, 2, 3][..]);
    let before = snapshot(&v);

    assert_eq!(refusing_next(|| v.try_clone()).map(drop), failed(3));
    assert_eq!(snapshot(&v), before);
}

#[test]
fn test_try_shrink_to_fit_refused() {
    log_prelude!();
    let mut v: GrowableArray<u32> = GrowableArray::from(&[1, 2, 3][..]);
    v.reserve(64);
    let before = snapshot(&v);

    assert_eq!(refusing_next(|| v.try_shrink_to_fit()), failed(3));
    assert_eq!(snapshot(&v), before);
    assert_eq!(v.capacity(), 64);
}

#[test]
fn test_try_with_capacity_refused() {
    log_prelude!();
    let res = refusing_next(|| GrowableArray::<u32>::try_with_capacity(16));
    assert_eq!(res.map(drop), failed(16));
}
