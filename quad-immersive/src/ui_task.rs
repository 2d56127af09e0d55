//! Carries a value through a Java `long` to whichever thread picks it up.

#![cfg_attr(not(target_os = "android"), allow(dead_code))]

pub(crate) fn into_handle<T: Send>(value: T) -> i64 {
    Box::into_raw(Box::new(value)) as i64
}

/// # Safety
///
/// `handle` must come from [`into_handle`] with the same `T`, and be taken
/// exactly once.
pub(crate) unsafe fn from_handle<T>(handle: i64) -> T {
    *Box::from_raw(handle as *mut T)
}
