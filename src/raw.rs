//! Fallible raw storage underlying [`GrowBuf`](crate::GrowBuf).
//!
//! All allocation goes through this module so that the buffer logic in
//! [`buf`](crate::buf) never touches the allocator directly. Allocation
//! failure is reported as [`Error::OutOfMemory`] rather than aborting
//! the process, and a failed reallocation leaves the previous
//! allocation fully intact.

use alloc::alloc::{alloc_zeroed, dealloc, realloc};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use crate::error::Error;

/// An owned allocation holding `cap` slots of `T`.
///
/// Invariants: `cap >= 1` and `size_of::<T>() >= 1`; both are enforced
/// by the constructors in [`buf`](crate::buf), so the zero-size layout
/// edge cases never arise here.
#[derive(Debug)]
pub(crate) struct RawStorage<T> {
    ptr: NonNull<T>,
    cap: usize,
    marker: PhantomData<T>,
}

impl<T> RawStorage<T> {
    /// Allocates zero-initialized storage for `cap` slots.
    pub(crate) fn allocate(cap: usize) -> Result<Self, Error> {
        debug_assert!(cap > 0);
        debug_assert!(core::mem::size_of::<T>() > 0);

        let layout = Layout::array::<T>(cap).map_err(|_| Error::OutOfMemory)?;
        let ptr = unsafe { alloc_zeroed(layout) };
        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => Ok(RawStorage {
                ptr,
                cap,
                marker: PhantomData,
            }),
            None => Err(Error::OutOfMemory),
        }
    }

    /// Returns the number of slots in the allocation.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Reallocates to hold exactly `new_cap` slots, preserving the
    /// contents of the common prefix.
    ///
    /// On failure, the existing pointer, capacity, and contents are left
    /// untouched. Slots beyond the old capacity are *not* initialized;
    /// the caller zeroes them.
    pub(crate) fn resize(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap > 0);
        if new_cap == self.cap {
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| Error::OutOfMemory)?;
        // The old layout was validated when the current allocation was made.
        let old_layout = match Layout::array::<T>(self.cap) {
            Ok(layout) => layout,
            Err(_) => return Err(Error::OutOfMemory),
        };

        let ptr = unsafe { realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size()) };
        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            }
            None => Err(Error::OutOfMemory),
        }
    }

    /// Zero-fills `n` slots starting at slot `start`.
    ///
    /// # Safety
    /// `start + n` must not exceed the allocated capacity.
    pub(crate) unsafe fn zero_slots(&mut self, start: usize, n: usize) {
        debug_assert!(start <= self.cap && self.cap - start >= n);
        ptr::write_bytes(self.ptr.as_ptr().add(start), 0, n);
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

unsafe impl<T: Send> Send for RawStorage<T> {}
unsafe impl<T: Sync> Sync for RawStorage<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_is_zeroed() {
        let storage = RawStorage::<u64>::allocate(16).unwrap();
        for i in 0..16 {
            assert_eq!(unsafe { ptr::read(storage.as_ptr().add(i)) }, 0);
        }
    }

    #[test]
    fn resize_preserves_prefix() {
        let mut storage = RawStorage::<u32>::allocate(4).unwrap();
        for i in 0..4 {
            unsafe { ptr::write(storage.as_mut_ptr().add(i), i as u32 + 1) };
        }

        storage.resize(64).unwrap();
        assert_eq!(storage.capacity(), 64);
        for i in 0..4 {
            assert_eq!(unsafe { ptr::read(storage.as_ptr().add(i)) }, i as u32 + 1);
        }

        storage.resize(2).unwrap();
        assert_eq!(storage.capacity(), 2);
        for i in 0..2 {
            assert_eq!(unsafe { ptr::read(storage.as_ptr().add(i)) }, i as u32 + 1);
        }
    }

    #[test]
    fn oversized_layout_is_rejected() {
        assert_eq!(
            RawStorage::<u64>::allocate(usize::MAX / 2).unwrap_err(),
            Error::OutOfMemory
        );
    }
}
