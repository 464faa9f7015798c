//! A contiguous growable buffer type with automatic capacity management.
//!
//! [`GrowBuf`] has O(1) indexing, amortized O(1) push and pop (from the
//! end), ordered and unordered removal, and a built-in cursor for
//! one-pass forward iteration.
//!
//! Unlike `alloc::Vec`, `GrowBuf` grows by a configurable multiplicative
//! factor, automatically shrinks itself when the live element count
//! becomes small relative to the allocated capacity, and keeps all slots
//! beyond the current length zero-filled. Element types are restricted
//! to [`Pod`] (plain old data), which is what makes the zero-fill and
//! raw byte-copy semantics sound: no drop glue, no padding, and the
//! all-zero bit pattern is a valid value.
//!
//! Fallible operations return [`Error`] instead of panicking; checked
//! removal methods ([`try_remove`](GrowBuf::try_remove),
//! [`try_swap_remove`](GrowBuf::try_swap_remove)) are provided alongside
//! the panicking convenience versions.
//!
//! Specifying an index type smaller than `usize`, such as `u16` or even
//! `u8`, can aid in struct size optimization. It's also possible to
//! [declare new types](crate::index_type!) for this purpose, leveraging
//! the type system to avoid using the wrong kind of index.

use bytemuck::Pod;

use crate::error::Error;
use crate::index::BufIndex;
use crate::raw::RawStorage;

use core::hash::{Hash, Hasher};
use core::mem;
use core::ptr;

/// The growth factor used by [`GrowBuf::with_capacity`].
pub const DEFAULT_GROWTH_FACTOR: f32 = 1.6;

/// The slack ratio that triggers an automatic shrink.
///
/// After every operation that decreases the length, the buffer shrinks
/// to fit once `capacity - len >= len * SHRINK_SLACK_RATIO`, i.e. once
/// unused capacity is at least five times the live element count. The
/// hysteresis prevents reallocation churn when the length oscillates
/// near a capacity boundary.
pub const SHRINK_SLACK_RATIO: usize = 5;

#[inline]
fn factor_is_valid(factor: f32) -> bool {
    factor.is_finite() && factor >= 1.0
}

/// A contiguous growable buffer of [`Pod`] elements.
///
/// Generic over the element type `T` and the index type `I` (which
/// defaults to `usize`).
///
/// All slots between the current length and the capacity hold the
/// all-zero bit pattern; every operation that vacates a slot or exposes
/// new capacity re-establishes this.
///
/// The length always stays representable in `I`: appends that would
/// push it past `I`'s range fail with
/// [`Error::IndexOverflow`]. The capacity itself is tracked as a
/// `usize` and may grow beyond that range.
///
/// Reallocation invalidates element references previously obtained from
/// [`get`](GrowBuf::get), [`next_item`](GrowBuf::next_item), and
/// friends; the borrow checker enforces that no such reference is held
/// across a mutating call.
///
/// See the [module-level documentation](crate::buf) for more.
pub struct GrowBuf<T, I = usize>
where
    T: Pod,
    I: BufIndex,
{
    raw: RawStorage<T>,
    len: I,
    cursor: I,
    growth_factor: f32,
}

impl<T, I> GrowBuf<T, I>
where
    T: Pod,
    I: BufIndex,
{
    /// Constructs an empty buffer with the given capacity and the
    /// [default growth factor](DEFAULT_GROWTH_FACTOR).
    ///
    /// # Examples
    /// ```
    /// let buf = growbuf::GrowBuf::<u32>::with_capacity(8).unwrap();
    /// assert_eq!(buf.capacity(), 8);
    /// assert_eq!(buf.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_growth_factor(capacity, DEFAULT_GROWTH_FACTOR)
    }

    /// Constructs an empty buffer with the given capacity and growth factor.
    ///
    /// Fails with [`Error::InvalidCapacity`] if `capacity` is zero, with
    /// [`Error::ZeroSizedElement`] if `T` is zero-sized, with
    /// [`Error::InvalidGrowthFactor`] if `factor` is not a finite number
    /// of at least 1.0, and with [`Error::OutOfMemory`] if the backing
    /// allocation fails.
    ///
    /// A factor of exactly 1.0 means the buffer grows by one slot at a
    /// time rather than never growing.
    ///
    /// # Panics
    /// Panics if `I` cannot represent `capacity`.
    ///
    /// # Examples
    /// ```
    /// use growbuf::{Error, GrowBuf};
    ///
    /// let buf = GrowBuf::<u32>::with_growth_factor(2, 1.6).unwrap();
    /// assert_eq!(buf.growth_factor(), 1.6);
    ///
    /// assert_eq!(GrowBuf::<u32>::with_growth_factor(0, 1.6), Err(Error::InvalidCapacity));
    /// assert_eq!(GrowBuf::<u32>::with_growth_factor(2, 0.5), Err(Error::InvalidGrowthFactor));
    /// ```
    pub fn with_growth_factor(capacity: usize, factor: f32) -> Result<Self, Error> {
        if mem::size_of::<T>() == 0 {
            return Err(Error::ZeroSizedElement);
        }
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        if !factor_is_valid(factor) {
            return Err(Error::InvalidGrowthFactor);
        }

        I::from_usize(capacity); // panics if I cannot index the whole buffer

        Ok(GrowBuf {
            raw: RawStorage::allocate(capacity)?,
            len: I::from_usize(0),
            cursor: I::from_usize(0),
            growth_factor: factor,
        })
    }

    /// Returns the number of elements the buffer can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the number of elements in the buffer, also referred to as
    /// its 'length'.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.into_usize()
    }

    #[inline]
    fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        self.len = I::from_usize(new_len);
    }

    /// Returns `true` if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len.into_usize() == 0
    }

    /// Returns `true` if the buffer's length equals its capacity, so
    /// that the next push must reallocate.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len.into_usize() == self.raw.capacity()
    }

    /// Returns the buffer's current growth factor.
    #[inline]
    pub fn growth_factor(&self) -> f32 {
        self.growth_factor
    }

    /// Replaces the buffer's growth factor.
    ///
    /// Fails with [`Error::InvalidGrowthFactor`] if `factor` is not a
    /// finite number of at least 1.0; the previous factor is kept.
    pub fn set_growth_factor(&mut self, factor: f32) -> Result<(), Error> {
        if !factor_is_valid(factor) {
            return Err(Error::InvalidGrowthFactor);
        }

        self.growth_factor = factor;
        Ok(())
    }

    /// Grows the allocation by the configured factor.
    ///
    /// All-or-nothing: on failure, capacity and contents are untouched.
    fn grow(&mut self) -> Result<(), Error> {
        let cap = self.raw.capacity();
        let new_cap = if self.growth_factor > 1.0 {
            // Truncating product, but always at least one new slot; this
            // also covers a capacity of 1, which no factor < 2 would grow.
            let scaled = (cap as f64 * f64::from(self.growth_factor)) as usize;
            scaled.max(cap + 1)
        } else {
            cap + 1
        };

        self.raw.resize(new_cap)?;
        // Newly exposed slots must read back as zero.
        unsafe { self.raw.zero_slots(cap, new_cap - cap) };
        Ok(())
    }

    /// Reallocates the buffer down to exactly its current length, or to
    /// a single slot if it is empty.
    ///
    /// A no-op when the buffer is already exactly sized. On failure the
    /// buffer remains usable at its previous capacity. Never changes the
    /// length.
    ///
    /// # Examples
    /// ```
    /// let mut buf = growbuf::GrowBuf::<u32>::with_capacity(10).unwrap();
    /// buf.try_push(1).unwrap();
    /// buf.try_push(2).unwrap();
    ///
    /// buf.shrink_to_fit().unwrap();
    /// assert_eq!(buf.capacity(), 2);
    /// assert_eq!(buf.as_slice(), &[1, 2]);
    /// ```
    pub fn shrink_to_fit(&mut self) -> Result<(), Error> {
        let target = self.len.into_usize().max(1);
        self.raw.resize(target)
    }

    /// Shrinks to fit once unused capacity reaches
    /// [`SHRINK_SLACK_RATIO`] times the live count. Called after every
    /// length-decreasing operation.
    fn maybe_shrink(&mut self) {
        let len = self.len.into_usize();
        let slack = self.raw.capacity() - len;
        if slack >= len.saturating_mul(SHRINK_SLACK_RATIO) {
            // A failed shrink just leaves the larger allocation in place.
            let _ = self.shrink_to_fit();
        }
    }

    /// Returns a reference to the element at the specified index, or
    /// [`None`] if the index is not below the current length.
    ///
    /// # Examples
    /// ```
    /// let mut buf = growbuf::GrowBuf::<u32>::with_capacity(4).unwrap();
    /// buf.try_push(1).unwrap();
    /// buf.try_push(2).unwrap();
    /// assert_eq!(buf.get(1), Some(&2));
    /// assert_eq!(buf.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: I) -> Option<&T> {
        let index = index.into_usize();
        if index >= self.len() {
            return None;
        }

        unsafe { Some(&*self.raw.as_ptr().add(index)) }
    }

    /// Returns a mutable reference to the element at the specified
    /// index, or [`None`] if the index is not below the current length.
    #[inline]
    pub fn get_mut(&mut self, index: I) -> Option<&mut T> {
        let index = index.into_usize();
        if index >= self.len() {
            return None;
        }

        unsafe { Some(&mut *self.raw.as_mut_ptr().add(index)) }
    }

    /// Returns a reference to the first element, or [`None`] if the
    /// buffer is empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a reference to the last element, or [`None`] if the
    /// buffer is empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Extracts a slice containing all live elements.
    ///
    /// Equivalent to `&s[..]`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Extracts a mutable slice of all live elements.
    ///
    /// Equivalent to `&mut s[..]`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Writes `value` into the slot at `index`, extending the length if
    /// the slot lies at or beyond it.
    ///
    /// Valid for any `index` below the *capacity*; this is the one
    /// operation bounded by capacity rather than length, and it never
    /// reallocates. Writing at `index == len()` appends; writing further
    /// out moves the length to `index + 1`, with the skipped slots
    /// keeping their zero fill (and so reading back as zeroed elements).
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if `index >= capacity()`,
    /// and with [`Error::IndexOverflow`] if the resulting length would
    /// not be representable in `I`.
    ///
    /// # Examples
    /// ```
    /// let mut buf = growbuf::GrowBuf::<u32>::with_capacity(4).unwrap();
    /// buf.set(0, 7).unwrap();
    /// assert_eq!(buf.as_slice(), &[7]);
    ///
    /// buf.set(2, 9).unwrap();
    /// assert_eq!(buf.as_slice(), &[7, 0, 9]);
    ///
    /// assert!(buf.set(4, 1).is_err());
    /// ```
    pub fn set(&mut self, index: I, value: T) -> Result<(), Error> {
        let index = index.into_usize();
        let len = self.len();
        if index >= self.raw.capacity() {
            return Err(Error::IndexOutOfBounds);
        }

        if index >= len {
            let new_len = I::checked_from_usize(index + 1).ok_or(Error::IndexOverflow)?;
            if index > len {
                // Skipped slots become readable; make sure they hold zero
                // rather than whatever a previous occupant left behind.
                unsafe { self.raw.zero_slots(len, index - len) };
            }
            unsafe { ptr::write(self.raw.as_mut_ptr().add(index), value) };
            self.len = new_len;
        } else {
            unsafe { ptr::write(self.raw.as_mut_ptr().add(index), value) };
        }

        Ok(())
    }

    /// Appends an element to the back of the buffer, growing it first if
    /// it is full.
    ///
    /// Fails with [`Error::OutOfMemory`] if growth is needed but the
    /// reallocation fails, and with [`Error::IndexOverflow`] if the new
    /// length would not be representable in `I`; the buffer and its
    /// length are then unchanged.
    ///
    /// # Examples
    /// ```
    /// let mut buf = growbuf::GrowBuf::<u32>::with_growth_factor(2, 1.6).unwrap();
    /// buf.try_push(10).unwrap();
    /// buf.try_push(20).unwrap();
    /// buf.try_push(30).unwrap();
    /// assert_eq!(buf.as_slice(), &[10, 20, 30]);
    /// assert_eq!(buf.capacity(), 3);
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<(), Error> {
        let len = self.len();
        // The capacity may outgrow the index type's range; the length
        // never does.
        let new_len = I::checked_from_usize(len + 1).ok_or(Error::IndexOverflow)?;
        if len == self.raw.capacity() {
            self.grow()?;
        }

        unsafe { ptr::write(self.raw.as_mut_ptr().add(len), value) };
        self.len = new_len;
        Ok(())
    }

    /// Appends an element to the back of the buffer.
    ///
    /// # Panics
    /// Panics if a required reallocation fails, or if the new length
    /// would not be representable in `I`. See
    /// [`try_push`](GrowBuf::try_push) for a checked version that never
    /// panics.
    #[inline]
    pub fn push(&mut self, value: T) {
        #[cold]
        #[inline(never)]
        fn assert_failed() -> ! {
            panic!("failed to grow the buffer")
        }

        if self.try_push(value).is_err() {
            assert_failed();
        }
    }

    /// Appends all elements of `values` to the back of the buffer in one
    /// contiguous copy, growing (possibly repeatedly) until they fit.
    ///
    /// An empty slice is a no-op success. Fails with
    /// [`Error::IndexOverflow`] if the resulting length would not be
    /// representable in `I`. On failure, nothing is appended, though
    /// earlier growth steps may have already enlarged the capacity.
    ///
    /// # Examples
    /// ```
    /// let mut buf = growbuf::GrowBuf::<u32>::with_capacity(2).unwrap();
    /// buf.extend_from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    /// assert!(buf.capacity() >= 5);
    /// ```
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), Error> {
        if values.is_empty() {
            return Ok(());
        }

        let len = self.len();
        let needed = len.checked_add(values.len()).ok_or(Error::OutOfMemory)?;
        let new_len = I::checked_from_usize(needed).ok_or(Error::IndexOverflow)?;
        while self.raw.capacity() < needed {
            self.grow()?;
        }

        unsafe {
            ptr::copy_nonoverlapping(values.as_ptr(), self.raw.as_mut_ptr().add(len), values.len());
        }
        self.len = new_len;
        Ok(())
    }

    /// Removes the last element and returns it, or [`None`] if the
    /// buffer is empty.
    ///
    /// The vacated slot is zero-filled, and the buffer may shrink
    /// afterwards (see [`SHRINK_SLACK_RATIO`]).
    ///
    /// # Examples
    /// ```
    /// let mut buf = growbuf::GrowBuf::<u32>::with_capacity(4).unwrap();
    /// buf.try_push(1).unwrap();
    /// assert_eq!(buf.pop(), Some(1));
    /// assert_eq!(buf.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let len = self.len();
        if len == 0 {
            return None;
        }

        let value = unsafe { ptr::read(self.raw.as_ptr().add(len - 1)) };
        unsafe { self.raw.zero_slots(len - 1, 1) };
        self.set_len(len - 1);
        self.maybe_shrink();
        Some(value)
    }

    /// Removes and returns the element at `index`, shifting all elements
    /// after it to the left. Preserves the relative order of the
    /// remaining elements.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if `index` is not below
    /// the current length. The vacated last slot is zero-filled, and the
    /// buffer may shrink afterwards.
    ///
    /// # Examples
    /// ```
    /// let mut buf = growbuf::GrowBuf::<u32>::with_capacity(4).unwrap();
    /// buf.extend_from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(buf.try_remove(0), Ok(1));
    /// assert_eq!(buf.as_slice(), &[2, 3]);
    /// ```
    pub fn try_remove(&mut self, index: I) -> Result<T, Error> {
        let index = index.into_usize();
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds);
        }

        let value = unsafe { ptr::read(self.raw.as_ptr().add(index)) };
        unsafe {
            // Overlapping ranges; removing the last element copies nothing
            // and degenerates to a pop.
            let p = self.raw.as_mut_ptr().add(index);
            ptr::copy(p.add(1), p, len - index - 1);
            self.raw.zero_slots(len - 1, 1);
        }
        self.set_len(len - 1);
        self.maybe_shrink();
        Ok(value)
    }

    /// Removes and returns the element at `index`, shifting all elements
    /// after it to the left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See
    /// [`try_remove`](GrowBuf::try_remove) for a checked version.
    pub fn remove(&mut self, index: I) -> T {
        #[cold]
        #[inline(never)]
        fn assert_failed(idx: usize, len: usize) -> ! {
            panic!("removal index (is {}) should be < len (is {})", idx, len);
        }

        match self.try_remove(index) {
            Ok(value) => value,
            Err(_) => assert_failed(index.into_usize(), self.len()),
        }
    }

    /// Removes and returns the element at `index`, replacing it with the
    /// last element. Does not preserve ordering, but is O(1).
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if `index` is not below
    /// the current length. The vacated last slot is zero-filled, and the
    /// buffer may shrink afterwards.
    ///
    /// # Examples
    /// ```
    /// let mut buf = growbuf::GrowBuf::<u32>::with_capacity(4).unwrap();
    /// buf.extend_from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(buf.try_swap_remove(1), Ok(2));
    /// assert_eq!(buf.as_slice(), &[1, 4, 3]);
    /// ```
    pub fn try_swap_remove(&mut self, index: I) -> Result<T, Error> {
        let index = index.into_usize();
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds);
        }

        let value = unsafe { ptr::read(self.raw.as_ptr().add(index)) };
        unsafe {
            let last = ptr::read(self.raw.as_ptr().add(len - 1));
            ptr::write(self.raw.as_mut_ptr().add(index), last);
            self.raw.zero_slots(len - 1, 1);
        }
        self.set_len(len - 1);
        self.maybe_shrink();
        Ok(value)
    }

    /// Removes and returns the element at `index`, replacing it with the
    /// last element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See
    /// [`try_swap_remove`](GrowBuf::try_swap_remove) for a checked
    /// version.
    pub fn swap_remove(&mut self, index: I) -> T {
        #[cold]
        #[inline(never)]
        fn assert_failed(idx: usize, len: usize) -> ! {
            panic!(
                "swap_remove index (is {}) should be < len (is {})",
                idx, len
            );
        }

        match self.try_swap_remove(index) {
            Ok(value) => value,
            Err(_) => assert_failed(index.into_usize(), self.len()),
        }
    }

    /// Zero-fills the buffer's entire backing storage and resets the
    /// length to 0. The capacity is untouched, which distinguishes a
    /// cleared buffer from a shrunk one.
    ///
    /// # Examples
    /// ```
    /// let mut buf = growbuf::GrowBuf::<u32>::with_capacity(8).unwrap();
    /// buf.extend_from_slice(&[1, 2, 3]).unwrap();
    ///
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 8);
    /// ```
    pub fn clear(&mut self) {
        let cap = self.raw.capacity();
        unsafe { self.raw.zero_slots(0, cap) };
        self.len = I::from_usize(0);
    }

    /// Rewinds the built-in cursor to the front of the buffer.
    #[inline]
    pub fn reset_cursor(&mut self) {
        self.cursor = I::from_usize(0);
    }

    /// Returns `true` if the built-in cursor has not yet reached the end
    /// of the buffer.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.cursor.into_usize() < self.len()
    }

    /// Returns the element at the built-in cursor and advances it, or
    /// [`None`] (without advancing) once the cursor has passed the last
    /// element.
    ///
    /// The cursor is not adjusted by mutating operations; interleaving
    /// them with iteration yields unspecified (though still memory-safe)
    /// results. Call [`reset_cursor`](GrowBuf::reset_cursor) to restart.
    ///
    /// # Examples
    /// ```
    /// let mut buf = growbuf::GrowBuf::<u32>::with_capacity(4).unwrap();
    /// buf.extend_from_slice(&[1, 2]).unwrap();
    ///
    /// buf.reset_cursor();
    /// assert_eq!(buf.next_item(), Some(&1));
    /// assert_eq!(buf.next_item(), Some(&2));
    /// assert_eq!(buf.next_item(), None);
    /// assert_eq!(buf.next_item(), None);
    /// ```
    pub fn next_item(&mut self) -> Option<&T> {
        let at = self.cursor.into_usize();
        if at >= self.len() {
            return None;
        }

        self.cursor = I::from_usize(at + 1);
        unsafe { Some(&*self.raw.as_ptr().add(at)) }
    }
}

impl<T, I> core::ops::Deref for GrowBuf<T, I>
where
    T: Pod,
    I: BufIndex,
{
    type Target = [T];
    fn deref(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.raw.as_ptr(), self.len.into_usize()) }
    }
}

impl<T, I> core::ops::DerefMut for GrowBuf<T, I>
where
    T: Pod,
    I: BufIndex,
{
    fn deref_mut(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.raw.as_mut_ptr(), self.len.into_usize()) }
    }
}

impl<T, I> core::ops::Index<I> for GrowBuf<T, I>
where
    T: Pod,
    I: BufIndex,
{
    type Output = T;
    fn index(&self, index: I) -> &Self::Output {
        #[cold]
        #[inline(never)]
        fn assert_failed(idx: usize, len: usize) -> ! {
            panic!("index (is {}) should be < len (is {})", idx, len);
        }

        match self.get(index) {
            Some(value) => value,
            None => assert_failed(index.into_usize(), self.len()),
        }
    }
}

impl<T, I> core::ops::IndexMut<I> for GrowBuf<T, I>
where
    T: Pod,
    I: BufIndex,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        #[cold]
        #[inline(never)]
        fn assert_failed(idx: usize, len: usize) -> ! {
            panic!("index (is {}) should be < len (is {})", idx, len);
        }

        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => assert_failed(index.into_usize(), len),
        }
    }
}

impl<T, I> core::convert::AsRef<[T]> for GrowBuf<T, I>
where
    T: Pod,
    I: BufIndex,
{
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, I> core::convert::AsMut<[T]> for GrowBuf<T, I>
where
    T: Pod,
    I: BufIndex,
{
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, I> core::fmt::Debug for GrowBuf<T, I>
where
    T: Pod + core::fmt::Debug,
    I: BufIndex,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T, I> Clone for GrowBuf<T, I>
where
    T: Pod,
    I: BufIndex,
{
    /// Clones the buffer, preserving its capacity, growth factor, and
    /// cursor position.
    ///
    /// # Panics
    /// Panics if the backing allocation fails.
    fn clone(&self) -> Self {
        #[cold]
        #[inline(never)]
        fn assert_failed() -> ! {
            panic!("failed to allocate storage for the cloned buffer")
        }

        let mut raw = match RawStorage::allocate(self.raw.capacity()) {
            Ok(raw) => raw,
            Err(_) => assert_failed(),
        };
        unsafe {
            ptr::copy_nonoverlapping(self.raw.as_ptr(), raw.as_mut_ptr(), self.len());
        }

        GrowBuf {
            raw,
            len: self.len,
            cursor: self.cursor,
            growth_factor: self.growth_factor,
        }
    }
}

impl<T, I> Hash for GrowBuf<T, I>
where
    T: Pod + Hash,
    I: BufIndex,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&**self, state)
    }
}

impl<AT, AI, BT, BI> core::cmp::PartialEq<GrowBuf<BT, BI>> for GrowBuf<AT, AI>
where
    AT: Pod + core::cmp::PartialEq<BT>,
    BT: Pod,
    AI: BufIndex,
    BI: BufIndex,
{
    #[inline]
    fn eq(&self, other: &GrowBuf<BT, BI>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, I> core::cmp::Eq for GrowBuf<T, I>
where
    T: Pod + core::cmp::Eq,
    I: BufIndex,
{
}

impl<V, T, I> core::cmp::PartialEq<&[V]> for GrowBuf<T, I>
where
    T: Pod + core::cmp::PartialEq<V>,
    I: BufIndex,
{
    #[inline]
    fn eq(&self, other: &&[V]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<V, T, I, const N: usize> core::cmp::PartialEq<[V; N]> for GrowBuf<T, I>
where
    T: Pod + core::cmp::PartialEq<V>,
    I: BufIndex,
{
    #[inline]
    fn eq(&self, other: &[V; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T, I> core::cmp::PartialOrd for GrowBuf<T, I>
where
    T: Pod + core::cmp::PartialOrd,
    I: BufIndex,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T, I> core::cmp::Ord for GrowBuf<T, I>
where
    T: Pod + core::cmp::Ord,
    I: BufIndex,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, Idx> core::iter::Extend<T> for GrowBuf<T, Idx>
where
    T: Pod,
    Idx: BufIndex,
{
    /// # Panics
    /// Panics if a required reallocation fails.
    fn extend<I: core::iter::IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, I> core::iter::IntoIterator for &'a GrowBuf<T, I>
where
    T: Pod,
    I: BufIndex,
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, I> core::iter::IntoIterator for &'a mut GrowBuf<T, I>
where
    T: Pod,
    I: BufIndex,
{
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
