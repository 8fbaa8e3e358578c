use core::{fmt, marker::PhantomData, ptr, ptr::NonNull};

use super::{
    BidirectionalCursor, Cursor, ForwardCursor, MutableCursor, RandomAccess, RandomAccessCursor,
};

/// Extension trait handing out the `[first, last)` cursor pair of a slice.
///
/// # Examples
///
/// ```
/// use thicket::{algorithm::sort, Cursors};
///
/// let mut v = vec![5, 3, 1, 4, 2];
/// // SAFETY: no element reference is held while `sort` runs.
/// let (first, last) = unsafe { v.cursors_mut() };
/// sort(first, last);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub trait Cursors {
    /// The element type.
    type Item;

    /// Read-only cursors to the start and to one past the end.
    fn cursors(&self) -> (SliceCursor<'_, Self::Item>, SliceCursor<'_, Self::Item>);

    /// Mutable cursors to the start and to one past the end.
    ///
    /// # Safety
    ///
    /// The returned cursors, and every clone of them, alias the slice. No
    /// reference obtained through [`Cursor::get`] or [`RandomAccessCursor::at`]
    /// on any of them may be alive while elements are written, whether by an
    /// algorithm of this crate or through [`MutableCursor`].
    unsafe fn cursors_mut(&mut self) -> (SliceCursorMut<'_, Self::Item>, SliceCursorMut<'_, Self::Item>);
}

impl<T> Cursors for [T] {
    type Item = T;

    fn cursors(&self) -> (SliceCursor<'_, T>, SliceCursor<'_, T>) {
        (SliceCursor::new(self, 0), SliceCursor::new(self, self.len()))
    }

    unsafe fn cursors_mut(&mut self) -> (SliceCursorMut<'_, T>, SliceCursorMut<'_, T>) {
        // SAFETY: forwarded to the caller.
        let first = unsafe { SliceCursorMut::new(self, 0) };
        let last = SliceCursorMut { pos: first.len, ..first };
        (first, last)
    }
}

/// A read-only random-access cursor into a slice.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// A cursor at position `index` of `slice`. `index == slice.len()` is the
    /// past-the-end position.
    #[must_use]
    pub fn new(slice: &'a [T], index: usize) -> Self {
        SliceCursor { slice, pos: index }
    }

    /// The position of this cursor within its slice.
    #[must_use]
    pub fn index(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            ptr::eq(self.slice, other.slice),
            "compared cursors into different sequences"
        );
        self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor").field("index", &self.pos).finish()
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    type Item = T;
    type Tag = RandomAccess;

    #[inline]
    fn get(&self) -> &T {
        &self.slice[self.pos]
    }

    #[inline]
    fn step(&mut self) {
        self.pos = self.pos.wrapping_add(1);
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.pos = self.pos.wrapping_sub(1);
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn jump(&mut self, n: isize) {
        self.pos = self.pos.wrapping_add_signed(n);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        self.pos.wrapping_sub(origin.pos) as isize
    }

    #[inline]
    fn at(&self, n: isize) -> &T {
        &self.slice[self.pos.wrapping_add_signed(n)]
    }
}

/// A mutable random-access cursor into a slice.
///
/// Copies of a `SliceCursorMut` alias the same slice, which stays mutably
/// borrowed for `'a`. Elements are written only through the `unsafe` methods of
/// [`MutableCursor`]; every dereference is bounds checked. Creating one is
/// `unsafe` because the borrow checker cannot see a reference returned by
/// [`Cursor::get`] being invalidated by a write through a copy.
pub struct SliceCursorMut<'a, T> {
    base: NonNull<T>,
    len: usize,
    pos: usize,
    marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// A cursor at position `index` of `slice`. `index == slice.len()` is the
    /// past-the-end position.
    ///
    /// # Safety
    ///
    /// As for [`Cursors::cursors_mut`].
    #[must_use]
    pub unsafe fn new(slice: &'a mut [T], index: usize) -> Self {
        SliceCursorMut {
            len: slice.len(),
            base: NonNull::from(slice).cast(),
            pos: index,
            marker: PhantomData,
        }
    }

    /// The position of this cursor within its slice.
    #[must_use]
    pub fn index(&self) -> usize {
        self.pos
    }

    #[inline]
    fn slot(&self, pos: usize) -> *mut T {
        assert!(
            pos < self.len,
            "cursor position {pos} is out of bounds for a sequence of length {}",
            self.len
        );
        // SAFETY: pos < len, so the offset stays inside the borrowed slice.
        unsafe { self.base.as_ptr().add(pos) }
    }
}

impl<T> Clone for SliceCursorMut<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursorMut<'_, T> {}

impl<T> PartialEq for SliceCursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            self.base == other.base,
            "compared cursors into different sequences"
        );
        self.pos == other.pos
    }
}

impl<T> Eq for SliceCursorMut<'_, T> {}

impl<T> fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursorMut").field("index", &self.pos).finish()
    }
}

impl<T> Cursor for SliceCursorMut<'_, T> {
    type Item = T;
    type Tag = RandomAccess;

    #[inline]
    fn get(&self) -> &T {
        // SAFETY: the slot is in bounds, and whoever created the cursor promised
        // that this reference is dead before the element is next written.
        unsafe { &*self.slot(self.pos) }
    }

    #[inline]
    fn step(&mut self) {
        self.pos = self.pos.wrapping_add(1);
    }
}

impl<T> ForwardCursor for SliceCursorMut<'_, T> {}

impl<T> BidirectionalCursor for SliceCursorMut<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.pos = self.pos.wrapping_sub(1);
    }
}

impl<T> RandomAccessCursor for SliceCursorMut<'_, T> {
    #[inline]
    fn jump(&mut self, n: isize) {
        self.pos = self.pos.wrapping_add_signed(n);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        self.pos.wrapping_sub(origin.pos) as isize
    }

    #[inline]
    fn at(&self, n: isize) -> &T {
        // SAFETY: as for `get`.
        unsafe { &*self.slot(self.pos.wrapping_add_signed(n)) }
    }
}

impl<T> MutableCursor for SliceCursorMut<'_, T> {
    #[inline]
    unsafe fn swap_with(&self, other: &Self) {
        // SAFETY: both slots are in bounds of the same slice; `ptr::swap`
        // allows them to coincide. The caller guarantees no live references.
        unsafe { ptr::swap(self.slot(self.pos), other.slot(other.pos)) }
    }

    #[inline]
    unsafe fn replace(&self, value: T) -> T {
        // SAFETY: in bounds, and the caller guarantees no live references.
        unsafe { ptr::replace(self.slot(self.pos), value) }
    }
}
