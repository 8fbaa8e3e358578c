//! Cursors: the traversal handles every algorithm in this crate is written against.
//!
//! A cursor is a position in some sequence. Algorithms never see the sequence
//! itself, only pairs of cursors delimiting a half-open range `[first, last)`,
//! and they may only use the operations granted by the cursor's capability:
//!
//! | trait | tag | adds |
//! |---|---|---|
//! | [`Cursor`] | [`SinglePass`] | [`get`](Cursor::get), [`step`](Cursor::step), `==` |
//! | [`ForwardCursor`] | [`Forward`] | `Clone` (multi-pass) |
//! | [`BidirectionalCursor`] | [`Bidirectional`] | [`step_back`](BidirectionalCursor::step_back) |
//! | [`RandomAccessCursor`] | [`RandomAccess`] | [`jump`](RandomAccessCursor::jump), [`offset_from`](RandomAccessCursor::offset_from), [`at`](RandomAccessCursor::at) |
//!
//! Writing is a separate concern, granted by [`MutableCursor`].
//!
//! Comparing two cursors that do not originate from the same sequence, and
//! stepping a cursor beyond the end of its sequence, are caller errors. Neither
//! is checked by the algorithms.

mod adapters;
mod capability;
mod slice;

pub use adapters::{Reversed, Stream};
pub use capability::{Bidirectional, Capability, Forward, Level, RandomAccess, SinglePass, Tag};
pub use slice::{Cursors, SliceCursor, SliceCursorMut};

/// A single-pass traversal handle.
///
/// Single-pass cursors are deliberately not required to be `Clone`: a pass over
/// the sequence consumes them.
pub trait Cursor: PartialEq + Sized {
    /// The element type of the underlying sequence.
    type Item;

    /// The strongest capability this cursor satisfies.
    type Tag: Capability<Self>;

    /// Reads the current element.
    ///
    /// # Panics
    ///
    /// Implementations may panic when the cursor does not point at an element.
    fn get(&self) -> &Self::Item;

    /// Moves to the next position.
    fn step(&mut self);
}

/// A multi-pass traversal handle: clones observe the same elements.
pub trait ForwardCursor: Cursor + Clone {}

/// A traversal handle that can also move backwards.
pub trait BidirectionalCursor: ForwardCursor {
    /// Moves to the previous position.
    fn step_back(&mut self);
}

/// A traversal handle with constant-time movement and distance.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Moves by `n` positions (backwards when `n` is negative).
    fn jump(&mut self, n: isize);

    /// The signed number of positions from `origin` to `self`.
    fn offset_from(&self, origin: &Self) -> isize;

    /// Reads the element `n` positions away from `self`.
    fn at(&self, n: isize) -> &Self::Item;
}

/// A cursor through which elements can be exchanged and replaced in place.
///
/// Clones of a mutable cursor alias the same storage, which the borrow checker
/// cannot see. The writing operations are therefore `unsafe`.
pub trait MutableCursor: ForwardCursor {
    /// Exchanges the elements at `self` and `other`.
    ///
    /// # Safety
    ///
    /// No reference obtained through [`Cursor::get`] or
    /// [`RandomAccessCursor::at`] from any cursor into the same sequence may be
    /// alive during the call.
    unsafe fn swap_with(&self, other: &Self);

    /// Moves `value` into the element at `self`, returning the previous element.
    ///
    /// # Safety
    ///
    /// As for [`swap_with`](MutableCursor::swap_with).
    unsafe fn replace(&self, value: Self::Item) -> Self::Item;
}

/// Moves `cursor` by `n` positions, in constant time for random-access cursors
/// and one step at a time otherwise.
///
/// `n` may only be negative for bidirectional cursors.
#[inline]
pub fn advance<C: Cursor>(cursor: &mut C, n: isize) {
    <C::Tag as Capability<C>>::advance(cursor, n)
}

/// The number of steps from `first` to `last`.
///
/// # Examples
///
/// ```
/// use thicket::{cursor::distance, Cursors};
///
/// let v = [1, 2, 3, 4];
/// let (first, last) = v.cursors();
/// assert_eq!(distance(&first, &last), 4);
/// ```
#[inline]
pub fn distance<C: ForwardCursor>(first: &C, last: &C) -> isize {
    <C::Tag as Capability<C>>::distance(first.clone(), last)
}

/// Returns `cursor` moved `n` positions forward.
#[inline]
#[must_use]
pub fn next<C: ForwardCursor>(cursor: &C, n: isize) -> C {
    let mut cursor = cursor.clone();
    advance(&mut cursor, n);
    cursor
}

/// Returns `cursor` moved `n` positions backward.
#[inline]
#[must_use]
pub fn prev<C: BidirectionalCursor>(cursor: &C, n: isize) -> C {
    let mut cursor = cursor.clone();
    advance(&mut cursor, -n);
    cursor
}

/// Exchanges the elements at `a` and `b`, doing nothing when they are equal.
///
/// # Safety
///
/// As for [`MutableCursor::swap_with`].
#[inline]
pub unsafe fn iter_swap<C: MutableCursor>(a: &C, b: &C) {
    if a != b {
        // SAFETY: the caller upholds the aliasing contract.
        unsafe { a.swap_with(b) }
    }
}
