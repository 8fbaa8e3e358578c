//! Capability tags and the strategies they select.
//!
//! Every cursor names the strongest capability it satisfies through
//! [`Cursor::Tag`]. The tag's [`Capability`] implementation is what the free
//! functions [`advance`](super::advance), [`distance`](super::distance) and
//! [`partition_point`](crate::algorithm::partition_point) call into, so one call
//! site compiles to a linear walk for a forward cursor and to offset arithmetic
//! (or a binary search) for a random-access one. Nothing is decided at run time.

use super::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor};

mod sealed {
    pub trait Sealed {}
}

/// The position of a capability in the lattice
/// `SinglePass < Forward < Bidirectional < RandomAccess`.
///
/// A cursor at a given level supports every operation of the levels below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Read the current element and step forward, once.
    SinglePass,
    /// Multi-pass forward traversal.
    Forward,
    /// Forward and backward traversal.
    Bidirectional,
    /// Constant-time jumps and distances.
    RandomAccess,
}

/// A capability tag. Implemented only by the four tags of this module.
pub trait Tag: sealed::Sealed {
    /// Where this tag sits in the lattice.
    const LEVEL: Level;
}

capability_tags! {
    /// Tag of cursors that can only be read and advanced once.
    SinglePass => SinglePass,
    /// Tag of cloneable, multi-pass cursors.
    Forward => Forward,
    /// Tag of cursors that can also step backwards.
    Bidirectional => Bidirectional,
    /// Tag of cursors with constant-time jumps and distances.
    RandomAccess => RandomAccess,
}

/// The traversal strategies selected by a tag for cursors of type `C`.
///
/// A tag only implements `Capability<C>` when `C` provides the operations the
/// tag promises, so `Cursor::Tag = RandomAccess` cannot be declared by a cursor
/// that is not a [`RandomAccessCursor`].
pub trait Capability<C>: Tag {
    /// Moves `cursor` by `n` positions. Negative `n` requires bidirectional
    /// traversal.
    fn advance(cursor: &mut C, n: isize)
    where
        C: Cursor;

    /// The number of steps from `first` to `last`.
    fn distance(first: C, last: &C) -> isize
    where
        C: Cursor;

    /// The first position in the partitioned range `[first, last)` whose element
    /// does not satisfy `pred`.
    fn partition_point<P>(first: C, last: C, pred: P) -> C
    where
        C: Cursor,
        P: FnMut(&<C as Cursor>::Item) -> bool;
}

#[inline]
fn step_forward<C: Cursor>(cursor: &mut C, mut n: isize) {
    debug_assert!(n >= 0, "cannot advance a forward-only cursor by {n}");
    while n > 0 {
        cursor.step();
        n -= 1;
    }
}

#[inline]
fn count_steps<C: Cursor>(mut first: C, last: &C) -> isize {
    let mut n = 0;
    while first != *last {
        first.step();
        n += 1;
    }
    n
}

#[inline]
fn scan_partition_point<C, P>(mut first: C, last: C, mut pred: P) -> C
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    while first != last && pred(first.get()) {
        first.step();
    }
    first
}

impl<C: Cursor> Capability<C> for SinglePass {
    fn advance(cursor: &mut C, n: isize) {
        step_forward(cursor, n)
    }

    fn distance(first: C, last: &C) -> isize {
        count_steps(first, last)
    }

    fn partition_point<P>(first: C, last: C, pred: P) -> C
    where
        P: FnMut(&C::Item) -> bool,
    {
        scan_partition_point(first, last, pred)
    }
}

impl<C: ForwardCursor> Capability<C> for Forward {
    fn advance(cursor: &mut C, n: isize) {
        step_forward(cursor, n)
    }

    fn distance(first: C, last: &C) -> isize {
        count_steps(first, last)
    }

    fn partition_point<P>(first: C, last: C, pred: P) -> C
    where
        P: FnMut(&C::Item) -> bool,
    {
        scan_partition_point(first, last, pred)
    }
}

impl<C: BidirectionalCursor> Capability<C> for Bidirectional {
    fn advance(cursor: &mut C, mut n: isize) {
        while n > 0 {
            cursor.step();
            n -= 1;
        }
        while n < 0 {
            cursor.step_back();
            n += 1;
        }
    }

    fn distance(first: C, last: &C) -> isize {
        count_steps(first, last)
    }

    fn partition_point<P>(first: C, last: C, pred: P) -> C
    where
        P: FnMut(&C::Item) -> bool,
    {
        scan_partition_point(first, last, pred)
    }
}

impl<C: RandomAccessCursor> Capability<C> for RandomAccess {
    #[inline]
    fn advance(cursor: &mut C, n: isize) {
        cursor.jump(n)
    }

    #[inline]
    fn distance(first: C, last: &C) -> isize {
        last.offset_from(&first)
    }

    fn partition_point<P>(mut first: C, last: C, mut pred: P) -> C
    where
        P: FnMut(&C::Item) -> bool,
    {
        let mut len = last.offset_from(&first);
        // Loop invariant: the partition point lies in [first, first + len].
        while len > 0 {
            let half = len / 2;
            let mut mid = first.clone();
            mid.jump(half);
            if pred(mid.get()) {
                mid.step();
                first = mid;
                len -= half + 1;
            } else {
                len = half;
            }
        }
        first
    }
}
