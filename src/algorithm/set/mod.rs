//! Set algebra over sorted ranges.
//!
//! Every operation takes two ranges sorted under the same comparator and walks
//! them once, in step. Equivalent elements are matched up one to one, so the
//! ranges behave as multisets: an element occurring `m` times in the first
//! range and `n` times in the second occurs `max(m, n)` times in the union,
//! `min(m, n)` times in the intersection, `m - n` times (if positive) in the
//! difference and `|m - n|` times in the symmetric difference. Copies are taken
//! from the first range where both supply one.
//!
//! The inputs only need single-pass cursors.

use crate::{algorithm::copy, compare::Compare, cursor::Cursor, sink::Sink};

/// Whether every element of the sorted range `[first2, last2)` is matched by an
/// element of the sorted range `[first1, last1)`.
pub fn includes_by<I1, I2, O>(mut first1: I1, last1: I1, mut first2: I2, last2: I2, comp: O) -> bool
where
    I1: Cursor,
    I2: Cursor<Item = I1::Item>,
    O: Compare<I1::Item>,
{
    while first2 != last2 {
        if first1 == last1 || comp.less(first2.get(), first1.get()) {
            return false;
        }
        if !comp.less(first1.get(), first2.get()) {
            first2.step();
        }
        first1.step();
    }
    true
}

/// Puts the sorted union of two sorted ranges into `out`.
///
/// ```
/// use thicket::{algorithm::set_union, cursor::Stream};
///
/// let out = set_union(
///     Stream::new([1, 2, 2, 5]),
///     Stream::end(),
///     Stream::new([2, 3, 5, 5]),
///     Stream::end(),
///     Vec::new(),
/// );
/// assert_eq!(out, [1, 2, 2, 3, 5, 5]);
/// ```
pub fn set_union_by<I1, I2, S, O>(
    mut first1: I1,
    last1: I1,
    mut first2: I2,
    last2: I2,
    mut out: S,
    comp: O,
) -> S
where
    I1: Cursor,
    I1::Item: Clone,
    I2: Cursor<Item = I1::Item>,
    S: Sink<I1::Item>,
    O: Compare<I1::Item>,
{
    while first1 != last1 {
        if first2 == last2 {
            return copy(first1, last1, out);
        }
        if comp.less(first2.get(), first1.get()) {
            out.put(first2.get().clone());
            first2.step();
        } else {
            out.put(first1.get().clone());
            if !comp.less(first1.get(), first2.get()) {
                first2.step();
            }
            first1.step();
        }
    }
    copy(first2, last2, out)
}

/// Puts the sorted intersection of two sorted ranges into `out`.
pub fn set_intersection_by<I1, I2, S, O>(
    mut first1: I1,
    last1: I1,
    mut first2: I2,
    last2: I2,
    mut out: S,
    comp: O,
) -> S
where
    I1: Cursor,
    I1::Item: Clone,
    I2: Cursor<Item = I1::Item>,
    S: Sink<I1::Item>,
    O: Compare<I1::Item>,
{
    while first1 != last1 && first2 != last2 {
        if comp.less(first1.get(), first2.get()) {
            first1.step();
        } else {
            if !comp.less(first2.get(), first1.get()) {
                out.put(first1.get().clone());
                first1.step();
            }
            first2.step();
        }
    }
    out
}

/// Puts the elements of the first sorted range that are not matched in the
/// second into `out`, in order.
pub fn set_difference_by<I1, I2, S, O>(
    mut first1: I1,
    last1: I1,
    mut first2: I2,
    last2: I2,
    mut out: S,
    comp: O,
) -> S
where
    I1: Cursor,
    I1::Item: Clone,
    I2: Cursor<Item = I1::Item>,
    S: Sink<I1::Item>,
    O: Compare<I1::Item>,
{
    while first1 != last1 {
        if first2 == last2 {
            return copy(first1, last1, out);
        }
        if comp.less(first1.get(), first2.get()) {
            out.put(first1.get().clone());
            first1.step();
        } else {
            if !comp.less(first2.get(), first1.get()) {
                first1.step();
            }
            first2.step();
        }
    }
    out
}

/// Puts the elements of either sorted range that are not matched in the other
/// into `out`, in sorted order.
pub fn set_symmetric_difference_by<I1, I2, S, O>(
    mut first1: I1,
    last1: I1,
    mut first2: I2,
    last2: I2,
    mut out: S,
    comp: O,
) -> S
where
    I1: Cursor,
    I1::Item: Clone,
    I2: Cursor<Item = I1::Item>,
    S: Sink<I1::Item>,
    O: Compare<I1::Item>,
{
    while first1 != last1 {
        if first2 == last2 {
            return copy(first1, last1, out);
        }
        if comp.less(first1.get(), first2.get()) {
            out.put(first1.get().clone());
            first1.step();
        } else {
            if comp.less(first2.get(), first1.get()) {
                out.put(first2.get().clone());
            } else {
                first1.step();
            }
            first2.step();
        }
    }
    copy(first2, last2, out)
}

natural_order! {
    /// [`includes_by`] in ascending order.
    pub fn includes<I1, I2>(first1: I1, last1: I1, first2: I2, last2: I2) -> bool
    where { I1: Cursor, I1::Item: Ord, I2: Cursor<Item = I1::Item> }
    => includes_by;

    /// [`set_union_by`] in ascending order.
    pub fn set_union<I1, I2, S>(first1: I1, last1: I1, first2: I2, last2: I2, out: S) -> S
    where {
        I1: Cursor,
        I1::Item: Clone + Ord,
        I2: Cursor<Item = I1::Item>,
        S: Sink<I1::Item>,
    }
    => set_union_by;

    /// [`set_intersection_by`] in ascending order.
    pub fn set_intersection<I1, I2, S>(first1: I1, last1: I1, first2: I2, last2: I2, out: S) -> S
    where {
        I1: Cursor,
        I1::Item: Clone + Ord,
        I2: Cursor<Item = I1::Item>,
        S: Sink<I1::Item>,
    }
    => set_intersection_by;

    /// [`set_difference_by`] in ascending order.
    pub fn set_difference<I1, I2, S>(first1: I1, last1: I1, first2: I2, last2: I2, out: S) -> S
    where {
        I1: Cursor,
        I1::Item: Clone + Ord,
        I2: Cursor<Item = I1::Item>,
        S: Sink<I1::Item>,
    }
    => set_difference_by;

    /// [`set_symmetric_difference_by`] in ascending order.
    pub fn set_symmetric_difference<I1, I2, S>(
        first1: I1,
        last1: I1,
        first2: I2,
        last2: I2,
        out: S,
    ) -> S
    where {
        I1: Cursor,
        I1::Item: Clone + Ord,
        I2: Cursor<Item = I1::Item>,
        S: Sink<I1::Item>,
    }
    => set_symmetric_difference_by;
}
