//! Minima, maxima and lexicographic comparison.
//!
//! Ties always resolve to the earliest candidate: the first argument of the
//! two-value functions, the first occurrence for the range functions.

use crate::{
    compare::{Compare, Less},
    cursor::{Cursor, ForwardCursor},
};

/// The lesser of `a` and `b` under `comp`; `a` if they are equivalent.
#[inline]
pub fn min_by<'a, T: ?Sized, O: Compare<T>>(a: &'a T, b: &'a T, comp: O) -> &'a T {
    if comp.less(b, a) {
        b
    } else {
        a
    }
}

/// The greater of `a` and `b` under `comp`; `a` if they are equivalent.
#[inline]
pub fn max_by<'a, T: ?Sized, O: Compare<T>>(a: &'a T, b: &'a T, comp: O) -> &'a T {
    if comp.less(a, b) {
        b
    } else {
        a
    }
}

/// `(min_by(a, b), max_by(a, b))`, with at most two comparisons.
///
/// ```
/// use thicket::algorithm::minmax;
///
/// assert_eq!(minmax(&7, &3), (&3, &7));
/// ```
#[inline]
pub fn minmax_by<'a, T: ?Sized, O: Compare<T>>(a: &'a T, b: &'a T, comp: O) -> (&'a T, &'a T) {
    if comp.less(b, a) {
        (b, a)
    } else if comp.less(a, b) {
        (a, b)
    } else {
        (a, a)
    }
}

/// `low` if `v` precedes it, `high` if `v` follows it, `v` otherwise.
///
/// `high` must not precede `low`. This is only checked with debug assertions.
#[inline]
pub fn clamp_by<'a, T: ?Sized, O: Compare<T>>(v: &'a T, low: &'a T, high: &'a T, comp: O) -> &'a T {
    debug_assert!(!comp.less(high, low), "clamp bounds are out of order");
    if comp.less(v, low) {
        low
    } else if comp.less(high, v) {
        high
    } else {
        v
    }
}

/// [`min_by`] in ascending order.
#[inline]
pub fn min<'a, T: Ord + ?Sized>(a: &'a T, b: &'a T) -> &'a T {
    min_by(a, b, Less)
}

/// [`max_by`] in ascending order.
#[inline]
pub fn max<'a, T: Ord + ?Sized>(a: &'a T, b: &'a T) -> &'a T {
    max_by(a, b, Less)
}

/// [`minmax_by`] in ascending order.
#[inline]
pub fn minmax<'a, T: Ord + ?Sized>(a: &'a T, b: &'a T) -> (&'a T, &'a T) {
    minmax_by(a, b, Less)
}

/// [`clamp_by`] in ascending order.
#[inline]
pub fn clamp<'a, T: Ord + ?Sized>(v: &'a T, low: &'a T, high: &'a T) -> &'a T {
    clamp_by(v, low, high, Less)
}

/// The first least element of `[first, last)`, or `last` if the range is empty.
pub fn min_element_by<C, O>(mut first: C, last: C, comp: O) -> C
where
    C: ForwardCursor,
    O: Compare<C::Item>,
{
    if first == last {
        return last;
    }
    let mut least = first.clone();
    first.step();
    while first != last {
        if comp.less(first.get(), least.get()) {
            least = first.clone();
        }
        first.step();
    }
    least
}

/// The first greatest element of `[first, last)`, or `last` if the range is
/// empty.
pub fn max_element_by<C, O>(mut first: C, last: C, comp: O) -> C
where
    C: ForwardCursor,
    O: Compare<C::Item>,
{
    if first == last {
        return last;
    }
    let mut greatest = first.clone();
    first.step();
    while first != last {
        if comp.less(greatest.get(), first.get()) {
            greatest = first.clone();
        }
        first.step();
    }
    greatest
}

/// Both [`min_element_by`] and [`max_element_by`], in one pass.
///
/// ```
/// use thicket::{algorithm::minmax_element, Cursors};
///
/// let v = [3, 9, 1, 9, 1];
/// let (first, last) = v.cursors();
/// let (lo, hi) = minmax_element(first, last);
/// assert_eq!((lo.index(), hi.index()), (2, 1));
/// ```
pub fn minmax_element_by<C, O>(mut first: C, last: C, comp: O) -> (C, C)
where
    C: ForwardCursor,
    O: Compare<C::Item>,
{
    if first == last {
        return (last.clone(), last);
    }
    let (mut least, mut greatest) = (first.clone(), first.clone());
    first.step();
    while first != last {
        if comp.less(first.get(), least.get()) {
            least = first.clone();
        }
        if comp.less(greatest.get(), first.get()) {
            greatest = first.clone();
        }
        first.step();
    }
    (least, greatest)
}

/// Whether `[first1, last1)` orders before `[first2, last2)`: the first
/// non-equivalent pair of elements decides, and otherwise the shorter range
/// comes first.
///
/// ```
/// use thicket::{algorithm::lexicographical_compare, Cursors};
///
/// let (a, b) = (*b"abc", *b"abd");
/// let ((f1, l1), (f2, l2)) = (a.cursors(), b.cursors());
/// assert!(lexicographical_compare(f1, l1, f2, l2));
/// assert!(!lexicographical_compare(f2, l2, f1, l1));
/// assert!(!lexicographical_compare(f1, l1, f1, l1));
/// ```
pub fn lexicographical_compare_by<I1, I2, O>(
    mut first1: I1,
    last1: I1,
    mut first2: I2,
    last2: I2,
    comp: O,
) -> bool
where
    I1: Cursor,
    I2: Cursor<Item = I1::Item>,
    O: Compare<I1::Item>,
{
    while first1 != last1 && first2 != last2 {
        if comp.less(first1.get(), first2.get()) {
            return true;
        }
        if comp.less(first2.get(), first1.get()) {
            return false;
        }
        first1.step();
        first2.step();
    }
    first1 == last1 && first2 != last2
}

natural_order! {
    /// [`min_element_by`] in ascending order.
    pub fn min_element<C>(first: C, last: C) -> C
    where { C: ForwardCursor, C::Item: Ord }
    => min_element_by;

    /// [`max_element_by`] in ascending order.
    pub fn max_element<C>(first: C, last: C) -> C
    where { C: ForwardCursor, C::Item: Ord }
    => max_element_by;

    /// [`minmax_element_by`] in ascending order.
    pub fn minmax_element<C>(first: C, last: C) -> (C, C)
    where { C: ForwardCursor, C::Item: Ord }
    => minmax_element_by;

    /// [`lexicographical_compare_by`] in ascending order.
    pub fn lexicographical_compare<I1, I2>(first1: I1, last1: I1, first2: I2, last2: I2) -> bool
    where { I1: Cursor, I1::Item: Ord, I2: Cursor<Item = I1::Item> }
    => lexicographical_compare_by;
}
