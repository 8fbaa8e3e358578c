//! Merging, rotation and the buffer-free stable sort built on them.

use crate::{
    algorithm::{copy, lower_bound_by, upper_bound_by},
    compare::{Borrowed, Compare},
    cursor::{distance, iter_swap, next, Cursor, ForwardCursor, MutableCursor, RandomAccessCursor},
    sink::Sink,
};

/// Puts clones of the elements of two sorted ranges into `out`, in sorted
/// order. Of two equivalent elements, the one from the first range goes first.
///
/// ```
/// use thicket::{algorithm::merge, cursor::Stream};
///
/// let out = merge(
///     Stream::new([1, 3, 5]),
///     Stream::end(),
///     Stream::new([2, 4, 6]),
///     Stream::end(),
///     Vec::new(),
/// );
/// assert_eq!(out, [1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge_by<I1, I2, S, O>(
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
            first1.step();
        }
    }
    copy(first2, last2, out)
}

/// Exchanges `[first, n_first)` and `[n_first, last)` while keeping the order
/// within each, and returns the new position of the element that was at
/// `first`: `last` when `first == n_first`, and `first` when `n_first == last`.
/// The result is always `first + (last - n_first)`, as with C++'s
/// `std::rotate`, even for the empty rotation where no element moves.
///
/// Uses forward traversal and exactly `distance(first, last)` exchanges at most.
///
/// ```
/// use thicket::{algorithm::rotate, cursor::next, Cursors};
///
/// let mut v = [0, 1, 2, 3, 4];
/// // SAFETY: no element reference is held while `rotate` runs.
/// let (first, last) = unsafe { v.cursors_mut() };
/// let old_first = rotate(first, next(&first, 2), last);
/// assert_eq!(old_first.index(), 3);
/// assert_eq!(v, [2, 3, 4, 0, 1]);
/// ```
pub fn rotate<C>(mut first: C, mut n_first: C, last: C) -> C
where
    C: MutableCursor,
{
    if first == n_first {
        return last;
    }
    if n_first == last {
        return first;
    }

    let mut next = n_first.clone();
    loop {
        // SAFETY: no element reference is alive.
        unsafe { first.swap_with(&next) };
        first.step();
        next.step();
        if first == n_first {
            n_first = next.clone();
        }
        if next == last {
            break;
        }
    }

    // [first, last) now holds the front block followed by the part of the
    // back block that has not moved yet.
    let ret = first.clone();
    next = n_first.clone();
    while next != last {
        // SAFETY: as above.
        unsafe { first.swap_with(&next) };
        first.step();
        next.step();
        if first == n_first {
            n_first = next.clone();
        } else if next == last {
            next = n_first.clone();
        }
    }
    ret
}

/// Puts clones of `[n_first, last)` then of `[first, n_first)` into `out`.
pub fn rotate_copy<C, S>(first: C, n_first: C, last: C, out: S) -> S
where
    C: ForwardCursor,
    C::Item: Clone,
    S: Sink<C::Item>,
{
    let out = copy(n_first.clone(), last, out);
    copy(first, n_first, out)
}

/// Merges the consecutive sorted ranges `[first, middle)` and `[middle, last)`
/// in place, stably.
///
/// Works without a buffer: the longer half is cut in two, the matching cut in
/// the other half is found by binary search, the blocks between the cuts are
/// rotated and both sides are merged recursively. That costs `O(n log n)`
/// exchanges instead of the linear cost of a buffered merge.
pub fn inplace_merge_by<C, O>(first: C, middle: C, last: C, comp: O)
where
    C: MutableCursor,
    O: Compare<C::Item>,
{
    let len1 = distance(&first, &middle);
    let len2 = distance(&middle, &last);
    merge_without_buffer(first, middle, last, len1, len2, &comp)
}

fn merge_without_buffer<C, O>(first: C, middle: C, last: C, len1: isize, len2: isize, comp: &O)
where
    C: MutableCursor,
    O: Compare<C::Item>,
{
    if len1 == 0 || len2 == 0 {
        return;
    }
    if len1 + len2 == 2 {
        if comp.less(middle.get(), first.get()) {
            // SAFETY: the references compared above are no longer alive.
            unsafe { first.swap_with(&middle) };
        }
        return;
    }

    let (first_cut, second_cut, len11, len22);
    if len1 > len2 {
        len11 = len1 / 2;
        first_cut = next(&first, len11);
        second_cut = lower_bound_by(middle.clone(), last.clone(), first_cut.get(), Borrowed(comp));
        len22 = distance(&middle, &second_cut);
    } else {
        len22 = len2 / 2;
        second_cut = next(&middle, len22);
        first_cut = upper_bound_by(first.clone(), middle.clone(), second_cut.get(), Borrowed(comp));
        len11 = distance(&first, &first_cut);
    }

    let new_middle = rotate(first_cut.clone(), middle, second_cut.clone());
    merge_without_buffer(first, first_cut, new_middle.clone(), len11, len22, comp);
    merge_without_buffer(new_middle, second_cut, last, len1 - len11, len2 - len22, comp);
}

/// Sorts `[first, last)` under `comp`, keeping equivalent elements in their
/// original order.
///
/// A top-down merge sort whose merges are [`inplace_merge_by`], so no memory is
/// allocated. Ranges of up to two elements are handled directly.
pub fn stable_sort_by<C, O>(first: C, last: C, comp: O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    merge_sort(first, last, &comp)
}

fn merge_sort<C, O>(first: C, last: C, comp: &O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    let len = last.offset_from(&first);
    if len < 2 {
        return;
    }
    if len == 2 {
        let second = next(&first, 1);
        if comp.less(second.get(), first.get()) {
            // SAFETY: the references compared above are no longer alive.
            unsafe { iter_swap(&first, &second) };
        }
        return;
    }
    let half = len / 2;
    let middle = next(&first, half);
    merge_sort(first.clone(), middle.clone(), comp);
    merge_sort(middle.clone(), last.clone(), comp);
    merge_without_buffer(first, middle, last, half, len - half, comp);
}

natural_order! {
    /// [`merge_by`] in ascending order.
    pub fn merge<I1, I2, S>(first1: I1, last1: I1, first2: I2, last2: I2, out: S) -> S
    where {
        I1: Cursor,
        I1::Item: Clone + Ord,
        I2: Cursor<Item = I1::Item>,
        S: Sink<I1::Item>,
    }
    => merge_by;

    /// [`inplace_merge_by`] in ascending order.
    pub fn inplace_merge<C>(first: C, middle: C, last: C)
    where { C: MutableCursor, C::Item: Ord }
    => inplace_merge_by;

    /// [`stable_sort_by`] in ascending order.
    pub fn stable_sort<C>(first: C, last: C)
    where { C: RandomAccessCursor + MutableCursor, C::Item: Ord }
    => stable_sort_by;
}

#[cfg(test)]
mod tests;
