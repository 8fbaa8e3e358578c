//! Binary max-heaps laid out in random-access ranges.
//!
//! The element at offset `i` of `[first, last)` has its children at offsets
//! `2 * i + 1` and `2 * i + 2`. A range is a heap under `comp` when no element
//! precedes one of its children, so the root is a greatest element.
//!
//! Elements move by exchange only. Neither `Clone` nor a scratch buffer is
//! needed, except by [`partial_sort_copy`] which copies its input.

use crate::{
    compare::{Compare, Inverse},
    cursor::{next, Cursor, MutableCursor, RandomAccessCursor, Reversed},
};

/// Exchanges the elements at offsets `a` and `b` from `first`.
///
/// # Safety
///
/// The caller must hold no element reference into the range.
#[inline]
unsafe fn swap_at<C: RandomAccessCursor + MutableCursor>(first: &C, a: isize, b: isize) {
    // SAFETY: forwarded to the caller.
    unsafe { next(first, a).swap_with(&next(first, b)) }
}

/// Moves the element at offset `pos` towards the root while it is greater than
/// its parent.
fn sift_up<C, O>(first: &C, mut pos: isize, comp: &O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    while pos > 0 {
        let parent = (pos - 1) / 2;
        if !comp.less(first.at(parent), first.at(pos)) {
            break;
        }
        // SAFETY: the references compared above are no longer alive.
        unsafe { swap_at(first, parent, pos) };
        pos = parent;
    }
}

/// Moves the element at offset `pos` away from the root, within the first
/// `len` elements, while one of its children is greater.
fn sift_down<C, O>(first: &C, mut pos: isize, len: isize, comp: &O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    loop {
        let mut child = 2 * pos + 1;
        if child >= len {
            return;
        }
        // compare with the greater of the two children
        if child + 1 < len && comp.less(first.at(child), first.at(child + 1)) {
            child += 1;
        }
        // if we are already in order, stop.
        if !comp.less(first.at(pos), first.at(child)) {
            return;
        }
        // SAFETY: the references compared above are no longer alive.
        unsafe { swap_at(first, pos, child) };
        pos = child;
    }
}

fn build<C, O>(first: &C, len: isize, comp: &O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    for end in 2..=len {
        sift_up(first, end - 1, comp);
    }
}

fn pop<C, O>(first: &C, len: isize, comp: &O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    if len < 2 {
        return;
    }
    // SAFETY: no element reference is alive.
    unsafe { swap_at(first, 0, len - 1) };
    sift_down(first, 0, len - 1, comp);
}

fn sort_built<C, O>(first: &C, mut len: isize, comp: &O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    while len > 1 {
        pop(first, len, comp);
        len -= 1;
    }
}

/// The end of the longest prefix of `[first, last)` that is a heap under `comp`.
pub fn is_heap_until_by<C, O>(first: C, last: C, comp: O) -> C
where
    C: RandomAccessCursor,
    O: Compare<C::Item>,
{
    let len = last.offset_from(&first);
    for i in 1..len {
        if comp.less(first.at((i - 1) / 2), first.at(i)) {
            return next(&first, i);
        }
    }
    last
}

/// Whether `[first, last)` is a heap under `comp`.
pub fn is_heap_by<C, O>(first: C, last: C, comp: O) -> bool
where
    C: RandomAccessCursor,
    O: Compare<C::Item>,
{
    is_heap_until_by(first, last.clone(), comp) == last
}

/// Extends the heap `[first, last - 1)` to `[first, last)` by sifting the last
/// element up.
pub fn push_heap_by<C, O>(first: C, last: C, comp: O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    let len = last.offset_from(&first);
    if len > 1 {
        sift_up(&first, len - 1, &comp);
    }
}

/// Turns `[first, last)` into a heap under `comp`.
///
/// Pushes the elements one by one, in `O(n log n)` comparisons.
pub fn make_heap_by<C, O>(first: C, last: C, comp: O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    build(&first, last.offset_from(&first), &comp)
}

/// Moves the root of the heap `[first, last)` to `last - 1` and restores the
/// heap on `[first, last - 1)`.
pub fn pop_heap_by<C, O>(first: C, last: C, comp: O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    pop(&first, last.offset_from(&first), &comp)
}

/// Sorts the heap `[first, last)` into ascending order under `comp`.
pub fn sort_heap_by<C, O>(first: C, last: C, comp: O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    sort_built(&first, last.offset_from(&first), &comp)
}

/// Rearranges `[first, last)` so that `[first, middle)` holds its least
/// elements in ascending order. The order of `[middle, last)` is unspecified.
///
/// The whole range is made a heap back to front with the order inverted, which
/// leaves a least element at `last - 1`; each pop then moves the least remaining
/// element to the front of what is left.
///
/// ```
/// use thicket::{algorithm::partial_sort, cursor::next, Cursors};
///
/// let mut v = [9, 2, 7, 4, 1, 8];
/// // SAFETY: no element reference is held while `partial_sort` runs.
/// let (first, last) = unsafe { v.cursors_mut() };
/// partial_sort(first, next(&first, 3), last);
/// assert_eq!(v[..3], [1, 2, 4]);
/// ```
pub fn partial_sort_by<C, O>(first: C, middle: C, last: C, comp: O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    let count = middle.offset_from(&first);
    let mut len = last.offset_from(&first);
    let inverse = Inverse(&comp);
    let rfirst = Reversed::new(last);
    build(&rfirst, len, &inverse);
    for _ in 0..count {
        pop(&rfirst, len, &inverse);
        len -= 1;
    }
}

/// Writes the least elements of the single-pass range `[first, last)` into
/// `[d_first, d_last)` in ascending order, as many as fit, and returns the end
/// of what was written.
///
/// The destination is filled and heapified, then every further input element
/// that precedes the current greatest replaces it.
pub fn partial_sort_copy_by<I, R, O>(mut first: I, last: I, d_first: R, d_last: R, comp: O) -> R
where
    I: Cursor,
    I::Item: Clone,
    R: RandomAccessCursor<Item = I::Item> + MutableCursor,
    O: Compare<I::Item>,
{
    let capacity = d_last.offset_from(&d_first);
    let mut len = 0;
    while first != last && len < capacity {
        let value = first.get().clone();
        // SAFETY: the destination is not borrowed.
        unsafe { next(&d_first, len).replace(value) };
        len += 1;
        first.step();
    }
    if len == 0 {
        return d_first;
    }
    build(&d_first, len, &comp);
    while first != last {
        if comp.less(first.get(), d_first.get()) {
            let value = first.get().clone();
            // SAFETY: the references compared above are no longer alive.
            unsafe { d_first.replace(value) };
            sift_down(&d_first, 0, len, &comp);
        }
        first.step();
    }
    sort_built(&d_first, len, &comp);
    next(&d_first, len)
}

natural_order! {
    /// The end of the longest prefix of `[first, last)` that is a max-heap.
    pub fn is_heap_until<C>(first: C, last: C) -> C
    where { C: RandomAccessCursor, C::Item: Ord }
    => is_heap_until_by;

    /// Whether `[first, last)` is a max-heap.
    pub fn is_heap<C>(first: C, last: C) -> bool
    where { C: RandomAccessCursor, C::Item: Ord }
    => is_heap_by;

    /// [`push_heap_by`] in ascending order.
    pub fn push_heap<C>(first: C, last: C)
    where { C: RandomAccessCursor + MutableCursor, C::Item: Ord }
    => push_heap_by;

    /// Turns `[first, last)` into a max-heap.
    ///
    /// ```
    /// use thicket::{algorithm::{is_heap, make_heap}, Cursors};
    ///
    /// let mut v = [3, 1, 4, 1, 5];
    /// // SAFETY: no element reference is held while `make_heap` runs.
    /// let (first, last) = unsafe { v.cursors_mut() };
    /// make_heap(first, last);
    /// assert!(is_heap(first, last));
    /// assert_eq!(v[0], 5);
    /// ```
    pub fn make_heap<C>(first: C, last: C)
    where { C: RandomAccessCursor + MutableCursor, C::Item: Ord }
    => make_heap_by;

    /// [`pop_heap_by`] in ascending order.
    pub fn pop_heap<C>(first: C, last: C)
    where { C: RandomAccessCursor + MutableCursor, C::Item: Ord }
    => pop_heap_by;

    /// [`sort_heap_by`] in ascending order.
    pub fn sort_heap<C>(first: C, last: C)
    where { C: RandomAccessCursor + MutableCursor, C::Item: Ord }
    => sort_heap_by;

    /// [`partial_sort_by`] in ascending order.
    pub fn partial_sort<C>(first: C, middle: C, last: C)
    where { C: RandomAccessCursor + MutableCursor, C::Item: Ord }
    => partial_sort_by;

    /// [`partial_sort_copy_by`] in ascending order.
    pub fn partial_sort_copy<I, R>(first: I, last: I, d_first: R, d_last: R) -> R
    where {
        I: Cursor,
        I::Item: Clone + Ord,
        R: RandomAccessCursor<Item = I::Item> + MutableCursor,
    }
    => partial_sort_copy_by;
}

#[cfg(test)]
mod tests;
