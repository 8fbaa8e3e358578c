//! Order statistics and binary search over sorted ranges.

use crate::{
    algorithm::{min_element_by, partition},
    compare::{Borrowed, Compare},
    cursor::{
        distance, iter_swap, next, prev, ForwardCursor, MutableCursor, RandomAccessCursor,
    },
};

/// Rearranges `[first, last)` so that `nth` holds the element a full sort would
/// put there, everything before it precedes or is equivalent to it, and
/// nothing after it precedes it.
///
/// Repeatedly partitions around the median of the first, middle and last
/// elements, keeping only the side that contains `nth`, until at most three
/// elements remain; those are then put in order directly. Linear on average,
/// quadratic in the worst case.
///
/// ```
/// use thicket::{algorithm::nth_element, cursor::next, Cursors};
///
/// let mut v = [5, 3, 1, 4, 2];
/// // SAFETY: no element reference is held while `nth_element` runs.
/// let (first, last) = unsafe { v.cursors_mut() };
/// nth_element(first, next(&first, 2), last);
/// assert_eq!(v[2], 3);
/// ```
pub fn nth_element_by<C, O>(mut first: C, nth: C, mut last: C, comp: O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    if nth == last {
        return;
    }
    let comp = &comp;
    loop {
        let len = last.offset_from(&first);
        if len <= 3 {
            break;
        }
        let back = prev(&last, 1);
        let pivot = median_of_three(&first, &next(&first, len / 2), &back, comp);
        // SAFETY: no element reference is alive across the exchanges; the
        // partition predicate only holds its own for one comparison.
        unsafe { iter_swap(&pivot, &back) };
        let cut = partition(first.clone(), back.clone(), |e| comp.less(e, back.get()));
        // SAFETY: as above.
        unsafe { iter_swap(&cut, &back) };

        let side = nth.offset_from(&cut);
        if side == 0 {
            return;
        } else if side < 0 {
            last = cut;
        } else {
            first = next(&cut, 1);
        }
    }

    while first != last {
        let least = min_element_by(first.clone(), last.clone(), Borrowed(comp));
        // SAFETY: no element reference is alive.
        unsafe { iter_swap(&first, &least) };
        first.step();
    }
}

fn median_of_three<C, O>(a: &C, b: &C, c: &C, comp: &O) -> C
where
    C: RandomAccessCursor,
    O: Compare<C::Item>,
{
    let (x, y, z) = (a.get(), b.get(), c.get());
    let median = if comp.less(x, y) {
        if comp.less(y, z) {
            b
        } else if comp.less(x, z) {
            c
        } else {
            a
        }
    } else if comp.less(x, z) {
        a
    } else if comp.less(y, z) {
        c
    } else {
        b
    };
    median.clone()
}

/// The first element of the sorted range `[first, last)` that does not precede
/// `value`.
///
/// Makes `O(log n)` comparisons. Moving between probes takes constant time for
/// random-access cursors and linear time for weaker ones.
pub fn lower_bound_by<C, O>(mut first: C, last: C, value: &C::Item, comp: O) -> C
where
    C: ForwardCursor,
    O: Compare<C::Item>,
{
    let mut count = distance(&first, &last);
    while count > 0 {
        let step = count / 2;
        let it = next(&first, step);
        if comp.less(it.get(), value) {
            first = next(&it, 1);
            count -= step + 1;
        } else {
            count = step;
        }
    }
    first
}

/// The first element of the sorted range `[first, last)` that `value`
/// precedes.
pub fn upper_bound_by<C, O>(mut first: C, last: C, value: &C::Item, comp: O) -> C
where
    C: ForwardCursor,
    O: Compare<C::Item>,
{
    let mut count = distance(&first, &last);
    while count > 0 {
        let step = count / 2;
        let it = next(&first, step);
        if !comp.less(value, it.get()) {
            first = next(&it, 1);
            count -= step + 1;
        } else {
            count = step;
        }
    }
    first
}

/// The subrange of the sorted range `[first, last)` equivalent to `value`, as
/// the pair of its [`lower_bound_by`] and [`upper_bound_by`].
///
/// ```
/// use thicket::{algorithm::equal_range, Cursors};
///
/// let v = [1, 2, 2, 2, 3];
/// let (first, last) = v.cursors();
/// let (lo, hi) = equal_range(first, last, &2);
/// assert_eq!((lo.index(), hi.index()), (1, 4));
/// ```
pub fn equal_range_by<C, O>(first: C, last: C, value: &C::Item, comp: O) -> (C, C)
where
    C: ForwardCursor,
    O: Compare<C::Item>,
{
    let lower = lower_bound_by(first, last.clone(), value, Borrowed(&comp));
    let upper = upper_bound_by(lower.clone(), last, value, comp);
    (lower, upper)
}

/// Whether the sorted range `[first, last)` holds an element equivalent to
/// `value`.
pub fn binary_search_by<C, O>(first: C, last: C, value: &C::Item, comp: O) -> bool
where
    C: ForwardCursor,
    O: Compare<C::Item>,
{
    let it = lower_bound_by(first, last.clone(), value, Borrowed(&comp));
    it != last && !comp.less(value, it.get())
}

natural_order! {
    /// [`nth_element_by`] in ascending order.
    pub fn nth_element<C>(first: C, nth: C, last: C)
    where { C: RandomAccessCursor + MutableCursor, C::Item: Ord }
    => nth_element_by;

    /// [`lower_bound_by`] in ascending order.
    pub fn lower_bound<C>(first: C, last: C, value: &C::Item) -> C
    where { C: ForwardCursor, C::Item: Ord }
    => lower_bound_by;

    /// [`upper_bound_by`] in ascending order.
    pub fn upper_bound<C>(first: C, last: C, value: &C::Item) -> C
    where { C: ForwardCursor, C::Item: Ord }
    => upper_bound_by;

    /// [`equal_range_by`] in ascending order.
    pub fn equal_range<C>(first: C, last: C, value: &C::Item) -> (C, C)
    where { C: ForwardCursor, C::Item: Ord }
    => equal_range_by;

    /// [`binary_search_by`] in ascending order.
    pub fn binary_search<C>(first: C, last: C, value: &C::Item) -> bool
    where { C: ForwardCursor, C::Item: Ord }
    => binary_search_by;
}
