//! Partitioning, and the quicksort built on it.

use crate::{
    algorithm::{find_if, find_if_not, is_sorted_by, rotate},
    compare::{Borrowed, Compare},
    cursor::{iter_swap, next, Capability, Cursor, ForwardCursor, MutableCursor, RandomAccessCursor},
    sink::Sink,
};

/// Whether every element satisfying `pred` precedes every element that does not.
pub fn is_partitioned<I, P>(mut first: I, last: I, mut pred: P) -> bool
where
    I: Cursor,
    P: FnMut(&I::Item) -> bool,
{
    while first != last && pred(first.get()) {
        first.step();
    }
    while first != last {
        if pred(first.get()) {
            return false;
        }
        first.step();
    }
    true
}

/// Puts clones of the elements satisfying `pred` into `out_true` and of the rest
/// into `out_false`, and hands both sinks back.
pub fn partition_copy<I, S1, S2, P>(
    mut first: I,
    last: I,
    mut out_true: S1,
    mut out_false: S2,
    mut pred: P,
) -> (S1, S2)
where
    I: Cursor,
    I::Item: Clone,
    S1: Sink<I::Item>,
    S2: Sink<I::Item>,
    P: FnMut(&I::Item) -> bool,
{
    while first != last {
        let value = first.get().clone();
        if pred(&value) {
            out_true.put(value);
        } else {
            out_false.put(value);
        }
        first.step();
    }
    (out_true, out_false)
}

/// Reorders the elements so that those satisfying `pred` come first, and returns
/// the first element of the second group. Relative order is not preserved.
///
/// Makes one predicate call per element and one exchange per element moved.
///
/// ```
/// use thicket::{algorithm::partition, Cursors};
///
/// let mut v: Vec<i32> = (0..10).collect();
/// // SAFETY: no element reference is held while `partition` runs.
/// let (first, last) = unsafe { v.cursors_mut() };
/// let mid = partition(first, last, |&x| x < 5);
/// assert_eq!(mid.index(), 5);
/// assert!(v[..5].iter().all(|&x| x < 5));
/// ```
pub fn partition<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: MutableCursor,
    P: FnMut(&C::Item) -> bool,
{
    let mut first = find_if_not(first, last.clone(), &mut pred);
    if first == last {
        return first;
    }
    let mut it = first.clone();
    it.step();
    while it != last {
        if pred(it.get()) {
            // SAFETY: the reference passed to `pred` is no longer alive.
            unsafe { first.swap_with(&it) };
            first.step();
        }
        it.step();
    }
    first
}

/// As [`partition`], but elements keep their relative order within each group.
///
/// Works without a buffer: every run of satisfying elements found past the
/// split point is rotated into place, so the worst case is quadratic in the
/// number of exchanges.
pub fn stable_partition<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: MutableCursor,
    P: FnMut(&C::Item) -> bool,
{
    let mut split = find_if_not(first, last.clone(), &mut pred);
    if split == last {
        return split;
    }
    let mut run = split.clone();
    run.step();
    loop {
        run = find_if(run, last.clone(), &mut pred);
        if run == last {
            return split;
        }
        let run_end = find_if_not(run.clone(), last.clone(), &mut pred);
        split = rotate(split, run, run_end.clone());
        run = run_end;
    }
}

/// The first element of the partitioned range `[first, last)` that does not
/// satisfy `pred`.
///
/// Random-access cursors are bisected with a logarithmic number of predicate
/// calls; weaker cursors are scanned.
///
/// ```
/// use thicket::{algorithm::partition_point, Cursors};
///
/// let v = [1, 3, 5, 2, 4];
/// let (first, last) = v.cursors();
/// assert_eq!(partition_point(first, last, |x| x % 2 == 1).index(), 3);
/// ```
#[inline]
pub fn partition_point<C, P>(first: C, last: C, pred: P) -> C
where
    C: ForwardCursor,
    P: FnMut(&C::Item) -> bool,
{
    <C::Tag as Capability<C>>::partition_point(first, last, pred)
}

/// Sorts `[first, last)` under `comp`. Not stable.
///
/// A quicksort on the middle element that splits each range three ways, into
/// elements before the pivot, elements equivalent to it and elements after it,
/// so runs of equal keys are settled in one pass. Ranges found to be already
/// sorted are left alone. The worst case remains quadratic.
pub fn sort_by<C, O>(first: C, last: C, comp: O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    quicksort(first, last, &comp)
}

fn quicksort<C, O>(mut first: C, mut last: C, comp: &O)
where
    C: RandomAccessCursor + MutableCursor,
    O: Compare<C::Item>,
{
    loop {
        let len = last.offset_from(&first);
        if len < 2 || is_sorted_by(first.clone(), last.clone(), Borrowed(comp)) {
            return;
        }

        // SAFETY: no element reference is alive across any exchange below;
        // the predicates only hold theirs for the duration of a comparison.
        unsafe { iter_swap(&first, &next(&first, len / 2)) };
        let rest = next(&first, 1);
        let lower = partition(rest, last.clone(), |e| comp.less(e, first.get()));
        let upper = partition(lower.clone(), last.clone(), |e| !comp.less(first.get(), e));
        let mut pivot = lower;
        pivot.step_back();
        // SAFETY: as above.
        unsafe { iter_swap(&first, &pivot) };

        // [first, pivot) precedes the pivot, [pivot, upper) is equivalent to it
        // and [upper, last) follows it. Recurse into the shorter side.
        if pivot.offset_from(&first) < last.offset_from(&upper) {
            quicksort(first, pivot, comp);
            first = upper;
        } else {
            quicksort(upper, last, comp);
            last = pivot;
        }
    }
}

natural_order! {
    /// Sorts `[first, last)` in ascending order. See [`sort_by`].
    pub fn sort<C>(first: C, last: C)
    where { C: RandomAccessCursor + MutableCursor, C::Item: Ord }
    => sort_by;
}
