//! Linear scans: queries, searches, copies and in-place rewrites that make one
//! (or, for the subsequence searches, a few) forward passes.

use crate::{
    compare::Compare,
    cursor::{iter_swap, BidirectionalCursor, Cursor, ForwardCursor, MutableCursor},
    sink::Sink,
};

#[inline]
fn scan<I, P>(mut first: I, last: &I, mut pred: P) -> I
where
    I: Cursor,
    P: FnMut(&I::Item) -> bool,
{
    while first != *last && !pred(first.get()) {
        first.step();
    }
    first
}

/// Whether `pred` holds for every element; `true` for an empty range.
pub fn all_of<I, P>(first: I, last: I, mut pred: P) -> bool
where
    I: Cursor,
    P: FnMut(&I::Item) -> bool,
{
    scan(first, &last, |x| !pred(x)) == last
}

/// Whether `pred` holds for some element; `false` for an empty range.
pub fn any_of<I, P>(first: I, last: I, pred: P) -> bool
where
    I: Cursor,
    P: FnMut(&I::Item) -> bool,
{
    scan(first, &last, pred) != last
}

/// Whether `pred` holds for no element; `true` for an empty range.
pub fn none_of<I, P>(first: I, last: I, pred: P) -> bool
where
    I: Cursor,
    P: FnMut(&I::Item) -> bool,
{
    !any_of(first, last, pred)
}

/// Calls `f` on every element in order and hands `f` back.
pub fn for_each<I, F>(mut first: I, last: I, mut f: F) -> F
where
    I: Cursor,
    F: FnMut(&I::Item),
{
    while first != last {
        f(first.get());
        first.step();
    }
    f
}

/// The number of elements equal to `value`.
pub fn count<I>(first: I, last: I, value: &I::Item) -> usize
where
    I: Cursor,
    I::Item: PartialEq,
{
    count_if(first, last, |x| x == value)
}

/// The number of elements satisfying `pred`.
pub fn count_if<I, P>(mut first: I, last: I, mut pred: P) -> usize
where
    I: Cursor,
    P: FnMut(&I::Item) -> bool,
{
    let mut n = 0;
    while first != last {
        if pred(first.get()) {
            n += 1;
        }
        first.step();
    }
    n
}

/// The first element equal to `value`, or `last`.
pub fn find<I>(first: I, last: I, value: &I::Item) -> I
where
    I: Cursor,
    I::Item: PartialEq,
{
    scan(first, &last, |x| x == value)
}

/// The first element satisfying `pred`, or `last`.
pub fn find_if<I, P>(first: I, last: I, pred: P) -> I
where
    I: Cursor,
    P: FnMut(&I::Item) -> bool,
{
    scan(first, &last, pred)
}

/// The first element not satisfying `pred`, or `last`.
pub fn find_if_not<I, P>(first: I, last: I, mut pred: P) -> I
where
    I: Cursor,
    P: FnMut(&I::Item) -> bool,
{
    scan(first, &last, |x| !pred(x))
}

/// The first positions at which two ranges differ.
///
/// Stops as soon as either range runs out, so the result holds the end of the
/// shorter range when one is a prefix of the other.
///
/// ```
/// use thicket::{algorithm::mismatch, Cursors};
///
/// let (a, b) = ([1, 2, 3, 4], [1, 2, 9]);
/// let ((f1, l1), (f2, l2)) = (a.cursors(), b.cursors());
/// let (m1, m2) = mismatch(f1, l1, f2, l2);
/// assert_eq!((m1.index(), m2.index()), (2, 2));
/// ```
pub fn mismatch<I1, I2>(first1: I1, last1: I1, first2: I2, last2: I2) -> (I1, I2)
where
    I1: Cursor,
    I2: Cursor,
    I1::Item: PartialEq<I2::Item>,
{
    mismatch_by(first1, last1, first2, last2, |a: &I1::Item, b: &I2::Item| a == b)
}

/// [`mismatch`] with a custom equivalence.
pub fn mismatch_by<I1, I2, F>(
    mut first1: I1,
    last1: I1,
    mut first2: I2,
    last2: I2,
    mut eq: F,
) -> (I1, I2)
where
    I1: Cursor,
    I2: Cursor,
    F: FnMut(&I1::Item, &I2::Item) -> bool,
{
    while first1 != last1 && first2 != last2 && eq(first1.get(), first2.get()) {
        first1.step();
        first2.step();
    }
    (first1, first2)
}

/// Whether two ranges have the same length and pairwise equal elements.
pub fn equal<I1, I2>(first1: I1, last1: I1, first2: I2, last2: I2) -> bool
where
    I1: Cursor,
    I2: Cursor,
    I1::Item: PartialEq<I2::Item>,
{
    equal_by(first1, last1, first2, last2, |a: &I1::Item, b: &I2::Item| a == b)
}

/// [`equal`] with a custom equivalence.
pub fn equal_by<I1, I2, F>(mut first1: I1, last1: I1, mut first2: I2, last2: I2, mut eq: F) -> bool
where
    I1: Cursor,
    I2: Cursor,
    F: FnMut(&I1::Item, &I2::Item) -> bool,
{
    loop {
        match (first1 == last1, first2 == last2) {
            (true, true) => return true,
            (false, false) if eq(first1.get(), first2.get()) => {
                first1.step();
                first2.step();
            }
            _ => return false,
        }
    }
}

/// The first occurrence of the subsequence `[s_first, s_last)`, or `last`.
/// An empty subsequence occurs at `first`.
pub fn search<C1, C2>(first: C1, last: C1, s_first: C2, s_last: C2) -> C1
where
    C1: ForwardCursor,
    C2: ForwardCursor,
    C1::Item: PartialEq<C2::Item>,
{
    search_by(first, last, s_first, s_last, |a: &C1::Item, b: &C2::Item| a == b)
}

/// [`search`] with a custom equivalence.
pub fn search_by<C1, C2, F>(mut first: C1, last: C1, s_first: C2, s_last: C2, mut eq: F) -> C1
where
    C1: ForwardCursor,
    C2: ForwardCursor,
    F: FnMut(&C1::Item, &C2::Item) -> bool,
{
    loop {
        let mut it = first.clone();
        let mut s = s_first.clone();
        loop {
            if s == s_last {
                return first;
            }
            if it == last {
                return last;
            }
            if !eq(it.get(), s.get()) {
                break;
            }
            it.step();
            s.step();
        }
        first.step();
    }
}

/// The last occurrence of the subsequence `[s_first, s_last)`, or `last` when
/// there is none or the subsequence is empty.
pub fn find_end<C1, C2>(first: C1, last: C1, s_first: C2, s_last: C2) -> C1
where
    C1: ForwardCursor,
    C2: ForwardCursor,
    C1::Item: PartialEq<C2::Item>,
{
    find_end_by(first, last, s_first, s_last, |a: &C1::Item, b: &C2::Item| a == b)
}

/// [`find_end`] with a custom equivalence.
pub fn find_end_by<C1, C2, F>(mut first: C1, last: C1, s_first: C2, s_last: C2, mut eq: F) -> C1
where
    C1: ForwardCursor,
    C2: ForwardCursor,
    F: FnMut(&C1::Item, &C2::Item) -> bool,
{
    if s_first == s_last {
        return last;
    }
    let mut result = last.clone();
    loop {
        let found = search_by(
            first,
            last.clone(),
            s_first.clone(),
            s_last.clone(),
            &mut eq,
        );
        if found == last {
            return result;
        }
        first = found.clone();
        first.step();
        result = found;
    }
}

/// The first element equal to any element of `[s_first, s_last)`, or `last`.
pub fn find_first_of<I, C>(first: I, last: I, s_first: C, s_last: C) -> I
where
    I: Cursor,
    C: ForwardCursor,
    I::Item: PartialEq<C::Item>,
{
    find_first_of_by(first, last, s_first, s_last, |a: &I::Item, b: &C::Item| a == b)
}

/// [`find_first_of`] with a custom equivalence.
pub fn find_first_of_by<I, C, F>(first: I, last: I, s_first: C, s_last: C, mut eq: F) -> I
where
    I: Cursor,
    C: ForwardCursor,
    F: FnMut(&I::Item, &C::Item) -> bool,
{
    scan(first, &last, |x| {
        let mut s = s_first.clone();
        while s != s_last {
            if eq(x, s.get()) {
                return true;
            }
            s.step();
        }
        false
    })
}

/// The first element equal to its successor, or `last`.
pub fn adjacent_find<C>(first: C, last: C) -> C
where
    C: ForwardCursor,
    C::Item: PartialEq,
{
    adjacent_find_by(first, last, |a: &C::Item, b: &C::Item| a == b)
}

/// [`adjacent_find`] with a custom equivalence.
pub fn adjacent_find_by<C, F>(mut first: C, last: C, mut eq: F) -> C
where
    C: ForwardCursor,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return last;
    }
    let mut next = first.clone();
    next.step();
    while next != last {
        if eq(first.get(), next.get()) {
            return first;
        }
        first = next.clone();
        next.step();
    }
    last
}

/// Puts a clone of every element into `out`.
pub fn copy<I, S>(mut first: I, last: I, mut out: S) -> S
where
    I: Cursor,
    I::Item: Clone,
    S: Sink<I::Item>,
{
    while first != last {
        out.put(first.get().clone());
        first.step();
    }
    out
}

/// Puts a clone of every element satisfying `pred` into `out`.
pub fn copy_if<I, S, P>(mut first: I, last: I, mut out: S, mut pred: P) -> S
where
    I: Cursor,
    I::Item: Clone,
    S: Sink<I::Item>,
    P: FnMut(&I::Item) -> bool,
{
    while first != last {
        if pred(first.get()) {
            out.put(first.get().clone());
        }
        first.step();
    }
    out
}

/// Puts clones of the `n` elements starting at `first` into `out`.
pub fn copy_n<I, S>(mut first: I, n: usize, mut out: S) -> S
where
    I: Cursor,
    I::Item: Clone,
    S: Sink<I::Item>,
{
    for i in 0..n {
        out.put(first.get().clone());
        if i + 1 < n {
            first.step();
        }
    }
    out
}

/// Copies `[first, last)` into the range ending at `d_last`, back to front, and
/// returns the start of the written range.
///
/// Safe for overlapping ranges when `d_last` lies to the right of `last`.
pub fn copy_backward<C, D>(first: C, mut last: C, mut d_last: D) -> D
where
    C: BidirectionalCursor,
    C::Item: Clone,
    D: BidirectionalCursor<Item = C::Item> + MutableCursor,
{
    while first != last {
        last.step_back();
        d_last.step_back();
        let value = last.get().clone();
        // SAFETY: no reference into either range is alive.
        unsafe { d_last.replace(value) };
    }
    d_last
}

/// Moves every element into `out`, leaving `T::default()` behind in the
/// source.
///
/// ```
/// use thicket::{algorithm::move_range, Cursors};
///
/// let mut names = vec![String::from("ada"), String::from("grace")];
/// // SAFETY: no element reference is held while `move_range` runs.
/// let (first, last) = unsafe { names.cursors_mut() };
/// let moved = move_range(first, last, Vec::new());
/// assert_eq!(moved, ["ada", "grace"]);
/// assert_eq!(names, ["", ""]);
/// ```
pub fn move_range<C, S>(mut first: C, last: C, mut out: S) -> S
where
    C: MutableCursor,
    C::Item: Default,
    S: Sink<C::Item>,
{
    while first != last {
        // SAFETY: no reference into the range is alive.
        out.put(unsafe { first.replace(C::Item::default()) });
        first.step();
    }
    out
}

/// Moves `[first, last)` into the range ending at `d_last`, back to front,
/// leaving `T::default()` behind in every source slot that is not also a
/// destination, and returns the start of the written range.
///
/// Safe for overlapping ranges when `d_last` lies to the right of `last`.
pub fn move_backward<C, D>(first: C, mut last: C, mut d_last: D) -> D
where
    C: BidirectionalCursor + MutableCursor,
    C::Item: Default,
    D: BidirectionalCursor<Item = C::Item> + MutableCursor,
{
    while first != last {
        last.step_back();
        d_last.step_back();
        // SAFETY: no reference into either range is alive.
        unsafe {
            let value = last.replace(C::Item::default());
            d_last.replace(value);
        }
    }
    d_last
}

/// Assigns a clone of `value` to every element.
pub fn fill<C>(mut first: C, last: C, value: &C::Item)
where
    C: MutableCursor,
    C::Item: Clone,
{
    while first != last {
        // SAFETY: no reference into the range is alive.
        unsafe { first.replace(value.clone()) };
        first.step();
    }
}

/// Assigns a clone of `value` to the `n` elements starting at `first`, and
/// returns the position after them.
pub fn fill_n<C>(mut first: C, n: usize, value: &C::Item) -> C
where
    C: MutableCursor,
    C::Item: Clone,
{
    for _ in 0..n {
        // SAFETY: no reference into the range is alive.
        unsafe { first.replace(value.clone()) };
        first.step();
    }
    first
}

/// Puts `f(x)` into `out` for every element `x`.
pub fn transform<I, S, U, F>(mut first: I, last: I, mut out: S, mut f: F) -> S
where
    I: Cursor,
    S: Sink<U>,
    F: FnMut(&I::Item) -> U,
{
    while first != last {
        out.put(f(first.get()));
        first.step();
    }
    out
}

/// Puts `f(a, b)` into `out` for every pair of elements drawn in lockstep from
/// `[first1, last1)` and the range starting at `first2`, which must be at least
/// as long.
pub fn transform2<I1, I2, S, U, F>(mut first1: I1, last1: I1, mut first2: I2, mut out: S, mut f: F) -> S
where
    I1: Cursor,
    I2: Cursor,
    S: Sink<U>,
    F: FnMut(&I1::Item, &I2::Item) -> U,
{
    while first1 != last1 {
        out.put(f(first1.get(), first2.get()));
        first1.step();
        first2.step();
    }
    out
}

/// Assigns successive results of `g` to every element.
pub fn generate<C, G>(mut first: C, last: C, mut g: G)
where
    C: MutableCursor,
    G: FnMut() -> C::Item,
{
    while first != last {
        // SAFETY: no reference into the range is alive.
        unsafe { first.replace(g()) };
        first.step();
    }
}

/// Assigns successive results of `g` to the `n` elements starting at `first`,
/// and returns the position after them.
pub fn generate_n<C, G>(mut first: C, n: usize, mut g: G) -> C
where
    C: MutableCursor,
    G: FnMut() -> C::Item,
{
    for _ in 0..n {
        // SAFETY: no reference into the range is alive.
        unsafe { first.replace(g()) };
        first.step();
    }
    first
}

/// Moves the elements not equal to `value` to the front, keeping their order,
/// and returns the end of the kept range. See [`remove_if`].
pub fn remove<C>(first: C, last: C, value: &C::Item) -> C
where
    C: MutableCursor,
    C::Item: PartialEq,
{
    remove_if(first, last, |x| x == value)
}

/// Moves the elements not satisfying `pred` to the front, keeping their order,
/// and returns the end of the kept range.
///
/// Elements are exchanged rather than overwritten, so `[result, last)` holds the
/// removed elements in an unspecified order.
///
/// ```
/// use thicket::{algorithm::remove_if, Cursors};
///
/// let mut v = vec![1, 2, 3, 4, 5, 6];
/// // SAFETY: no element reference is held while `remove_if` runs.
/// let (first, last) = unsafe { v.cursors_mut() };
/// let end = remove_if(first, last, |x| x % 2 == 0).index();
/// v.truncate(end);
/// assert_eq!(v, [1, 3, 5]);
/// ```
pub fn remove_if<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: MutableCursor,
    P: FnMut(&C::Item) -> bool,
{
    let mut result = scan(first, &last, &mut pred);
    if result == last {
        return result;
    }
    let mut it = result.clone();
    it.step();
    while it != last {
        if !pred(it.get()) {
            // SAFETY: no reference into the range is alive.
            unsafe { result.swap_with(&it) };
            result.step();
        }
        it.step();
    }
    result
}

/// Puts clones of the elements not equal to `value` into `out`.
pub fn remove_copy<I, S>(first: I, last: I, out: S, value: &I::Item) -> S
where
    I: Cursor,
    I::Item: Clone + PartialEq,
    S: Sink<I::Item>,
{
    copy_if(first, last, out, |x| x != value)
}

/// Puts clones of the elements not satisfying `pred` into `out`.
pub fn remove_copy_if<I, S, P>(first: I, last: I, out: S, mut pred: P) -> S
where
    I: Cursor,
    I::Item: Clone,
    S: Sink<I::Item>,
    P: FnMut(&I::Item) -> bool,
{
    copy_if(first, last, out, |x| !pred(x))
}

/// Replaces every element equal to `old` with a clone of `new`.
pub fn replace<C>(first: C, last: C, old: &C::Item, new: &C::Item)
where
    C: MutableCursor,
    C::Item: Clone + PartialEq,
{
    replace_if(first, last, |x| x == old, new)
}

/// Replaces every element satisfying `pred` with a clone of `new`.
pub fn replace_if<C, P>(mut first: C, last: C, mut pred: P, new: &C::Item)
where
    C: MutableCursor,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    while first != last {
        if pred(first.get()) {
            // SAFETY: the reference passed to `pred` is no longer alive.
            unsafe { first.replace(new.clone()) };
        }
        first.step();
    }
}

/// Puts clones of the elements into `out`, substituting `new` for those equal
/// to `old`.
pub fn replace_copy<I, S>(first: I, last: I, out: S, old: &I::Item, new: &I::Item) -> S
where
    I: Cursor,
    I::Item: Clone + PartialEq,
    S: Sink<I::Item>,
{
    replace_copy_if(first, last, out, |x| x == old, new)
}

/// Puts clones of the elements into `out`, substituting `new` for those
/// satisfying `pred`.
pub fn replace_copy_if<I, S, P>(first: I, last: I, out: S, mut pred: P, new: &I::Item) -> S
where
    I: Cursor,
    I::Item: Clone,
    S: Sink<I::Item>,
    P: FnMut(&I::Item) -> bool,
{
    transform(first, last, out, |x| {
        if pred(x) {
            new.clone()
        } else {
            x.clone()
        }
    })
}

/// Exchanges `[first1, last1)` with the range of equal length starting at
/// `first2`, and returns the end of the second range.
pub fn swap_ranges<C>(mut first1: C, last1: C, mut first2: C) -> C
where
    C: MutableCursor,
{
    while first1 != last1 {
        // SAFETY: no reference into either range is alive.
        unsafe { first1.swap_with(&first2) };
        first1.step();
        first2.step();
    }
    first2
}

/// Reverses the order of the elements in place.
pub fn reverse<C>(mut first: C, mut last: C)
where
    C: BidirectionalCursor + MutableCursor,
{
    loop {
        if first == last {
            return;
        }
        last.step_back();
        if first == last {
            return;
        }
        // SAFETY: no reference into the range is alive.
        unsafe { first.swap_with(&last) };
        first.step();
    }
}

/// Puts clones of the elements into `out`, back to front.
pub fn reverse_copy<C, S>(first: C, mut last: C, mut out: S) -> S
where
    C: BidirectionalCursor,
    C::Item: Clone,
    S: Sink<C::Item>,
{
    while first != last {
        last.step_back();
        out.put(last.get().clone());
    }
    out
}

/// Collapses every run of equal adjacent elements to its first element, moving
/// the survivors to the front, and returns the end of the survivors. As with
/// [`remove_if`], the tail holds the discarded elements in an unspecified order.
pub fn unique<C>(first: C, last: C) -> C
where
    C: MutableCursor,
    C::Item: PartialEq,
{
    unique_by(first, last, |a: &C::Item, b: &C::Item| a == b)
}

/// [`unique`] with a custom equivalence. `same` is called with the retained
/// element first.
pub fn unique_by<C, F>(first: C, last: C, mut same: F) -> C
where
    C: MutableCursor,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut dest = adjacent_find_by(first, last.clone(), &mut same);
    if dest == last {
        return last;
    }
    let mut it = dest.clone();
    it.step();
    loop {
        it.step();
        if it == last {
            break;
        }
        if !same(dest.get(), it.get()) {
            dest.step();
            // SAFETY: the references passed to `same` are no longer alive.
            unsafe { iter_swap(&dest, &it) };
        }
    }
    dest.step();
    dest
}

/// Puts a clone of the first element of every run of equal adjacent elements
/// into `out`.
pub fn unique_copy<C, S>(first: C, last: C, out: S) -> S
where
    C: ForwardCursor,
    C::Item: Clone + PartialEq,
    S: Sink<C::Item>,
{
    unique_copy_by(first, last, out, |a: &C::Item, b: &C::Item| a == b)
}

/// [`unique_copy`] with a custom equivalence.
pub fn unique_copy_by<C, S, F>(mut first: C, last: C, mut out: S, mut same: F) -> S
where
    C: ForwardCursor,
    C::Item: Clone,
    S: Sink<C::Item>,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return out;
    }
    let mut kept = first.clone();
    out.put(kept.get().clone());
    first.step();
    while first != last {
        if !same(kept.get(), first.get()) {
            out.put(first.get().clone());
            kept = first.clone();
        }
        first.step();
    }
    out
}

/// The end of the longest sorted prefix of `[first, last)` under `comp`.
pub fn is_sorted_until_by<C, O>(mut first: C, last: C, comp: O) -> C
where
    C: ForwardCursor,
    O: Compare<C::Item>,
{
    if first == last {
        return last;
    }
    let mut next = first.clone();
    next.step();
    while next != last {
        if comp.less(next.get(), first.get()) {
            return next;
        }
        first = next.clone();
        next.step();
    }
    last
}

/// Whether `[first, last)` is sorted under `comp`.
pub fn is_sorted_by<C, O>(first: C, last: C, comp: O) -> bool
where
    C: ForwardCursor,
    O: Compare<C::Item>,
{
    is_sorted_until_by(first, last.clone(), comp) == last
}

natural_order! {
    /// The end of the longest ascending prefix of `[first, last)`.
    pub fn is_sorted_until<C>(first: C, last: C) -> C
    where { C: ForwardCursor, C::Item: Ord }
    => is_sorted_until_by;

    /// Whether `[first, last)` is in ascending order.
    pub fn is_sorted<C>(first: C, last: C) -> bool
    where { C: ForwardCursor, C::Item: Ord }
    => is_sorted_by;
}
