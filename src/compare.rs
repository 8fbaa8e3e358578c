//! Comparators: strict weak orderings supplied to the `_by` algorithms.
//!
//! A comparator answers a single question, whether its first argument strictly
//! precedes its second. Every algorithm without a `_by` suffix uses [`Less`].
//!
//! Any `Fn(&T, &T) -> bool` closure is a comparator. Annotate the parameter
//! types, since the signature cannot be inferred through the blanket impl:
//!
//! ```
//! use thicket::{algorithm::sort_by, Cursors};
//!
//! let mut v = [3, 1, 2];
//! // SAFETY: no element reference is held while `sort_by` runs.
//! let (first, last) = unsafe { v.cursors_mut() };
//! sort_by(first, last, |a: &i32, b: &i32| a > b);
//! assert_eq!(v, [3, 2, 1]);
//! ```

use core::cmp::Ordering;

/// A strict weak ordering over `T`.
///
/// Implementations must be irreflexive and transitive, and incomparability must
/// be transitive. Algorithms do not detect violations; with a malformed
/// comparator their results are unspecified.
pub trait Compare<T: ?Sized> {
    /// Whether `this` strictly precedes `that`.
    fn less(&self, this: &T, that: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        self(this, that)
    }
}

/// A zero-sized comparator that delegates to the [`Ord`] implementation of `T`:
/// ascending order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: ?Sized + Ord> Compare<T> for Less {
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        this < that
    }
}

/// A zero-sized comparator that reverses the [`Ord`] implementation of `T`:
/// descending order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: ?Sized + Ord> Compare<T> for Greater {
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        this > that
    }
}

/// Lends a comparator to an algorithm without giving it up.
///
/// Comparators are taken by value. `Borrowed(&comp)` lets one comparator, which
/// need not be `Copy`, serve several calls in turn.
#[derive(Debug)]
pub struct Borrowed<'a, C: ?Sized>(pub &'a C);

impl<C: ?Sized> Clone for Borrowed<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Borrowed<'_, C> {}

impl<T: ?Sized, C: ?Sized + Compare<T>> Compare<T> for Borrowed<'_, C> {
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        self.0.less(this, that)
    }
}

/// Borrows a comparator and swaps its arguments.
///
/// A max-heap under `Inverse(&comp)` is a min-heap under `comp`.
#[derive(Debug)]
pub struct Inverse<'a, C: ?Sized>(pub &'a C);

impl<C: ?Sized> Clone for Inverse<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Inverse<'_, C> {}

impl<T: ?Sized, C: ?Sized + Compare<T>> Compare<T> for Inverse<'_, C> {
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        self.0.less(that, this)
    }
}

/// Adapts a three-way comparison, such as [`Ord::cmp`] or
/// [`f64::total_cmp`], into a comparator.
///
/// ```
/// use thicket::{algorithm::is_sorted_by, ByOrdering, Cursors};
///
/// let v = [-0.5, 0.0, 2.5];
/// let (first, last) = v.cursors();
/// assert!(is_sorted_by(first, last, ByOrdering(f64::total_cmp)));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ByOrdering<F>(pub F);

impl<T: ?Sized, F> Compare<T> for ByOrdering<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        (self.0)(this, that) == Ordering::Less
    }
}

/// Orders values by the [`Ord`] implementation of a key extracted from each.
///
/// ```
/// use thicket::{algorithm::stable_sort_by, compare::ByKey, Cursors};
///
/// let mut v = [("b", 2), ("a", 1), ("c", 1)];
/// // SAFETY: no element reference is held while `stable_sort_by` runs.
/// let (first, last) = unsafe { v.cursors_mut() };
/// stable_sort_by(first, last, ByKey(|p: &(&str, i32)| p.1));
/// assert_eq!(v, [("a", 1), ("c", 1), ("b", 2)]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        (self.0)(this) < (self.0)(that)
    }
}

#[cfg(test)]
mod tests;
