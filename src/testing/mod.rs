//! Test-only cursor views and element types.

use crate::cursor::{
    Bidirectional, BidirectionalCursor, Cursor, Cursors, Forward, ForwardCursor, MutableCursor,
    SliceCursorMut,
};
use rand::Rng;

/// Hides every capability of `C` above forward traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ForwardOnly<C>(pub C);

impl<C: ForwardCursor> Cursor for ForwardOnly<C> {
    type Item = C::Item;
    type Tag = Forward;

    fn get(&self) -> &C::Item {
        self.0.get()
    }

    fn step(&mut self) {
        self.0.step()
    }
}

impl<C: ForwardCursor> ForwardCursor for ForwardOnly<C> {}

impl<C: MutableCursor> MutableCursor for ForwardOnly<C> {
    unsafe fn swap_with(&self, other: &Self) {
        unsafe { self.0.swap_with(&other.0) }
    }

    unsafe fn replace(&self, value: C::Item) -> C::Item {
        unsafe { self.0.replace(value) }
    }
}

/// Hides random access, leaving bidirectional traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BidirectionalOnly<C>(pub C);

impl<C: BidirectionalCursor> Cursor for BidirectionalOnly<C> {
    type Item = C::Item;
    type Tag = Bidirectional;

    fn get(&self) -> &C::Item {
        self.0.get()
    }

    fn step(&mut self) {
        self.0.step()
    }
}

impl<C: BidirectionalCursor> ForwardCursor for BidirectionalOnly<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for BidirectionalOnly<C> {
    fn step_back(&mut self) {
        self.0.step_back()
    }
}

impl<C: BidirectionalCursor + MutableCursor> MutableCursor for BidirectionalOnly<C> {
    unsafe fn swap_with(&self, other: &Self) {
        unsafe { self.0.swap_with(&other.0) }
    }

    unsafe fn replace(&self, value: C::Item) -> C::Item {
        unsafe { self.0.replace(value) }
    }
}

/// An element remembering where it started, for stability checks. Only `key`
/// takes part in comparisons made through [`by_key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Tagged {
    pub key: i32,
    pub index: usize,
}

pub(crate) fn tagged(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(index, &key)| Tagged { key, index })
        .collect()
}

pub(crate) fn by_key(a: &Tagged, b: &Tagged) -> bool {
    a.key < b.key
}

/// Whether `v` is ordered by key, with equal keys kept in original order.
pub(crate) fn is_stably_sorted(v: &[Tagged]) -> bool {
    v.windows(2)
        .all(|w| w[0].key < w[1].key || (w[0].key == w[1].key && w[0].index < w[1].index))
}

pub(crate) fn keys(v: &[Tagged]) -> Vec<i32> {
    v.iter().map(|t| t.key).collect()
}

pub(crate) fn is_permutation_of<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    let (mut a, mut b) = (a.to_vec(), b.to_vec());
    a.sort();
    b.sort();
    a == b
}

/// A vector of `len` values drawn from `0..bound`, so that duplicates are likely
/// for small bounds.
pub(crate) fn random_vec(rng: &mut impl Rng, len: usize, bound: i32) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..bound)).collect()
}

/// Mutable cursors over `v`. Tests never hold an element reference across a
/// write.
pub(crate) fn cursors_mut<T>(v: &mut [T]) -> (SliceCursorMut<'_, T>, SliceCursorMut<'_, T>) {
    // SAFETY: see above.
    unsafe { v.cursors_mut() }
}
