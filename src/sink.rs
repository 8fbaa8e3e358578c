//! Output sinks: where the copying algorithms put what they produce.
//!
//! A [`Sink`] accepts values one at a time. Slices are overwritten in place
//! through [`IterMut`]; with the `alloc` feature, growable collections append.
//! Copying algorithms hand the sink back so callers can keep writing to it.

use cfg_if::cfg_if;
use core::slice::IterMut;

/// A destination for a stream of values.
pub trait Sink<T> {
    /// Accepts the next value.
    fn put(&mut self, value: T);
}

impl<T, S: ?Sized + Sink<T>> Sink<T> for &mut S {
    #[inline]
    fn put(&mut self, value: T) {
        (**self).put(value)
    }
}

/// Overwrites the elements of a slice in order.
///
/// # Panics
///
/// Panics if more values are put than the slice has elements.
///
/// ```
/// use thicket::{algorithm::copy, Cursors};
///
/// let src = [1, 2, 3];
/// let mut dst = [0; 4];
/// let (first, last) = src.cursors();
/// let rest = copy(first, last, dst.iter_mut());
/// assert_eq!(rest.len(), 1);
/// assert_eq!(dst, [1, 2, 3, 0]);
/// ```
impl<T> Sink<T> for IterMut<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        match self.next() {
            Some(slot) => *slot = value,
            None => panic!("output range exhausted"),
        }
    }
}

cfg_if! {
    if #[cfg(any(feature = "alloc", test))] {
        use alloc::{collections::VecDeque, vec::Vec};

        /// Appends to the back of the vector.
        impl<T> Sink<T> for Vec<T> {
            #[inline]
            fn put(&mut self, value: T) {
                self.push(value)
            }
        }

        /// Appends to the back of the deque.
        impl<T> Sink<T> for VecDeque<T> {
            #[inline]
            fn put(&mut self, value: T) {
                self.push_back(value)
            }
        }

        /// Prepends to a deque, so values end up in reverse order of arrival.
        ///
        /// ```
        /// use std::collections::VecDeque;
        /// use thicket::{algorithm::copy, sink::Front, Cursors};
        ///
        /// let mut d = VecDeque::from([9]);
        /// let src = [1, 2, 3];
        /// let (first, last) = src.cursors();
        /// copy(first, last, Front(&mut d));
        /// assert_eq!(d, [3, 2, 1, 9]);
        /// ```
        #[derive(Debug)]
        pub struct Front<'a, T>(pub &'a mut VecDeque<T>);

        impl<T> Sink<T> for Front<'_, T> {
            #[inline]
            fn put(&mut self, value: T) {
                self.0.push_front(value)
            }
        }

        /// Inserts into a vector at a position that moves past each inserted
        /// value, so values keep their order of arrival.
        ///
        /// # Panics
        ///
        /// Panics on the first `put` if the position is past the end of the
        /// vector.
        ///
        /// ```
        /// use thicket::{algorithm::copy, sink::Insert, Cursors};
        ///
        /// let mut v = vec![0, 9];
        /// let src = [1, 2, 3];
        /// let (first, last) = src.cursors();
        /// let at = copy(first, last, Insert::new(&mut v, 1)).index();
        /// assert_eq!(at, 4);
        /// assert_eq!(v, [0, 1, 2, 3, 9]);
        /// ```
        #[derive(Debug)]
        pub struct Insert<'a, T> {
            vec: &'a mut Vec<T>,
            index: usize,
        }

        impl<'a, T> Insert<'a, T> {
            /// Starts inserting before the element at `index`.
            pub fn new(vec: &'a mut Vec<T>, index: usize) -> Self {
                Insert { vec, index }
            }

            /// The position the next value will be inserted at.
            pub fn index(&self) -> usize {
                self.index
            }
        }

        impl<T> Sink<T> for Insert<'_, T> {
            #[inline]
            fn put(&mut self, value: T) {
                self.vec.insert(self.index, value);
                self.index += 1;
            }
        }
    }
}
