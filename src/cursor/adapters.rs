use core::fmt;

use super::{
    BidirectionalCursor, Cursor, ForwardCursor, MutableCursor, RandomAccess, RandomAccessCursor,
    SinglePass,
};

/// A cursor that walks a random-access range back to front.
///
/// `Reversed::new(last)..Reversed::new(first)` visits the elements of
/// `[first, last)` in reverse order. Like a reverse iterator, the adaptor keeps
/// the base cursor one past the element it designates.
///
/// # Examples
///
/// ```
/// use thicket::{algorithm::copy, cursor::Reversed, Cursors};
///
/// let v = [1, 2, 3];
/// let (first, last) = v.cursors();
/// let mut out = Vec::new();
/// copy(Reversed::new(last), Reversed::new(first), &mut out);
/// assert_eq!(out, [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reversed<C> {
    base: C,
}

impl<C> Reversed<C> {
    /// Reverses at `base`: the new cursor designates the element before it.
    pub fn new(base: C) -> Self {
        Reversed { base }
    }

    /// The underlying cursor.
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Unwraps the underlying cursor.
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: RandomAccessCursor> Reversed<C> {
    fn current(&self) -> C {
        let mut c = self.base.clone();
        c.step_back();
        c
    }
}

impl<C: RandomAccessCursor> Cursor for Reversed<C> {
    type Item = C::Item;
    type Tag = RandomAccess;

    #[inline]
    fn get(&self) -> &C::Item {
        self.base.at(-1)
    }

    #[inline]
    fn step(&mut self) {
        self.base.step_back();
    }
}

impl<C: RandomAccessCursor> ForwardCursor for Reversed<C> {}

impl<C: RandomAccessCursor> BidirectionalCursor for Reversed<C> {
    #[inline]
    fn step_back(&mut self) {
        self.base.step();
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for Reversed<C> {
    #[inline]
    fn jump(&mut self, n: isize) {
        self.base.jump(-n);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        origin.base.offset_from(&self.base)
    }

    #[inline]
    fn at(&self, n: isize) -> &C::Item {
        self.base.at(-n - 1)
    }
}

impl<C: RandomAccessCursor + MutableCursor> MutableCursor for Reversed<C> {
    #[inline]
    unsafe fn swap_with(&self, other: &Self) {
        // SAFETY: forwarded; the caller upholds the aliasing contract.
        unsafe { self.current().swap_with(&other.current()) }
    }

    #[inline]
    unsafe fn replace(&self, value: C::Item) -> C::Item {
        // SAFETY: forwarded; the caller upholds the aliasing contract.
        unsafe { self.current().replace(value) }
    }
}

/// A single-pass cursor over the items of an [`Iterator`].
///
/// The item under the cursor is buffered. All exhausted streams compare equal to
/// each other and to [`Stream::end`], so `(Stream::new(iter), Stream::end())`
/// is the range of everything `iter` yields. Two live streams also compare
/// equal; only comparisons against an end are meaningful.
///
/// # Examples
///
/// ```
/// use thicket::{algorithm::count_if, cursor::Stream};
///
/// let odd = count_if(Stream::new(1..=9), Stream::end(), |x: &i32| x % 2 == 1);
/// assert_eq!(odd, 5);
/// ```
pub struct Stream<I: Iterator> {
    iter: Option<I>,
    current: Option<I::Item>,
}

impl<I: Iterator> Stream<I> {
    /// A stream positioned at the first item of `iter`.
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        let mut iter = iter.into_iter();
        Stream {
            current: iter.next(),
            iter: Some(iter),
        }
    }

    /// The exhausted stream.
    pub fn end() -> Self {
        Stream {
            iter: None,
            current: None,
        }
    }

    /// Whether the underlying iterator has run dry.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<I: Iterator> PartialEq for Stream<I> {
    fn eq(&self, other: &Self) -> bool {
        self.is_exhausted() == other.is_exhausted()
    }
}

impl<I> fmt::Debug for Stream<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stream").field(&self.current).finish()
    }
}

impl<I: Iterator> Cursor for Stream<I> {
    type Item = I::Item;
    type Tag = SinglePass;

    fn get(&self) -> &I::Item {
        match &self.current {
            Some(item) => item,
            None => panic!("dereferenced an exhausted stream"),
        }
    }

    fn step(&mut self) {
        self.current = self.iter.as_mut().and_then(Iterator::next);
    }
}
