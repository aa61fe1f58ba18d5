//! Lazy positional alignment of two iterators.
//!
//! [`AlignIter`] walks two iterators in lock step and yields
//! `Ior<A, B>`: `Both` while both sides produce, then `Left` or `Right` for
//! the tail of the longer side. Nothing is buffered, so infinite inputs are
//! fine as long as the output is consumed lazily.
//!
//! [`AlignExt`] puts the alignment operations on every [`Iterator`].
//!
//! # Examples
//!
//! ```rust
//! use semialign::align::AlignExt;
//! use semialign::control::Ior;
//!
//! let aligned: Vec<_> = [1, 2, 3].into_iter().align(["a"]).collect();
//! assert_eq!(aligned, vec![Ior::Both(1, "a"), Ior::Left(2), Ior::Left(3)]);
//!
//! let naturals = 0_u64..;
//! let evens = (0_u64..).step_by(2);
//! let first: Vec<_> = naturals.align(evens).take(2).collect();
//! assert_eq!(first, vec![Ior::Both(0, 0), Ior::Both(1, 2)]);
//! ```

use std::iter::{FilterMap, Fuse, FusedIterator, Map};

use crate::control::Ior;
use crate::typeclass::{Align, Semigroup, crosswalk_into, split_sides};

/// An iterator that aligns two iterators position by position.
///
/// Created by [`align`] or [`AlignExt::align`]. It is `Clone` exactly when
/// both inputs are, so a multi-pass pair gives a multi-pass alignment.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct AlignIter<I, J> {
    left: Fuse<I>,
    right: Fuse<J>,
}

static_assertions::assert_impl_all!(AlignIter<std::vec::IntoIter<i32>, std::ops::Range<u8>>: Send, Sync, Clone);

impl<I: Iterator, J: Iterator> AlignIter<I, J> {
    fn new(left: I, right: J) -> Self {
        Self {
            left: left.fuse(),
            right: right.fuse(),
        }
    }
}

impl<I: Iterator, J: Iterator> Iterator for AlignIter<I, J> {
    type Item = Ior<I::Item, J::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Ior::from_options(self.left.next(), self.right.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lower, left_upper) = self.left.size_hint();
        let (right_lower, right_upper) = self.right.size_hint();
        let upper = match (left_upper, right_upper) {
            (Some(left), Some(right)) => Some(left.max(right)),
            _ => None,
        };
        (left_lower.max(right_lower), upper)
    }
}

impl<I: ExactSizeIterator, J: ExactSizeIterator> ExactSizeIterator for AlignIter<I, J> {}

impl<I: Iterator, J: Iterator> FusedIterator for AlignIter<I, J> {}

/// Aligns two iterables position by position.
///
/// # Examples
///
/// ```rust
/// use semialign::align::align;
/// use semialign::control::Ior;
///
/// let aligned: Vec<_> = align(vec![1], vec!['a', 'b']).collect();
/// assert_eq!(aligned, vec![Ior::Both(1, 'a'), Ior::Right('b')]);
/// ```
pub fn align<I, J>(left: I, right: J) -> AlignIter<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator,
{
    AlignIter::new(left.into_iter(), right.into_iter())
}

/// Output of [`AlignExt::pad_zip`].
pub type PadZip<I, J> = Map<
    AlignIter<I, J>,
    fn(
        Ior<<I as Iterator>::Item, <J as Iterator>::Item>,
    ) -> (Option<<I as Iterator>::Item>, Option<<J as Iterator>::Item>),
>;

/// Output of [`AlignExt::left_pad_zip`].
pub type LeftPadZip<I, J> = FilterMap<
    AlignIter<I, J>,
    fn(
        Ior<<I as Iterator>::Item, <J as Iterator>::Item>,
    ) -> Option<(Option<<I as Iterator>::Item>, <J as Iterator>::Item)>,
>;

/// Output of [`AlignExt::right_pad_zip`].
pub type RightPadZip<I, J> = FilterMap<
    AlignIter<I, J>,
    fn(
        Ior<<I as Iterator>::Item, <J as Iterator>::Item>,
    ) -> Option<(<I as Iterator>::Item, Option<<J as Iterator>::Item>)>,
>;

/// Output of [`AlignExt::salign`].
pub type Salign<I, J> = Map<
    AlignIter<I, J>,
    fn(Ior<<I as Iterator>::Item, <I as Iterator>::Item>) -> <I as Iterator>::Item,
>;

/// Alignment operations for every [`Iterator`].
pub trait AlignExt: Iterator + Sized {
    /// Aligns with `other` position by position.
    #[inline]
    fn align<J: IntoIterator>(self, other: J) -> AlignIter<Self, J::IntoIter> {
        AlignIter::new(self, other.into_iter())
    }

    /// Aligns with `other`, mapping each pairing through `function` in the
    /// same pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::align::AlignExt;
    ///
    /// let totals: Vec<i32> = [1, 2, 3]
    ///     .into_iter()
    ///     .align_with([10, 20], |paired| paired.fold(|a| a, |b| b, |a, b| a + b))
    ///     .collect();
    /// assert_eq!(totals, vec![11, 22, 3]);
    /// ```
    #[inline]
    fn align_with<J, C, F>(self, other: J, function: F) -> Map<AlignIter<Self, J::IntoIter>, F>
    where
        J: IntoIterator,
        F: FnMut(Ior<Self::Item, J::Item>) -> C,
    {
        self.align(other).map(function)
    }

    /// Pairs positions as two `Option`s; at least one of each pair is `Some`.
    #[inline]
    fn pad_zip<J: IntoIterator>(self, other: J) -> PadZip<Self, J::IntoIter> {
        self.align(other).map(Ior::into_options as fn(_) -> _)
    }

    /// Keeps the positions where `other` has an element, padding `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::align::AlignExt;
    ///
    /// let padded: Vec<_> = [1].into_iter().left_pad_zip(['a', 'b']).collect();
    /// assert_eq!(padded, vec![(Some(1), 'a'), (None, 'b')]);
    ///
    /// let truncated: Vec<_> = [1, 2].into_iter().left_pad_zip(['a']).collect();
    /// assert_eq!(truncated, vec![(Some(1), 'a')]);
    /// ```
    #[inline]
    fn left_pad_zip<J: IntoIterator>(self, other: J) -> LeftPadZip<Self, J::IntoIter> {
        self.align(other).filter_map(left_padded as fn(_) -> _)
    }

    /// Keeps the positions where `self` has an element, padding `other`.
    #[inline]
    fn right_pad_zip<J: IntoIterator>(self, other: J) -> RightPadZip<Self, J::IntoIter> {
        self.align(other).filter_map(right_padded as fn(_) -> _)
    }

    /// Aligns with `other`, combining overlapping elements left first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::align::AlignExt;
    ///
    /// let words: Vec<String> = ["ab", "c"]
    ///     .map(String::from)
    ///     .into_iter()
    ///     .salign([String::from("X")])
    ///     .collect();
    /// assert_eq!(words, vec!["abX".to_string(), "c".to_string()]);
    /// ```
    #[inline]
    fn salign<J>(self, other: J) -> Salign<Self, J::IntoIter>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Semigroup,
    {
        self.align(other).map(merge_combined as fn(_) -> _)
    }

    /// Splits a stream of `Ior`s into two collections, dropping absent
    /// sides. The inverse of [`AlignExt::align`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::align::AlignExt;
    /// use semialign::control::Ior;
    ///
    /// let (lefts, rights): (Vec<i32>, String) =
    ///     [Ior::Both(1, 'a'), Ior::Left(2), Ior::Right('b')].into_iter().unalign();
    /// assert_eq!(lefts, vec![1, 2]);
    /// assert_eq!(rights, "ab");
    /// ```
    #[inline]
    fn unalign<A, B, FromA, FromB>(self) -> (FromA, FromB)
    where
        Self: Iterator<Item = Ior<A, B>>,
        FromA: Default + Extend<A>,
        FromB: Default + Extend<B>,
    {
        split_sides(self)
    }

    /// Maps every element into an `Ior` and splits the results like
    /// [`AlignExt::unalign`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::align::AlignExt;
    /// use semialign::control::Ior;
    ///
    /// let (odd, even): (Vec<u32>, Vec<u32>) = (1..=6)
    ///     .unalign_with(|n| if n % 2 == 0 { Ior::Right(n) } else { Ior::Left(n) });
    /// assert_eq!(odd, vec![1, 3, 5]);
    /// assert_eq!(even, vec![2, 4, 6]);
    /// ```
    #[inline]
    fn unalign_with<A, B, FromA, FromB, F>(self, function: F) -> (FromA, FromB)
    where
        F: FnMut(Self::Item) -> Ior<A, B>,
        FromA: Default + Extend<A>,
        FromB: Default + Extend<B>,
    {
        split_sides(self.map(function))
    }

    /// Maps every element into an [`Align`] value and aligns the results,
    /// collecting each column into a `Vec` in iteration order.
    ///
    /// Consumes the iterator eagerly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::align::AlignExt;
    ///
    /// let columns = (1..=2).crosswalk(|x| vec![x, x * 10]);
    /// assert_eq!(columns, vec![vec![1, 2], vec![10, 20]]);
    /// ```
    #[inline]
    fn crosswalk<T, F>(self, function: F) -> T::WithType<Vec<T::Inner>>
    where
        T: Align,
        F: FnMut(Self::Item) -> T,
    {
        crosswalk_into::<_, T, Vec<T::Inner>, _, _>(self, function)
    }
}

impl<I: Iterator> AlignExt for I {}

fn left_padded<A, B>(paired: Ior<A, B>) -> Option<(Option<A>, B)> {
    match paired {
        Ior::Left(_) => None,
        Ior::Right(right) => Some((None, right)),
        Ior::Both(left, right) => Some((Some(left), right)),
    }
}

fn right_padded<A, B>(paired: Ior<A, B>) -> Option<(A, Option<B>)> {
    match paired {
        Ior::Left(left) => Some((left, None)),
        Ior::Right(_) => None,
        Ior::Both(left, right) => Some((left, Some(right))),
    }
}

fn merge_combined<A: Semigroup>(paired: Ior<A, A>) -> A {
    paired.merge_with(A::combine)
}
