//! The alignment family: `Semialign`, `Align`, `Zip` and `Unalign`.
//!
//! Aligning two containers of the same shape pairs their elements by
//! position (sequences) or by key (maps). Unlike `zip`, alignment never
//! drops an element: positions or keys present on only one side survive as
//! [`Ior::Left`] or [`Ior::Right`].
//!
//! # Laws
//!
//! ## Idempotency
//!
//! ```text
//! a.clone().align(a) == a.map(|x| Ior::Both(x.clone(), x))
//! ```
//!
//! ## Round trip
//!
//! ```text
//! a.align(b).unalign() == (a, b)
//! ```
//!
//! ## Zip is the overlap
//!
//! ```text
//! a.zip(b) == a.align(b) restricted to Both
//! ```
//!
//! ## Nil is neutral
//!
//! ```text
//! a.align(T::nil()) == a.map(Ior::Left)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use semialign::control::Ior;
//! use semialign::typeclass::{Semialign, Unalign};
//!
//! let aligned = vec![1, 2, 3].align(vec!["a", "b"]);
//! assert_eq!(aligned, vec![Ior::Both(1, "a"), Ior::Both(2, "b"), Ior::Left(3)]);
//!
//! let (numbers, letters): (Vec<i32>, Vec<&str>) = aligned.unalign();
//! assert_eq!(numbers, vec![1, 2, 3]);
//! assert_eq!(letters, vec!["a", "b"]);
//! ```

use std::collections::VecDeque;

use super::higher::TypeConstructor;
use super::semigroup::Semigroup;
use crate::align::align;
use crate::control::Ior;

/// Containers that can be paired shape-wise, keeping unmatched elements.
pub trait Semialign: TypeConstructor + Sized {
    /// Aligns with `other` and maps every pairing through `function`.
    fn align_with<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnMut(Ior<Self::Inner, B>) -> C;

    /// Aligns with `other`, tagging each element by where it was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Ior;
    /// use semialign::typeclass::Semialign;
    ///
    /// assert_eq!(Some(1).align(None::<char>), Some(Ior::Left(1)));
    /// assert_eq!(None::<i32>.align(None::<char>), None);
    /// ```
    #[inline]
    fn align<B>(self, other: Self::WithType<B>) -> Self::WithType<Ior<Self::Inner, B>> {
        self.align_with::<B, _, _>(other, |paired| paired)
    }

    /// Aligns two containers of the same element type, combining elements
    /// that meet with [`Semigroup::combine`] (left first).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::{Semialign, Sum};
    ///
    /// let merged = vec![Sum(1), Sum(2)].salign(vec![Sum(10), Sum(20), Sum(30)]);
    /// assert_eq!(merged, vec![Sum(11), Sum(22), Sum(30)]);
    /// ```
    #[inline]
    fn salign(self, other: Self::WithType<Self::Inner>) -> Self::WithType<Self::Inner>
    where
        Self::Inner: Semigroup,
    {
        self.align_with::<Self::Inner, Self::Inner, _>(other, |paired| {
            paired.merge_with(Semigroup::combine)
        })
    }
}

/// A [`Semialign`] with an empty shape that aligns neutrally.
pub trait Align: Semialign {
    /// The empty container, for any element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::Align;
    ///
    /// let empty: Vec<String> = Vec::<i32>::nil();
    /// assert!(empty.is_empty());
    /// ```
    fn nil<B>() -> Self::WithType<B>;
}

/// Containers that pair only the elements present on both sides.
pub trait Zip: Semialign {
    /// Pairs matching elements through `function`, dropping the rest.
    fn zip_with<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnMut(Self::Inner, B) -> C;

    /// Pairs matching elements into tuples.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::Zip;
    ///
    /// assert_eq!(vec![1, 2, 3].zip(vec!['a', 'b']), vec![(1, 'a'), (2, 'b')]);
    /// ```
    #[inline]
    fn zip<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)> {
        self.zip_with::<B, _, _>(other, |left, right| (left, right))
    }
}

/// Containers of [`Ior`] that can be split back into their two sides.
///
/// Elements absent on one side are dropped from that side's output, so
/// splitting an alignment returns the original inputs.
pub trait Unalign {
    /// The container of left values.
    type Lefts;
    /// The container of right values.
    type Rights;

    /// Splits into the left values and the right values.
    fn unalign(self) -> (Self::Lefts, Self::Rights);
}

// =============================================================================
// Option
// =============================================================================

impl<A> Semialign for Option<A> {
    #[inline]
    fn align_with<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnMut(Ior<A, B>) -> C,
    {
        Ior::from_options(self, other).map(function)
    }
}

impl<A> Align for Option<A> {
    #[inline]
    fn nil<B>() -> Option<B> {
        None
    }
}

impl<A> Zip for Option<A> {
    #[inline]
    fn zip_with<B, C, F>(self, other: Option<B>, mut function: F) -> Option<C>
    where
        F: FnMut(A, B) -> C,
    {
        Option::zip(self, other).map(|(left, right)| function(left, right))
    }
}

impl<A, B> Unalign for Option<Ior<A, B>> {
    type Lefts = Option<A>;
    type Rights = Option<B>;

    #[inline]
    fn unalign(self) -> (Option<A>, Option<B>) {
        self.map_or((None, None), Ior::into_options)
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl<A> Semialign for Vec<A> {
    fn align_with<B, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        F: FnMut(Ior<A, B>) -> C,
    {
        align(self, other).map(function).collect()
    }
}

impl<A> Align for Vec<A> {
    #[inline]
    fn nil<B>() -> Vec<B> {
        Vec::new()
    }
}

impl<A> Zip for Vec<A> {
    fn zip_with<B, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        F: FnMut(A, B) -> C,
    {
        self.into_iter()
            .zip(other)
            .map(|(left, right)| function(left, right))
            .collect()
    }
}

impl<A, B> Unalign for Vec<Ior<A, B>> {
    type Lefts = Vec<A>;
    type Rights = Vec<B>;

    fn unalign(self) -> (Vec<A>, Vec<B>) {
        split_sides(self)
    }
}

impl<A> Semialign for VecDeque<A> {
    fn align_with<B, C, F>(self, other: VecDeque<B>, function: F) -> VecDeque<C>
    where
        F: FnMut(Ior<A, B>) -> C,
    {
        align(self, other).map(function).collect()
    }
}

impl<A> Align for VecDeque<A> {
    #[inline]
    fn nil<B>() -> VecDeque<B> {
        VecDeque::new()
    }
}

impl<A> Zip for VecDeque<A> {
    fn zip_with<B, C, F>(self, other: VecDeque<B>, mut function: F) -> VecDeque<C>
    where
        F: FnMut(A, B) -> C,
    {
        self.into_iter()
            .zip(other)
            .map(|(left, right)| function(left, right))
            .collect()
    }
}

impl<A, B> Unalign for VecDeque<Ior<A, B>> {
    type Lefts = VecDeque<A>;
    type Rights = VecDeque<B>;

    fn unalign(self) -> (VecDeque<A>, VecDeque<B>) {
        split_sides(self)
    }
}

/// Splits a stream of `Ior`s into two collections, dropping absent sides.
pub(crate) fn split_sides<A, B, I, FromA, FromB>(aligned: I) -> (FromA, FromB)
where
    I: IntoIterator<Item = Ior<A, B>>,
    FromA: Default + Extend<A>,
    FromB: Default + Extend<B>,
{
    let mut lefts = FromA::default();
    let mut rights = FromB::default();
    for paired in aligned {
        let (left, right) = paired.into_options();
        lefts.extend(left);
        rights.extend(right);
    }
    (lefts, rights)
}
