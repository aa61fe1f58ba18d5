//! Crosswalk - traverse a container with a function into an alignable shape.
//!
//! `crosswalk` maps every element of a container to some [`Align`] value and
//! aligns the results together, collecting the elements that meet at each
//! position (or key) into a copy of the source shape. Over sequences it is a
//! transpose that tolerates ragged rows:
//!
//! ```text
//! [1, 2].crosswalk(|x| [x, 10 * x]) == [[1, 2], [10, 20]]
//! [1, 2, 3].crosswalk(|x| [x; x])    == [[1, 2, 3], [2, 3], [3]]
//! ```
//!
//! Columns keep the order of the source container.
//!
//! With an `Option` target the result is `None` only when every element
//! mapped to `None`; with a map target the values are grouped per key.
//!
//! # Examples
//!
//! ```rust
//! use semialign::typeclass::Crosswalk;
//!
//! let odds = vec![1, 2, 3].crosswalk(|x| (x % 2 == 1).then_some(x));
//! assert_eq!(odds, Some(vec![1, 3]));
//!
//! let nothing = vec![2, 4].crosswalk(|x| (x % 2 == 1).then_some(x));
//! assert_eq!(nothing, None);
//! ```

use std::collections::VecDeque;
use std::convert::Infallible;
use std::iter;

use super::align::Align;
use super::higher::TypeConstructor;
use crate::control::Ior;

/// Containers that can be traversed into an [`Align`] shape.
pub trait Crosswalk: TypeConstructor + Sized {
    /// Maps every element into `T` and aligns the results.
    fn crosswalk<T, F>(self, function: F) -> T::WithType<Self::WithType<T::Inner>>
    where
        T: Align,
        F: FnMut(Self::Inner) -> T;

    /// Crosswalks with the identity: turns a container of alignable values
    /// inside out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::Crosswalk;
    ///
    /// let rows = vec![vec![1, 10], vec![2, 20]];
    /// assert_eq!(rows.sequence_aligned(), vec![vec![1, 2], vec![10, 20]]);
    /// ```
    #[inline]
    fn sequence_aligned(
        self,
    ) -> <Self::Inner as TypeConstructor>::WithType<
        Self::WithType<<Self::Inner as TypeConstructor>::Inner>,
    >
    where
        Self::Inner: Align,
    {
        self.crosswalk(|element| element)
    }
}

impl<A> Crosswalk for Vec<A> {
    fn crosswalk<T, F>(self, function: F) -> T::WithType<Vec<T::Inner>>
    where
        T: Align,
        F: FnMut(A) -> T,
    {
        crosswalk_into(self, function)
    }
}

impl<A> Crosswalk for VecDeque<A> {
    fn crosswalk<T, F>(self, function: F) -> T::WithType<VecDeque<T::Inner>>
    where
        T: Align,
        F: FnMut(A) -> T,
    {
        crosswalk_into(self, function)
    }
}

impl<A> Crosswalk for Option<A> {
    fn crosswalk<T, F>(self, mut function: F) -> T::WithType<Option<T::Inner>>
    where
        T: Align,
        F: FnMut(A) -> T,
    {
        match self {
            None => T::nil::<Option<T::Inner>>(),
            Some(value) => map_via_nil(function(value), Some),
        }
    }
}

/// Right-biased: a `Left` has nothing to traverse and becomes `nil`; the
/// left value of a `Both` is copied into every result.
impl<L: Clone, R> Crosswalk for Ior<L, R> {
    fn crosswalk<T, F>(self, mut function: F) -> T::WithType<Ior<L, T::Inner>>
    where
        T: Align,
        F: FnMut(R) -> T,
    {
        match self {
            Self::Left(_) => T::nil::<Ior<L, T::Inner>>(),
            Self::Right(right) => map_via_nil(function(right), Ior::Right),
            Self::Both(left, right) => {
                map_via_nil(function(right), |value| Ior::Both(left.clone(), value))
            }
        }
    }
}

/// Folds `items` into columns: start from `nil`, then align each mapped
/// element against the accumulator and append it to its column.
pub(crate) fn crosswalk_into<X, T, C, I, F>(items: I, mut function: F) -> T::WithType<C>
where
    I: IntoIterator<Item = X>,
    T: Align,
    C: Default + Extend<T::Inner>,
    F: FnMut(X) -> T,
{
    items.into_iter().fold(T::nil::<C>(), |columns, item| {
        function(item).align_with::<C, C, _>(columns, |paired| match paired {
            Ior::Left(value) => {
                let mut column = C::default();
                column.extend(iter::once(value));
                column
            }
            Ior::Right(column) => column,
            Ior::Both(value, mut column) => {
                column.extend(iter::once(value));
                column
            }
        })
    })
}

/// Maps over any [`Align`] by aligning it with an empty container whose
/// element type is uninhabited.
fn map_via_nil<T, C, F>(target: T, mut function: F) -> T::WithType<C>
where
    T: Align,
    F: FnMut(T::Inner) -> C,
{
    target.align_with::<Infallible, C, _>(T::nil::<Infallible>(), |paired| match paired {
        Ior::Left(value) => function(value),
        Ior::Right(never) | Ior::Both(_, never) => match never {},
    })
}
