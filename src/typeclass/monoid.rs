//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! The identity of a container monoid is also what an alignment against an
//! empty container looks like: aligning `a` with `T::empty()` tags every
//! element of `a` as `Left`.
//!
//! # Examples
//!
//! ```rust
//! use semialign::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert!(Vec::<i32>::empty().is_empty());
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all elements, starting from [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::Monoid;
    ///
    /// let parts = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::combine_all(parts), "ab");
    /// assert_eq!(String::combine_all(Vec::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for VecDeque<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<K: Ord, V: Semigroup> Monoid for BTreeMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<K, V, S> Monoid for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Semigroup,
    S: BuildHasher + Default,
{
    fn empty() -> Self {
        Self::with_hasher(S::default())
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn btree_map_empty_is_identity() {
        let map = BTreeMap::from([(1, Sum(2))]);
        assert_eq!(BTreeMap::empty().combine(map.clone()), map);
        assert_eq!(map.clone().combine(BTreeMap::empty()), map);
    }

    #[rstest]
    fn hash_map_empty_has_no_entries() {
        let empty: HashMap<String, Sum<i32>> = Monoid::empty();
        assert!(empty.is_empty());
    }

    #[rstest]
    fn product_identity_is_one() {
        assert_eq!(Product::<u8>::empty(), Product(1));
        assert_eq!(Product::combine_all([Product(2), Product(5)]), Product(10));
    }

    #[rstest]
    fn max_min_identities_are_bounds() {
        assert_eq!(Max::<i16>::empty(), Max(i16::MIN));
        assert_eq!(Min::<u32>::empty(), Min(u32::MAX));
        assert_eq!(Max::combine_all(Vec::<Max<i32>>::new()), Max(i32::MIN));
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(String::new()), false)]
    fn option_empty_value_is_none(#[case] value: Option<String>, #[case] expected: bool) {
        assert_eq!(value.is_empty_value(), expected);
    }

    #[rstest]
    fn tuple_empty_is_componentwise() {
        let empty: (String, Sum<i32>) = Monoid::empty();
        assert_eq!(empty, (String::new(), Sum(0)));
    }
}
