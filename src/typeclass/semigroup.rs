//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if it has a `combine: (T, T) -> T` that is
//! associative. Alignment uses semigroups to merge values that meet at the
//! same position or key (`salign`), and [`Ior`] is a semigroup whenever both
//! of its sides are.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use semialign::typeclass::{Semigroup, Sum};
//!
//! let first = BTreeMap::from([("a", Sum(1)), ("b", Sum(2))]);
//! let second = BTreeMap::from([("b", Sum(10)), ("c", Sum(3))]);
//!
//! let merged = first.combine(second);
//! assert_eq!(merged, BTreeMap::from([("a", Sum(1)), ("b", Sum(12)), ("c", Sum(3))]));
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::ops::{Add, Mul};

use super::wrappers::{First, Last, Max, Min, Product, Sum};
use crate::control::Ior;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use semialign::typeclass::Semigroup;
///
/// assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values, cloning them first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::Semigroup;
    ///
    /// let left = vec![1, 2];
    /// let right = vec![3];
    /// assert_eq!(left.combine_ref(&right), vec![1, 2, 3]);
    /// assert_eq!(left, vec![1, 2]);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        (1..count).fold(self.clone(), |accumulator, _| {
            accumulator.combine(self.clone())
        })
    }

    /// Reduces all elements with `combine`; `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::{Semigroup, Max};
    ///
    /// assert_eq!(Max::reduce_all([Max(3), Max(9), Max(4)]), Some(Max(9)));
    /// assert_eq!(Max::<i32>::reduce_all([]), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Sequence Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T> Semigroup for VecDeque<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// `None` is absorbed: `Some(a).combine(None) == Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Map Implementations
// =============================================================================

/// Key-wise union; values under a shared key are combined, left first.
impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

/// Key-wise union; values under a shared key are combined, left first.
impl<K, V, S> Semigroup for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Semigroup,
    S: BuildHasher,
{
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

// =============================================================================
// Ior Implementation
// =============================================================================

/// Merges side by side; see [`Ior::combine_with`] for the full table.
impl<L: Semigroup, R: Semigroup> Semigroup for Ior<L, R> {
    fn combine(self, other: Self) -> Self {
        self.combine_with(other, L::combine, R::combine)
    }
}

// =============================================================================
// Unit and Tuple Implementations
// =============================================================================

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        other
    }
}
