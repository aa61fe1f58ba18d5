//! Key-wise alignment of `BTreeMap` and `HashMap`.
//!
//! Two maps align over the union of their keys: a key found in both maps
//! holds `Both`, a key found in one map holds `Left` or `Right`. `BTreeMap`
//! is aligned with one merge pass over both maps in key order; `HashMap`
//! walks the left map and removes each key from the right map, then drains
//! what is left on the right.
//!
//! `zip` keeps the key intersection and `unalign` splits a map of `Ior`s
//! back into its two maps.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use semialign::control::Ior;
//! use semialign::typeclass::Semialign;
//!
//! let stock = BTreeMap::from([("a", 1), ("b", 2)]);
//! let orders = BTreeMap::from([("b", 20), ("c", 30)]);
//!
//! assert_eq!(
//!     stock.align(orders),
//!     BTreeMap::from([("a", Ior::Left(1)), ("b", Ior::Both(2, 20)), ("c", Ior::Right(30))])
//! );
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::sorted::align_sorted_by;
use crate::control::Ior;
use crate::typeclass::{Align, Semialign, Unalign, Zip};

/// Maps that align by key and can show the key to the combining function.
pub trait KeyedAlign: Semialign {
    /// The key type.
    type Key;

    /// Aligns by key, mapping each entry through `function` together with
    /// its key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use semialign::align::KeyedAlign;
    ///
    /// let before = BTreeMap::from([("x", 1), ("y", 2)]);
    /// let after = BTreeMap::from([("y", 5), ("z", 9)]);
    ///
    /// let report = before.align_with_key(after, |key, change| {
    ///     change.fold(
    ///         |old| format!("{key} removed ({old})"),
    ///         |new| format!("{key} added ({new})"),
    ///         |old, new| format!("{key} {old} -> {new}"),
    ///     )
    /// });
    /// assert_eq!(report["x"], "x removed (1)");
    /// assert_eq!(report["y"], "y 2 -> 5");
    /// assert_eq!(report["z"], "z added (9)");
    /// ```
    fn align_with_key<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnMut(&Self::Key, Ior<Self::Inner, B>) -> C;

    /// Aligns by key into pairs of `Option`s; at least one side is `Some`.
    #[inline]
    fn pad_zip_map<B>(
        self,
        other: Self::WithType<B>,
    ) -> Self::WithType<(Option<Self::Inner>, Option<B>)> {
        self.align_with_key::<B, _, _>(other, |_, paired| paired.into_options())
    }
}

// =============================================================================
// BTreeMap
// =============================================================================

impl<K: Ord, A> KeyedAlign for BTreeMap<K, A> {
    type Key = K;

    fn align_with_key<B, C, F>(self, other: BTreeMap<K, B>, mut function: F) -> BTreeMap<K, C>
    where
        F: FnMut(&K, Ior<A, B>) -> C,
    {
        align_sorted_by(self, other, |(left, _), (right, _)| left.cmp(right))
            .map(|entry| {
                let (key, paired) = match entry {
                    Ior::Left((key, left)) => (key, Ior::Left(left)),
                    Ior::Right((key, right)) => (key, Ior::Right(right)),
                    Ior::Both((key, left), (_, right)) => (key, Ior::Both(left, right)),
                };
                let value = function(&key, paired);
                (key, value)
            })
            .collect()
    }
}

impl<K: Ord, A> Semialign for BTreeMap<K, A> {
    #[inline]
    fn align_with<B, C, F>(self, other: BTreeMap<K, B>, mut function: F) -> BTreeMap<K, C>
    where
        F: FnMut(Ior<A, B>) -> C,
    {
        self.align_with_key(other, |_, paired| function(paired))
    }
}

impl<K: Ord, A> Align for BTreeMap<K, A> {
    #[inline]
    fn nil<B>() -> BTreeMap<K, B> {
        BTreeMap::new()
    }
}

impl<K: Ord, A> Zip for BTreeMap<K, A> {
    fn zip_with<B, C, F>(self, other: BTreeMap<K, B>, mut function: F) -> BTreeMap<K, C>
    where
        F: FnMut(A, B) -> C,
    {
        align_sorted_by(self, other, |(left, _), (right, _)| left.cmp(right))
            .filter_map(|entry| entry.both())
            .map(|((key, left), (_, right))| (key, function(left, right)))
            .collect()
    }
}

/// `Both` keys land in both outputs, so keys must be `Clone`.
impl<K: Ord + Clone, A, B> Unalign for BTreeMap<K, Ior<A, B>> {
    type Lefts = BTreeMap<K, A>;
    type Rights = BTreeMap<K, B>;

    fn unalign(self) -> (BTreeMap<K, A>, BTreeMap<K, B>) {
        let mut lefts = BTreeMap::new();
        let mut rights = BTreeMap::new();
        for (key, paired) in self {
            match paired {
                Ior::Left(left) => {
                    lefts.insert(key, left);
                }
                Ior::Right(right) => {
                    rights.insert(key, right);
                }
                Ior::Both(left, right) => {
                    lefts.insert(key.clone(), left);
                    rights.insert(key, right);
                }
            }
        }
        (lefts, rights)
    }
}

// =============================================================================
// HashMap
// =============================================================================

impl<K, A, S> KeyedAlign for HashMap<K, A, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;

    fn align_with_key<B, C, F>(
        self,
        mut other: HashMap<K, B, S>,
        mut function: F,
    ) -> HashMap<K, C, S>
    where
        F: FnMut(&K, Ior<A, B>) -> C,
    {
        let mut aligned =
            HashMap::with_capacity_and_hasher(self.len().max(other.len()), S::default());
        for (key, left) in self {
            let paired = match other.remove(&key) {
                Some(right) => Ior::Both(left, right),
                None => Ior::Left(left),
            };
            let value = function(&key, paired);
            aligned.insert(key, value);
        }
        for (key, right) in other {
            let value = function(&key, Ior::Right(right));
            aligned.insert(key, value);
        }
        aligned
    }
}

impl<K, A, S> Semialign for HashMap<K, A, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn align_with<B, C, F>(self, other: HashMap<K, B, S>, mut function: F) -> HashMap<K, C, S>
    where
        F: FnMut(Ior<A, B>) -> C,
    {
        self.align_with_key(other, |_, paired| function(paired))
    }
}

impl<K, A, S> Align for HashMap<K, A, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn nil<B>() -> HashMap<K, B, S> {
        HashMap::with_hasher(S::default())
    }
}

impl<K, A, S> Zip for HashMap<K, A, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn zip_with<B, C, F>(self, mut other: HashMap<K, B, S>, mut function: F) -> HashMap<K, C, S>
    where
        F: FnMut(A, B) -> C,
    {
        let mut zipped =
            HashMap::with_capacity_and_hasher(self.len().min(other.len()), S::default());
        for (key, left) in self {
            if let Some(right) = other.remove(&key) {
                zipped.insert(key, function(left, right));
            }
        }
        zipped
    }
}

impl<K, A, B, S> Unalign for HashMap<K, Ior<A, B>, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    type Lefts = HashMap<K, A, S>;
    type Rights = HashMap<K, B, S>;

    fn unalign(self) -> (HashMap<K, A, S>, HashMap<K, B, S>) {
        let mut lefts = HashMap::with_hasher(S::default());
        let mut rights = HashMap::with_hasher(S::default());
        for (key, paired) in self {
            match paired {
                Ior::Left(left) => {
                    lefts.insert(key, left);
                }
                Ior::Right(right) => {
                    rights.insert(key, right);
                }
                Ior::Both(left, right) => {
                    lefts.insert(key.clone(), left);
                    rights.insert(key, right);
                }
            }
        }
        (lefts, rights)
    }
}
