//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Alignment needs to talk about "the same container shape with a different
//! element type": aligning a `Vec<A>` with a `Vec<B>` yields a
//! `Vec<Ior<A, B>>`, aligning a `BTreeMap<K, A>` with a `BTreeMap<K, B>`
//! yields a `BTreeMap<K, Ior<A, B>>`. Rust has no native higher-kinded
//! types, so [`TypeConstructor`] exposes the element type as `Inner` and the
//! re-parameterised shape as the generic associated type `WithType<B>`.
//!
//! Keyed containers fix their key (and hasher) and vary only the value type.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use semialign::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_shape: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let scores: BTreeMap<&str, i32> = BTreeMap::from([("a", 1)]);
//! let labels: BTreeMap<&str, String> = empty_like(&scores);
//! assert!(labels.is_empty());
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::control::Ior;

/// A type that can be re-parameterised over its element type.
///
/// # Laws
///
/// `<T::WithType<B> as TypeConstructor>::Inner == B`, which the bound on
/// `WithType` enforces.
pub trait TypeConstructor {
    /// The element type currently held.
    type Inner;

    /// The same shape holding `B` instead of `Inner`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<A> TypeConstructor for Vec<A> {
    type Inner = A;
    type WithType<B> = Vec<B>;
}

impl<A> TypeConstructor for VecDeque<A> {
    type Inner = A;
    type WithType<B> = VecDeque<B>;
}

impl<K, V> TypeConstructor for BTreeMap<K, V> {
    type Inner = V;
    type WithType<B> = BTreeMap<K, B>;
}

impl<K, V, S> TypeConstructor for HashMap<K, V, S> {
    type Inner = V;
    type WithType<B> = HashMap<K, B, S>;
}

/// `Ior` is right-biased: the left type is part of the shape.
impl<L, R> TypeConstructor for Ior<L, R> {
    type Inner = R;
    type WithType<B> = Ior<L, B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::RandomState;

    #[test]
    fn vec_inner_type_is_element() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Vec<i32>>();
    }

    #[test]
    fn btree_map_keeps_key_and_swaps_value() {
        fn assert_with_type<K, V, B>()
        where
            BTreeMap<K, V>: TypeConstructor<Inner = V, WithType<B> = BTreeMap<K, B>>,
        {
        }

        assert_with_type::<String, i32, bool>();
    }

    #[test]
    fn hash_map_keeps_hasher() {
        fn assert_with_type<B>()
        where
            HashMap<u8, i32, RandomState>:
                TypeConstructor<Inner = i32, WithType<B> = HashMap<u8, B, RandomState>>,
        {
        }

        assert_with_type::<char>();
    }

    #[test]
    fn ior_keeps_left_type() {
        type Mapped = <Ior<String, i32> as TypeConstructor>::WithType<bool>;

        fn assert_is_ior_string_bool<T: TypeConstructor<Inner = bool>>(_: Option<T>) {}
        assert_is_ior_string_bool::<Mapped>(None::<Ior<String, bool>>);
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <VecDeque<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<char>;

        fn assert_inner<T: TypeConstructor<Inner = char>>() {}
        assert_inner::<Step2>();
    }
}
