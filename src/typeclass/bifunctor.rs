//! Bifunctor type class - mapping over two type parameters.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! value.bimap(|x| x, |y| y) == value
//! ```
//!
//! ## Composition
//!
//! ```text
//! value.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == value.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second consistency
//!
//! ```text
//! value.bimap(f, g) == value.first(f).second(g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use semialign::control::Ior;
//! use semialign::typeclass::Bifunctor;
//!
//! let both: Ior<i32, String> = Ior::Both(2, "two".to_string());
//! assert_eq!(both.bimap(|n| n * 10, |s| s.len()), Ior::Both(20, 3));
//! ```

use crate::control::{Either, Ior};

/// Types with two parameters that can both be mapped.
///
/// `Result<T, E>` is a `Bifunctor<E, T>`: `first` maps the error.
pub trait Bifunctor<A, B> {
    /// The same shape over new parameters.
    type Target<C, D>;

    /// Maps both parameters at once.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Either;
    /// use semialign::typeclass::Bifunctor;
    ///
    /// let either: Either<i32, String> = Either::Left(42);
    /// assert_eq!(either.first(|x| x.to_string()), Either::Left("42".to_string()));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Maps both parameters by reference, leaving `self` intact.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<L, R> Bifunctor<L, R> for Ior<L, R> {
    type Target<C, D> = Ior<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Ior<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Ior<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            Self::Left(value) => Either::Left(first_function(value)),
            Self::Right(value) => Either::Right(second_function(value)),
        }
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        match self {
            Self::Left(value) => Either::Left(first_function(value)),
            Self::Right(value) => Either::Right(second_function(value)),
        }
    }
}

impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        self.map(second_function).map_err(first_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().map(second_function).map_err(first_function)
    }
}

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        (first_function(&self.0), second_function(&self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ior::Left(3), Ior::Left(6))]
    #[case(Ior::Right("ab"), Ior::Right(2))]
    #[case(Ior::Both(1, "abc"), Ior::Both(2, 3))]
    fn ior_bimap_preserves_variant(
        #[case] input: Ior<i32, &str>,
        #[case] expected: Ior<i32, usize>,
    ) {
        assert_eq!(Bifunctor::bimap(input, |n| n * 2, str::len), expected);
    }

    #[rstest]
    fn ior_bimap_ref_leaves_original() {
        let both: Ior<String, i32> = Ior::Both("left".to_string(), 4);
        let lengths = both.bimap_ref(String::len, |n| n + 1);
        assert_eq!(lengths, Ior::Both(4, 5));
        assert!(both.is_both());
    }

    #[rstest]
    fn ior_first_maps_only_left() {
        let both: Ior<i32, char> = Ior::Both(1, 'x');
        assert_eq!(both.first(|n| n + 1), Ior::Both(2, 'x'));
    }

    #[rstest]
    fn result_first_maps_error() {
        let failed: Result<i32, &str> = Err("bad");
        assert_eq!(failed.first(str::len), Err(3));
    }

    #[rstest]
    fn tuple_second_maps_right_component() {
        assert_eq!((1, "ab").second(str::len), (1, 2));
    }
}
