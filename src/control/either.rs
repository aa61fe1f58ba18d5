//! Either type - a value that is exactly one of two types.
//!
//! `Either<L, R>` is the exclusive counterpart of [`Ior`](super::Ior): it
//! holds a `Left(L)` or a `Right(R)`, never both. [`Ior`](super::Ior)
//! projects into it when the "both" case is collapsed or split off.
//!
//! # Examples
//!
//! ```rust
//! use semialign::control::Either;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! let rendered = right.fold(
//!     |n| format!("Number: {}", n),
//!     |s| format!("String: {}", s),
//! );
//! assert_eq!(rendered, "String: hello");
//! assert_eq!(left.left(), Some(42));
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Examples
///
/// ```rust
/// use semialign::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

static_assertions::assert_impl_all!(Either<String, u8>: Send, Sync, Clone);

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Option<L>`, discarding a right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("hello");
    /// assert_eq!(right.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a left value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies `function` to a left value, leaving a right value untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `function` to a right value, leaving a left value untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Eliminates the `Either` with one function per variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a pair of `Option`s, exactly one of which is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(1), true)]
    #[case(Either::Right("one"), false)]
    fn is_left_matches_variant(#[case] value: Either<i32, &str>, #[case] expected: bool) {
        assert_eq!(value.is_left(), expected);
        assert_eq!(value.is_right(), !expected);
    }

    #[rstest]
    fn swap_twice_is_identity() {
        let value: Either<i32, String> = Either::Right("x".to_string());
        assert_eq!(value.clone().swap().swap(), value);
    }

    #[rstest]
    fn into_options_has_exactly_one_side() {
        let left: Either<i32, char> = Either::Left(7);
        assert_eq!(left.into_options(), (Some(7), None));
        let right: Either<i32, char> = Either::Right('r');
        assert_eq!(right.into_options(), (None, Some('r')));
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let failed: Result<i32, String> = Err("boom".to_string());
        let either: Either<String, i32> = failed.clone().into();
        assert_eq!(either, Either::Left("boom".to_string()));
        let back: Result<i32, String> = either.into();
        assert_eq!(back, failed);
    }

    #[rstest]
    fn display_renders_variant_name() {
        let left: Either<i32, &str> = Either::Left(3);
        assert_eq!(left.to_string(), "Left(3)");
        let right: Either<i32, &str> = Either::Right("r");
        assert_eq!(right.to_string(), "Right(r)");
    }
}
