//! Ior type - an inclusive-or of two values.
//!
//! `Ior<L, R>` holds a left value, a right value, or both at once. It is the
//! element type produced by alignment: pairing two containers position by
//! position (or key by key) yields `Both` where the shapes overlap and
//! `Left`/`Right` where only one side has a value.
//!
//! Like [`Either`], `Ior` is right-biased: [`Ior::map`], [`Ior::flat_map`]
//! and the `Crosswalk` instance act on the right value and carry the left
//! value along, accumulating it with a caller-supplied combine function.
//!
//! # Ordering
//!
//! The derived total order ranks variants `Left < Right < Both`. Values of
//! the same variant compare by payload; `Both` compares left payloads first
//! and right payloads on a tie.
//!
//! # Examples
//!
//! ```rust
//! use semialign::control::Ior;
//!
//! let both: Ior<i32, &str> = Ior::Both(1, "one");
//! assert_eq!(both.left(), Some(1));
//! assert_eq!(both.right(), Some("one"));
//!
//! let described = Ior::<i32, &str>::Left(2).fold(
//!     |l| format!("only {l}"),
//!     |r| format!("only {r}"),
//!     |l, r| format!("{l} and {r}"),
//! );
//! assert_eq!(described, "only 2");
//! ```

use std::cmp::Ordering;
use std::fmt;

use super::Either;

/// An inclusive-or: a `Left`, a `Right`, or `Both`.
///
/// # Examples
///
/// ```rust
/// use semialign::control::Ior;
///
/// let merged = Ior::<String, i32>::Left("a".to_string())
///     .combine_with(Ior::Right(2), |x, y| x + &y, |x, y| x + y);
/// assert_eq!(merged, Ior::Both("a".to_string(), 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ior<L, R> {
    /// Only a left value is present.
    Left(L),
    /// Only a right value is present.
    Right(R),
    /// Both values are present.
    Both(L, R),
}

static_assertions::assert_impl_all!(Ior<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Ior<u8, u8>: Copy, Ord, std::hash::Hash);

impl<L, R> Ior<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds an `Ior` from two optional values.
    ///
    /// Returns `None` only when both inputs are `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Ior;
    ///
    /// assert_eq!(Ior::from_options(Some(1), Some('a')), Some(Ior::Both(1, 'a')));
    /// assert_eq!(Ior::from_options(Some(1), None::<char>), Some(Ior::Left(1)));
    /// assert_eq!(Ior::<i32, char>::from_options(None, None), None);
    /// ```
    #[inline]
    pub fn from_options(left: Option<L>, right: Option<R>) -> Option<Self> {
        match (left, right) {
            (Some(left), Some(right)) => Some(Self::Both(left, right)),
            (Some(left), None) => Some(Self::Left(left)),
            (None, Some(right)) => Some(Self::Right(right)),
            (None, None) => None,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Left` only.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right` only.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` for `Both`.
    #[inline]
    pub const fn is_both(&self) -> bool {
        matches!(self, Self::Both(_, _))
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Returns the left value of a `Left` or `Both`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Ior;
    ///
    /// assert_eq!(Ior::<i32, &str>::Both(1, "x").left(), Some(1));
    /// assert_eq!(Ior::<i32, &str>::Right("x").left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(left) | Self::Both(left, _) => Some(left),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value of a `Right` or `Both`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Right(right) | Self::Both(_, right) => Some(right),
            Self::Left(_) => None,
        }
    }

    /// Returns both values, but only for `Both`.
    #[inline]
    pub fn both(self) -> Option<(L, R)> {
        match self {
            Self::Both(left, right) => Some((left, right)),
            Self::Left(_) | Self::Right(_) => None,
        }
    }

    /// Returns a reference to the left value of a `Left` or `Both`.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(left) | Self::Both(left, _) => Some(left),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value of a `Right` or `Both`.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Right(right) | Self::Both(_, right) => Some(right),
            Self::Left(_) => None,
        }
    }

    /// Borrows both payloads, keeping the variant.
    #[inline]
    pub const fn as_ref(&self) -> Ior<&L, &R> {
        match self {
            Self::Left(left) => Ior::Left(left),
            Self::Right(right) => Ior::Right(right),
            Self::Both(left, right) => Ior::Both(left, right),
        }
    }

    /// Splits into a pair of options; at least one of them is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(left) => (Some(left), None),
            Self::Right(right) => (None, Some(right)),
            Self::Both(left, right) => (Some(left), Some(right)),
        }
    }

    // =========================================================================
    // Fold
    // =========================================================================

    /// Eliminates the `Ior`; exactly one of the three functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Ior;
    ///
    /// let total = Ior::Both(2, 3).fold(|l| l, |r| r, |l, r| l + r);
    /// assert_eq!(total, 5);
    /// ```
    #[inline]
    pub fn fold<T, F, G, H>(self, on_left: F, on_right: G, on_both: H) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
        H: FnOnce(L, R) -> T,
    {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
            Self::Both(left, right) => on_both(left, right),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Maps each present side; the variant is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Ior;
    ///
    /// let mapped = Ior::Both(2, "abc").bimap(|n| n * 10, str::len);
    /// assert_eq!(mapped, Ior::Both(20, 3));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Ior<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(left) => Ior::Left(left_function(left)),
            Self::Right(right) => Ior::Right(right_function(right)),
            Self::Both(left, right) => Ior::Both(left_function(left), right_function(right)),
        }
    }

    /// Maps the left value, if any.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Ior<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.bimap(function, |right| right)
    }

    /// Maps the right value, if any.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Ior<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.bimap(|left| left, function)
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Ior<R, L> {
        match self {
            Self::Left(left) => Ior::Right(left),
            Self::Right(right) => Ior::Left(right),
            Self::Both(left, right) => Ior::Both(right, left),
        }
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Merges two `Ior`s, combining values found on the same side.
    ///
    /// A side present in only one operand is carried over unchanged, so
    /// `Left(a)` merged with `Right(b)` is `Both(a, b)`. The operation is
    /// associative whenever `combine_left` and `combine_right` are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Ior;
    ///
    /// let add = |x: i32, y: i32| x + y;
    /// let merged = Ior::Both(1, 10).combine_with(Ior::Left(2), add, add);
    /// assert_eq!(merged, Ior::Both(3, 10));
    /// ```
    pub fn combine_with<F, G>(self, other: Self, combine_left: F, combine_right: G) -> Self
    where
        F: FnOnce(L, L) -> L,
        G: FnOnce(R, R) -> R,
    {
        match (self, other) {
            (Self::Left(first), Self::Left(second)) => Self::Left(combine_left(first, second)),
            (Self::Right(first), Self::Right(second)) => Self::Right(combine_right(first, second)),
            (Self::Left(left), Self::Right(right)) | (Self::Right(right), Self::Left(left)) => {
                Self::Both(left, right)
            }
            (Self::Left(first), Self::Both(second, right))
            | (Self::Both(first, right), Self::Left(second)) => {
                Self::Both(combine_left(first, second), right)
            }
            (Self::Right(first), Self::Both(left, second))
            | (Self::Both(left, first), Self::Right(second)) => {
                Self::Both(left, combine_right(first, second))
            }
            (Self::Both(first_left, first_right), Self::Both(second_left, second_right)) => {
                Self::Both(
                    combine_left(first_left, second_left),
                    combine_right(first_right, second_right),
                )
            }
        }
    }

    /// Right-biased bind that accumulates left values.
    ///
    /// `Left` short-circuits. For `Both(l, r)`, the left value of
    /// `function(r)` (if any) is merged into `l` with `combine_left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Ior;
    ///
    /// let log = |a: String, b: String| a + &b;
    /// let step = |n: i32| Ior::Both(format!("saw {n};"), n + 1);
    ///
    /// let result = Ior::Both("start;".to_string(), 1).flat_map(log, step);
    /// assert_eq!(result, Ior::Both("start;saw 1;".to_string(), 2));
    /// ```
    pub fn flat_map<U, C, F>(self, combine_left: C, function: F) -> Ior<L, U>
    where
        C: FnOnce(L, L) -> L,
        F: FnOnce(R) -> Ior<L, U>,
    {
        match self {
            Self::Left(left) => Ior::Left(left),
            Self::Right(right) => function(right),
            Self::Both(left, right) => match function(right) {
                Ior::Left(next) => Ior::Left(combine_left(left, next)),
                Ior::Right(value) => Ior::Both(left, value),
                Ior::Both(next, value) => Ior::Both(combine_left(left, next), value),
            },
        }
    }

    /// Pairs the right values of two `Ior`s with `function`, accumulating
    /// left values with `combine_left`.
    ///
    /// `Left` on the receiving side short-circuits and ignores `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Ior;
    ///
    /// let concat = |mut a: Vec<String>, b: Vec<String>| {
    ///     a.extend(b);
    ///     a
    /// };
    /// let first: Ior<Vec<String>, i32> = Ior::Both(vec!["w1".to_string()], 2);
    /// let second: Ior<Vec<String>, i32> = Ior::Both(vec!["w2".to_string()], 3);
    ///
    /// let product = first.zip_with(second, concat, |x, y| x * y);
    /// assert_eq!(product, Ior::Both(vec!["w1".to_string(), "w2".to_string()], 6));
    /// ```
    pub fn zip_with<U, V, C, F>(self, other: Ior<L, U>, combine_left: C, function: F) -> Ior<L, V>
    where
        C: FnOnce(L, L) -> L,
        F: FnOnce(R, U) -> V,
    {
        self.flat_map(combine_left, |right| other.map(|value| function(right, value)))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the right value, or computes one from the left value.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(left) => default(left),
            Self::Right(right) | Self::Both(_, right) => right,
        }
    }

    /// Returns `true` if a right value exists and satisfies `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        self.right_ref().is_some_and(predicate)
    }

    /// Returns `true` if there is no right value or it satisfies `predicate`.
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        self.right_ref().is_none_or(predicate)
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Collapses to an `Either`, keeping the right value of a `Both`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::{Either, Ior};
    ///
    /// assert_eq!(Ior::Both(1, 'b').to_either(), Either::Right('b'));
    /// assert_eq!(Ior::<i32, char>::Left(1).to_either(), Either::Left(1));
    /// ```
    #[inline]
    pub fn to_either(self) -> Either<L, R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) | Self::Both(_, right) => Either::Right(right),
        }
    }

    /// Separates the one-sided cases from the `Both` case.
    ///
    /// `Left`/`Right` become `Either::Left(Either::Left/Right(..))` and
    /// `Both(l, r)` becomes `Either::Right((l, r))`.
    #[inline]
    pub fn unwrap_split(self) -> Either<Either<L, R>, (L, R)> {
        match self {
            Self::Left(left) => Either::Left(Either::Left(left)),
            Self::Right(right) => Either::Left(Either::Right(right)),
            Self::Both(left, right) => Either::Right((left, right)),
        }
    }

    // =========================================================================
    // Explicit-Dictionary Equality and Ordering
    // =========================================================================

    /// Compares two `Ior`s for equality using caller-supplied equalities.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Ior;
    ///
    /// let first: Ior<&str, f64> = Ior::Both("Key", 1.0);
    /// let second: Ior<&str, f64> = Ior::Both("key", 1.0000001);
    ///
    /// let same = first.eq_by(
    ///     &second,
    ///     |a, b| a.eq_ignore_ascii_case(b),
    ///     |x, y| (x - y).abs() < 1e-3,
    /// );
    /// assert!(same);
    /// ```
    pub fn eq_by<F, G>(&self, other: &Self, eq_left: F, eq_right: G) -> bool
    where
        F: FnOnce(&L, &L) -> bool,
        G: FnOnce(&R, &R) -> bool,
    {
        match (self, other) {
            (Self::Left(first), Self::Left(second)) => eq_left(first, second),
            (Self::Right(first), Self::Right(second)) => eq_right(first, second),
            (Self::Both(first_left, first_right), Self::Both(second_left, second_right)) => {
                eq_left(first_left, second_left) && eq_right(first_right, second_right)
            }
            _ => false,
        }
    }

    /// Orders two `Ior`s using caller-supplied orderings.
    ///
    /// Variants rank `Left < Right < Both`, matching the derived [`Ord`].
    pub fn compare_by<F, G>(&self, other: &Self, compare_left: F, compare_right: G) -> Ordering
    where
        F: FnOnce(&L, &L) -> Ordering,
        G: FnOnce(&R, &R) -> Ordering,
    {
        match (self, other) {
            (Self::Left(first), Self::Left(second)) => compare_left(first, second),
            (Self::Right(first), Self::Right(second)) => compare_right(first, second),
            (Self::Both(first_left, first_right), Self::Both(second_left, second_right)) => {
                compare_left(first_left, second_left)
                    .then_with(|| compare_right(first_right, second_right))
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Left(_) => 0,
            Self::Right(_) => 1,
            Self::Both(_, _) => 2,
        }
    }
}

impl<L, R> Ior<L, Ior<L, R>> {
    /// Removes one level of nesting, accumulating left values.
    #[inline]
    pub fn flatten<C>(self, combine_left: C) -> Ior<L, R>
    where
        C: FnOnce(L, L) -> L,
    {
        self.flat_map(combine_left, |inner| inner)
    }
}

impl<A> Ior<A, A> {
    /// Collapses an `Ior` whose sides share a type into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::control::Ior;
    ///
    /// assert_eq!(Ior::Both(2, 3).merge_with(|a, b| a * b), 6);
    /// assert_eq!(Ior::<i32, i32>::Right(3).merge_with(|a, b| a * b), 3);
    /// ```
    #[inline]
    pub fn merge_with<F>(self, function: F) -> A
    where
        F: FnOnce(A, A) -> A,
    {
        match self {
            Self::Left(value) | Self::Right(value) => value,
            Self::Both(left, right) => function(left, right),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Ior<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(left) => write!(formatter, "Left({left})"),
            Self::Right(right) => write!(formatter, "Right({right})"),
            Self::Both(left, right) => write!(formatter, "Both({left}, {right})"),
        }
    }
}

impl<L, R> From<Either<L, R>> for Ior<L, R> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(left) => Self::Left(left),
            Either::Right(right) => Self::Right(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    #[rstest]
    #[case(Some(1), Some('a'), Some(Ior::Both(1, 'a')))]
    #[case(Some(1), None, Some(Ior::Left(1)))]
    #[case(None, Some('a'), Some(Ior::Right('a')))]
    #[case(None, None, None)]
    fn from_options_covers_every_presence_pattern(
        #[case] left: Option<i32>,
        #[case] right: Option<char>,
        #[case] expected: Option<Ior<i32, char>>,
    ) {
        assert_eq!(Ior::from_options(left, right), expected);
    }

    #[rstest]
    #[case(Ior::Left(1), "left")]
    #[case(Ior::Right(2), "right")]
    #[case(Ior::Both(1, 2), "both")]
    fn fold_invokes_the_matching_branch(#[case] value: Ior<i32, i32>, #[case] expected: &str) {
        let branch = value.fold(|_| "left", |_| "right", |_, _| "both");
        assert_eq!(branch, expected);
    }

    #[rstest]
    #[case(Ior::Left(1), Ior::Left(2), Ior::Left(3))]
    #[case(Ior::Right(1), Ior::Right(2), Ior::Right(3))]
    #[case(Ior::Left(1), Ior::Right(2), Ior::Both(1, 2))]
    #[case(Ior::Right(2), Ior::Left(1), Ior::Both(1, 2))]
    #[case(Ior::Left(1), Ior::Both(2, 5), Ior::Both(3, 5))]
    #[case(Ior::Both(2, 5), Ior::Left(1), Ior::Both(3, 5))]
    #[case(Ior::Right(1), Ior::Both(7, 2), Ior::Both(7, 3))]
    #[case(Ior::Both(7, 2), Ior::Right(1), Ior::Both(7, 3))]
    #[case(Ior::Both(1, 10), Ior::Both(2, 20), Ior::Both(3, 30))]
    fn combine_with_follows_the_merge_table(
        #[case] first: Ior<i32, i32>,
        #[case] second: Ior<i32, i32>,
        #[case] expected: Ior<i32, i32>,
    ) {
        assert_eq!(first.combine_with(second, add, add), expected);
    }

    #[rstest]
    fn combine_with_keeps_operand_order() {
        let concat = |a: String, b: String| a + &b;
        let merged = Ior::<String, String>::Left("a".into())
            .combine_with(Ior::Both("b".into(), "x".into()), concat, concat);
        assert_eq!(merged, Ior::Both("ab".to_string(), "x".to_string()));
    }

    #[rstest]
    fn projections_treat_both_as_either_side() {
        let value: Ior<i32, char> = Ior::Both(1, 'c');
        assert_eq!(value.left_ref(), Some(&1));
        assert_eq!(value.right_ref(), Some(&'c'));
        assert_eq!(value.both(), Some((1, 'c')));
        assert_eq!(Ior::<i32, char>::Left(1).both(), None);
    }

    #[rstest]
    fn swap_exchanges_sides() {
        assert_eq!(Ior::<i32, char>::Both(1, 'c').swap(), Ior::Both('c', 1));
        assert_eq!(Ior::<i32, char>::Left(1).swap(), Ior::Right(1));
    }

    #[rstest]
    fn flat_map_accumulates_left_values() {
        let result = Ior::Both(1, 10).flat_map(add, |n| Ior::<i32, i32>::Left(n));
        assert_eq!(result, Ior::Left(11));

        let short_circuit = Ior::<i32, i32>::Left(1).flat_map(add, |n| Ior::<i32, i32>::Right(n));
        assert_eq!(short_circuit, Ior::Left(1));
    }

    #[rstest]
    fn flatten_removes_one_level() {
        let nested: Ior<i32, Ior<i32, char>> = Ior::Both(1, Ior::Both(2, 'x'));
        assert_eq!(nested.flatten(add), Ior::Both(3, 'x'));
    }

    #[rstest]
    fn zip_with_short_circuits_on_left() {
        let result = Ior::<i32, i32>::Left(1).zip_with(Ior::Right(2), add, |a, b| a * b);
        assert_eq!(result, Ior::Left(1));

        let result = Ior::<i32, i32>::Right(3).zip_with(Ior::Both(4, 2), add, |a, b| a * b);
        assert_eq!(result, Ior::Both(4, 6));
    }

    #[rstest]
    fn zip_with_accumulates_owned_logs() {
        let concat = |mut first: Vec<String>, second: Vec<String>| {
            first.extend(second);
            first
        };
        let first: Ior<Vec<String>, i32> = Ior::Both(vec!["w1".to_string()], 2);
        let second: Ior<Vec<String>, i32> = Ior::Both(vec!["w2".to_string()], 3);

        let product = first.zip_with(second, concat, |x, y| x * y);
        assert_eq!(product, Ior::Both(vec!["w1".to_string(), "w2".to_string()], 6));

        let failed: Ior<Vec<String>, i32> = Ior::Left(vec!["e1".to_string()]);
        let product = Ior::Both(vec!["w1".to_string()], 2).zip_with(failed, concat, |x, y| x * y);
        assert_eq!(product, Ior::Left(vec!["w1".to_string(), "e1".to_string()]));
    }

    #[rstest]
    fn get_or_else_uses_left_only_when_right_is_absent() {
        assert_eq!(Ior::<i32, i32>::Left(4).get_or_else(|l| l * 2), 8);
        assert_eq!(Ior::Both(4, 1).get_or_else(|l| l * 2), 1);
    }

    #[rstest]
    fn exists_and_all_inspect_the_right_side() {
        let left: Ior<i32, i32> = Ior::Left(1);
        assert!(!left.exists(|_| true));
        assert!(left.all(|_| false));
        let both: Ior<i32, i32> = Ior::Both(1, 2);
        assert!(both.exists(|r| *r == 2));
        assert!(!both.all(|r| *r > 5));
    }

    #[rstest]
    fn unwrap_split_separates_both() {
        assert_eq!(Ior::<i32, char>::Both(1, 'b').unwrap_split(), Either::Right((1, 'b')));
        assert_eq!(
            Ior::<i32, char>::Right('r').unwrap_split(),
            Either::Left(Either::Right('r'))
        );
    }

    #[rstest]
    #[case(Ior::Left(9), Ior::Right(0))]
    #[case(Ior::Right(9), Ior::Both(0, 0))]
    #[case(Ior::Left(9), Ior::Both(0, 0))]
    #[case(Ior::Both(1, 9), Ior::Both(2, 0))]
    #[case(Ior::Both(1, 1), Ior::Both(1, 2))]
    fn ordering_ranks_left_then_right_then_both(
        #[case] smaller: Ior<i32, i32>,
        #[case] larger: Ior<i32, i32>,
    ) {
        assert!(smaller < larger);
        assert_eq!(smaller.compare_by(&larger, Ord::cmp, Ord::cmp), Ordering::Less);
        assert_eq!(larger.compare_by(&smaller, Ord::cmp, Ord::cmp), Ordering::Greater);
    }

    #[rstest]
    fn eq_by_rejects_different_variants() {
        let left: Ior<i32, i32> = Ior::Left(1);
        let both: Ior<i32, i32> = Ior::Both(1, 1);
        assert!(!left.eq_by(&both, |_, _| true, |_, _| true));
    }

    #[rstest]
    fn display_renders_payloads() {
        assert_eq!(Ior::<i32, &str>::Left(1).to_string(), "Left(1)");
        assert_eq!(Ior::<i32, &str>::Right("r").to_string(), "Right(r)");
        assert_eq!(Ior::Both(1, "r").to_string(), "Both(1, r)");
    }

    #[rstest]
    fn from_either_maps_sides() {
        let ior: Ior<i32, char> = Either::Right('x').into();
        assert_eq!(ior, Ior::Right('x'));
    }
}
