//! Newtype wrappers that pick a semigroup for a value.
//!
//! The same underlying type can merge in several ways. When two aligned maps
//! hold numbers under a shared key, `salign` needs to know whether to add,
//! multiply, keep the larger value, or keep one side. Wrapping the values
//! selects the operation:
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: the larger value (identity: [`Bounded::MIN_VALUE`])
//! - [`Min`]: the smaller value (identity: [`Bounded::MAX_VALUE`])
//! - [`First`]: the left operand
//! - [`Last`]: the right operand
//!
//! # Examples
//!
//! ```rust
//! use semialign::typeclass::{Max, Semigroup, Sum};
//!
//! assert_eq!(Sum(3).combine(Sum(4)), Sum(7));
//! assert_eq!(Max(3).combine(Max(4)), Max(4));
//! ```

macro_rules! define_wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

define_wrapper!(
    /// Additive semigroup: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all([Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// assert_eq!(Sum::<i32>::empty(), Sum(0));
    /// ```
    Sum
);

define_wrapper!(
    /// Multiplicative semigroup: `Product(a).combine(Product(b)) == Product(a * b)`.
    Product
);

define_wrapper!(
    /// Keeps the larger operand; ties keep the left one.
    Max
);

define_wrapper!(
    /// Keeps the smaller operand; ties keep the left one.
    Min
);

define_wrapper!(
    /// Keeps the left operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::{First, Semigroup};
    ///
    /// assert_eq!(First("kept").combine(First("dropped")), First("kept"));
    /// ```
    First
);

define_wrapper!(
    /// Keeps the right operand.
    Last
);

// =============================================================================
// Bounded Trait
// =============================================================================

/// Types with a least and a greatest value.
///
/// Gives [`Max`] and [`Min`] their identity elements.
pub trait Bounded {
    /// The least value of the type.
    const MIN_VALUE: Self;
    /// The greatest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )*
    };
}

impl_bounded!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_and_into_inner_roundtrip() {
        assert_eq!(Sum::new(5).into_inner(), 5);
        assert_eq!(Last::new("x").into_inner(), "x");
    }

    #[rstest]
    fn from_wraps_value() {
        let wrapped: Product<i32> = 6.into();
        assert_eq!(wrapped, Product(6));
        assert_eq!(wrapped.as_inner(), &6);
    }

    #[rstest]
    fn default_wraps_default() {
        assert_eq!(Sum::<u64>::default(), Sum(0));
        assert_eq!(First::<String>::default(), First(String::new()));
    }

    #[rstest]
    #[case(i8::MIN_VALUE == i8::MIN, true)]
    #[case(u32::MAX_VALUE == u32::MAX, true)]
    #[case(char::MAX_VALUE == char::MAX, true)]
    #[case(bool::MIN_VALUE, false)]
    fn bounded_matches_primitive_limits(#[case] actual: bool, #[case] expected: bool) {
        assert_eq!(actual, expected);
    }
}
