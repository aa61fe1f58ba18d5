//! Small combinators that pair well with currying and partial application.
//!
//! - [`identity`]: returns its argument
//! - [`constant`]: ignores its argument
//! - [`flip`]: swaps the two arguments of a binary function
//! - [`complement`]: negates a predicate

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use semialign::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// let unchanged: Vec<i32> = vec![1, 2].into_iter().map(identity).collect();
/// assert_eq!(unchanged, vec![1, 2]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use semialign::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function: `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use semialign::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let subtract_from = flip(subtract);
/// assert_eq!(subtract_from(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Negates a predicate.
///
/// # Examples
///
/// ```
/// use semialign::compose::complement;
///
/// let is_odd = complement(|n: i32| n % 2 == 0);
/// let odds: Vec<i32> = (1..=5).filter(|n| is_odd(*n)).collect();
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
#[inline]
pub fn complement<A, P>(predicate: P) -> impl Fn(A) -> bool
where
    P: Fn(A) -> bool,
{
    move |value| !predicate(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constant_accepts_any_input_type() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[rstest]
    fn flip_twice_is_original() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped = flip(power);
        assert_eq!(flipped(3, 2), 8);
        let restored = flip(flipped);
        assert_eq!(restored(2, 3), power(2, 3));
    }

    #[rstest]
    #[case(0, false)]
    #[case(7, true)]
    fn complement_negates(#[case] input: i32, #[case] expected: bool) {
        let is_nonzero = complement(|n: i32| n == 0);
        assert_eq!(is_nonzero(input), expected);
    }
}
