//! Functions defined on a subset of their input type.
//!
//! A [`PartialFunction`] pairs a domain predicate with a function. Applying
//! it outside the domain does not panic: [`PartialFunction::apply`] returns
//! an [`UndefinedInputError`] carrying the input back.
//!
//! # Examples
//!
//! ```rust
//! use semialign::compose::PartialFunction;
//!
//! let reciprocal = PartialFunction::new(|x: &f64| *x != 0.0, |x: f64| 1.0 / x);
//!
//! assert_eq!(reciprocal.apply(4.0), Ok(0.25));
//! assert!(reciprocal.apply(0.0).is_err());
//! assert_eq!(reciprocal.call_option(0.0), None);
//! ```

use std::fmt;
use std::rc::Rc;

use super::error::UndefinedInputError;

/// A function from `A` to `B` that is only defined where its domain
/// predicate holds.
///
/// Cloning is cheap; clones share the predicate and the function.
pub struct PartialFunction<A, B>
where
    A: 'static,
    B: 'static,
{
    is_defined: Rc<dyn Fn(&A) -> bool>,
    function: Rc<dyn Fn(A) -> B>,
}

impl<A, B> PartialFunction<A, B>
where
    A: 'static,
    B: 'static,
{
    /// Creates a partial function from a domain predicate and a function.
    ///
    /// `function` is only invoked on inputs accepted by `is_defined`.
    pub fn new<P, F>(is_defined: P, function: F) -> Self
    where
        P: Fn(&A) -> bool + 'static,
        F: Fn(A) -> B + 'static,
    {
        Self {
            is_defined: Rc::new(is_defined),
            function: Rc::new(function),
        }
    }

    /// Creates a partial function defined for every input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::compose::PartialFunction;
    ///
    /// let double = PartialFunction::total(|x: i32| x * 2);
    /// assert!(double.is_defined_at(&i32::MIN));
    /// assert_eq!(double.apply(21), Ok(42));
    /// ```
    pub fn total<F>(function: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self::new(|_| true, function)
    }

    /// Returns `true` if `input` is in the domain.
    #[inline]
    pub fn is_defined_at(&self, input: &A) -> bool {
        (self.is_defined)(input)
    }

    /// Applies the function, or returns the input inside an error when it
    /// is outside the domain.
    ///
    /// # Errors
    ///
    /// Returns [`UndefinedInputError`] when `is_defined_at(&input)` is
    /// `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::compose::PartialFunction;
    ///
    /// let head = PartialFunction::new(|v: &Vec<i32>| !v.is_empty(), |v: Vec<i32>| v[0]);
    ///
    /// assert_eq!(head.apply(vec![7, 8]), Ok(7));
    /// let error = head.apply(Vec::new()).unwrap_err();
    /// assert!(error.into_input().is_empty());
    /// ```
    pub fn apply(&self, input: A) -> Result<B, UndefinedInputError<A>> {
        if self.is_defined_at(&input) {
            Ok((self.function)(input))
        } else {
            Err(UndefinedInputError { input })
        }
    }

    /// Applies the function, mapping inputs outside the domain to `None`.
    #[inline]
    pub fn call_option(&self, input: A) -> Option<B> {
        self.apply(input).ok()
    }

    /// Applies the function, falling back to `default` outside the domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::compose::PartialFunction;
    ///
    /// let parse_small = PartialFunction::new(|s: &&str| s.len() < 3, |s: &str| s.len());
    /// assert_eq!(parse_small.apply_or_else("ab", |_| 0), 2);
    /// assert_eq!(parse_small.apply_or_else("abcd", |s| s.len() * 100), 400);
    /// ```
    pub fn apply_or_else<D>(&self, input: A, default: D) -> B
    where
        D: FnOnce(A) -> B,
    {
        self.apply(input)
            .unwrap_or_else(|error| default(error.into_input()))
    }

    /// Turns this into a total function returning `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::compose::PartialFunction;
    ///
    /// let even_half = PartialFunction::new(|n: &u32| n % 2 == 0, |n: u32| n / 2);
    /// let halves: Vec<_> = (1..=4).map(even_half.lift()).collect();
    /// assert_eq!(halves, vec![None, Some(1), None, Some(2)]);
    /// ```
    pub fn lift(&self) -> impl Fn(A) -> Option<B> + use<A, B> {
        let partial = self.clone();
        move |input| partial.call_option(input)
    }

    /// Combines with a fallback: defined wherever either function is, and
    /// prefers `self` where both are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::compose::PartialFunction;
    ///
    /// let negative = PartialFunction::new(|n: &i32| *n < 0, |_| "negative");
    /// let zero = PartialFunction::new(|n: &i32| *n == 0, |_| "zero");
    ///
    /// let sign = negative.or_else(zero);
    /// assert_eq!(sign.apply(-3), Ok("negative"));
    /// assert_eq!(sign.apply(0), Ok("zero"));
    /// assert!(!sign.is_defined_at(&5));
    /// ```
    pub fn or_else(self, fallback: Self) -> Self {
        let primary_defined = Rc::clone(&self.is_defined);
        let fallback_defined = Rc::clone(&fallback.is_defined);
        let primary = self;
        Self {
            is_defined: Rc::new(move |input: &A| {
                primary_defined(input) || fallback_defined(input)
            }),
            function: Rc::new(move |input: A| {
                if primary.is_defined_at(&input) {
                    (primary.function)(input)
                } else {
                    (fallback.function)(input)
                }
            }),
        }
    }

    /// Post-composes a total function; the domain is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::compose::PartialFunction;
    ///
    /// let root = PartialFunction::new(|x: &f64| *x >= 0.0, |x: f64| x.sqrt());
    /// let rounded = root.and_then(|r| r.round() as i64);
    /// assert_eq!(rounded.apply(10.0), Ok(3));
    /// ```
    pub fn and_then<C, G>(self, next: G) -> PartialFunction<A, C>
    where
        C: 'static,
        G: Fn(B) -> C + 'static,
    {
        let function = self.function;
        PartialFunction {
            is_defined: self.is_defined,
            function: Rc::new(move |input: A| next(function(input))),
        }
    }
}

impl<A, B> Clone for PartialFunction<A, B>
where
    A: 'static,
    B: 'static,
{
    fn clone(&self) -> Self {
        Self {
            is_defined: Rc::clone(&self.is_defined),
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, B> fmt::Debug for PartialFunction<A, B>
where
    A: 'static,
    B: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PartialFunction(<function>)")
    }
}
