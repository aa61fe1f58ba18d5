//! Currying and uncurrying macros for arities 2 through 8.
//!
//! `curryN!(f)` turns an `N`-argument function into `N` nested one-argument
//! closures; `uncurryN!(g)` turns `N` nested one-argument closures back into
//! a single `N`-argument closure, so `uncurryN!(curryN!(f))` behaves like
//! `f`.
//!
//! The curried closures implement [`Fn`] and may be called any number of
//! times. The wrapped function is shared through [`std::rc::Rc`]; every
//! argument except the last is cloned when a deeper closure is invoked, so
//! those arguments must implement [`Clone`].
//!
//! Each arity is one call into a recursive helper that adds a closure layer
//! per argument, so the arities share a single expansion.

#[doc(hidden)]
#[macro_export]
macro_rules! __curry_nest {
    ($function:ident [$($captured:ident)*] [_]) => {
        move |argument| $function($(::core::clone::Clone::clone(&$captured),)* argument)
    };
    ($function:ident [$($captured:ident)*] [_ $($remaining:tt)+]) => {
        move |argument| {
            let $function = ::std::rc::Rc::clone(&$function);
            $(let $captured = ::core::clone::Clone::clone(&$captured);)*
            $crate::__curry_nest!($function [$($captured)* argument] [$($remaining)+])
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __uncurry_collect {
    ($function:ident [$($argument:ident)*] []) => {
        move |$($argument),*| $function $(($argument))*
    };
    ($function:ident [$($argument:ident)*] [_ $($remaining:tt)*]) => {
        $crate::__uncurry_collect!($function [$($argument)* argument] [$($remaining)*])
    };
}

/// Converts a 2-argument function into curried form.
///
/// # Examples
///
/// ```
/// use semialign::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_nest!(function [] [_ _])
    }};
}

/// Converts a 3-argument function into curried form.
///
/// # Examples
///
/// ```
/// use semialign::curry3;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let with_width = curry3!(volume)(2.0);
/// let with_width_height = with_width(3.0);
/// assert!((with_width_height(4.0) - 24.0).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_nest!(function [] [_ _ _])
    }};
}

/// Converts a 4-argument function into curried form.
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_nest!(function [] [_ _ _ _])
    }};
}

/// Converts a 5-argument function into curried form.
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_nest!(function [] [_ _ _ _ _])
    }};
}

/// Converts a 6-argument function into curried form.
#[macro_export]
macro_rules! curry6 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_nest!(function [] [_ _ _ _ _ _])
    }};
}

/// Converts a 7-argument function into curried form.
#[macro_export]
macro_rules! curry7 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_nest!(function [] [_ _ _ _ _ _ _])
    }};
}

/// Converts an 8-argument function into curried form.
///
/// # Examples
///
/// ```
/// use semialign::curry8;
///
/// let sum = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
///     a + b + c + d + e + f + g + h
/// };
/// assert_eq!(curry8!(sum)(1)(2)(3)(4)(5)(6)(7)(8), 36);
/// ```
#[macro_export]
macro_rules! curry8 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_nest!(function [] [_ _ _ _ _ _ _ _])
    }};
}

/// Converts a curried 2-argument function into a 2-argument closure.
///
/// # Examples
///
/// ```
/// use semialign::uncurry2;
///
/// let curried = |first: i32| move |second: i32| first - second;
/// let subtract = uncurry2!(curried);
/// assert_eq!(subtract(10, 3), 7);
/// ```
#[macro_export]
macro_rules! uncurry2 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::__uncurry_collect!(function [] [_ _])
    }};
}

/// Converts a curried 3-argument function into a 3-argument closure.
///
/// # Examples
///
/// ```
/// use semialign::{curry3, uncurry3};
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
///
/// let round_trip = uncurry3!(curry3!(clamp));
/// assert_eq!(round_trip(0, 10, 42), clamp(0, 10, 42));
/// ```
#[macro_export]
macro_rules! uncurry3 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::__uncurry_collect!(function [] [_ _ _])
    }};
}

/// Converts a curried 4-argument function into a 4-argument closure.
#[macro_export]
macro_rules! uncurry4 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::__uncurry_collect!(function [] [_ _ _ _])
    }};
}

/// Converts a curried 5-argument function into a 5-argument closure.
#[macro_export]
macro_rules! uncurry5 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::__uncurry_collect!(function [] [_ _ _ _ _])
    }};
}

/// Converts a curried 6-argument function into a 6-argument closure.
#[macro_export]
macro_rules! uncurry6 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::__uncurry_collect!(function [] [_ _ _ _ _ _])
    }};
}

/// Converts a curried 7-argument function into a 7-argument closure.
#[macro_export]
macro_rules! uncurry7 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::__uncurry_collect!(function [] [_ _ _ _ _ _ _])
    }};
}

/// Converts a curried 8-argument function into an 8-argument closure.
#[macro_export]
macro_rules! uncurry8 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::__uncurry_collect!(function [] [_ _ _ _ _ _ _ _])
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn join3(first: String, second: String, third: String) -> String {
        format!("{first}-{second}-{third}")
    }

    #[rstest]
    fn curry2_partial_application_is_reusable() {
        let add = curry2!(|first: i32, second: i32| first + second);
        let add_five = add(5);
        assert_eq!(add_five(1), 6);
        assert_eq!(add_five(2), 7);
        assert_eq!(add(1)(1), 2);
    }

    #[rstest]
    fn curry3_clones_non_copy_arguments() {
        let curried = curry3!(join3);
        let with_first = curried("a".to_string());
        let with_second = with_first("b".to_string());
        assert_eq!(with_second("c".to_string()), "a-b-c");
        assert_eq!(with_second("d".to_string()), "a-b-d");
        assert_eq!(with_first("x".to_string())("y".to_string()), "a-x-y");
    }

    #[rstest]
    fn curry_arities_apply_in_order() {
        let digits4 = |a: u32, b: u32, c: u32, d: u32| a * 1000 + b * 100 + c * 10 + d;
        assert_eq!(curry4!(digits4)(1)(2)(3)(4), 1234);

        let digits5 = |a: u32, b: u32, c: u32, d: u32, e: u32| digits4(a, b, c, d) * 10 + e;
        assert_eq!(curry5!(digits5)(1)(2)(3)(4)(5), 12345);

        let digits6 =
            |a: u32, b: u32, c: u32, d: u32, e: u32, f: u32| digits5(a, b, c, d, e) * 10 + f;
        assert_eq!(curry6!(digits6)(1)(2)(3)(4)(5)(6), 123_456);

        let digits7 = |a: u32, b: u32, c: u32, d: u32, e: u32, f: u32, g: u32| {
            digits6(a, b, c, d, e, f) * 10 + g
        };
        assert_eq!(curry7!(digits7)(1)(2)(3)(4)(5)(6)(7), 1_234_567);
    }

    #[rstest]
    fn uncurry_inverts_curry() {
        let concat = uncurry3!(curry3!(join3));
        assert_eq!(
            concat("x".to_string(), "y".to_string(), "z".to_string()),
            "x-y-z"
        );

        let sum8 = |a: i64, b: i64, c: i64, d: i64, e: i64, f: i64, g: i64, h: i64| {
            a + b + c + d + e + f + g + h
        };
        let round_trip = uncurry8!(curry8!(sum8));
        assert_eq!(round_trip(1, 2, 3, 4, 5, 6, 7, 8), 36);
    }

    #[rstest]
    fn uncurry_mid_arities() {
        let pick = uncurry4!(|a: i32| move |b: i32| move |c: i32| move |d: i32| a - b + c - d);
        assert_eq!(pick(10, 1, 2, 3), 8);

        let five = uncurry5!(curry5!(|a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e));
        assert_eq!(five(1, 1, 1, 1, 1), 5);

        let six = uncurry6!(curry6!(|a: u8, b: u8, c: u8, d: u8, e: u8, f: u8| [a, b, c, d, e, f]));
        assert_eq!(six(1, 2, 3, 4, 5, 6), [1, 2, 3, 4, 5, 6]);

        let seven = uncurry7!(curry7!(
            |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8| u32::from(a + b + c + d + e + f + g)
        ));
        assert_eq!(seven(1, 1, 1, 1, 1, 1, 1), 7);
    }

    #[rstest]
    fn uncurry2_calls_repeatedly() {
        let power = uncurry2!(|base: u32| move |exponent: u32| base.pow(exponent));
        assert_eq!(power(2, 10), 1024);
        assert_eq!(power(3, 2), 9);
    }
}
