//! The `partial!` macro for placeholder-based partial application.

#[doc(hidden)]
#[macro_export]
macro_rules! __partial_munch {
    (
        $function:ident
        [$($parameter:ident)*]
        [$($binding:ident = $value:expr;)*]
        [$($call:tt)*]
        []
    ) => {{
        $(let $binding = $value;)*
        move |$($parameter),*| $function($($call)*)
    }};
    (
        $function:ident
        [$($parameter:ident)*]
        [$($bindings:tt)*]
        [$($call:tt)*]
        [__ $(, $($remaining:tt)*)?]
    ) => {
        $crate::__partial_munch!(
            $function
            [$($parameter)* argument]
            [$($bindings)*]
            [$($call)* argument,]
            [$($($remaining)*)?]
        )
    };
    (
        $function:ident
        [$($parameter:ident)*]
        [$($bindings:tt)*]
        [$($call:tt)*]
        [$value:expr $(, $($remaining:tt)*)?]
    ) => {
        $crate::__partial_munch!(
            $function
            [$($parameter)*]
            [$($bindings)* fixed = $value;]
            [$($call)* ::core::clone::Clone::clone(&fixed),]
            [$($($remaining)*)?]
        )
    };
}

/// Fixes some arguments of a function, leaving `__` placeholders as the
/// parameters of the returned closure.
///
/// Works for any number of arguments. Placeholders become closure
/// parameters in the order they appear; fixed values are evaluated once,
/// when the macro runs, and cloned into every call, so they must implement
/// [`Clone`]. With no placeholder the result is a thunk.
///
/// **Important**: `__` is matched as a literal token. Do not bind or import
/// anything named `__`.
///
/// # Examples
///
/// ```
/// use semialign::partial;
///
/// fn format_greeting(greeting: &str, name: &str, punctuation: &str) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let hello = partial!(format_greeting, "Hello", __, "!");
/// assert_eq!(hello("Alice"), "Hello, Alice!");
///
/// let thunk = partial!(format_greeting, "Bye", "Bob", ".");
/// assert_eq!(thunk(), "Bye, Bob.");
/// ```
///
/// ```
/// use semialign::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 { numerator / denominator }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr $(, $($arguments:tt)*)?) => {{
        let function = $function;
        $crate::__partial_munch!(function [] [] [] [$($($arguments)*)?])
    }};
}
