//! Error types for function composition.

use std::fmt;

/// A [`PartialFunction`](super::PartialFunction) was applied outside its
/// domain.
///
/// The rejected input is handed back so the caller can retry or report it.
///
/// # Examples
///
/// ```rust
/// use semialign::compose::UndefinedInputError;
///
/// let error = UndefinedInputError { input: -4 };
/// assert_eq!(
///     format!("{error}"),
///     "partial function is not defined for parameter -4"
/// );
/// assert_eq!(error.into_input(), -4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedInputError<A> {
    /// The input the function is not defined for.
    pub input: A,
}

impl<A> UndefinedInputError<A> {
    /// Consumes the error and returns the rejected input.
    #[inline]
    pub fn into_input(self) -> A {
        self.input
    }
}

impl<A: fmt::Debug> fmt::Display for UndefinedInputError<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "partial function is not defined for parameter {:?}",
            self.input
        )
    }
}

impl<A: fmt::Debug> std::error::Error for UndefinedInputError<A> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_debug_of_input() {
        let error = UndefinedInputError {
            input: "text".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "partial function is not defined for parameter \"text\""
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(UndefinedInputError { input: 0_u8 });
        assert!(boxed.to_string().ends_with('0'));
    }
}
