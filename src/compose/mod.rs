//! Currying, partial application and partial functions.
//!
//! # Overview
//!
//! - [`curry2!`] through [`curry8!`]: turn an `N`-argument function into
//!   nested one-argument closures
//! - [`uncurry2!`] through [`uncurry8!`]: the inverse of `curryN!`
//! - [`partial!`]: fix some arguments, leaving `__` placeholders open
//! - [`PartialFunction`]: a function with an explicit domain, failing with
//!   [`UndefinedInputError`] outside it
//!
//! # Helper Functions
//!
//! - [`identity`], [`constant`], [`flip`], [`complement`]
//!
//! # Examples
//!
//! ```
//! use semialign::{curry3, partial, uncurry3};
//!
//! fn between(low: i32, high: i32, value: i32) -> bool {
//!     (low..=high).contains(&value)
//! }
//!
//! let is_digit = curry3!(between)(0)(9);
//! assert!(is_digit(7));
//! assert!(!is_digit(10));
//!
//! let is_percentage = partial!(between, 0, 100, __);
//! assert!(is_percentage(55));
//!
//! let restored = uncurry3!(curry3!(between));
//! assert_eq!(restored(1, 3, 2), between(1, 3, 2));
//! ```
//!
//! # Laws
//!
//! - `uncurryN!(curryN!(f))(a, ..) == f(a, ..)`
//! - `flip(flip(f))(a, b) == f(a, b)`
//! - `partial!(f, __, .., __)(a, ..) == f(a, ..)`

mod curry_macro;
mod error;
mod partial_function;
mod partial_macro;
mod utils;

pub use error::UndefinedInputError;
pub use partial_function::PartialFunction;
pub use utils::{complement, constant, flip, identity};

pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::curry5;
pub use crate::curry6;
pub use crate::curry7;
pub use crate::curry8;
pub use crate::partial;
pub use crate::uncurry2;
pub use crate::uncurry3;
pub use crate::uncurry4;
pub use crate::uncurry5;
pub use crate::uncurry6;
pub use crate::uncurry7;
pub use crate::uncurry8;
