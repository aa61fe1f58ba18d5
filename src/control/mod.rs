//! Sum types for paired values.
//!
//! - [`Ior`]: a left value, a right value, or both (inclusive or)
//! - [`Either`]: a left value or a right value (exclusive or)
//!
//! `Ior` is the element type of every alignment in this crate. `Either` is
//! what an `Ior` collapses into when the `Both` case is dropped or split off.
//!
//! # Examples
//!
//! ```rust
//! use semialign::control::{Either, Ior};
//!
//! let paired: Ior<i32, &str> = Ior::Both(1, "one");
//! assert_eq!(paired.to_either(), Either::Right("one"));
//!
//! let promoted: Ior<i32, &str> = Either::Left(2).into();
//! assert_eq!(promoted, Ior::Left(2));
//! ```

mod either;
mod ior;

pub use either::Either;
pub use ior::Ior;
