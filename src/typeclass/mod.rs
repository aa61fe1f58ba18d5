//! Type class traits and their standard-library instances.
//!
//! ## Foundation
//!
//! - [`TypeConstructor`]: higher-kinded type emulation via GATs
//! - [`Sum`], [`Product`], [`Max`], [`Min`], [`First`], [`Last`]: wrappers
//!   that select a semigroup
//! - [`Bounded`]: types with least and greatest values
//!
//! ## Algebraic Structures
//!
//! - [`Semigroup`]: associative `combine`
//! - [`Monoid`]: `combine` with an identity `empty`
//! - [`Bifunctor`]: mapping both parameters of `Ior`, `Either`, `Result`
//!   and pairs
//!
//! ## Alignment (feature `align`)
//!
//! - [`Semialign`]: pair two containers, keeping unmatched elements as
//!   `Left`/`Right`
//! - [`Align`]: a `Semialign` with an empty container (`nil`)
//! - [`Zip`]: pair only the elements present on both sides
//! - [`Unalign`]: split a container of `Ior` back into its two sides
//! - [`Crosswalk`]: traverse into an `Align` shape, collecting per column
//!
//! # Examples
//!
//! ```rust
//! use semialign::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

#[cfg(feature = "align")]
mod align;
mod bifunctor;
#[cfg(feature = "align")]
mod crosswalk;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

#[cfg(feature = "align")]
pub(crate) use align::split_sides;
#[cfg(feature = "align")]
pub use align::{Align, Semialign, Unalign, Zip};
pub use bifunctor::Bifunctor;
#[cfg(feature = "align")]
pub(crate) use crosswalk::crosswalk_into;
#[cfg(feature = "align")]
pub use crosswalk::Crosswalk;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, First, Last, Max, Min, Product, Sum};
