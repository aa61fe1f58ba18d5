//! # semialign
//!
//! Inclusive-or values and the alignment of containers that may disagree
//! in shape.
//!
//! ## Overview
//!
//! - **Control**: [`Ior`](control::Ior) (left, right, or both) and
//!   [`Either`](control::Either)
//! - **Type Classes**: `Semigroup`, `Monoid`, `Bifunctor`, and the
//!   alignment family `Semialign`, `Align`, `Zip`, `Unalign`, `Crosswalk`
//! - **Alignment engines**: lazy iterator alignment, sorted merge alignment,
//!   and keyed map alignment
//! - **Function Composition**: `curryN!`, `uncurryN!`, `partial!` and
//!   [`PartialFunction`](compose::PartialFunction)
//!
//! ## Feature Flags
//!
//! - `control`: `Ior` and `Either`
//! - `typeclass`: type class traits (implies `control`)
//! - `align`: alignment engines and the alignment type classes (implies
//!   `typeclass`)
//! - `compose`: currying and partial application
//! - `serde`: `Serialize`/`Deserialize` for `Ior` and `Either`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use semialign::prelude::*;
//!
//! let aligned = vec![1, 2, 3].align(vec!["a"]);
//! assert_eq!(
//!     aligned,
//!     vec![Ior::Both(1, "a"), Ior::Left(2), Ior::Left(3)]
//! );
//!
//! let totals = vec![Sum(1), Sum(2)].salign(vec![Sum(10)]);
//! assert_eq!(totals, vec![Sum(11), Sum(2)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every public item of the enabled feature modules.
///
/// # Usage
///
/// ```rust
/// use semialign::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "align")]
    pub use crate::align::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "align")]
pub mod align;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(all(test, feature = "align"))]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_brings_methods_into_scope() {
        let left = Some(1).align(None::<char>);
        assert_eq!(left, Some(Ior::Left(1)));

        let zipped: Vec<(i32, char)> = vec![1, 2].zip(vec!['a']);
        assert_eq!(zipped, vec![(1, 'a')]);
    }
}
