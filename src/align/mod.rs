//! Alignment engines for sequences, sorted streams and maps.
//!
//! - [`AlignIter`] and [`AlignExt`]: lazy positional alignment of any two
//!   iterators, with `pad_zip`, `salign`, `unalign` and `crosswalk`
//! - [`MergeAlign`]: merge-walk alignment of two sorted streams
//!   ([`align_sorted`], [`align_sorted_by`], [`align_sets`])
//! - [`KeyedAlign`]: key-aware alignment of `BTreeMap` and `HashMap`
//!
//! The container instances of [`Semialign`](crate::typeclass::Semialign)
//! and its relatives are built on these engines.
//!
//! # Examples
//!
//! ```rust
//! use semialign::align::{AlignExt, align_sorted};
//! use semialign::control::Ior;
//!
//! let merged: Vec<_> = align_sorted([1, 2, 4], [2, 3]).collect();
//! assert_eq!(
//!     merged,
//!     vec![Ior::Left(1), Ior::Both(2, 2), Ior::Right(3), Ior::Left(4)]
//! );
//!
//! let (lefts, rights): (Vec<i32>, Vec<i32>) = merged.into_iter().unalign();
//! assert_eq!(lefts, vec![1, 2, 4]);
//! assert_eq!(rights, vec![2, 3]);
//! ```

mod iter;
mod map;
mod sorted;

pub use iter::{AlignExt, AlignIter, LeftPadZip, PadZip, RightPadZip, Salign, align};
pub use map::KeyedAlign;
pub use sorted::{MergeAlign, SortedAlign, align_sets, align_sorted, align_sorted_by};
