//! Merge-walk alignment of two sorted streams.
//!
//! When both inputs are sorted by the same order, aligning them is a single
//! merge pass: the smaller head is emitted as `Left` or `Right`, equal heads
//! are emitted together as `Both`. Ordered maps and ordered sets are aligned
//! this way, by key, in O(n + m).
//!
//! Inputs that are not sorted still produce output, but elements only pair
//! up when equal heads meet.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;
use std::iter::{Fuse, FusedIterator, Peekable};

use crate::control::Ior;

/// An iterator that merges two sorted iterators into `Ior`s.
///
/// Created by [`align_sorted`], [`align_sorted_by`] and [`align_sets`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct MergeAlign<I: Iterator, J: Iterator, F> {
    left: Peekable<Fuse<I>>,
    right: Peekable<Fuse<J>>,
    compare: F,
}

impl<I, J, F> MergeAlign<I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: FnMut(&I::Item, &J::Item) -> Ordering,
{
    fn new(left: I, right: J, compare: F) -> Self {
        Self {
            left: left.fuse().peekable(),
            right: right.fuse().peekable(),
            compare,
        }
    }
}

impl<I, J, F> Iterator for MergeAlign<I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: FnMut(&I::Item, &J::Item) -> Ordering,
{
    type Item = Ior<I::Item, J::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let ordering = match (self.left.peek(), self.right.peek()) {
            (Some(left), Some(right)) => (self.compare)(left, right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => return None,
        };

        match ordering {
            Ordering::Less => self.left.next().map(Ior::Left),
            Ordering::Greater => self.right.next().map(Ior::Right),
            Ordering::Equal => Ior::from_options(self.left.next(), self.right.next()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lower, left_upper) = self.left.size_hint();
        let (right_lower, right_upper) = self.right.size_hint();
        let upper = match (left_upper, right_upper) {
            (Some(left), Some(right)) => left.checked_add(right),
            _ => None,
        };
        (left_lower.max(right_lower), upper)
    }
}

impl<I, J, F> FusedIterator for MergeAlign<I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: FnMut(&I::Item, &J::Item) -> Ordering,
{
}

impl<I, J, F> Clone for MergeAlign<I, J, F>
where
    I: Iterator + Clone,
    J: Iterator + Clone,
    I::Item: Clone,
    J::Item: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            left: self.left.clone(),
            right: self.right.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<I, J, F> fmt::Debug for MergeAlign<I, J, F>
where
    I: Iterator + fmt::Debug,
    J: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
    J::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MergeAlign")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(
    MergeAlign<std::vec::IntoIter<u8>, std::vec::IntoIter<u8>, fn(&u8, &u8) -> Ordering>:
        Send, Sync, Clone
);

/// [`MergeAlign`] over two streams of one `Ord` type.
pub type SortedAlign<I, J> =
    MergeAlign<I, J, fn(&<I as Iterator>::Item, &<I as Iterator>::Item) -> Ordering>;

/// Aligns two ascending streams of the same `Ord` item type.
///
/// # Examples
///
/// ```rust
/// use semialign::align::align_sorted;
/// use semialign::control::Ior;
///
/// let merged: Vec<_> = align_sorted([1, 3, 5], [3, 4]).collect();
/// assert_eq!(
///     merged,
///     vec![Ior::Left(1), Ior::Both(3, 3), Ior::Right(4), Ior::Left(5)]
/// );
/// ```
pub fn align_sorted<T, I, J>(left: I, right: J) -> SortedAlign<I::IntoIter, J::IntoIter>
where
    T: Ord,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
{
    MergeAlign::new(left.into_iter(), right.into_iter(), T::cmp as fn(&T, &T) -> Ordering)
}

/// Aligns two streams sorted by `compare`, which orders a left item
/// against a right item.
///
/// # Examples
///
/// ```rust
/// use semialign::align::align_sorted_by;
/// use semialign::control::Ior;
///
/// let ids = [1_u32, 2, 4];
/// let names = [(2_u32, "two"), (3, "three")];
///
/// let joined: Vec<_> = align_sorted_by(ids, names, |id, (key, _)| id.cmp(key)).collect();
/// assert_eq!(joined, vec![
///     Ior::Left(1),
///     Ior::Both(2, (2, "two")),
///     Ior::Right((3, "three")),
///     Ior::Left(4),
/// ]);
/// ```
pub fn align_sorted_by<I, J, F>(left: I, right: J, compare: F) -> MergeAlign<I::IntoIter, J::IntoIter, F>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(&I::Item, &J::Item) -> Ordering,
{
    MergeAlign::new(left.into_iter(), right.into_iter(), compare)
}

/// Aligns two ordered sets: `Both` for the intersection, `Left` and `Right`
/// for the two differences, in ascending order.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use semialign::align::align_sets;
/// use semialign::control::Ior;
///
/// let left = BTreeSet::from(["a", "b"]);
/// let right = BTreeSet::from(["b", "c"]);
///
/// let tagged: Vec<_> = align_sets(&left, &right).collect();
/// assert_eq!(tagged, vec![Ior::Left(&"a"), Ior::Both(&"b", &"b"), Ior::Right(&"c")]);
/// ```
pub fn align_sets<'a, T: Ord>(
    left: &'a BTreeSet<T>,
    right: &'a BTreeSet<T>,
) -> SortedAlign<btree_set::Iter<'a, T>, btree_set::Iter<'a, T>> {
    align_sorted(left, right)
}
