#![cfg(feature = "typeclass")]
//! Property-based tests for `Ior` laws.
//!
//! - **Associativity**: `(a + b) + c == a + (b + c)` for `combine`
//! - **Fold Totality**: `fold` invokes exactly one branch
//! - **Order Consistency**: `Ord` is transitive and agrees with `compare_by`
//! - **Bifunctor Identity/Composition**

use proptest::prelude::*;
use semialign::control::Ior;
use semialign::typeclass::{Bifunctor, Semigroup, Sum};

// =============================================================================
// Strategy Definitions
// =============================================================================

fn ior_strategy() -> impl Strategy<Value = Ior<String, Vec<i8>>> {
    prop_oneof![
        "[a-z]{0,4}".prop_map(Ior::Left),
        prop::collection::vec(any::<i8>(), 0..4).prop_map(Ior::Right),
        ("[a-z]{0,4}", prop::collection::vec(any::<i8>(), 0..4))
            .prop_map(|(left, right)| Ior::Both(left, right)),
    ]
}

fn small_ior_strategy() -> impl Strategy<Value = Ior<i8, i8>> {
    prop_oneof![
        any::<i8>().prop_map(Ior::Left),
        any::<i8>().prop_map(Ior::Right),
        (any::<i8>(), any::<i8>()).prop_map(|(left, right)| Ior::Both(left, right)),
    ]
}

// =============================================================================
// Semigroup Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_combine_associative(
        first in ior_strategy(),
        second in ior_strategy(),
        third in ior_strategy(),
    ) {
        let left_grouped = first.clone().combine(second.clone()).combine(third.clone());
        let right_grouped = first.combine(second.combine(third));
        prop_assert_eq!(left_grouped, right_grouped);
    }

    #[test]
    fn prop_combine_with_sum_associative(
        first in small_ior_strategy(),
        second in small_ior_strategy(),
        third in small_ior_strategy(),
    ) {
        let lift = |value: Ior<i8, i8>| value.bimap(|n| Sum(i32::from(n)), |n| Sum(i32::from(n)));
        let left_grouped = lift(first).combine(lift(second)).combine(lift(third));
        let right_grouped = lift(first).combine(lift(second).combine(lift(third)));
        prop_assert_eq!(left_grouped, right_grouped);
    }

    #[test]
    fn prop_combine_keeps_every_side(first in small_ior_strategy(), second in small_ior_strategy()) {
        let combined = first.combine_with(second, i8::wrapping_add, i8::wrapping_add);
        let has_left = first.left_ref().is_some() || second.left_ref().is_some();
        let has_right = first.right_ref().is_some() || second.right_ref().is_some();
        prop_assert_eq!(combined.left_ref().is_some(), has_left);
        prop_assert_eq!(combined.right_ref().is_some(), has_right);
    }
}

// =============================================================================
// Fold and Projection Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_fold_invokes_exactly_one_branch(value in small_ior_strategy()) {
        let branch = value.fold(|_| "left", |_| "right", |_, _| "both");
        let expected = match value {
            Ior::Left(_) => "left",
            Ior::Right(_) => "right",
            Ior::Both(_, _) => "both",
        };
        prop_assert_eq!(branch, expected);
    }

    #[test]
    fn prop_options_round_trip(value in small_ior_strategy()) {
        let (left, right) = value.into_options();
        prop_assert_eq!(Ior::from_options(left, right), Some(value));
    }

    #[test]
    fn prop_swap_involution(value in small_ior_strategy()) {
        prop_assert_eq!(value.swap().swap(), value);
    }
}

// =============================================================================
// Ordering Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_order_transitive(
        first in small_ior_strategy(),
        second in small_ior_strategy(),
        third in small_ior_strategy(),
    ) {
        if first <= second && second <= third {
            prop_assert!(first <= third);
        }
    }

    #[test]
    fn prop_compare_by_agrees_with_ord(first in small_ior_strategy(), second in small_ior_strategy()) {
        prop_assert_eq!(first.compare_by(&second, i8::cmp, i8::cmp), first.cmp(&second));
        prop_assert_eq!(first.eq_by(&second, i8::eq, i8::eq), first == second);
    }

    #[test]
    fn prop_variant_rank_dominates(first in small_ior_strategy(), second in small_ior_strategy()) {
        let rank = |value: &Ior<i8, i8>| value.fold(|_| 0, |_| 1, |_, _| 2);
        if rank(&first) != rank(&second) {
            prop_assert_eq!(first.cmp(&second), rank(&first).cmp(&rank(&second)));
        }
    }
}

// =============================================================================
// Bifunctor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_bifunctor_identity(value in ior_strategy()) {
        let mapped = Bifunctor::bimap(value.clone(), |x| x, |y| y);
        prop_assert_eq!(mapped, value);
    }

    #[test]
    fn prop_bifunctor_composition(value in ior_strategy()) {
        let f1 = |s: String| s.len();
        let f2 = |n: usize| n.wrapping_mul(3);
        let g1 = |v: Vec<i8>| v.into_iter().map(i32::from).sum::<i32>();
        let g2 = |n: i32| n.wrapping_sub(1);

        let composed = Bifunctor::bimap(value.clone(), |x| f2(f1(x)), |y| g2(g1(y)));
        let chained = Bifunctor::bimap(Bifunctor::bimap(value, f1, g1), f2, g2);
        prop_assert_eq!(composed, chained);
    }

    #[test]
    fn prop_bimap_is_first_then_second(value in ior_strategy()) {
        let bimapped = Bifunctor::bimap(value.clone(), |s: String| s.len(), |v: Vec<i8>| v.len());
        let stepwise = value.first(|s: String| s.len()).second(|v: Vec<i8>| v.len());
        prop_assert_eq!(bimapped, stepwise);
    }
}
