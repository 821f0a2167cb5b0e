#![cfg(feature = "derived")]
//! Integration tests for the category-generic utilities.

use std::collections::VecDeque;

use proptest::prelude::*;
use rstest::rstest;
use shapeclass::derived::{
    add_m, add_m_fmap, bind2, guard, guard_with, just, lift_m2, quadratic_roots, safe_sqrt,
    show_optional, show_pair, show_sequence, unique_pairs,
};
use shapeclass::typeclass::{fail, pure};

// =============================================================================
// guard
// =============================================================================

#[rstest]
fn guard_false_is_fail_and_guard_true_is_pure() {
    assert_eq!(guard::<Option<bool>>(false), fail::<Option<bool>>());
    assert_eq!(guard::<Option<bool>>(true), pure::<Option<bool>>(true));
    assert_eq!(guard::<Vec<bool>>(false), fail::<Vec<bool>>());
    assert_eq!(guard::<Vec<bool>>(true), pure::<Vec<bool>>(true));
    assert_eq!(guard::<VecDeque<bool>>(true), VecDeque::from(vec![true]));
}

#[rstest]
fn guard_with_produces_value_lazily() {
    let present: Option<&str> = guard_with(true, || "made");
    let absent: Option<&str> = guard_with(false, || unreachable!());
    assert_eq!(present, just("made"));
    assert_eq!(absent, None);
}

// =============================================================================
// lift_m2 / add_m
// =============================================================================

#[rstest]
fn add_m_on_original_examples() {
    assert_eq!(add_m(Some(5), Some(-5)), Some(0));
    assert_eq!(add_m(vec![1, 2, 3], vec![3, 4]), vec![4, 5, 5, 6, 6, 7]);
}

#[rstest]
fn lift_m2_builds_strings_from_every_pair() {
    let labels = lift_m2(
        |prefix: &'static str, index: usize| format!("{prefix}{index}"),
        vec!["a", "b"],
        vec![0, 1],
    );
    assert_eq!(labels, vec!["a0", "a1", "b0", "b1"]);
}

proptest! {
    #[test]
    fn prop_add_m_and_add_m_fmap_agree_on_options(
        first in any::<Option<i16>>(),
        second in any::<Option<i16>>(),
    ) {
        let first = first.map(i32::from);
        let second = second.map(i32::from);
        prop_assert_eq!(add_m(first, second), add_m_fmap(first, second));
    }

    #[test]
    fn prop_add_m_length_is_product_for_sequences(
        first in prop::collection::vec(-100i32..100, 0..8),
        second in prop::collection::vec(-100i32..100, 0..8),
    ) {
        let expected = first.len() * second.len();
        prop_assert_eq!(add_m(first, second).len(), expected);
    }
}

// =============================================================================
// bind2 / unique_pairs
// =============================================================================

#[rstest]
fn unique_pairs_of_one_two_three() {
    assert_eq!(
        unique_pairs(vec![1, 2, 3]),
        vec![(1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2)]
    );
}

#[rstest]
fn unique_pairs_of_just_five_is_nothing() {
    assert_eq!(unique_pairs(Some(5)), None);
}

#[rstest]
fn bind2_over_sequences_is_row_major() {
    let grid = bind2(
        |row: u8, column: char| vec![format!("{column}{row}")],
        vec![1, 2],
        vec!['a', 'b'],
    );
    assert_eq!(grid, vec!["a1", "b1", "a2", "b2"]);
}

proptest! {
    #[test]
    fn prop_unique_pairs_never_pairs_equal_values(
        values in prop::collection::vec(0u8..6, 0..8),
    ) {
        let pairs = unique_pairs(values.clone());
        prop_assert!(pairs.iter().all(|(x, y)| x != y));
        let distinct_pairs = values
            .iter()
            .flat_map(|x| values.iter().map(move |y| (x, y)))
            .filter(|(x, y)| x != y)
            .count();
        prop_assert_eq!(pairs.len(), distinct_pairs);
    }
}

// =============================================================================
// arithmetic and rendering
// =============================================================================

#[rstest]
#[case(4.0, Some(2.0))]
#[case(-1.0, None)]
fn safe_sqrt_examples(#[case] value: f64, #[case] expected: Option<f64>) {
    assert_eq!(safe_sqrt(value), expected);
}

#[rstest]
#[case(1.0, 3.0, -4.0, Some((1.0, -4.0)))]
#[case(1.0, 0.0, 4.0, None)]
#[case(2.0, 0.0, -8.0, Some((2.0, -2.0)))]
fn quadratic_roots_examples(
    #[case] a: f64,
    #[case] b: f64,
    #[case] c: f64,
    #[case] expected: Option<(f64, f64)>,
) {
    assert_eq!(quadratic_roots(a, b, c), expected);
}

#[rstest]
fn renders_like_the_tour() {
    assert_eq!(
        show_sequence(&unique_pairs(vec![1, 2]), show_pair),
        "[(1,2),(2,1)]"
    );
    assert_eq!(show_optional(&unique_pairs(Some(5)), show_pair), "Nothing");
    assert_eq!(
        show_optional(&quadratic_roots(1.0, 3.0, -4.0), show_pair),
        "Just (1,-4)"
    );
}
