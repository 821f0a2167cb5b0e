#![cfg(feature = "compose")]
//! Integration tests for composition and partial application.

use rstest::rstest;
use shapeclass::compose::{Callable, Composition, PartialApplication, closure, compose, identity, partial};
use shapeclass::{closure, compose, partial};

fn add_one(value: i32) -> i32 {
    value + 1
}

fn double(value: i32) -> i32 {
    value * 2
}

fn square(value: i32) -> i32 {
    value * value
}

fn join3(first: &str, second: &str, third: &str) -> String {
    format!("{first}-{second}-{third}")
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
#[case(0, 1)]
#[case(3, 19)]
#[case(-2, 9)]
fn compose_three_functions(#[case] input: i32, #[case] expected: i32) {
    let composed = compose!(add_one, double, square);
    assert_eq!(composed.invoke((input,)), expected);
}

#[rstest]
fn compose_macro_and_function_agree() {
    let by_macro = compose!(add_one, double);
    let by_function = compose(add_one, double);
    assert_eq!(by_macro.invoke((7,)), by_function.invoke((7,)));
}

#[rstest]
fn composition_is_associative() {
    let left = compose(compose(add_one, double), square);
    let right = compose(add_one, compose(double, square));
    for value in -5..5 {
        assert_eq!(left.invoke((value,)), right.invoke((value,)));
    }
}

#[rstest]
fn identity_is_the_unit_of_composition() {
    let left: Composition<fn(i32) -> i32, fn(i32) -> i32> = Composition::new(identity, double);
    let right = compose(double, identity::<i32>);
    assert_eq!(left.invoke((21,)), 42);
    assert_eq!(right.invoke((21,)), 42);
}

#[rstest]
fn zero_argument_composition() {
    let read = || String::from("input");
    let composed = compose!(|text: String| text.len(), |text: String| text.to_uppercase(), read);
    assert_eq!(composed.invoke(()), 5);
}

// =============================================================================
// Partial application
// =============================================================================

#[rstest]
fn partial_then_call_equals_full_call() {
    let bound = partial!(join3, "a", "b");
    assert_eq!(bound.invoke(("c",)), join3("a", "b", "c"));
}

#[rstest]
fn partial_nests_left_to_right() {
    let nested: PartialApplication<PartialApplication<_, &str>, &str> = partial!(join3, "x", "y");
    assert_eq!(nested.invoke(("z",)), "x-y-z");
}

#[rstest]
fn partial_application_escapes_its_scope() {
    fn make() -> impl Callable<(i32,), Output = i32> {
        let offset = Box::new(100);
        partial(|offset: Box<i32>, value: i32| *offset + value, offset)
    }
    let add_hundred = make();
    assert_eq!(add_hundred.invoke((1,)), 101);
    assert_eq!(add_hundred.invoke((2,)), 102);
}

#[rstest]
fn closure_borrows_for_one_expression() {
    let words = vec![String::from("alpha"), String::from("beta")];
    let count_longer = |words: &Vec<String>, limit: usize| {
        words.iter().filter(|word| word.len() > limit).count()
    };
    assert_eq!(closure(count_longer, &words).invoke((4,)), 1);
    assert_eq!(closure!(count_longer, words).invoke((3,)), 2);
}

#[rstest]
fn partial_and_compose_build_thunks() {
    let thunk = compose!(double, partial!(add_one, 20));
    assert_eq!(thunk.invoke(()), 42);
}
