#![cfg(feature = "typeclass")]
//! Property-based tests for Functor laws.
//!
//! This module verifies that every container category satisfies:
//!
//! - **Identity Law**: `fmap(|x| x, fa) == fa`
//! - **Composition Law**: `fmap(g, fmap(f, fa)) == fmap(|x| g(f(x)), fa)`

use std::collections::VecDeque;

use proptest::prelude::*;
use shapeclass::typeclass::{Functor, fmap};

// =============================================================================
// Option<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Option<i32>
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    /// Composition Law for Option<i32>
    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Composition Law for Option<String>: length then doubling
    #[test]
    fn prop_option_string_composition_law(value in any::<Option<String>>()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = fmap(move |x| function2(function1(x)), value);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Vec<A> / VecDeque<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Vec<i32>
    #[test]
    fn prop_vec_identity_law(values in prop::collection::vec(any::<i32>(), 0..30)) {
        prop_assert_eq!(values.clone().fmap(|x| x), values);
    }

    /// Composition Law for Vec<i32>
    #[test]
    fn prop_vec_composition_law(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let function1 = |n: i32| i64::from(n) - 7;
        let function2 = |n: i64| n.to_string();

        let left = values.clone().fmap(function1).fmap(function2);
        let right = values.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Mapping a VecDeque agrees with mapping the equivalent Vec
    #[test]
    fn prop_vec_deque_agrees_with_vec(values in prop::collection::vec(any::<u8>(), 0..30)) {
        let deque: VecDeque<u8> = values.iter().copied().collect();
        let from_deque: Vec<u16> = deque.fmap(|n| u16::from(n) * 3).into_iter().collect();
        let from_vec = values.fmap(|n| u16::from(n) * 3);

        prop_assert_eq!(from_deque, from_vec);
    }
}

// =============================================================================
// Deferred<A> Property Tests
// =============================================================================

#[cfg(feature = "effect")]
mod deferred {
    use proptest::prelude::*;
    use shapeclass::effect::Deferred;
    use shapeclass::typeclass::Functor;

    proptest! {
        /// Identity Law for Deferred<i32>, compared by running
        #[test]
        fn prop_deferred_identity_law(value: i32) {
            prop_assert_eq!(Deferred::pure(value).fmap(|x| x).run(), value);
        }

        /// Composition Law for Deferred<i32>, compared by running
        #[test]
        fn prop_deferred_composition_law(value: i32) {
            let function1 = |n: i32| n.wrapping_sub(3);
            let function2 = |n: i32| n.wrapping_mul(5);

            let left = Deferred::pure(value).fmap(function1).fmap(function2);
            let right = Deferred::pure(value).fmap(move |x| function2(function1(x)));

            prop_assert_eq!(left.run(), right.run());
        }
    }
}
