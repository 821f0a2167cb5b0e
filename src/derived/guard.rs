//! Conditional failure, generic over the container category.

use crate::typeclass::{MonadFailInstance, MonadInstance, TypeConstructor, fail, pure};

/// Returns `pure(true)` when `condition` holds and `fail()` otherwise.
///
/// Sequenced with [`then`](crate::typeclass::then), it filters a
/// computation: everything after a failed guard collapses to the category's
/// failure value.
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::guard;
///
/// assert_eq!(guard::<Option<bool>>(true), Some(true));
/// assert_eq!(guard::<Option<bool>>(false), None);
/// assert_eq!(guard::<Vec<bool>>(false), Vec::<bool>::new());
/// ```
pub fn guard<M>(condition: bool) -> M
where
    M: TypeConstructor<Inner = bool>,
    M::Tag: MonadInstance + MonadFailInstance<bool>,
{
    if condition { pure(true) } else { fail() }
}

/// Returns `pure(produce())` when `condition` holds and `fail()` otherwise.
///
/// `produce` is not called when `condition` is false.
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::guard_with;
///
/// let divide = |numerator: i32, denominator: i32| -> Option<i32> {
///     guard_with(denominator != 0, || numerator / denominator)
/// };
/// assert_eq!(divide(9, 3), Some(3));
/// assert_eq!(divide(9, 0), None);
/// ```
pub fn guard_with<M, F>(condition: bool, produce: F) -> M
where
    M: TypeConstructor,
    M::Tag: MonadInstance + MonadFailInstance<M::Inner>,
    M::Inner: Clone,
    F: FnOnce() -> M::Inner,
{
    if condition { pure(produce()) } else { fail() }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "effect")]
    use crate::effect::Deferred;
    use crate::typeclass::then;
    use rstest::rstest;

    #[rstest]
    #[case(true, Some(true))]
    #[case(false, None)]
    fn option_guard(#[case] condition: bool, #[case] expected: Option<bool>) {
        assert_eq!(guard::<Option<bool>>(condition), expected);
    }

    #[rstest]
    #[case(true, vec![true])]
    #[case(false, vec![])]
    fn vec_guard(#[case] condition: bool, #[case] expected: Vec<bool>) {
        assert_eq!(guard::<Vec<bool>>(condition), expected);
    }

    #[cfg(feature = "effect")]
    #[rstest]
    fn deferred_guard_yields_default_on_failure() {
        assert!(guard::<Deferred<bool>>(true).run());
        assert!(!guard::<Deferred<bool>>(false).run());
    }

    #[rstest]
    fn guard_then_filters() {
        let kept: Option<&str> = then(guard::<Option<bool>>(2 > 1), Some("kept"));
        let dropped: Option<&str> = then(guard::<Option<bool>>(1 > 2), Some("dropped"));
        assert_eq!(kept, Some("kept"));
        assert_eq!(dropped, None);
    }

    #[rstest]
    fn guard_with_skips_producer_when_false() {
        let result: Vec<String> = guard_with(false, || -> String { panic!("produced") });
        assert!(result.is_empty());
    }
}
