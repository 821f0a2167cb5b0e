//! Two-argument binding and filtered pair generation.

use std::rc::Rc;

use super::guard::guard;
use crate::typeclass::{
    Classify, MonadFailInstance, MonadInstance, TypeConstructor, bind, pure, then,
};

/// Binds a two-argument function over two computations.
///
/// `bind2(f, m, n)` is `bind(|x| bind(|y| f(x, y), n), m)`. Over sequences
/// this visits the cartesian product in row-major order; over optionals it
/// calls `f` only when both values are present.
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::bind2;
///
/// let ordered = bind2(
///     |x: i32, y: i32| if x < y { vec![(x, y)] } else { vec![] },
///     vec![1, 2, 3],
///     vec![1, 2, 3],
/// );
/// assert_eq!(ordered, vec![(1, 2), (1, 3), (2, 3)]);
/// ```
pub fn bind2<MA, MB, N, F>(function: F, first: MA, second: MB) -> N
where
    MA: TypeConstructor,
    MA::Tag: MonadInstance,
    MA::Inner: Clone,
    MB: TypeConstructor + Classify<Tag = MA::Tag> + Clone + 'static,
    N: TypeConstructor + Classify<Tag = MA::Tag>,
    F: Fn(MA::Inner, MB::Inner) -> N + 'static,
{
    let function = Rc::new(function);
    bind(
        move |x: MA::Inner| {
            let function = Rc::clone(&function);
            bind(move |y: MB::Inner| (*function)(x.clone(), y), second.clone())
        },
        first,
    )
}

/// Returns every pair `(x, y)` drawn from `values × values` with `x != y`.
///
/// Built only from [`bind2`], [`guard`], [`then`] and [`pure`], so it works
/// for any category. For sequences the pairs come in row-major order; for
/// an optional the result is always empty because its single value is
/// paired with itself.
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::unique_pairs;
///
/// assert_eq!(
///     unique_pairs(vec![1, 2, 3]),
///     vec![(1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2)]
/// );
/// assert_eq!(unique_pairs(Some(5)), None);
/// ```
pub fn unique_pairs<M>(values: M) -> M::WithType<(M::Inner, M::Inner)>
where
    M: TypeConstructor + Clone + 'static,
    M::Tag: MonadInstance + MonadFailInstance<bool>,
    M::Inner: Clone + PartialEq,
{
    bind2(
        |x: M::Inner, y: M::Inner| {
            let distinct = x != y;
            then(
                guard::<M::WithType<bool>>(distinct),
                pure::<M::WithType<(M::Inner, M::Inner)>>((x, y)),
            )
        },
        values.clone(),
        values,
    )
}
