//! Lifting binary functions into a container category.

use std::ops::Add;
use std::rc::Rc;

use crate::typeclass::{Classify, MonadInstance, TypeConstructor, bind, fmap, pure};

/// Lifts a binary function over two computations of the same category.
///
/// `lift_m2(f, a, b)` is `bind(|x| bind(|y| pure(f(x, y)), b), a)`: for
/// optionals the result is present only when both inputs are, for
/// sequences it covers every pair, and for deferred effects both run in
/// order.
///
/// # Arguments
///
/// * `function` - Combines one value from each input
/// * `first` - Provides the first argument
/// * `second` - Provides the second argument; cloned once per value of `first`
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::lift_m2;
///
/// let joined = lift_m2(|x: i32, y: char| format!("{x}{y}"), vec![1, 2], vec!['a', 'b']);
/// assert_eq!(joined, vec!["1a", "1b", "2a", "2b"]);
///
/// assert_eq!(lift_m2(|x: i32, y: i32| x * y, Some(6), None::<i32>), None);
/// ```
pub fn lift_m2<MA, MB, C, F>(function: F, first: MA, second: MB) -> MA::WithType<C>
where
    MA: TypeConstructor,
    MA::Tag: MonadInstance,
    MA::Inner: Clone,
    MB: TypeConstructor + Classify<Tag = MA::Tag> + Clone + 'static,
    C: Clone + 'static,
    F: Fn(MA::Inner, MB::Inner) -> C + 'static,
{
    let function = Rc::new(function);
    bind(
        move |x: MA::Inner| {
            let function = Rc::clone(&function);
            bind(
                move |y: MB::Inner| pure::<MA::WithType<C>>((*function)(x.clone(), y)),
                second.clone(),
            )
        },
        first,
    )
}

/// Adds the values of two computations: `lift_m2(+)`.
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::add_m;
///
/// assert_eq!(add_m(Some(5), Some(-5)), Some(0));
/// assert_eq!(add_m(vec![1, 2, 3], vec![3, 4]), vec![4, 5, 5, 6, 6, 7]);
/// ```
pub fn add_m<MA, MB>(first: MA, second: MB) -> MA::WithType<MA::Inner>
where
    MA: TypeConstructor,
    MA::Tag: MonadInstance,
    MA::Inner: Clone + Add<Output = MA::Inner>,
    MB: TypeConstructor<Inner = MA::Inner> + Classify<Tag = MA::Tag> + Clone + 'static,
{
    lift_m2(|x: MA::Inner, y: MA::Inner| x + y, first, second)
}

/// Adds the values of two computations using `bind` and `fmap`.
///
/// Produces the same values as [`add_m`]; the result takes the type
/// constructor of `second`.
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::add_m_fmap;
///
/// assert_eq!(add_m_fmap(Some(2), Some(3)), Some(5));
/// assert_eq!(add_m_fmap(vec![10, 20], vec![1, 2]), vec![11, 12, 21, 22]);
/// ```
pub fn add_m_fmap<MA, MB>(first: MA, second: MB) -> MB::WithType<MA::Inner>
where
    MA: TypeConstructor,
    MA::Tag: MonadInstance,
    MA::Inner: Clone + Add<Output = MA::Inner>,
    MB: TypeConstructor<Inner = MA::Inner> + Classify<Tag = MA::Tag> + Clone + 'static,
{
    bind(
        move |x: MA::Inner| fmap(move |y: MA::Inner| x.clone() + y, second.clone()),
        first,
    )
}
