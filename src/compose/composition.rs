//! Right-to-left composition of callables.
//!
//! [`Composition`] holds an outer and an inner callable. Calling it passes
//! the arguments to the inner callable and its result to the outer one, so
//! `compose(f, g).invoke(args) == f(g(args))`. Longer chains are folded at
//! construction by [`compose!`](crate::compose): `compose!(f, g, h)` builds
//! `Composition(f, Composition(g, h))`.
//!
//! When the innermost callable takes no arguments the whole chain is a
//! zero-argument callable; only results are threaded through. Deferred
//! effects are built from exactly such chains.

use super::callable::Callable;

/// Two callables chained so that `inner` runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition<F, G> {
    outer: F,
    inner: G,
}

impl<F, G> Composition<F, G> {
    /// Chains `outer` after `inner`.
    #[inline]
    pub const fn new(outer: F, inner: G) -> Self {
        Self { outer, inner }
    }
}

impl<F, G, Args> Callable<Args> for Composition<F, G>
where
    G: Callable<Args>,
    F: Callable<(G::Output,)>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.outer.invoke((self.inner.invoke(arguments),))
    }
}

/// Composes two callables right to left.
///
/// # Examples
///
/// ```rust
/// use shapeclass::compose::{Callable, compose};
///
/// fn increment(value: i32) -> i32 { value + 1 }
/// fn square(value: i32) -> i32 { value * value }
///
/// let increment_square = compose(increment, square);
/// assert_eq!(increment_square.invoke((3,)), 10);
///
/// let twice = compose(increment, increment_square);
/// assert_eq!(twice.invoke((3,)), 11);
/// ```
#[inline]
pub const fn compose<F, G>(outer: F, inner: G) -> Composition<F, G> {
    Composition::new(outer, inner)
}

/// Composes callables from right to left.
///
/// `compose!(f, g, h).invoke(args)` is equivalent to `f(g(h(args)))`.
///
/// # Syntax
///
/// - `compose!(f)` - returns `f` unchanged
/// - `compose!(f, g)` - `Composition(f, g)`
/// - `compose!(f, g, h, ...)` - `compose!(f, compose!(g, h, ...))`
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h))` behaves as `compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f)` and `compose!(f, identity)` behave as `f`
///
/// # Examples
///
/// ```rust
/// use shapeclass::compose;
/// use shapeclass::compose::Callable;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
/// fn square(value: i32) -> i32 { value * value }
///
/// // add_one(double(square(3))) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed.invoke((3,)), 19);
/// ```
///
/// ## Zero-argument chains
///
/// ```rust
/// use shapeclass::compose;
/// use shapeclass::compose::Callable;
///
/// let read = || 20;
/// let describe = |value: i32| format!("value = {value}");
///
/// let pipeline = compose!(describe, |value: i32| value + 1, read);
/// assert_eq!(pipeline.invoke(()), "value = 21");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::Composition::new($outer_function, $crate::compose!($($remaining_functions),+))
    };
}
