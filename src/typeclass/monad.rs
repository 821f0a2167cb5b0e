//! Monad type class - sequencing computations with dependency.
//!
//! Like [`fmap`](super::fmap), the monad vocabulary is resolved on the
//! category of a value:
//!
//! | Category | `pure(x)` | `bind(f, m)` | `then(m, n)` | `fail()` |
//! |---|---|---|---|---|
//! | Optional | `Some(x)` | `f(x)` if present, else `None` | `n` if `m` present, else `None` | `None` |
//! | Sequence | `[x]` | `f(x1) ++ f(x2) ++ ...` | `n` if `m` non-empty, else `[]` | `[]` |
//! | Deferred | yields `x`, no effect | runs `m`, then the effect `f` returns | runs `m`, then `n` | yields `X::default()` |
//!
//! Sequence `then` returns `n` once when `m` is non-empty instead of
//! repeating it once per element of `m`. Code that needs the per-element
//! behaviour writes `bind(move |_| n.clone(), m)`.
//!
//! Because dispatch is per category, `bind` may change the concrete type
//! inside a category: binding a `Vec` with a function returning `VecDeque`
//! yields a `VecDeque`.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! bind(f, pure(a)) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! bind(pure, m) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! bind(g, bind(f, m)) == bind(|x| bind(g, f(x)), m)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use shapeclass::typeclass::{Monad, bind, pure};
//!
//! fn parse_positive(text: &'static str) -> Option<i32> {
//!     text.parse().ok().filter(|value: &i32| *value > 0)
//! }
//!
//! assert_eq!(Some("42").bind(parse_positive), Some(42));
//! assert_eq!(Some("-1").bind(parse_positive), None);
//!
//! let pairs = bind(|n: i32| vec![n, n * 10], vec![1, 2]);
//! assert_eq!(pairs, vec![1, 10, 2, 20]);
//!
//! let single: Vec<char> = pure('x');
//! assert_eq!(single, vec!['x']);
//! ```

use super::category::{Classify, ContainerTag};
use super::functor::{Functor, FunctorInstance};
use super::higher::TypeConstructor;

/// The monad operations of one container category.
pub trait MonadInstance: FunctorInstance {
    /// Lifts a value into the category without any effect.
    ///
    /// `Clone` is required because a deferred value may be produced on
    /// every run.
    fn pure<A>(value: A) -> Self::Canonical<A>
    where
        A: Clone + 'static;

    /// Chains a computation that depends on the held value(s).
    fn bind<A, B, F>(ma: Self::Canonical<A>, function: F) -> Self::Canonical<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Self::Canonical<B> + 'static;

    /// Runs `first` for its shape or effect, then yields `next`.
    fn then<A, B>(first: Self::Canonical<A>, next: Self::Canonical<B>) -> Self::Canonical<B>
    where
        A: 'static,
        B: 'static;
}

/// The failure value of a category holding `A`.
///
/// Separate from [`MonadInstance`] because not every category can fail at
/// every type: a deferred effect needs a value to produce.
pub trait MonadFailInstance<A: 'static>: ContainerTag {
    /// Returns the category's empty or failed value.
    fn fail() -> Self::Canonical<A>;
}

/// Lifts `value` into the monad `M`.
///
/// # Examples
///
/// ```rust
/// use shapeclass::typeclass::pure;
///
/// assert_eq!(pure::<Option<i32>>(3), Some(3));
/// assert_eq!(pure::<Vec<&str>>("a"), vec!["a"]);
/// ```
pub fn pure<M>(value: M::Inner) -> M
where
    M: TypeConstructor,
    M::Tag: MonadInstance,
    M::Inner: Clone,
{
    M::from_canonical(<M::Tag as MonadInstance>::pure::<M::Inner>(value))
}

/// Chains `function` after `monad`.
///
/// The result may be any type of the same category as `monad`.
///
/// # Arguments
///
/// * `function` - Produces the next computation from a held value
/// * `monad` - The computation to start from
///
/// # Examples
///
/// ```rust
/// use shapeclass::typeclass::bind;
/// use std::collections::VecDeque;
///
/// let halves = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
/// assert_eq!(bind(halves, Some(8)), Some(4));
/// assert_eq!(bind(halves, Some(3)), None);
///
/// let widened: VecDeque<i32> = bind(|n: i32| VecDeque::from(vec![n, -n]), vec![1, 2]);
/// assert_eq!(widened, VecDeque::from(vec![1, -1, 2, -2]));
/// ```
pub fn bind<M, N, F>(function: F, monad: M) -> N
where
    M: TypeConstructor,
    M::Tag: MonadInstance,
    N: TypeConstructor + Classify<Tag = M::Tag>,
    F: Fn(M::Inner) -> N + 'static,
{
    let bound = <M::Tag as MonadInstance>::bind::<M::Inner, N::Inner, _>(
        monad.into_canonical(),
        move |value: M::Inner| function(value).into_canonical(),
    );
    N::from_canonical(bound)
}

/// Sequences `first` before `next`, discarding the value(s) of `first`.
///
/// # Examples
///
/// ```rust
/// use shapeclass::typeclass::then;
///
/// assert_eq!(then(Some(1), Some("kept")), Some("kept"));
/// assert_eq!(then(None::<i32>, Some("kept")), None);
///
/// // Not repeated per element.
/// assert_eq!(then(vec![1, 2, 3], vec!['x']), vec!['x']);
/// assert_eq!(then(Vec::<i32>::new(), vec!['x']), Vec::<char>::new());
/// ```
pub fn then<M, N>(first: M, next: N) -> N
where
    M: TypeConstructor,
    M::Tag: MonadInstance,
    N: TypeConstructor + Classify<Tag = M::Tag>,
{
    N::from_canonical(<M::Tag as MonadInstance>::then::<M::Inner, N::Inner>(
        first.into_canonical(),
        next.into_canonical(),
    ))
}

/// Returns the failed value of `M`.
///
/// # Examples
///
/// ```rust
/// use shapeclass::typeclass::fail;
///
/// assert_eq!(fail::<Option<i32>>(), None);
/// assert!(fail::<Vec<String>>().is_empty());
/// ```
pub fn fail<M>() -> M
where
    M: TypeConstructor,
    M::Tag: MonadFailInstance<M::Inner>,
{
    M::from_canonical(<M::Tag as MonadFailInstance<M::Inner>>::fail())
}

/// Method forms of [`bind`] and [`then`], for left-to-right pipelines.
///
/// # Examples
///
/// ```rust
/// use shapeclass::typeclass::Monad;
///
/// let result = Some(10)
///     .bind(|n: i32| if n > 0 { Some(n * 2) } else { None })
///     .bind(|n: i32| Some(n + 1));
/// assert_eq!(result, Some(21));
///
/// let flattened = vec![1, 2].bind(|n: i32| vec![n; n as usize]);
/// assert_eq!(flattened, vec![1, 2, 2]);
/// ```
pub trait Monad: Functor {
    /// Chains a dependent computation; see [`bind`].
    fn bind<N, F>(self, function: F) -> N
    where
        N: TypeConstructor + Classify<Tag = Self::Tag>,
        F: Fn(Self::Inner) -> N + 'static;

    /// Sequences `next` after `self`; see [`then`].
    fn then<N>(self, next: N) -> N
    where
        N: TypeConstructor + Classify<Tag = Self::Tag>;
}

impl<T> Monad for T
where
    T: TypeConstructor,
    T::Tag: MonadInstance,
{
    #[inline]
    fn bind<N, F>(self, function: F) -> N
    where
        N: TypeConstructor + Classify<Tag = T::Tag>,
        F: Fn(T::Inner) -> N + 'static,
    {
        bind(function, self)
    }

    #[inline]
    fn then<N>(self, next: N) -> N
    where
        N: TypeConstructor + Classify<Tag = T::Tag>,
    {
        then(self, next)
    }
}
