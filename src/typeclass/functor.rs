//! Functor type class - mapping over container values.
//!
//! `fmap` is dispatched on the *category* of a container rather than on its
//! concrete type. Each category provides one [`FunctorInstance`] over its
//! canonical representation, and every [`TypeConstructor`] in that category
//! is mapped by converting to the canonical form and back.
//!
//! | Category | `fmap(f, container)` |
//! |---|---|
//! | Optional | `f` applied to the held value; absence stays absent |
//! | Sequence | `f` applied to every element, order and length preserved |
//! | Deferred | a new effect that runs the original, then applies `f` |
//! | Plain function | see [`fmap_function`]: composition |
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fmap(|x| x, fa) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fmap(g, fmap(f, fa)) == fmap(|x| g(f(x)), fa)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use shapeclass::typeclass::{Functor, fmap};
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let doubled = fmap(|n: i32| n * 2, vec![1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use crate::compose::Composition;

use super::category::{Classify, ContainerTag, FunctionTag};
use super::higher::TypeConstructor;

/// The mapping operation of one container category.
///
/// Implemented once per category marker, over the category's canonical
/// representation.
pub trait FunctorInstance: ContainerTag {
    /// Applies `function` to every value held by `fa`.
    ///
    /// The function is `Fn` because a deferred effect may apply it once per
    /// run, and `'static` because it may be stored inside one.
    fn fmap<A, B, F>(fa: Self::Canonical<A>, function: F) -> Self::Canonical<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static;
}

/// Maps `function` over `container`, dispatching on its category.
///
/// # Arguments
///
/// * `function` - The transformation applied to each held value
/// * `container` - Any value whose category has a [`FunctorInstance`]
///
/// # Returns
///
/// The same type constructor applied to the function's result type.
///
/// # Examples
///
/// ```rust
/// use shapeclass::typeclass::fmap;
/// use std::collections::VecDeque;
///
/// assert_eq!(fmap(|n: i32| n + 1, Some(1)), Some(2));
/// assert_eq!(fmap(|n: i32| n + 1, None::<i32>), None);
///
/// let queue = VecDeque::from(vec![1, 2]);
/// assert_eq!(fmap(|n: i32| n * 10, queue), VecDeque::from(vec![10, 20]));
/// ```
pub fn fmap<FA, B, F>(function: F, container: FA) -> FA::WithType<B>
where
    FA: TypeConstructor,
    FA::Tag: FunctorInstance,
    B: 'static,
    F: Fn(FA::Inner) -> B + 'static,
{
    let mapped =
        <FA::Tag as FunctorInstance>::fmap::<FA::Inner, B, F>(container.into_canonical(), function);
    <FA::WithType<B> as TypeConstructor>::from_canonical(mapped)
}

/// Maps over a plain function: the result is the composition `function . inner`.
///
/// Only values classified as [`FunctionTag`] (function pointers) are
/// accepted, so closures must be coerced first.
///
/// # Examples
///
/// ```rust
/// use shapeclass::compose::Callable;
/// use shapeclass::typeclass::fmap_function;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
///
/// let mapped = fmap_function(|value: i32| value * 3, add_one as fn(i32) -> i32);
/// assert_eq!(mapped.invoke((4,)), 15);
/// ```
#[inline]
pub const fn fmap_function<F, G>(function: F, inner: G) -> Composition<F, G>
where
    G: Classify<Tag = FunctionTag>,
{
    Composition::new(function, inner)
}

/// Method form of [`fmap`].
///
/// Implemented for every [`TypeConstructor`] whose category has a
/// [`FunctorInstance`].
///
/// # Examples
///
/// ```rust
/// use shapeclass::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n: i32| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value(s)
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: 'static,
        F: Fn(Self::Inner) -> B + 'static;
}

impl<T> Functor for T
where
    T: TypeConstructor,
    T::Tag: FunctorInstance,
{
    #[inline]
    fn fmap<B, F>(self, function: F) -> T::WithType<B>
    where
        B: 'static,
        F: Fn(T::Inner) -> B + 'static,
    {
        fmap(function, self)
    }
}
