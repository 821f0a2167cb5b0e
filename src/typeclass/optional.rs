//! The optional category: zero or one value, represented by `Option`.
//!
//! Absence is the category's empty state and its failure value; it is never
//! an error. Every operation short-circuits on `None` without calling the
//! supplied function.

use super::category::OptionalTag;
use super::functor::FunctorInstance;
use super::monad::{MonadFailInstance, MonadInstance};

impl FunctorInstance for OptionalTag {
    #[inline]
    fn fmap<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl MonadInstance for OptionalTag {
    #[inline]
    fn pure<A>(value: A) -> Option<A>
    where
        A: Clone + 'static,
    {
        Some(value)
    }

    #[inline]
    fn bind<A, B, F>(ma: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Option<B> + 'static,
    {
        ma.and_then(function)
    }

    #[inline]
    fn then<A, B>(first: Option<A>, next: Option<B>) -> Option<B>
    where
        A: 'static,
        B: 'static,
    {
        first.and(next)
    }
}

impl<A: 'static> MonadFailInstance<A> for OptionalTag {
    #[inline]
    fn fail() -> Option<A> {
        None
    }
}
