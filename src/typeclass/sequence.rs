//! The sequence category: zero or more values in insertion order.
//!
//! `Vec` is the canonical form; `VecDeque` joins the category by converting
//! to and from it. `bind` concatenates the per-element results in order,
//! which makes binding two sequences a cartesian product.
//!
//! `then(m, n)` yields `n` once whenever `m` is non-empty. It does not
//! repeat `n` for every element of `m`.

use super::category::SequenceTag;
use super::functor::FunctorInstance;
use super::monad::{MonadFailInstance, MonadInstance};

impl FunctorInstance for SequenceTag {
    fn fmap<A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl MonadInstance for SequenceTag {
    #[inline]
    fn pure<A>(value: A) -> Vec<A>
    where
        A: Clone + 'static,
    {
        vec![value]
    }

    fn bind<A, B, F>(ma: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Vec<B> + 'static,
    {
        ma.into_iter().flat_map(function).collect()
    }

    fn then<A, B>(first: Vec<A>, next: Vec<B>) -> Vec<B>
    where
        A: 'static,
        B: 'static,
    {
        if first.is_empty() { Vec::new() } else { next }
    }
}

impl<A: 'static> MonadFailInstance<A> for SequenceTag {
    #[inline]
    fn fail() -> Vec<A> {
        Vec::new()
    }
}
