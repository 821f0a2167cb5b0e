//! Shape categories and the functor/monad dispatch built on them.
//!
//! This module provides:
//!
//! - [`Category`], [`Classify`], [`category_of`]: the static classifier
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`] / [`fmap`]: mapping over container values
//! - [`Monad`] / [`bind`], [`then`], [`pure`], [`fail`]: sequencing
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT). This
//! crate uses Generic Associated Types to emulate them, and resolves every
//! operation on the category marker of a type instead of on the type itself.
//! Adding a type to an existing category only needs a [`Classify`] impl and
//! a [`TypeConstructor`] impl converting to the category's canonical form.
//!
//! ## Instances
//!
//! - Optional (`Option`)
//! - Sequence (`Vec`, `VecDeque`)
//! - Deferred (`Deferred`, in the `effect` module)
//!
//! # Examples
//!
//! ```rust
//! use shapeclass::typeclass::{Functor, Monad, fail, pure};
//!
//! let parsed: Option<i32> = Some("12").bind(|text: &'static str| text.parse().ok());
//! assert_eq!(parsed.fmap(|n: i32| n * 2), Some(24));
//!
//! let nothing: Option<i32> = fail();
//! assert_eq!(nothing.then(pure::<Option<char>>('z')), None);
//! ```

mod category;
mod functor;
mod higher;
mod monad;
mod optional;
mod sequence;

pub use category::{
    Category, CategoryTag, Classify, ContainerTag, DeferredTag, FunctionTag, OptionalTag,
    SequenceTag, category_of, category_of_val,
};
pub use functor::{Functor, FunctorInstance, fmap, fmap_function};
pub use higher::{Canonical, TypeConstructor};
pub use monad::{Monad, MonadFailInstance, MonadInstance, bind, fail, pure, then};
