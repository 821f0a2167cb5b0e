//! # shapeclass
//!
//! Category-dispatched functors and monads for Rust.
//!
//! ## Overview
//!
//! Every participating type is classified, at compile time, into one of a
//! closed set of shape categories: optional (zero or one value), sequence
//! (zero or more values), deferred (a replayable effect) or plain function.
//! A single vocabulary - `fmap`, `bind`, `then`, `pure`, `fail` - is then
//! resolved per category:
//!
//! - **Combinators**: partial application and right-to-left composition of
//!   callables, with owning and borrowing capture
//! - **Type Classes**: the classifier, GAT-based type constructors, functor
//!   and monad dispatch with the optional and sequence instances
//! - **Effects**: [`Deferred`](effect::Deferred), a replayable description of
//!   side effects, and console effects built on it
//! - **Derived Utilities**: `guard`, `lift_m2`, `unique_pairs`, safe
//!   arithmetic, written once against the generic vocabulary
//!
//! ## Feature Flags
//!
//! - `compose`: Partial application and composition
//! - `typeclass`: Classifier and functor/monad dispatch (implies `compose`)
//! - `effect`: Deferred effects and console (implies `typeclass`)
//! - `derived`: Generic utilities (implies `typeclass`)
//! - `serde`: `Serialize`/`Deserialize` for `Category`
//! - `tracing`: Structured logging of labelled deferred effects
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use shapeclass::prelude::*;
//!
//! let pairs = unique_pairs(vec![1, 2, 3]);
//! assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2)]);
//!
//! let total = add_m(Some(5), Some(-5));
//! assert_eq!(total, Some(0));
//!
//! let program = Deferred::pure(20).bind(|x: i32| Deferred::pure(x + 1)).map(|x: i32| x * 2);
//! assert_eq!(program.run(), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use shapeclass::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "derived")]
    pub use crate::derived::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "derived")]
pub mod derived;
