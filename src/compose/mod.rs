//! Partial application and function composition.
//!
//! Closures built by hand are enough for most code, but the deferred effect
//! type and the monad instances need callables whose *shape* is visible to
//! the type system: a bound argument, a chain of two functions, a thunk. This
//! module provides those shapes as plain structs, all invoked through the
//! [`Callable`] trait.
//!
//! # Overview
//!
//! - [`Callable`]: the calling convention, implemented for every `Fn` of
//!   arity 0 through 6 and for the structs below
//! - [`PartialApplication`] with [`partial`]/[`partial!`]: owning capture of
//!   leading arguments
//! - [`closure`]/[`closure!`]: borrowing capture of leading arguments
//! - [`Composition`] with [`compose`]/[`compose!`]: right-to-left chaining
//! - [`identity`]: the unit of composition
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use shapeclass::compose;
//! use shapeclass::compose::Callable;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed.invoke((5,)), 11);
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use shapeclass::{compose, partial};
//! use shapeclass::compose::Callable;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let add_five = partial!(add, 5);
//! assert_eq!(add_five.invoke((10,)), 15);
//!
//! // A fully applied function composed with a unary one is a thunk.
//! let thunk = compose!(double, partial!(add, 1, 2));
//! assert_eq!(thunk.invoke(()), 6);
//! ```

mod callable;
mod composition;
mod partial;
mod utils;

pub use callable::Callable;
pub use composition::{Composition, compose};
pub use partial::{PartialApplication, closure, partial};
pub use utils::identity;
