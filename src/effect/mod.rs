//! Deferred effects and console interaction.
//!
//! - [`Deferred`]: a replayable description of a side effect, and the third
//!   container category next to optionals and sequences
//! - [`Console`], [`Stdio`], [`ScriptedConsole`]: where console effects read
//!   and write
//! - [`echo`], [`echo_display`], [`newline`], [`read_value`], [`equation`]:
//!   console effects
//! - [`deferred!`](crate::deferred): partial application straight into a
//!   deferred effect
//!
//! # Examples
//!
//! ```rust
//! use shapeclass::effect::{Deferred, ScriptedConsole, echo};
//! use shapeclass::typeclass::fmap;
//! use std::rc::Rc;
//!
//! let console = Rc::new(ScriptedConsole::default());
//! let answer = fmap(|x: i32| x + 1, Deferred::pure(41));
//! let program = echo(&console, "answer: ").then(answer);
//!
//! assert_eq!(program.run(), 42);
//! assert_eq!(console.output(), "answer: ");
//! ```

mod console;
mod deferred;
mod error;

pub use console::{
    Console, ScriptedConsole, Stdio, echo, echo_display, equation, newline, read_value,
};
pub use deferred::Deferred;
pub use error::ReadError;
