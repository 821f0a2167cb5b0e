//! Utilities derived from the generic functor and monad vocabulary.
//!
//! Everything here is written against [`pure`](crate::typeclass::pure),
//! [`fail`](crate::typeclass::fail), [`bind`](crate::typeclass::bind),
//! [`then`](crate::typeclass::then) and [`fmap`](crate::typeclass::fmap)
//! only, so it works for every container category:
//!
//! - [`guard`], [`guard_with`]: conditional failure
//! - [`lift_m2`], [`add_m`], [`add_m_fmap`]: lifting binary functions
//! - [`bind2`], [`unique_pairs`]: two-argument binding and filtered pairs
//! - [`safe_sqrt`], [`quadratic_roots`], [`just`]: arithmetic over optionals
//! - [`show_optional`], [`show_sequence`], [`show_pair`]: text renderings
//!
//! # Examples
//!
//! ```rust
//! use shapeclass::derived::{add_m, quadratic_roots, unique_pairs};
//!
//! assert_eq!(add_m(Some(1), Some(2)), Some(3));
//! assert_eq!(unique_pairs(vec!['a', 'b']), vec![('a', 'b'), ('b', 'a')]);
//! assert_eq!(quadratic_roots(1.0, 3.0, -4.0), Some((1.0, -4.0)));
//! ```

mod arithmetic;
mod guard;
mod lift;
mod search;
mod show;

pub use arithmetic::{just, quadratic_roots, safe_sqrt};
pub use guard::{guard, guard_with};
pub use lift::{add_m, add_m_fmap, lift_m2};
pub use search::{bind2, unique_pairs};
pub use show::{show_optional, show_pair, show_sequence};
