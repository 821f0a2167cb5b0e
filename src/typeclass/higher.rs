//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `Vec<_>` as type constructors
//! directly. [`TypeConstructor`] recovers that ability with a GAT: for any
//! applied type `F<A>`, `F::WithType<B>` names `F<B>`.
//!
//! Each type constructor also belongs to a container category (see
//! [`Classify`]) and converts losslessly to and from that category's
//! canonical representation. The functor and monad instances only ever see
//! the canonical form, so `Vec` and `VecDeque` share one sequence instance.
//!
//! # Example
//!
//! ```rust
//! use shapeclass::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = transform_type(some_int);
//! assert_eq!(none_string, None);
//! ```

use std::collections::VecDeque;

use super::category::{Classify, ContainerTag};

/// A type constructor applied to some inner type.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `F::WithType<F::Inner>` is `F`.
/// 2. **Round trip**: `F::from_canonical(value.into_canonical()) == value`.
/// 3. **Category preservation**: `F::WithType<B>` is classified exactly as `F`.
pub trait TypeConstructor: Classify<Tag: ContainerTag> + Sized {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner: 'static;

    /// The same type constructor applied to a different type `B`.
    type WithType<B: 'static>: TypeConstructor<Inner = B> + Classify<Tag = Self::Tag>;

    /// Converts into the category's canonical representation.
    fn into_canonical(self) -> Canonical<Self>;

    /// Rebuilds a value from the category's canonical representation.
    fn from_canonical(canonical: Canonical<Self>) -> Self;
}

/// The canonical representation of `T` within its category.
pub type Canonical<T> =
    <<T as Classify>::Tag as ContainerTag>::Canonical<<T as TypeConstructor>::Inner>;

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A: 'static> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B: 'static> = Option<B>;

    #[inline]
    fn into_canonical(self) -> Self {
        self
    }

    #[inline]
    fn from_canonical(canonical: Self) -> Self {
        canonical
    }
}

impl<A: 'static> TypeConstructor for Vec<A> {
    type Inner = A;
    type WithType<B: 'static> = Vec<B>;

    #[inline]
    fn into_canonical(self) -> Self {
        self
    }

    #[inline]
    fn from_canonical(canonical: Self) -> Self {
        canonical
    }
}

impl<A: 'static> TypeConstructor for VecDeque<A> {
    type Inner = A;
    type WithType<B: 'static> = VecDeque<B>;

    fn into_canonical(self) -> Vec<A> {
        Vec::from(self)
    }

    fn from_canonical(canonical: Vec<A>) -> Self {
        Self::from(canonical)
    }
}
