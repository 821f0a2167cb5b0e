//! Shape categories and the static classifier.
//!
//! Every type that takes part in functor/monad dispatch belongs to exactly
//! one [`Category`]. Membership is declared by implementing [`Classify`],
//! whose associated `Tag` names a zero-sized marker type. Because a type can
//! have at most one `Classify` impl, classification is total over the
//! participating types and never ambiguous; a type with no impl is rejected
//! at compile time wherever a classified type is required.
//!
//! | Category | Types |
//! |---|---|
//! | [`Category::Optional`] | `Option<T>` |
//! | [`Category::Sequence`] | `Vec<T>`, `VecDeque<T>` |
//! | [`Category::Deferred`] | `Deferred<T>` |
//! | [`Category::PlainFunction`] | `fn(A1, …, Ak) -> R` for k up to 6, `fn(&A) -> R`, `fn(&A, &B) -> R` |
//!
//! Closures are not classified: an ambient closure is not a deferred effect
//! until it is explicitly wrapped in one.
//!
//! # Examples
//!
//! ```rust
//! use shapeclass::typeclass::{Category, category_of};
//! use std::collections::VecDeque;
//!
//! assert_eq!(category_of::<Option<u8>>(), Category::Optional);
//! assert_eq!(category_of::<Vec<String>>(), Category::Sequence);
//! assert_eq!(category_of::<VecDeque<i32>>(), Category::Sequence);
//! assert_eq!(category_of::<fn(i32) -> i32>(), Category::PlainFunction);
//! ```

use std::collections::VecDeque;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}
}

/// The closed set of shape categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// Zero or one value.
    Optional,
    /// Zero or more values in insertion order.
    Sequence,
    /// A replayable zero-argument effect.
    Deferred,
    /// A plain function pointer.
    PlainFunction,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Optional,
        Self::Sequence,
        Self::Deferred,
        Self::PlainFunction,
    ];

    /// Returns a short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::Sequence => "sequence",
            Self::Deferred => "deferred",
            Self::PlainFunction => "plain function",
        }
    }

    /// Returns `true` for the categories that carry values and therefore
    /// take part in functor and monad dispatch.
    #[must_use]
    pub const fn is_container(self) -> bool {
        !matches!(self, Self::PlainFunction)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A type-level marker naming one [`Category`].
///
/// Sealed: the four markers in this module are the only implementors.
pub trait CategoryTag: sealed::Sealed + 'static {
    /// The category this marker stands for.
    const CATEGORY: Category;
}

/// A category whose values carry an inner type.
///
/// `Canonical<A>` is the representation every member of the category
/// converts to and from, so an instance is written once per category rather
/// than once per type.
pub trait ContainerTag: CategoryTag {
    /// The canonical representation holding values of type `A`.
    type Canonical<A: 'static>;
}

/// Marker for [`Category::Optional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionalTag;

/// Marker for [`Category::Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SequenceTag;

/// Marker for [`Category::Deferred`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeferredTag;

/// Marker for [`Category::PlainFunction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FunctionTag;

impl sealed::Sealed for OptionalTag {}
impl sealed::Sealed for SequenceTag {}
impl sealed::Sealed for DeferredTag {}
impl sealed::Sealed for FunctionTag {}

impl CategoryTag for OptionalTag {
    const CATEGORY: Category = Category::Optional;
}

impl CategoryTag for SequenceTag {
    const CATEGORY: Category = Category::Sequence;
}

impl CategoryTag for DeferredTag {
    const CATEGORY: Category = Category::Deferred;
}

impl CategoryTag for FunctionTag {
    const CATEGORY: Category = Category::PlainFunction;
}

impl ContainerTag for OptionalTag {
    type Canonical<A: 'static> = Option<A>;
}

impl ContainerTag for SequenceTag {
    type Canonical<A: 'static> = Vec<A>;
}

/// Assigns a type to its shape category.
///
/// # Examples
///
/// ```rust
/// use shapeclass::typeclass::{Category, CategoryTag, Classify};
///
/// fn is_sequence<T: Classify>() -> bool {
///     <T::Tag as CategoryTag>::CATEGORY == Category::Sequence
/// }
///
/// assert!(is_sequence::<Vec<u8>>());
/// assert!(!is_sequence::<Option<u8>>());
/// ```
pub trait Classify {
    /// The marker of the category this type belongs to.
    type Tag: CategoryTag;
}

impl<T> Classify for Option<T> {
    type Tag = OptionalTag;
}

impl<T> Classify for Vec<T> {
    type Tag = SequenceTag;
}

impl<T> Classify for VecDeque<T> {
    type Tag = SequenceTag;
}

macro_rules! impl_classify_for_fn_pointer {
    ($($parameter:ident),*) => {
        #[allow(coherence_leak_check)]
        impl<Return, $($parameter),*> Classify for fn($($parameter),*) -> Return {
            type Tag = FunctionTag;
        }
    };
}

impl_classify_for_fn_pointer!();
impl_classify_for_fn_pointer!(A1);
impl_classify_for_fn_pointer!(A1, A2);
impl_classify_for_fn_pointer!(A1, A2, A3);
impl_classify_for_fn_pointer!(A1, A2, A3, A4);
impl_classify_for_fn_pointer!(A1, A2, A3, A4, A5);
impl_classify_for_fn_pointer!(A1, A2, A3, A4, A5, A6);

// Pointers over borrowed parameters are higher-ranked (`for<'a> fn(&'a A)`)
// and never unify with the owned-parameter impls above. Only one- and
// two-parameter forms are covered, and the result may not borrow from an
// argument.

#[allow(coherence_leak_check)]
impl<A: ?Sized, Return> Classify for fn(&A) -> Return {
    type Tag = FunctionTag;
}

#[allow(coherence_leak_check)]
impl<A: ?Sized, B, Return> Classify for fn(&A, B) -> Return {
    type Tag = FunctionTag;
}

#[allow(coherence_leak_check)]
impl<A, B: ?Sized, Return> Classify for fn(A, &B) -> Return {
    type Tag = FunctionTag;
}

#[allow(coherence_leak_check)]
impl<A: ?Sized, B: ?Sized, Return> Classify for fn(&A, &B) -> Return {
    type Tag = FunctionTag;
}

/// Returns the category of `T`.
///
/// Usable in constant context, so the classification is available at
/// compile time.
///
/// ```rust
/// use shapeclass::typeclass::{Category, category_of};
///
/// const SHAPE: Category = category_of::<Option<i32>>();
/// assert_eq!(SHAPE, Category::Optional);
/// ```
#[must_use]
pub const fn category_of<T: Classify + ?Sized>() -> Category {
    <T::Tag as CategoryTag>::CATEGORY
}

/// Returns the category of the type of `value`.
#[must_use]
pub const fn category_of_val<T: Classify + ?Sized>(_value: &T) -> Category {
    category_of::<T>()
}
