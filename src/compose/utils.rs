//! Helper functions for composition.

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// `compose!(identity, f)` and `compose!(f, identity)` both behave as `f`.
/// Binding it with [`partial`](super::partial) yields a thunk that hands back
/// a fresh copy of the bound value on every call, which is how a deferred
/// effect lifts a plain value.
///
/// # Examples
///
/// ```
/// use shapeclass::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
