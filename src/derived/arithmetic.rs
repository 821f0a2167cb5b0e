//! Arithmetic that signals invalid input through the optional category.

use super::guard::guard_with;
use crate::typeclass::{fmap, pure};

/// Lifts a value into the optional category.
#[inline]
pub fn just<A: Clone + 'static>(value: A) -> Option<A> {
    pure(value)
}

/// The square root of `value`, or `None` when `value` is negative.
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::safe_sqrt;
///
/// assert_eq!(safe_sqrt(4.0), Some(2.0));
/// assert_eq!(safe_sqrt(-1.0), None);
/// ```
pub fn safe_sqrt(value: f64) -> Option<f64> {
    guard_with(value >= 0.0, || value.sqrt())
}

/// The real roots of `a·x² + b·x + c`, or `None` when the discriminant is
/// negative.
///
/// The pair is `((-b + r) / 2a, (-b - r) / 2a)` where `r` is the square root
/// of the discriminant.
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::quadratic_roots;
///
/// assert_eq!(quadratic_roots(1.0, 3.0, -4.0), Some((1.0, -4.0)));
/// assert_eq!(quadratic_roots(1.0, 0.0, 4.0), None);
/// ```
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    fmap(
        move |root: f64| ((-b + root) / (2.0 * a), (-b - root) / (2.0 * a)),
        safe_sqrt(b.mul_add(b, -4.0 * a * c)),
    )
}
