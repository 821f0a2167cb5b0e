//! Text renderings of optional, sequence and pair values.
//!
//! Each helper takes a renderer for the element type so nested values can
//! be shown with the helper for their own shape.

use std::fmt::Display;

/// Renders `Just x` or `Nothing`.
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::show_optional;
///
/// assert_eq!(show_optional(&Some(3), ToString::to_string), "Just 3");
/// assert_eq!(show_optional(&None::<i32>, ToString::to_string), "Nothing");
/// ```
pub fn show_optional<A, F>(value: &Option<A>, render: F) -> String
where
    F: Fn(&A) -> String,
{
    value
        .as_ref()
        .map_or_else(|| "Nothing".to_string(), |inner| format!("Just {}", render(inner)))
}

/// Renders elements between brackets, separated by commas without spaces.
///
/// # Examples
///
/// ```rust
/// use shapeclass::derived::{show_pair, show_sequence};
///
/// assert_eq!(show_sequence(&[1, 2, 3], ToString::to_string), "[1,2,3]");
/// assert_eq!(show_sequence(&[(1, 2)], show_pair), "[(1,2)]");
/// assert_eq!(show_sequence::<i32, _>(&[], ToString::to_string), "[]");
/// ```
pub fn show_sequence<A, F>(values: &[A], render: F) -> String
where
    F: Fn(&A) -> String,
{
    let rendered: Vec<String> = values.iter().map(render).collect();
    format!("[{}]", rendered.join(","))
}

/// Renders a pair as `(a,b)`.
pub fn show_pair<A: Display, B: Display>(pair: &(A, B)) -> String {
    format!("({},{})", pair.0, pair.1)
}
