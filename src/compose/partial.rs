//! Partial application - binding leading arguments into a new callable.
//!
//! A [`PartialApplication`] owns a callable and one leading argument. Binding
//! several arguments nests applications, so
//! `partial!(f, a, b)` is `PartialApplication(PartialApplication(f, a), b)`,
//! and calling the result with `(c,)` evaluates `f(a, b, c)`.
//!
//! # Owning vs borrowing capture
//!
//! - [`partial`] and [`partial!`](crate::partial) move the bound arguments
//!   into the result. The result owns everything it needs and can be
//!   returned from the scope that built it.
//! - [`closure`] and [`closure!`](crate::closure) bind *references*. The
//!   result borrows the originals and cannot outlive them; the borrow
//!   checker rejects any attempt to return it upward. Use it only for
//!   short pipelines evaluated within one expression, where cloning the
//!   arguments would be wasted work.
//!
//! # Examples
//!
//! ```rust
//! use shapeclass::compose::Callable;
//! use shapeclass::partial;
//!
//! fn volume(length: u32, width: u32, height: u32) -> u32 {
//!     length * width * height
//! }
//!
//! let with_base = partial!(volume, 2, 3);
//! assert_eq!(with_base.invoke((4,)), 24);
//! assert_eq!(with_base.invoke((5,)), 30);
//! ```

use super::callable::Callable;

/// A callable with one leading argument already supplied.
///
/// Invoking it with `(y1, ..., ym)` invokes the wrapped callable with
/// `(x, y1, ..., ym)`. The bound argument is cloned on every call, so the
/// partial application itself is never mutated and can be invoked
/// repeatedly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialApplication<F, X> {
    function: F,
    argument: X,
}

impl<F, X> PartialApplication<F, X> {
    /// Binds `argument` as the first argument of `function`.
    #[inline]
    pub const fn new(function: F, argument: X) -> Self {
        Self { function, argument }
    }

    /// Returns the bound argument.
    #[inline]
    pub const fn argument(&self) -> &X {
        &self.argument
    }

    /// Splits the partial application back into its parts.
    #[inline]
    pub fn into_parts(self) -> (F, X) {
        (self.function, self.argument)
    }
}

macro_rules! impl_callable_for_partial {
    ($($argument:ident: $parameter:ident),*) => {
        impl<F, X, $($parameter),*> Callable<($($parameter,)*)> for PartialApplication<F, X>
        where
            F: Callable<(X, $($parameter,)*)>,
            X: Clone,
        {
            type Output = F::Output;

            #[inline]
            fn invoke(&self, ($($argument,)*): ($($parameter,)*)) -> Self::Output {
                self.function.invoke((self.argument.clone(), $($argument,)*))
            }
        }
    };
}

impl_callable_for_partial!();
impl_callable_for_partial!(argument1: A1);
impl_callable_for_partial!(argument1: A1, argument2: A2);
impl_callable_for_partial!(argument1: A1, argument2: A2, argument3: A3);
impl_callable_for_partial!(argument1: A1, argument2: A2, argument3: A3, argument4: A4);
impl_callable_for_partial!(
    argument1: A1,
    argument2: A2,
    argument3: A3,
    argument4: A4,
    argument5: A5
);

/// Binds `argument` by value as the first argument of `function`.
///
/// The result owns both, so it is safe to return from the constructing
/// scope.
///
/// # Examples
///
/// ```rust
/// use shapeclass::compose::{Callable, partial};
///
/// fn greet(greeting: String, name: &str) -> String {
///     format!("{greeting}, {name}!")
/// }
///
/// fn make_greeter() -> impl Callable<(&'static str,), Output = String> {
///     let greeting = String::from("Hello");
///     partial(greet, greeting)
/// }
///
/// assert_eq!(make_greeter().invoke(("Ada",)), "Hello, Ada!");
/// ```
#[inline]
pub const fn partial<F, X>(function: F, argument: X) -> PartialApplication<F, X> {
    PartialApplication::new(function, argument)
}

/// Binds a reference to `argument` as the first argument of `function`.
///
/// The result borrows `argument` and is only usable while it is alive.
///
/// # Examples
///
/// ```rust
/// use shapeclass::compose::{Callable, closure};
///
/// fn starts_with(prefix: &String, word: &str) -> bool {
///     word.starts_with(prefix.as_str())
/// }
///
/// let prefix = String::from("mon");
/// let matches = closure(starts_with, &prefix);
/// assert!(matches.invoke(("monad",)));
/// assert!(!matches.invoke(("functor",)));
/// ```
#[inline]
pub const fn closure<F, X: ?Sized>(function: F, argument: &X) -> PartialApplication<F, &X> {
    PartialApplication::new(function, argument)
}

/// Binds any number of leading arguments by value.
///
/// `partial!(f)` is `f` itself; `partial!(f, a, b, c)` nests
/// [`PartialApplication`]s left to right so the call evaluates
/// `f(a, b, c, ...)`.
///
/// # Examples
///
/// ```rust
/// use shapeclass::compose::Callable;
/// use shapeclass::partial;
///
/// fn label(prefix: &str, index: usize, suffix: &str) -> String {
///     format!("{prefix}{index}{suffix}")
/// }
///
/// let item = partial!(label, "item-", 7);
/// assert_eq!(item.invoke((".txt",)), "item-7.txt");
///
/// let thunk = partial!(label, "x", 1, "y");
/// assert_eq!(thunk.invoke(()), "x1y");
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr $(,)?) => {
        $function
    };

    ($function:expr, $first:expr $(,)?) => {
        $crate::compose::PartialApplication::new($function, $first)
    };

    ($function:expr, $first:expr, $($rest:expr),+ $(,)?) => {
        $crate::partial!($crate::compose::PartialApplication::new($function, $first), $($rest),+)
    };
}

/// Binds any number of leading arguments by reference.
///
/// Each argument expression is borrowed, so the result cannot outlive the
/// values it names.
///
/// # Examples
///
/// ```rust
/// use shapeclass::compose::Callable;
/// use shapeclass::closure;
///
/// fn between(low: &i32, high: &i32, value: i32) -> bool {
///     *low <= value && value <= *high
/// }
///
/// let low = 1;
/// let high = 10;
/// let in_range = closure!(between, low, high);
/// assert!(in_range.invoke((5,)));
/// assert!(!in_range.invoke((11,)));
/// ```
#[macro_export]
macro_rules! closure {
    ($function:expr $(,)?) => {
        $function
    };

    ($function:expr, $first:expr $(,)?) => {
        $crate::compose::PartialApplication::new($function, &$first)
    };

    ($function:expr, $first:expr, $($rest:expr),+ $(,)?) => {
        $crate::closure!($crate::compose::PartialApplication::new($function, &$first), $($rest),+)
    };
}
