//! The `Callable` trait - a uniform calling convention for combinators.
//!
//! Rust closures cannot be implemented by user types on stable, so every
//! combinator in this crate ([`PartialApplication`](super::PartialApplication),
//! [`Composition`](super::Composition), and the deferred effect type) is invoked
//! through [`Callable::invoke`], which takes its arguments as a tuple.
//!
//! Every `Fn` of arity 0 through 6 implements `Callable` for the tuple of its
//! parameter types, so ordinary functions and closures can be mixed freely
//! with the combinator structs.
//!
//! # Examples
//!
//! ```rust
//! use shapeclass::compose::Callable;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! assert_eq!(add.invoke((2, 3)), 5);
//! assert_eq!((|| "thunk").invoke(()), "thunk");
//! ```

/// A value that can be invoked with the argument tuple `Args`.
///
/// The arity is carried by the tuple type, so calling with the wrong number
/// of arguments is a compile error rather than a runtime one.
pub trait Callable<Args> {
    /// The value produced by a call.
    type Output;

    /// Invokes the callable.
    ///
    /// Takes `&self` so the same callable may be invoked any number of times;
    /// each call re-executes the underlying function.
    fn invoke(&self, arguments: Args) -> Self::Output;
}

macro_rules! impl_callable_for_fn {
    ($($argument:ident: $parameter:ident),*) => {
        impl<Function, Return, $($parameter),*> Callable<($($parameter,)*)> for Function
        where
            Function: Fn($($parameter),*) -> Return,
        {
            type Output = Return;

            #[inline]
            fn invoke(&self, ($($argument,)*): ($($parameter,)*)) -> Return {
                (self)($($argument),*)
            }
        }
    };
}

impl_callable_for_fn!();
impl_callable_for_fn!(argument1: A1);
impl_callable_for_fn!(argument1: A1, argument2: A2);
impl_callable_for_fn!(argument1: A1, argument2: A2, argument3: A3);
impl_callable_for_fn!(argument1: A1, argument2: A2, argument3: A3, argument4: A4);
impl_callable_for_fn!(
    argument1: A1,
    argument2: A2,
    argument3: A3,
    argument4: A4,
    argument5: A5
);
impl_callable_for_fn!(
    argument1: A1,
    argument2: A2,
    argument3: A3,
    argument4: A4,
    argument5: A5,
    argument6: A6
);
