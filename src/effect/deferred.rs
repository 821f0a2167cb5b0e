//! Deferred effects - replayable descriptions of side effects.
//!
//! A [`Deferred<A>`] describes a computation that produces an `A`, possibly
//! performing side effects on the way. Nothing happens until [`Deferred::run`]
//! is called, and unlike a one-shot IO action a deferred effect can be run
//! any number of times: every run performs the effect again. Results are
//! never cached.
//!
//! Combinators never run either side. `map`, `bind` and `then` are built from
//! [`Composition`](crate::compose::Composition) and
//! [`PartialApplication`](crate::compose::PartialApplication) around the
//! shared action, so building a program and running it are separate steps.
//!
//! # Examples
//!
//! ```rust
//! use shapeclass::effect::Deferred;
//!
//! let deferred = Deferred::pure(10)
//!     .map(|x: i32| x * 2)
//!     .bind(|x: i32| Deferred::pure(x + 1));
//! assert_eq!(deferred.run(), 21);
//! ```
//!
//! # Replaying
//!
//! ```rust
//! use shapeclass::effect::Deferred;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let log = Rc::new(RefCell::new(String::new()));
//! let append = |text: &'static str| {
//!     let log = Rc::clone(&log);
//!     Deferred::new(move || log.borrow_mut().push_str(text))
//! };
//!
//! let program = append("a").then(append("b"));
//! assert_eq!(*log.borrow(), "");
//!
//! program.run();
//! program.run();
//! assert_eq!(*log.borrow(), "abab");
//! ```

use std::fmt;
use std::rc::Rc;

use super::console::{Console, Stdio};
use crate::compose::{Callable, compose, identity, partial};
use crate::typeclass::{
    Classify, ContainerTag, DeferredTag, FunctorInstance, MonadFailInstance, MonadInstance,
    TypeConstructor,
};

/// A replayable zero-argument effect producing `A`.
///
/// Cloning is cheap: clones share the same action.
///
/// `Deferred` holds its action in an `Rc` and is therefore neither `Send`
/// nor `Sync`; programs built from it run on the thread that built them.
///
/// Every `map`, `bind` or `then` link adds one nested call when the effect
/// runs, so running a chain uses stack in proportion to its length. A chain
/// of a thousand links is fine; a loop that links hundreds of thousands of
/// effects can overflow the stack and should be written as a single effect
/// that loops inside its closure.
pub struct Deferred<A> {
    action: Rc<dyn Fn() -> A>,
}

impl<A> Clone for Deferred<A> {
    fn clone(&self) -> Self {
        Self {
            action: Rc::clone(&self.action),
        }
    }
}

impl<A> fmt::Debug for Deferred<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Deferred").finish_non_exhaustive()
    }
}

impl<A> Deferred<A> {
    /// Performs the effect and returns its result.
    ///
    /// Each call performs the effect again.
    #[inline]
    pub fn run(&self) -> A {
        (self.action)()
    }
}

impl<A: 'static> Deferred<A> {
    /// Wraps a closure as a deferred effect.
    ///
    /// The closure is not called until the effect is run.
    ///
    /// # Arguments
    ///
    /// * `action` - The computation to defer.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            action: Rc::new(action),
        }
    }

    /// Wraps any zero-argument [`Callable`] as a deferred effect.
    ///
    /// This is how partial applications and compositions become effects:
    ///
    /// ```rust
    /// use shapeclass::effect::Deferred;
    /// use shapeclass::partial;
    ///
    /// fn area(width: u32, height: u32) -> u32 { width * height }
    ///
    /// let deferred = Deferred::from_callable(partial!(area, 3, 4));
    /// assert_eq!(deferred.run(), 12);
    /// ```
    pub fn from_callable<C>(callable: C) -> Self
    where
        C: Callable<(), Output = A> + 'static,
    {
        Self::new(move || callable.invoke(()))
    }

    /// Creates an effect that performs nothing and yields `value`.
    ///
    /// The value is cloned on every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapeclass::effect::Deferred;
    ///
    /// let deferred = Deferred::pure(String::from("same"));
    /// assert_eq!(deferred.run(), "same");
    /// assert_eq!(deferred.run(), "same");
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_callable(partial(identity::<A>, value))
    }

    /// Transforms the result of the effect.
    ///
    /// Building the mapped effect does not run the original.
    ///
    /// # Arguments
    ///
    /// * `function` - Applied to the result on every run.
    pub fn map<B, F>(self, function: F) -> Deferred<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Deferred::from_callable(compose(function, self))
    }

    /// Runs this effect, passes its result to `function`, and runs the effect
    /// it returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapeclass::effect::Deferred;
    ///
    /// let deferred = Deferred::pure(4).bind(|x: i32| Deferred::pure(x * x));
    /// assert_eq!(deferred.run(), 16);
    /// ```
    pub fn bind<B, F>(self, function: F) -> Deferred<B>
    where
        F: Fn(A) -> Deferred<B> + 'static,
        B: 'static,
    {
        Deferred::from_callable(compose(run_deferred::<B>, compose(function, self)))
    }

    /// Runs this effect for its side effects, then runs `next`.
    ///
    /// The result of this effect is discarded; the result of `next` is kept.
    pub fn then<B>(self, next: Deferred<B>) -> Deferred<B>
    where
        B: 'static,
    {
        Deferred::from_callable(compose(partial(run_after::<A, B>, next), self))
    }

    /// Runs both effects in order and combines their results.
    ///
    /// # Arguments
    ///
    /// * `other` - Run after this effect.
    /// * `function` - Combines the two results.
    pub fn map2<B, C, F>(self, other: Deferred<B>, function: F) -> Deferred<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Deferred::new(move || {
            let first = self.run();
            let second = other.run();
            function(first, second)
        })
    }

    /// Runs both effects in order and pairs their results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapeclass::effect::Deferred;
    ///
    /// let pair = Deferred::pure(10).product(Deferred::pure("ten"));
    /// assert_eq!(pair.run(), (10, "ten"));
    /// ```
    pub fn product<B>(self, other: Deferred<B>) -> Deferred<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Attaches a label used by structured logging.
    ///
    /// With the `tracing` feature enabled every run happens inside a
    /// `deferred` span carrying the label and emits a trace event. Without
    /// the feature this returns the effect unchanged.
    #[cfg(feature = "tracing")]
    #[must_use]
    pub fn named(self, label: &'static str) -> Self {
        Self::new(move || {
            let span = tracing::trace_span!("deferred", label);
            let _entered = span.enter();
            tracing::trace!("running deferred effect");
            self.run()
        })
    }

    /// Attaches a label used by structured logging.
    ///
    /// With the `tracing` feature enabled every run happens inside a
    /// `deferred` span carrying the label and emits a trace event. Without
    /// the feature this returns the effect unchanged.
    #[cfg(not(feature = "tracing"))]
    #[must_use]
    pub fn named(self, _label: &'static str) -> Self {
        self
    }
}

// Composition and partial application pass their values by value.
#[allow(clippy::needless_pass_by_value)]
fn run_deferred<B>(deferred: Deferred<B>) -> B {
    deferred.run()
}

#[allow(clippy::needless_pass_by_value)]
fn run_after<A, B>(next: Deferred<B>, _discarded: A) -> B {
    next.run()
}

// =============================================================================
// Unit effects
// =============================================================================

impl Deferred<()> {
    /// An effect that does nothing.
    pub fn noop() -> Self {
        Self::pure(())
    }

    /// Creates an effect that writes `message` to standard output without a
    /// trailing newline.
    ///
    /// Write failures are reported the way [`Stdio`] reports them.
    ///
    /// ```rust,no_run
    /// use shapeclass::effect::Deferred;
    ///
    /// Deferred::print("no newline").run();
    /// ```
    pub fn print<S: fmt::Display + 'static>(message: S) -> Self {
        Self::new(move || Stdio.write_text(&message.to_string()))
    }

    /// Creates an effect that prints a line to standard output.
    ///
    /// ```rust,no_run
    /// use shapeclass::effect::Deferred;
    ///
    /// let hello = Deferred::print_line("Hello, World!");
    /// hello.run();
    /// hello.run(); // prints again
    /// ```
    pub fn print_line<S: fmt::Display + 'static>(message: S) -> Self {
        Self::new(move || Stdio.write_text(&format!("{message}\n")))
    }

    /// Continues with an effect that needs no input.
    ///
    /// Equivalent to `bind(|()| function())`.
    pub fn bind_unit<B, F>(self, function: F) -> Deferred<B>
    where
        F: Fn() -> Deferred<B> + 'static,
        B: 'static,
    {
        self.bind(move |()| function())
    }
}

impl<A> Callable<()> for Deferred<A> {
    type Output = A;

    #[inline]
    fn invoke(&self, _arguments: ()) -> A {
        self.run()
    }
}

static_assertions::assert_not_impl_any!(Deferred<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Deferred<()>: Send, Sync);

// =============================================================================
// Category membership
// =============================================================================

impl<A> Classify for Deferred<A> {
    type Tag = DeferredTag;
}

impl ContainerTag for DeferredTag {
    type Canonical<A: 'static> = Deferred<A>;
}

impl<A: 'static> TypeConstructor for Deferred<A> {
    type Inner = A;
    type WithType<B: 'static> = Deferred<B>;

    #[inline]
    fn into_canonical(self) -> Self {
        self
    }

    #[inline]
    fn from_canonical(canonical: Self) -> Self {
        canonical
    }
}

impl FunctorInstance for DeferredTag {
    fn fmap<A, B, F>(fa: Deferred<A>, function: F) -> Deferred<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl MonadInstance for DeferredTag {
    fn pure<A>(value: A) -> Deferred<A>
    where
        A: Clone + 'static,
    {
        Deferred::pure(value)
    }

    fn bind<A, B, F>(ma: Deferred<A>, function: F) -> Deferred<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Deferred<B> + 'static,
    {
        ma.bind(function)
    }

    fn then<A, B>(first: Deferred<A>, next: Deferred<B>) -> Deferred<B>
    where
        A: 'static,
        B: 'static,
    {
        first.then(next)
    }
}

/// A failed deferred effect performs nothing and yields the default value.
impl<A: Default + 'static> MonadFailInstance<A> for DeferredTag {
    fn fail() -> Deferred<A> {
        Deferred::new(A::default)
    }
}

/// Builds a [`Deferred`] from a function and the arguments to call it with.
///
/// `deferred!(f, a, b)` is `Deferred::from_callable(partial!(f, a, b))`: the
/// arguments are captured by value now and `f(a, b)` is evaluated on every
/// run.
///
/// # Examples
///
/// ```rust
/// use shapeclass::deferred;
///
/// fn greet(greeting: String, name: &'static str) -> String {
///     format!("{greeting}, {name}")
/// }
///
/// let deferred = deferred!(greet, String::from("Hello"), "Ada");
/// assert_eq!(deferred.run(), "Hello, Ada");
/// ```
#[macro_export]
macro_rules! deferred {
    ($function:expr $(, $argument:expr)*) => {
        $crate::effect::Deferred::from_callable($crate::partial!($function $(, $argument)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Monad, fail, pure};
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Deferred<()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let shared = Rc::clone(&log);
        let record = move |entry: &'static str| {
            let log = Rc::clone(&shared);
            Deferred::new(move || log.borrow_mut().push(entry))
        };
        (log, record)
    }

    #[rstest]
    fn new_does_not_run_until_asked() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let deferred = Deferred::new(move || counter.set(counter.get() + 1));
        assert_eq!(runs.get(), 0);
        deferred.run();
        deferred.run();
        assert_eq!(runs.get(), 2);
    }

    #[rstest]
    fn map_does_not_force_the_effect() {
        let (log, record) = recorder();
        let mapped = record("effect").map(|()| 5);
        assert!(log.borrow().is_empty());
        assert_eq!(mapped.run(), 5);
        assert_eq!(*log.borrow(), vec!["effect"]);
    }

    #[rstest]
    fn then_runs_both_in_order_and_replays() {
        let (log, record) = recorder();
        let program = record("a").then(record("b"));
        program.run();
        program.run();
        assert_eq!(*log.borrow(), vec!["a", "b", "a", "b"]);
    }

    #[rstest]
    fn bind_runs_first_then_continuation() {
        let (log, record) = recorder();
        let program = record("first")
            .map(|()| 2)
            .bind(move |count: i32| record("second").map(move |()| count * 10));
        assert_eq!(program.run(), 20);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[rstest]
    fn bind_unit_ignores_unit_result() {
        let (log, record) = recorder();
        let program = record("x").bind_unit(|| Deferred::pure('y'));
        assert_eq!(program.run(), 'y');
        assert_eq!(*log.borrow(), vec!["x"]);
    }

    #[rstest]
    fn map2_runs_left_to_right() {
        let (log, record) = recorder();
        let left = record("left").map(|()| 1);
        let right = record("right").map(|()| 2);
        assert_eq!(left.map2(right, |a: i32, b: i32| a - b).run(), -1);
        assert_eq!(*log.borrow(), vec!["left", "right"]);
    }

    #[rstest]
    fn pure_has_no_effect_and_replays_value() {
        let deferred = Deferred::pure(vec![1, 2]);
        assert_eq!(deferred.run(), vec![1, 2]);
        assert_eq!(deferred.run(), vec![1, 2]);
    }

    #[rstest]
    fn generic_dispatch_reaches_deferred() {
        let lifted: Deferred<i32> = pure(3);
        let doubled = Monad::bind(lifted, |x: i32| Deferred::pure(x * 2));
        assert_eq!(doubled.run(), 6);
    }

    #[rstest]
    fn fail_yields_default() {
        let failed: Deferred<String> = fail();
        assert_eq!(failed.run(), String::new());
    }

    #[rstest]
    fn deferred_macro_partially_applies() {
        fn add3(first: i32, second: i32, third: i32) -> i32 {
            first + second + third
        }
        let deferred = deferred!(add3, 1, 2, 3);
        assert_eq!(deferred.run(), 6);
        let thunk = deferred!(|| "bare");
        assert_eq!(thunk.run(), "bare");
    }

    #[rstest]
    fn deferred_is_callable() {
        let deferred = Deferred::pure(9);
        let composed = compose(|x: i32| x + 1, deferred);
        assert_eq!(composed.invoke(()), 10);
    }

    #[rstest]
    fn named_keeps_behaviour() {
        let deferred = Deferred::pure(1).named("one");
        assert_eq!(deferred.run(), 1);
    }

    #[rstest]
    fn debug_does_not_run() {
        let deferred = Deferred::new(|| -> i32 { panic!("must not run") });
        assert_eq!(format!("{deferred:?}"), "Deferred { .. }");
    }
}
