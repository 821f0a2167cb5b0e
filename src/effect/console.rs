//! Console effects.
//!
//! The [`Console`] trait abstracts over where text goes and where lines come
//! from. [`Stdio`] uses the process streams; [`ScriptedConsole`] keeps
//! everything in memory so programs can be run under test.
//!
//! The helpers in this module only *describe* console interaction: each
//! returns a [`Deferred`] holding its console by `Rc`, and nothing is read or
//! written until the effect runs.
//!
//! # Examples
//!
//! ```rust
//! use shapeclass::effect::{ScriptedConsole, echo, newline, read_value};
//! use std::rc::Rc;
//!
//! let console = Rc::new(ScriptedConsole::new(["21"]));
//! let program = echo(&console, "doubled: ")
//!     .then(read_value::<i32, _>(&console))
//!     .bind({
//!         let console = Rc::clone(&console);
//!         move |value| echo(&console, (value.unwrap_or(0) * 2).to_string())
//!     })
//!     .then(newline(&console));
//!
//! program.run();
//! assert_eq!(console.output(), "doubled: 42\n");
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use super::deferred::Deferred;
use super::error::ReadError;

/// A line-oriented text console.
pub trait Console {
    /// Writes `text` exactly as given.
    ///
    /// Writing is infallible from the caller's side. An implementation that
    /// can fail reports the failure through logging and drops the text.
    fn write_text(&self, text: &str);

    /// Reads one line, including any trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::EndOfInput`] when no more lines are available and
    /// [`ReadError::Io`] when the underlying stream fails.
    fn read_line(&self) -> Result<String, ReadError>;
}

/// The process's standard input and output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdio;

impl Console for Stdio {
    fn write_text(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(error) = stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
        {
            report_write_failure(&error);
        }
    }

    fn read_line(&self) -> Result<String, ReadError> {
        let mut buffer = String::new();
        let read = std::io::stdin().lock().read_line(&mut buffer)?;
        if read == 0 {
            return Err(ReadError::EndOfInput);
        }
        Ok(buffer)
    }
}

/// An in-memory console with queued input and captured output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: RefCell<VecDeque<String>>,
    output: RefCell<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: RefCell::new(lines.into_iter().map(Into::into).collect()),
            output: RefCell::new(String::new()),
        }
    }

    /// Returns everything written so far.
    #[must_use]
    pub fn output(&self) -> String {
        self.output.borrow().clone()
    }

    /// Returns everything written so far and clears the capture.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.output.borrow_mut())
    }

    /// Returns the number of input lines not yet read.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.borrow().len()
    }
}

impl Console for ScriptedConsole {
    fn write_text(&self, text: &str) {
        self.output.borrow_mut().push_str(text);
    }

    fn read_line(&self) -> Result<String, ReadError> {
        self.input
            .borrow_mut()
            .pop_front()
            .ok_or(ReadError::EndOfInput)
    }
}

// Partial application hands every bound argument over by value.
#[allow(clippy::needless_pass_by_value)]
fn write_text_to<C: Console>(console: Rc<C>, text: String) {
    console.write_text(&text);
}

#[allow(clippy::needless_pass_by_value)]
fn read_parsed<C: Console, T: FromStr>(console: Rc<C>) -> Result<T, ReadError> {
    let result = console.read_line().and_then(|line| {
        let trimmed = line.trim();
        trimmed.parse::<T>().map_err(|_| ReadError::Parse {
            input: trimmed.to_string(),
            target: std::any::type_name::<T>(),
        })
    });
    if let Err(error) = &result {
        report_read_failure(error);
    }
    result
}

#[cfg(feature = "tracing")]
fn report_read_failure(error: &ReadError) {
    tracing::warn!("Console read failed: {error}");
}

#[cfg(not(feature = "tracing"))]
const fn report_read_failure(_error: &ReadError) {}

#[cfg(feature = "tracing")]
fn report_write_failure(error: &std::io::Error) {
    tracing::warn!("Console write failed: {error}");
}

#[cfg(not(feature = "tracing"))]
const fn report_write_failure(_error: &std::io::Error) {}

/// Writes `text` to `console` when run.
///
/// The text is rendered now and owned by the effect, so the effect can be
/// returned and replayed freely.
pub fn echo<C>(console: &Rc<C>, text: impl Into<String>) -> Deferred<()>
where
    C: Console + 'static,
{
    let text: String = text.into();
    crate::deferred!(write_text_to::<C>, Rc::clone(console), text)
}

/// Writes the concatenated `Display` renderings of `parts`.
///
/// ```rust
/// use shapeclass::effect::{ScriptedConsole, echo_display};
/// use std::rc::Rc;
///
/// let console = Rc::new(ScriptedConsole::default());
/// echo_display(&console, &[&"x+y = ", &7]).run();
/// assert_eq!(console.output(), "x+y = 7");
/// ```
pub fn echo_display<C>(console: &Rc<C>, parts: &[&dyn Display]) -> Deferred<()>
where
    C: Console + 'static,
{
    let text: String = parts.iter().map(ToString::to_string).collect();
    echo(console, text)
}

/// Writes a newline to `console` when run.
pub fn newline<C>(console: &Rc<C>) -> Deferred<()>
where
    C: Console + 'static,
{
    echo(console, "\n")
}

/// Reads one line from `console` and parses it as `T` when run.
///
/// Surrounding whitespace is trimmed before parsing. Each run reads a fresh
/// line.
///
/// ```rust
/// use shapeclass::effect::{ReadError, ScriptedConsole, read_value};
/// use std::rc::Rc;
///
/// let console = Rc::new(ScriptedConsole::new([" 12 \n", "twelve"]));
/// let read = read_value::<u32, _>(&console);
/// assert_eq!(read.run(), Ok(12));
/// assert!(matches!(read.run(), Err(ReadError::Parse { .. })));
/// assert_eq!(read.run(), Err(ReadError::EndOfInput));
/// ```
pub fn read_value<T, C>(console: &Rc<C>) -> Deferred<Result<T, ReadError>>
where
    T: FromStr + 'static,
    C: Console + 'static,
{
    crate::deferred!(read_parsed::<C, T>, Rc::clone(console))
}

/// Writes `"x op y = z\n"` to `console` when run.
///
/// ```rust
/// use shapeclass::effect::{ScriptedConsole, equation};
/// use std::rc::Rc;
///
/// let console = Rc::new(ScriptedConsole::default());
/// equation(&console, "+", 1, 2, 3).run();
/// assert_eq!(console.output(), "1 + 2 = 3\n");
/// ```
pub fn equation<C, X, Y, Z>(console: &Rc<C>, operator: &str, x: X, y: Y, z: Z) -> Deferred<()>
where
    C: Console + 'static,
    X: Display,
    Y: Display,
    Z: Display,
{
    echo(console, format!("{x} {operator} {y} = {z}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn console() -> Rc<ScriptedConsole> {
        Rc::new(ScriptedConsole::new(["3", "4", "not a number"]))
    }

    #[rstest]
    fn echo_writes_only_when_run(console: Rc<ScriptedConsole>) {
        let hello = echo(&console, "hello");
        assert_eq!(console.output(), "");
        hello.run();
        hello.run();
        assert_eq!(console.output(), "hellohello");
    }

    #[rstest]
    fn echo_owns_its_text(console: Rc<ScriptedConsole>) {
        let effect = {
            let temporary = String::from("scoped");
            echo(&console, temporary.as_str())
        };
        effect.run();
        assert_eq!(console.take_output(), "scoped");
        assert_eq!(console.output(), "");
    }

    #[rstest]
    fn read_value_parses_successive_lines(console: Rc<ScriptedConsole>) {
        let read = read_value::<i64, _>(&console);
        assert_eq!(read.run(), Ok(3));
        assert_eq!(read.run(), Ok(4));
        assert_eq!(
            read.run(),
            Err(ReadError::Parse {
                input: "not a number".to_string(),
                target: "i64",
            })
        );
        assert_eq!(read.run(), Err(ReadError::EndOfInput));
        assert_eq!(console.remaining_input(), 0);
    }

    #[rstest]
    fn newline_and_equation_compose(console: Rc<ScriptedConsole>) {
        let program = equation(&console, "*", 6, 7, 42).then(newline(&console));
        program.run();
        assert_eq!(console.output(), "6 * 7 = 42\n\n");
    }

    #[rstest]
    fn write_failures_are_reported_not_raised() {
        let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        report_write_failure(&error);
        report_read_failure(&ReadError::from(error));
    }

    #[rstest]
    fn stdio_write_of_empty_text_succeeds() {
        Stdio.write_text("");
    }

    #[rstest]
    fn echo_display_concatenates(console: Rc<ScriptedConsole>) {
        echo_display(&console, &[&1.5, &" and ", &'c']).run();
        assert_eq!(console.output(), "1.5 and c");
    }
}
