//! Error types for console effects.
//!
//! Reading is the only fallible operation in the crate. Failures are
//! carried as values inside the produced `Result`, so a deferred program
//! never panics on bad input.

/// Represents an error when reading a value from a console.
///
/// # Examples
///
/// ```rust
/// use shapeclass::effect::ReadError;
///
/// let error = ReadError::Parse {
///     input: "abc".to_string(),
///     target: "i32",
/// };
/// assert_eq!(format!("{error}"), "cannot parse \"abc\" as i32");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The underlying stream reported an error.
    Io(String),
    /// The input was exhausted before a line could be read.
    EndOfInput,
    /// A line was read but could not be parsed into the requested type.
    Parse {
        /// The trimmed line that failed to parse.
        input: String,
        /// The name of the requested type.
        target: &'static str,
    },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(message) => write!(formatter, "console read failed: {message}"),
            Self::EndOfInput => write!(formatter, "end of input"),
            Self::Parse { input, target } => {
                write!(formatter, "cannot parse {input:?} as {target}")
            }
        }
    }
}

impl std::error::Error for ReadError {}

impl From<std::io::Error> for ReadError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}
