//! The public error type for the budget library.
//!
//! Internally most functions build `anyhow` errors with context. At the boundary of a command
//! those are lifted into [`Error`], which also records what kind of failure happened so that
//! callers can tell bad input apart from a broken data file.

use std::fmt::{Debug, Display, Formatter};

/// The broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Input text (a date, month, amount or position) did not have the required format.
    Format,
    /// A position was outside of the range of existing records.
    Range,
    /// The data file could not be read, parsed or written.
    Store,
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorType::Format => "format error",
            ErrorType::Range => "range error",
            ErrorType::Store => "store error",
        };
        f.write_str(s)
    }
}

/// An error with an [`ErrorType`] and the underlying chain of causes.
pub struct Error {
    error_type: ErrorType,
    inner: anyhow::Error,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an error of the given type from a message.
    pub fn new<M>(error_type: ErrorType, message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            error_type,
            inner: anyhow::Error::msg(message),
        }
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.error_type, self.inner)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // The alternate form prints the whole context chain on one line.
        write!(f, "{:#}", self.inner)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

/// Converts a `Result` with any `anyhow`-compatible error into a crate [`Result`].
pub(crate) trait IntoResult<T> {
    fn pub_result(self, error_type: ErrorType) -> Result<T>;
}

impl<T, E> IntoResult<T> for std::result::Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn pub_result(self, error_type: ErrorType) -> Result<T> {
        self.map_err(|e| Error {
            error_type,
            inner: e.into(),
        })
    }
}
