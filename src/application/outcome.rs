// src/application/outcome.rs
//! Railway-style outcome of a dispatched request.
//!
//! Handlers never return `Err` for expected domain situations. They return an
//! [`Outcome`] that is either a success carrying a value or a failure carrying
//! a typed [`Error`]. Consumers branch on it through [`Outcome::match_with`].

use std::fmt;

/// Category of an [`Error`]. Fixed by the constructor that built the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    None,
    Failure,
    Validation,
    NotFound,
    Conflict,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Failure => "failure",
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    code: String,
    message: String,
    kind: ErrorKind,
}

static NONE: Error = Error::NONE;

impl Error {
    /// The "no error" sentinel carried by every successful outcome.
    pub const NONE: Self = Self {
        code: String::new(),
        message: String::new(),
        kind: ErrorKind::None,
    };

    fn new(code: impl Into<String>, message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind,
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, ErrorKind::Failure)
    }

    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, ErrorKind::Validation)
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, ErrorKind::NotFound)
    }

    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, ErrorKind::Conflict)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub const fn is_none(&self) -> bool {
        matches!(self.kind, ErrorKind::None)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("no error")
        } else {
            write!(f, "{} ({}): {}", self.code, self.kind, self.message)
        }
    }
}

/// Raised when the value of a failed outcome is requested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid state: the value of a failed outcome cannot be accessed ({code})")]
pub struct InvalidState {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<T> {
    Success(T),
    Failure(Error),
}

/// Outcome of a request. `Outcome` (with the default `()` payload) is the
/// value-less form; `Outcome<T>` carries a value on success.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T = ()> {
    state: State<T>,
}

impl Outcome {
    /// Successful outcome without a payload.
    pub const fn completed() -> Self {
        Self {
            state: State::Success(()),
        }
    }
}

impl<T> Outcome<T> {
    pub const fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// # Panics
    ///
    /// Panics when `error` is [`Error::NONE`]; a failure must say what failed.
    pub fn failure(error: Error) -> Self {
        assert!(
            !error.is_none(),
            "an outcome cannot fail with the Error::NONE sentinel"
        );
        Self {
            state: State::Failure(error),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The carried error, or [`Error::NONE`] for a success.
    pub fn error(&self) -> &Error {
        match &self.state {
            State::Success(_) => &NONE,
            State::Failure(error) => error,
        }
    }

    pub fn value(&self) -> Result<&T, InvalidState> {
        match &self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(InvalidState {
                code: error.code.clone(),
            }),
        }
    }

    pub fn into_value(self) -> Result<T, InvalidState> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(InvalidState { code: error.code }),
        }
    }

    /// Calls `on_success` with the value or `on_failure` with the error.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Error) -> R,
    ) -> R {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(error) => on_failure(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self.state {
            State::Success(value) => Outcome::success(f(value)),
            State::Failure(error) => Outcome {
                state: State::Failure(error),
            },
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

/// Response types that can be built straight from an [`Error`]. Pipeline
/// stages that short-circuit build the handler's declared response with it.
pub trait FailureResponse: Sized {
    fn from_failure(error: Error) -> Self;
}

impl<T> FailureResponse for Outcome<T> {
    fn from_failure(error: Error) -> Self {
        Self::failure(error)
    }
}
