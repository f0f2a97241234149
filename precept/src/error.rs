//! Precept error types.

use thiserror::Error;

/// Result type for precept parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while parsing a precept string.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Function name outside the closed set (NOW, SERIAL).
    #[error("Unknown precept function: {name}")]
    UnknownFunction { name: String },

    /// Argument outside the closed set, or an arity the function rejects.
    #[error("Invalid argument for {function}: '{arg}'")]
    InvalidArgument { function: String, arg: String },

    /// Input does not have the `field=FUNCTION(args)` shape.
    #[error("Malformed precept '{input}': {reason}")]
    MalformedPrecept { input: String, reason: String },
}

impl ParseError {
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    pub fn invalid_argument(function: impl Into<String>, arg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            function: function.into(),
            arg: arg.into(),
        }
    }

    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPrecept {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for precept evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while evaluating a parsed precept.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The wall clock could not produce an epoch-relative reading.
    #[error("System clock unavailable: {reason}")]
    ClockUnavailable { reason: String },
}

impl EvalError {
    pub fn clock_unavailable(reason: impl Into<String>) -> Self {
        Self::ClockUnavailable {
            reason: reason.into(),
        }
    }
}
