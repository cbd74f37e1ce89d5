//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across this crate, or that certain
//! utilities convert their errors to.
//!
//! Rendering itself is infallible over the closed set of AST node kinds: dispatch happens via
//! exhaustive matches on the AST enums, so an unhandled node kind is a compile error rather than
//! a runtime condition. The [`ErrorType::TypeMismatch`] class remains for conversions that can
//! encounter a value kind with no representation in the target format.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and an error type that classifies it. The Error
/// implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) error_type: ErrorType,
}

/// Classification of [Error]s raised by this crate.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorType {
    /// A GraphQL document-level error, e.g. a lookup for a definition that doesn't exist.
    GraphQL,
    /// A value was passed to a conversion that its target representation cannot express.
    TypeMismatch,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: Option<ErrorType>) -> Self {
        Self {
            message: message.into(),
            error_type: error_type.unwrap_or(ErrorType::GraphQL),
        }
    }

    /// Returns the message of the current error.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the classification of the current error.
    pub fn error_type(&self) -> &ErrorType {
        &self.error_type
    }

    /// Formats this error including its classification prefix.
    pub fn print(&self) -> String {
        match self.error_type {
            ErrorType::GraphQL => format!("GraphQL Error: {}", self.message),
            ErrorType::TypeMismatch => format!("Type Mismatch Error: {}", self.message),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorType};

    #[test]
    fn formats_with_classification() {
        let error = Error::new("missing definition", None);
        assert_eq!(error.print(), "GraphQL Error: missing definition");
        let error = Error::new("no JSON form", Some(ErrorType::TypeMismatch));
        assert_eq!(format!("{error}"), "Type Mismatch Error: no JSON form");
    }
}
