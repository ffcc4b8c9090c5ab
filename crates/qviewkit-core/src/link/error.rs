//! Error types for deep-link parsing.

use thiserror::Error;

/// Reason a string was rejected as a `qviewkit://` link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not start with the exact `qviewkit://` prefix.
    #[error("malformed scheme: link must start with \"qviewkit://\"")]
    MalformedScheme,
    /// Nothing between `qviewkit://` and the optional `/` or `?`.
    #[error("missing measurement identifier")]
    MissingIdentifier,
    /// Identifier contains characters outside `[A-Za-z0-9]`.
    #[error("invalid measurement identifier {id:?}: only ASCII letters and digits are allowed")]
    InvalidIdentifier { id: String },
    /// A query pair without `=` or with an empty key.
    #[error("malformed query pair {pair:?}: expected key=value with a non-empty key")]
    MalformedQueryPair { pair: String },
}

/// Category of a [`ParseError`], without the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MalformedScheme,
    MissingIdentifier,
    InvalidIdentifier,
    MalformedQueryPair,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::MalformedScheme => ParseErrorKind::MalformedScheme,
            ParseError::MissingIdentifier => ParseErrorKind::MissingIdentifier,
            ParseError::InvalidIdentifier { .. } => ParseErrorKind::InvalidIdentifier,
            ParseError::MalformedQueryPair { .. } => ParseErrorKind::MalformedQueryPair,
        }
    }
}
