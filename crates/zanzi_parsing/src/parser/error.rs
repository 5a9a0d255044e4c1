//! Represents errors occurring during parsing

use std::fmt::{Display, Formatter};
use zanzi_tokens::span::Span;

/// Result type used throughout the parser
pub type SyntaxResult<T = ()> = Result<T, SyntaxError>;

/// An unmet parser expectation.
///
/// The first mismatch aborts the whole parse; no partial tree is kept and no
/// further errors are collected. The span points at the offending token, or
/// directly past the last consumed token when the input ended early.
#[derive(Debug, thiserror::Error)]
pub struct SyntaxError {
    kind: ErrorKind,
    span: Option<Span>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(kind: ErrorKind, span: impl Into<Option<Span>>) -> Self {
        Self {
            kind,
            span: span.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// A required token did not match; `found` is the literal text of the
    /// token actually present, empty at end of input.
    #[error("expected token '{expected}', but got '{found}'")]
    ExpectedToken {
        expected: &'static str,
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_shape() {
        let error = SyntaxError::new(
            ErrorKind::ExpectedToken {
                expected: "}",
                found: String::new(),
            },
            Span::new(20, 0),
        );
        assert_eq!(error.to_string(), "expected token '}', but got ''");
    }
}
