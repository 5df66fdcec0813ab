//! Parse error types.

use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_fmt::LabelError;
use sift_ir::{Span, Token};

use crate::literal::LiteralError;

/// A parse failure. Parsing stops at the first one; there is no partial
/// pattern set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// The tokens ran out in the middle of an entry.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A token of the wrong kind for its position.
    #[error("unexpected {}, expected {expected}", .token.kind.describe())]
    UnexpectedToken { token: Token, expected: &'static str },
    /// A datum that is not a valid byte literal.
    #[error("invalid byte literal: {reason}")]
    InvalidDatum { reason: LiteralError, span: Span },
    /// A named entry with no body, or `()`.
    #[error("sequence has no elements")]
    EmptySequence { span: Span },
    /// A label template that cannot be rendered for this entry.
    #[error("invalid label: {reason}")]
    InvalidLabel { reason: LabelError, span: Span },
}

impl ParseError {
    #[cold]
    pub(crate) fn unexpected(token: &Token, expected: &'static str) -> Self {
        ParseError::UnexpectedToken {
            token: token.clone(),
            expected,
        }
    }

    /// Where the error occurred; `None` at end of input.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnexpectedEnd => None,
            ParseError::UnexpectedToken { token, .. } => Some(token.span),
            ParseError::InvalidDatum { span, .. }
            | ParseError::EmptySequence { span }
            | ParseError::InvalidLabel { span, .. } => Some(*span),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::UnexpectedEnd => ErrorCode::E1002,
            ParseError::InvalidDatum { .. } => ErrorCode::E1003,
            ParseError::EmptySequence { .. } => ErrorCode::E1004,
            ParseError::InvalidLabel { .. } => ErrorCode::E2001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.span() {
            Some(span) => diag.with_span(span),
            None => diag,
        }
    }
}
