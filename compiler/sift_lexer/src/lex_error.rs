//! Lexer error types.

use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_ir::Span;

/// A lexical failure. Lexing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// A character that cannot begin any token.
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, span: Span },
    /// A `"` with no matching closing `"`. The span runs to end of input.
    #[error("unterminated quoted string")]
    UnterminatedQuotedString { span: Span },
    /// Source longer than spans can address.
    #[error("pattern source is too large ({len} bytes)")]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// Where the error occurred, if it has a position.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedQuotedString { span } => Some(*span),
            LexError::SourceTooLarge { .. } => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnexpectedCharacter { .. } | LexError::SourceTooLarge { .. } => {
                ErrorCode::E0001
            }
            LexError::UnterminatedQuotedString { .. } => ErrorCode::E0002,
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
