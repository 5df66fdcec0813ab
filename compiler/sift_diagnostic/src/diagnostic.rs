//! The [`Diagnostic`] type and its consolidated rendering.

use std::fmt;

use sift_ir::Span;

use crate::span_utils::span_start_line_col;
use crate::ErrorCode;

/// A positioned, human-readable compilation failure.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    /// Searchable error code.
    pub code: ErrorCode,
    /// What went wrong.
    pub message: String,
    /// Where it went wrong; `None` when input ended unexpectedly.
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Start an error diagnostic with an empty message.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            span: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Resolve the span to a 1-based `(line, column)` in `source`.
    pub fn line_col(&self, source: &str) -> Option<(u32, u32)> {
        self.span.map(|span| span_start_line_col(source, span))
    }

    /// Render the one-line message shown to the user before any matching
    /// begins.
    ///
    /// `Syntax error in pattern <source_name> at line <L> col <C> - <message>`,
    /// or `... at end of file - ...` when there is no position.
    pub fn render_syntax_error(&self, source_name: &str, source: &str) -> String {
        match self.line_col(source) {
            Some((line, col)) => format!(
                "Syntax error in pattern {source_name} at line {line} col {col} - {}",
                self.message
            ),
            None => format!(
                "Syntax error in pattern {source_name} at end of file - {}",
                self.message
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}
