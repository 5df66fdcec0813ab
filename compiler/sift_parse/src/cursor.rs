//! Token cursor for navigating the token stream.

use sift_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Forward-only position in a [`TokenList`].
///
/// Unlike a lexer with an explicit EOF token, running off the end is
/// represented by `current()` returning `None`.
pub(crate) struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> Option<&'a TokenKind> {
        self.current().map(|token| &token.kind)
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consume the current token. Fails with `UnexpectedEnd` past the end.
    pub(crate) fn advance(&mut self) -> Result<&'a Token, ParseError> {
        let token = self.current().ok_or(ParseError::UnexpectedEnd)?;
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.pos += 1;
        Ok(token)
    }

    /// Consume a token of exactly `kind`, returning its span.
    pub(crate) fn expect(
        &mut self,
        kind: &TokenKind,
        expected: &'static str,
    ) -> Result<Span, ParseError> {
        match self.current() {
            Some(token) if token.kind == *kind => Ok(self.advance()?.span),
            Some(token) => Err(ParseError::unexpected(token, expected)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}
