//! Character scanner.
//!
//! Dispatches on the current character. Multi-byte UTF-8 is only ever
//! legal inside quoted strings and datum runs; anywhere else it is reported
//! as an unexpected character with a span covering the whole code point.

use sift_ir::{Span, Token, TokenKind, TokenList};

use crate::LexError;

pub(crate) struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    tokens: TokenList,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            source,
            pos: 0,
            tokens: TokenList::new(),
        }
    }

    pub(crate) fn run(mut self) -> Result<TokenList, LexError> {
        while let Some(ch) = self.peek() {
            let start = self.pos;
            match ch {
                c if c.is_whitespace() => self.pos += c.len_utf8(),
                ';' => self.symbol(start, TokenKind::Semicolon),
                '=' => self.symbol(start, TokenKind::Equals),
                '.' => self.symbol(start, TokenKind::Dot),
                ':' => self.symbol(start, TokenKind::Colon),
                '*' => self.symbol(start, TokenKind::Star),
                '(' => self.symbol(start, TokenKind::LParen),
                ')' => self.symbol(start, TokenKind::RParen),
                '"' => self.quoted_string(start)?,
                c if c.is_alphanumeric() => self.datum(start),
                c => {
                    return Err(LexError::UnexpectedCharacter {
                        ch: c,
                        span: span(start, start + c.len_utf8()),
                    });
                }
            }
        }
        Ok(self.tokens)
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, span(start, self.pos)));
    }

    fn symbol(&mut self, start: usize, kind: TokenKind) {
        self.pos += 1;
        self.push(kind, start);
    }

    /// A datum starts with an alphanumeric character and continues through
    /// alphanumerics and underscores.
    fn datum(&mut self, start: usize) {
        let rest = &self.source[start..];
        let len = rest
            .char_indices()
            .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
            .map_or(rest.len(), |(i, _)| i);
        self.pos = start + len;
        self.push(TokenKind::Datum(rest[..len].to_owned()), start);
    }

    /// Scan from the opening quote at `start` to the next `"`. There are no
    /// escapes.
    fn quoted_string(&mut self, start: usize) -> Result<(), LexError> {
        let body_start = start + 1;
        let body = &self.source[body_start..];
        let Some(close) = memchr::memchr(b'"', body.as_bytes()) else {
            return Err(LexError::UnterminatedQuotedString {
                span: span(start, self.source.len()),
            });
        };
        self.pos = body_start + close + 1;
        self.push(TokenKind::QuotedString(body[..close].to_owned()), start);
        Ok(())
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "tokenize rejects sources longer than u32::MAX"
)]
fn span(start: usize, end: usize) -> Span {
    Span::new(start as u32, end as u32)
}
