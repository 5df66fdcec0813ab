//! Token types for the pattern grammar.
//!
//! Tokens are produced once by the lexer, consumed once by the parser and
//! then discarded. Each one records the exact source range it came from so
//! that parse errors can point at it.

use std::fmt;

use super::Span;

/// Token kinds for the pattern grammar.
///
/// `Datum` keeps the literal text: numeric base resolution is deferred to
/// the parser, which also reuses datum text as capture names.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// A run of alphanumeric / underscore characters: `xAB`, `16d`, `len`
    Datum(String),
    /// A `"`-delimited string, quotes stripped (no escapes)
    QuotedString(String),

    Semicolon, // ;
    Equals,    // =
    Dot,       // .
    Colon,     // :
    Star,      // * (reserved, no grammar rule consumes it)
    LParen,    // (
    RParen,    // )
}

impl TokenKind {
    /// Short, human-readable name of the token kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Datum(_) => "datum",
            TokenKind::QuotedString(_) => "quoted string",
            TokenKind::Semicolon => ";",
            TokenKind::Equals => "=",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Star => "*",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
        }
    }

    /// Describe this token for an error message, including its text.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Datum(text) => format!("datum `{text}`"),
            TokenKind::QuotedString(text) => format!("quoted string \"{text}\""),
            symbol => format!("`{}`", symbol.display_name()),
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Datum(text) => write!(f, "Datum({text})"),
            TokenKind::QuotedString(text) => write!(f, "QuotedString({text:?})"),
            symbol => write!(f, "{}", symbol.display_name()),
        }
    }
}

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// The ordered output of the lexer.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Get a token by position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// View the tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
