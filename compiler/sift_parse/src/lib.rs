//! Parser for the sift pattern grammar.
//!
//! Compiles the lexer's [`TokenList`] into an ordered list of immutable
//! [`Template`]s, one per grammar entry. Parsing is all-or-nothing: the
//! first error aborts compilation and is returned with the span of the
//! offending token.
//!
//! Beyond tree building, the parser resolves byte literal bases and checks
//! that every placeholder in a named entry's label refers to a capture in
//! that entry, so no label can fail to render for want of a capture.

mod cursor;
mod error;
mod grammar;
mod literal;

pub use error::ParseError;
pub use literal::{resolve_byte, LiteralError};

use sift_ir::{Template, TokenList};
use tracing::debug;

/// Parse a token list into templates, in declaration order.
pub fn parse(tokens: &TokenList) -> Result<Vec<Template>, ParseError> {
    let templates = grammar::Parser::new(cursor::Cursor::new(tokens)).program()?;
    debug!(
        tokens = tokens.len(),
        templates = templates.len(),
        "parsed pattern source"
    );
    Ok(templates)
}
