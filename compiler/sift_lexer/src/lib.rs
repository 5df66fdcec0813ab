//! Tokenizer for the pattern grammar.
//!
//! Scans grammar source left to right and produces a flat [`TokenList`].
//! Whitespace separates tokens and is otherwise ignored. The lexer does not
//! interpret datum text; base resolution belongs to the parser.
//!
//! ```text
//! "Get Version" = x01 xFE;
//! └─QuotedString┘ = └Datum┘ └Datum┘ ;
//! ```

mod lex_error;
mod scanner;

pub use lex_error::LexError;

use sift_ir::TokenList;

/// Tokenize grammar source text.
///
/// Fails on the first character that cannot start a token, or on a quoted
/// string with no closing quote.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::SourceTooLarge { len: source.len() });
    }
    scanner::Scanner::new(source).run()
}
