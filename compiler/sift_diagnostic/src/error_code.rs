//! Error codes for compilation and extraction diagnostics.
//!
//! The first digit of each code names the phase that raised it.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Label template errors
/// - E3xxx: Frame extraction errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unexpected character in grammar source
    E0001,
    /// Unterminated quoted string
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// Invalid byte literal
    E1003,
    /// Sequence with no elements
    E1004,

    // Label Errors (E2xxx)
    /// Invalid label template
    E2001,

    // Extraction Errors (E3xxx)
    /// Frame is missing the field its input kind reads
    E3001,
    /// Frame field does not hold a single byte
    E3002,
    /// Unknown input kind
    E3003,
}

impl ErrorCode {
    /// The code as written in messages, e.g. `"E1001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
        }
    }

    /// One-line description, used by `sift explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unexpected character in pattern source",
            ErrorCode::E0002 => "quoted string is missing its closing `\"`",
            ErrorCode::E1001 => "token not allowed here",
            ErrorCode::E1002 => "pattern source ended in the middle of an entry",
            ErrorCode::E1003 => {
                "byte literal needs a base marker (x, d or b) and must fit in 0-255"
            }
            ErrorCode::E1004 => "a sequence or group must contain at least one element",
            ErrorCode::E2001 => "label template is malformed or names an unknown capture",
            ErrorCode::E3001 => "frame has no field for the configured input kind",
            ErrorCode::E3002 => "frame field is not a single byte",
            ErrorCode::E3003 => "unknown input kind",
        }
    }

    /// Look up a code by its text (case-insensitive).
    pub fn parse(code: &str) -> Option<ErrorCode> {
        const ALL: [ErrorCode; 10] = [
            ErrorCode::E0001,
            ErrorCode::E0002,
            ErrorCode::E1001,
            ErrorCode::E1002,
            ErrorCode::E1003,
            ErrorCode::E1004,
            ErrorCode::E2001,
            ErrorCode::E3001,
            ErrorCode::E3002,
            ErrorCode::E3003,
        ];
        ALL.into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
