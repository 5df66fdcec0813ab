//! Diagnostic system for pattern compilation errors.
//!
//! Every grammar-compilation failure becomes one [`Diagnostic`]: an error
//! code for searchability, a human-readable explanation, and the source span
//! that caused it (absent when the input simply ran out). Rendering resolves
//! the span into a 1-based line and column:
//!
//! ```text
//! Syntax error in pattern demo.sift at line 2 col 9 - unexpected `*`
//! Syntax error in pattern demo.sift at end of file - unexpected end of input
//! ```

mod diagnostic;
mod error_code;
pub mod span_utils;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
