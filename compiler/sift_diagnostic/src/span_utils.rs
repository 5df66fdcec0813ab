//! Line and column lookup for diagnostic positions.
//!
//! A single diagnostic is rendered per failed compilation, so the lookups
//! scan the source once per call rather than building a line table.

use sift_ir::Span;

/// Compute 1-based (line, column) from a byte offset.
///
/// The column is computed as the number of characters (not bytes)
/// from the start of the line. Offsets past the end clamp to the end.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let bytes = source.as_bytes();
    let mut line = 1u32;
    let mut line_start = 0usize;

    for (i, &byte) in bytes.iter().enumerate().take(offset) {
        if byte == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let col_text = source.get(line_start..offset).unwrap_or("");
    let col = u32::try_from(col_text.chars().count()).unwrap_or(u32::MAX - 1) + 1;

    (line, col)
}

/// 1-based (line, column) of the start of a span.
pub fn span_start_line_col(source: &str, span: Span) -> (u32, u32) {
    offset_to_line_col(source, span.start)
}
