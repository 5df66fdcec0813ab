//! Sift IR - shared data structures for the byte-pattern compiler.
//!
//! This crate contains the types every stage agrees on:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - Pattern templates (the compiled, immutable pattern trees)
//! - `ByteSet` / `StartHint` for start-of-match pruning
//!
//! # Design Philosophy
//!
//! Templates are immutable once compiled and are shared read-only by every
//! candidate. The small amount of genuinely mutable matching state (sequence
//! cursors and capture buffers) is addressed through slot indices assigned
//! at compile time, so a candidate only allocates a flat [`StateLayout`]-sized
//! state block instead of deep-copying the tree.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod byte_set;
mod pattern;
mod span;
mod token;

pub use byte_set::ByteSet;
pub use pattern::{
    BufferSlot, CursorSlot, EmptySequenceError, Pattern, StartHint, StateLayout, Template,
};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
