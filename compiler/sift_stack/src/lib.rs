//! Stack safety for recursion over nested pattern groups.
//!
//! Grammar groups nest without limit (`((((x01))))`), and the parser, the
//! slot-assignment pass and the matcher all recurse once per level. Each of
//! those recursive steps runs inside [`ensure_sufficient_stack`], which grows
//! the native stack on demand instead of overflowing it.
//!
//! - **Native targets**: the `stacker` crate grows the stack.
//! - **WASM targets**: no-op passthrough.

/// Grow the stack when less than this much remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
