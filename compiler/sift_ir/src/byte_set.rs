//! A set of byte values using a 256-bit bitset.
//!
//! Same shape as the parser's token sets: O(1) membership via bitwise
//! operations, buildable in `const` contexts.

use std::fmt;

/// A set of `u8` values.
///
/// Bit `b % 128` of word `b / 128` is set when `b` is a member.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSet([u128; 2]);

impl ByteSet {
    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self([0; 2])
    }

    /// Create a set containing a single byte.
    #[inline]
    pub const fn single(byte: u8) -> Self {
        Self::new().with(byte)
    }

    /// Add a byte to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, byte: u8) -> Self {
        let mut words = self.0;
        words[(byte >> 7) as usize] |= 1u128 << (byte & 0x7F);
        Self(words)
    }

    /// Check if this set contains a byte.
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        (self.0[(byte >> 7) as usize] & (1u128 << (byte & 0x7F))) != 0
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&b| self.contains(b))
    }
}

impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|b| format!("x{b:02X}")))
            .finish()
    }
}
