//! Byte-buffer rendering styles.
//!
//! Lowercase specs change presentation; uppercase specs change how the
//! bytes are interpreted.

use std::fmt::Write;

/// How a capture buffer is turned into text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ByteFormat {
    /// Continuous uppercase hex with a single `x` prefix: `x01020A`.
    #[default]
    Packed,
    /// `s`: one `x`-prefixed byte per unit: `x01 x02 x0A`.
    Spaced,
    /// `L`: little-endian unsigned integer in decimal.
    LittleEndian,
    /// `B`: big-endian unsigned integer in decimal.
    BigEndian,
}

impl ByteFormat {
    /// Resolve a placeholder spec. The empty spec is [`ByteFormat::Packed`].
    pub fn from_spec(spec: &str) -> Option<Self> {
        match spec {
            "" => Some(ByteFormat::Packed),
            "s" => Some(ByteFormat::Spaced),
            "L" => Some(ByteFormat::LittleEndian),
            "B" => Some(ByteFormat::BigEndian),
            _ => None,
        }
    }

    pub fn spec(self) -> &'static str {
        match self {
            ByteFormat::Packed => "",
            ByteFormat::Spaced => "s",
            ByteFormat::LittleEndian => "L",
            ByteFormat::BigEndian => "B",
        }
    }
}

/// Render `bytes` in the given style.
///
/// The decimal styles accept buffers of any length. An empty buffer renders
/// as the empty string in the hex styles and as `0` in the decimal ones.
pub fn render_bytes(bytes: &[u8], format: ByteFormat) -> String {
    match format {
        ByteFormat::Packed => {
            let mut out = String::with_capacity(1 + bytes.len() * 2);
            if !bytes.is_empty() {
                out.push('x');
            }
            for byte in bytes {
                let _ = write!(out, "{byte:02X}");
            }
            out
        }
        ByteFormat::Spaced => {
            let mut out = String::with_capacity(bytes.len() * 4);
            for (i, byte) in bytes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "x{byte:02X}");
            }
            out
        }
        ByteFormat::BigEndian => big_endian_decimal(bytes.to_vec()),
        ByteFormat::LittleEndian => big_endian_decimal(bytes.iter().rev().copied().collect()),
    }
}

/// Decimal text of an arbitrary-width big-endian integer, by repeated
/// long division by ten.
#[allow(
    clippy::cast_possible_truncation,
    reason = "quotient digit is at most (9 * 256 + 255) / 10 = 255 and remainder is below 10"
)]
fn big_endian_decimal(mut number: Vec<u8>) -> String {
    let mut digits = Vec::new();
    loop {
        let leading_zeros = number.iter().take_while(|&&b| b == 0).count();
        number.drain(..leading_zeros);
        if number.is_empty() {
            break;
        }
        let mut remainder = 0u32;
        for byte in &mut number {
            let acc = remainder * 256 + u32::from(*byte);
            *byte = (acc / 10) as u8;
            remainder = acc % 10;
        }
        digits.push(b'0' + remainder as u8);
    }
    if digits.is_empty() {
        return "0".to_owned();
    }
    digits.iter().rev().map(|&d| char::from(d)).collect()
}

#[cfg(test)]
mod tests;
