//! Byte literal base resolution.
//!
//! A datum is a byte literal in one of three bases, selected by a marker
//! character at either end of the text:
//!
//! | base | leading | trailing | optional leading `0` |
//! |------|---------|----------|----------------------|
//! | 16   | `xAB`   | `ABx`    | `0xAB`               |
//! | 10   | `d16`   | `16d`    | `0d16`               |
//! | 2    | `b101`  | `101b`   | `0b101`              |
//!
//! Text made only of `0` characters is zero and needs no marker.
//! A `0` followed only by a marker (`0d`, `0x`) has no digits and is rejected.

use std::num::IntErrorKind;

/// Why a datum is not a valid byte literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LiteralError {
    #[error("`{text}` has no base marker; write it as x{text}, d{text} or b{text}")]
    MissingBase { text: String },
    #[error("`{text}` has a base marker but no digits")]
    NoDigits { text: String },
    #[error("`{digits}` is not a valid base-{base} number")]
    InvalidDigits { digits: String, base: u32 },
    #[error("`{text}` does not fit in a byte (0-255)")]
    OutOfRange { text: String },
}

fn base_of(marker: char) -> Option<u32> {
    match marker {
        'x' => Some(16),
        'd' => Some(10),
        'b' => Some(2),
        _ => None,
    }
}

/// Resolve datum text to a byte value.
pub fn resolve_byte(text: &str) -> Result<u8, LiteralError> {
    if !text.is_empty() && text.chars().all(|c| c == '0') {
        return Ok(0);
    }

    let body = strip_redundant_zero(text);
    let (base, digits) = split_marker(body).ok_or_else(|| LiteralError::MissingBase {
        text: text.to_owned(),
    })?;

    if digits.is_empty() {
        return Err(LiteralError::NoDigits {
            text: text.to_owned(),
        });
    }
    // from_str_radix tolerates a sign; datums never carry one, but `_` can
    // appear and must not be mistaken for a digit separator.
    if !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(LiteralError::InvalidDigits {
            digits: digits.to_owned(),
            base,
        });
    }

    u8::from_str_radix(digits, base).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => LiteralError::OutOfRange {
            text: text.to_owned(),
        },
        _ => LiteralError::InvalidDigits {
            digits: digits.to_owned(),
            base,
        },
    })
}

/// Drop the `0` of a `0x..` style prefix.
fn strip_redundant_zero(text: &str) -> &str {
    match text.strip_prefix('0') {
        Some(rest) if rest.chars().next().and_then(base_of).is_some() => rest,
        _ => text,
    }
}

/// Find the base marker, leading marker first.
fn split_marker(body: &str) -> Option<(u32, &str)> {
    let mut chars = body.chars();
    if let Some(base) = chars.next().and_then(base_of) {
        return Some((base, &body[1..]));
    }
    let last = body.chars().next_back()?;
    let base = base_of(last)?;
    Some((base, &body[..body.len() - last.len_utf8()]))
}
