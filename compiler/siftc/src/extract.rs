//! Picking the data byte out of an analyzer frame.
//!
//! Which field of a frame holds "the byte" depends on the analyzer that
//! produced it. Frames that carry no data for the configured kind yield
//! `None` and are skipped by the scheduler.

use std::fmt;

use serde_json::Value;
use sift_diagnostic::ErrorCode;

use crate::Frame;

/// The upstream analyzer the frames come from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    /// Async serial: every frame's `data` field is one byte.
    #[default]
    AsyncSerial,
    /// SPI, reading the `mosi` field of `result` frames.
    SpiMosi,
    /// SPI, reading the `miso` field of `result` frames.
    SpiMiso,
}

impl InputKind {
    pub const ALL: [InputKind; 3] = [InputKind::AsyncSerial, InputKind::SpiMosi, InputKind::SpiMiso];

    /// The friendly name shown in host settings.
    pub fn name(self) -> &'static str {
        match self {
            InputKind::AsyncSerial => "Async Serial",
            InputKind::SpiMosi => "SPI (use MOSI)",
            InputKind::SpiMiso => "SPI (use MISO)",
        }
    }

    /// Short command-line alias.
    pub fn alias(self) -> &'static str {
        match self {
            InputKind::AsyncSerial => "serial",
            InputKind::SpiMosi => "spi-mosi",
            InputKind::SpiMiso => "spi-miso",
        }
    }

    /// Look up a kind by friendly name or alias.
    pub fn parse(name: &str) -> Result<InputKind, ExtractError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name || kind.alias().eq_ignore_ascii_case(name))
            .ok_or_else(|| ExtractError::UnknownInputKind {
                name: name.to_owned(),
            })
    }

    fn field(self) -> &'static str {
        match self {
            InputKind::AsyncSerial => "data",
            InputKind::SpiMosi => "mosi",
            InputKind::SpiMiso => "miso",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A frame that does not fit its configured input kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("frame has no `{field}` field, which {kind} input requires")]
    MissingField { field: &'static str, kind: InputKind },
    #[error("frame field `{field}` is not a single byte: {value}")]
    NotAByte { field: &'static str, value: String },
    #[error("unknown input kind '{name}'")]
    UnknownInputKind { name: String },
}

impl ExtractError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExtractError::MissingField { .. } => ErrorCode::E3001,
            ExtractError::NotAByte { .. } => ErrorCode::E3002,
            ExtractError::UnknownInputKind { .. } => ErrorCode::E3003,
        }
    }
}

/// Extract the data byte of `frame` for `kind`.
///
/// `Ok(None)` is a valid frame without data: an SPI frame whose type is
/// not `result`.
pub fn extract_datum(kind: InputKind, frame: &Frame) -> Result<Option<u8>, ExtractError> {
    let spi = matches!(kind, InputKind::SpiMosi | InputKind::SpiMiso);
    if spi && frame.kind != "result" {
        return Ok(None);
    }
    let field = kind.field();
    let value = frame
        .data
        .get(field)
        .ok_or(ExtractError::MissingField { field, kind })?;
    as_byte(field, value).map(Some)
}

/// A byte is an integer in 0-255, or a one-element array of one (hosts
/// hand over single-byte buffers).
fn as_byte(field: &'static str, value: &Value) -> Result<u8, ExtractError> {
    let number = match value {
        Value::Array(items) => match items.as_slice() {
            [single] => single,
            _ => return Err(not_a_byte(field, value)),
        },
        other => other,
    };
    number
        .as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| not_a_byte(field, value))
}

fn not_a_byte(field: &'static str, value: &Value) -> ExtractError {
    ExtractError::NotAByte {
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests;
