//! Rendering of captured bytes into annotation labels.
//!
//! A named pattern carries a label such as `"Read {addr:s} = {value:B}"`.
//! [`LabelTemplate`] parses that text once, at grammar compile time, into
//! literal and placeholder segments; rendering then only looks up capture
//! buffers and formats them with one of the [`ByteFormat`] styles.
//!
//! | spec | output for `[0x01, 0x02, 0x0A]` |
//! |------|----------------------------------|
//! | none | `x01020A`                        |
//! | `s`  | `x01 x02 x0A`                    |
//! | `L`  | `655873`                         |
//! | `B`  | `66058`                          |

mod bytes;
mod label;

pub use bytes::{render_bytes, ByteFormat};
pub use label::{LabelError, LabelTemplate, Segment};
