//! The sift driver: turns a pattern grammar and a stream of analyzer
//! frames into labelled annotations.
//!
//! ```text
//! pattern source ─▶ compile ─▶ Program ─┐
//!                                       ├─▶ Analyzer ─▶ annotations
//! frames.jsonl ─▶ read_frames ─▶ Frame ─┘
//! ```
//!
//! The `sift` binary wraps this library with `run`, `check`, `parse` and
//! `lex` commands.

use std::sync::Once;

pub mod commands;
mod extract;
mod frames;
mod session;
mod settings;
mod tree;

pub use extract::{extract_datum, ExtractError, InputKind};
pub use frames::{read_frames, AnnotationData, AnnotationRecord, Frame, FrameReadError};
pub use session::{compile, run_stream, Analyzer, RunError, RunSummary, SetupError};
pub use settings::{PatternSource, Settings, SettingsError, INPUT_ENV};
pub use tree::{render_start_hint, render_tree};

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=sift_eval=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
