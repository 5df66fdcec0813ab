//! Sift Eval - the incremental matching engine.
//!
//! # Architecture
//!
//! - [`MatchState`]: per-candidate cursors and capture buffers, driven
//!   through the immutable pattern tree one unit at a time
//! - [`MatchEnvironment`]: captures a candidate has published
//! - [`HintIndex`]: unit → templates table that prunes spawning
//! - [`Program`]: templates, parsed labels and hint index, built once
//! - [`Scheduler`]: spawn / advance / resolve over a unit stream
//!
//! Everything here is single-threaded and performs no I/O. Matching never
//! fails at runtime: every call on a compiled template is total.

mod environment;
mod hints;
mod matcher;
mod program;
mod scheduler;

pub use environment::MatchEnvironment;
pub use hints::{HintIndex, SpawnOrder};
pub use matcher::{MatchResult, MatchState};
pub use program::{CompiledTemplate, Program};
pub use scheduler::{Annotation, Label, Scheduler, UNNAMED_MARKER};
