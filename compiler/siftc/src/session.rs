//! Compiling a pattern source and driving the scheduler over frames.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_eval::{Program, Scheduler};
use tracing::{debug, warn};

use crate::{
    extract_datum, read_frames, AnnotationRecord, ExtractError, Frame, FrameReadError, InputKind,
    Settings,
};

/// Compile pattern source text: lex, parse, then build the program.
///
/// Any failure aborts compilation and comes back as one positioned
/// [`Diagnostic`].
pub fn compile(source: &str) -> Result<Program, Diagnostic> {
    let tokens = sift_lexer::tokenize(source).map_err(|err| err.to_diagnostic())?;
    let templates = sift_parse::parse(&tokens).map_err(|err| err.to_diagnostic())?;
    // The parser has already checked every label against its captures and
    // reported failures at the label's span. Templates carry no spans, so
    // an error here could only come from a parser that skipped that check.
    Program::new(templates)
        .map_err(|err| Diagnostic::error(ErrorCode::E2001).with_message(err.to_string()))
}

/// The analyzer could not be set up from its settings.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("cannot read pattern file '{path}': {source}")]
    Io { path: String, source: io::Error },
    /// The consolidated syntax error message.
    #[error("{0}")]
    Syntax(String),
}

/// A compiled program plus the live scheduler for one frame stream.
pub struct Analyzer {
    input: InputKind,
    scheduler: Scheduler<f64>,
}

impl Analyzer {
    pub fn new(program: Arc<Program>, input: InputKind) -> Self {
        Analyzer {
            input,
            scheduler: Scheduler::new(program),
        }
    }

    /// Load and compile the configured pattern source.
    pub fn from_settings(settings: &Settings) -> Result<Self, SetupError> {
        let name = settings.source.name();
        let source = settings.source.load().map_err(|source| SetupError::Io {
            path: name.clone(),
            source,
        })?;
        let program = compile(&source)
            .map_err(|diag| SetupError::Syntax(diag.render_syntax_error(&name, &source)))?;
        debug!(
            source = %name,
            patterns = program.len(),
            input = %settings.input,
            "analyzer ready"
        );
        Ok(Analyzer::new(Arc::new(program), settings.input))
    }

    pub fn input(&self) -> InputKind {
        self.input
    }

    pub fn program(&self) -> &Program {
        self.scheduler.program()
    }

    /// Feed one frame, returning the annotation it completes, if any.
    ///
    /// A frame that carries no data for the input kind leaves every
    /// candidate untouched.
    pub fn decode(&mut self, frame: &Frame) -> Result<Option<AnnotationRecord>, ExtractError> {
        let unit = extract_datum(self.input, frame)?;
        Ok(self
            .scheduler
            .feed(unit, frame.start_time, frame.end_time)
            .map(AnnotationRecord::from))
    }
}

/// Counters for one [`run_stream`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames read.
    pub frames: usize,
    /// Frames dropped because their datum could not be extracted.
    pub skipped: usize,
    /// Annotations written.
    pub annotations: usize,
}

/// A run that had to stop.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Frames(#[from] FrameReadError),
    #[error("cannot write annotation: {0}")]
    Output(#[source] io::Error),
}

/// Decode a JSON Lines frame stream, writing one JSON line per annotation.
///
/// Frames whose datum cannot be extracted are logged and skipped; an
/// unreadable frame line stops the run.
pub fn run_stream<R: BufRead, W: Write>(
    analyzer: &mut Analyzer,
    input: R,
    mut output: W,
) -> Result<RunSummary, RunError> {
    let mut summary = RunSummary::default();
    for frame in read_frames(input) {
        let frame = frame?;
        summary.frames += 1;
        match analyzer.decode(&frame) {
            Ok(Some(record)) => {
                serde_json::to_writer(&mut output, &record)
                    .map_err(|err| RunError::Output(err.into()))?;
                output.write_all(b"\n").map_err(RunError::Output)?;
                summary.annotations += 1;
            }
            Ok(None) => {}
            Err(err) => {
                warn!(
                    code = %err.code(),
                    start_time = frame.start_time,
                    error = %err,
                    "skipping frame"
                );
                summary.skipped += 1;
            }
        }
    }
    output.flush().map_err(RunError::Output)?;
    debug!(
        frames = summary.frames,
        skipped = summary.skipped,
        annotations = summary.annotations,
        "frame stream finished"
    );
    Ok(summary)
}
