//! The `run` command: annotate a frame stream.

use std::fs::File;
use std::io::{self, BufReader};

use crate::{run_stream, Analyzer, Settings};

/// Compile the configured patterns and annotate the frames, writing JSON
/// Lines to standard output.
pub fn run_frames(settings: &Settings) {
    let mut analyzer = match Analyzer::from_settings(settings) {
        Ok(analyzer) => analyzer,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout().lock();
    let result = match &settings.frames {
        Some(path) => match File::open(path) {
            Ok(file) => run_stream(&mut analyzer, BufReader::new(file), stdout),
            Err(e) => {
                eprintln!("cannot open frames '{}': {e}", path.display());
                std::process::exit(1);
            }
        },
        None => run_stream(&mut analyzer, io::stdin().lock(), stdout),
    };

    match result {
        Ok(summary) if summary.skipped > 0 => {
            eprintln!(
                "{} of {} frames skipped (no usable {} datum)",
                summary.skipped, summary.frames, settings.input
            );
        }
        Ok(_) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
