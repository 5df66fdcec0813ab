//! Command handlers for the `sift` binary.
//!
//! Each submodule implements one command. Handlers print their own
//! errors and exit with status 1 on failure.

mod check;
mod debug;
mod explain;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::run_frames;

/// Read a pattern file, exiting with a readable message on failure.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Compile `source`, or print the syntax error and exit.
fn compile_or_exit(path: &str, source: &str) -> sift_eval::Program {
    match crate::compile(source) {
        Ok(program) => program,
        Err(diag) => {
            eprintln!("{}", diag.render_syntax_error(path, source));
            eprintln!("  ({diag}; see `sift --explain {}`)", diag.code);
            std::process::exit(1);
        }
    }
}
