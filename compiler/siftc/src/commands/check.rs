//! The `check` command: compile a pattern file without running it.

use super::{compile_or_exit, read_file};

/// Compile a file and report how many patterns it defines.
pub fn check_file(path: &str) {
    let source = read_file(path);
    let program = compile_or_exit(path, &source);
    println!("OK: {path} ({} patterns)", program.len());
}
