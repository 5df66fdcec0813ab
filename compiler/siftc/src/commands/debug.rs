//! Debug commands: `parse` and `lex` for inspecting compiled patterns.

use crate::{render_start_hint, render_tree};

use super::{compile_or_exit, read_file};

/// Compile a file and print each template as a tree.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let program = compile_or_exit(path, &source);

    println!("Parse result for '{path}' ({} patterns):", program.len());
    for (index, compiled) in program.templates().iter().enumerate() {
        let template = compiled.template();
        let layout = template.layout();
        println!();
        println!(
            "#{index}: start {} ({} cursors, {} buffers)",
            render_start_hint(&template.start_hint()),
            layout.cursors,
            layout.buffers
        );
        print!("{}", render_tree(template));
    }
    println!();
    println!(
        "Start hints: {} unit values indexed, {} unbounded patterns",
        program.hints().hinted_units(),
        program.hints().fallback().len()
    );
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let tokens = match sift_lexer::tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", err.to_diagnostic().render_syntax_error(path, &source));
            std::process::exit(1);
        }
    };

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in tokens.iter() {
        println!("  {token:?}");
    }
}
