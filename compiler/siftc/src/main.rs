//! sift command-line driver.

use siftc::commands::{check_file, explain_error, lex_file, parse_file, run_frames};
use siftc::{Settings, INPUT_ENV};

fn main() {
    siftc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let env_input = std::env::var(INPUT_ENV).ok();
            match Settings::from_args(&args[2..], env_input.as_deref()) {
                Ok(settings) => run_frames(&settings),
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!();
                    eprintln!("Usage: sift run --pattern=<text> | --pattern-file=<path> [--input=<kind>] [frames.jsonl]");
                    std::process::exit(1);
                }
            }
        }
        "check" | "parse" | "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: sift {command} <file.sift>");
                std::process::exit(1);
            }
            match command.as_str() {
                "check" => check_file(&args[2]),
                "parse" => parse_file(&args[2]),
                _ => lex_file(&args[2]),
            }
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: sift --explain <code>");
                eprintln!("Example: sift --explain E1001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("sift {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("sift: byte-stream pattern matcher");
    println!();
    println!("Usage: sift <command> [options]");
    println!();
    println!("Commands:");
    println!("  run [options] [frames]  Annotate a JSON Lines frame stream (default: stdin)");
    println!("  check <file.sift>       Compile a pattern file and report errors");
    println!("  parse <file.sift>       Show compiled pattern trees and start hints");
    println!("  lex <file.sift>         Tokenize and display tokens");
    println!("  --explain <code>        Explain an error code (e.g., E1001)");
    println!("  help                    Show this help message");
    println!("  version                 Show version information");
    println!();
    println!("Run options:");
    println!("  --pattern=<text>        Pattern grammar given inline");
    println!("  --pattern-file=<path>   Pattern grammar read from a file");
    println!("  --input=<kind>          serial (default), spi-mosi, spi-miso");
    println!("                          or a full name such as \"SPI (use MISO)\"");
    println!();
    println!("Environment:");
    println!("  {INPUT_ENV}              Default input kind");
    println!("  RUST_LOG                Log filter, e.g. sift_eval=trace");
}
