//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use quay_syntax::context::ParsingContext;
use quay_syntax::diagnostics::ParseError;
use quay_syntax::scanner::{self, Scanner, TokenType};

use super::{CliError, CliResult, ExitCode};

fn read_source(file_path: &str) -> CliResult<String> {
    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading {file_path}: {e}")))
}

/// Scan `file_path` to end of file and print one token per line.
pub fn tokens_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    match scanner::scan(&source, file_path) {
        Ok(tokens) => {
            for token in &tokens {
                if token.content.is_empty() {
                    println!("{}", token.ty);
                } else {
                    println!("{} ({})", token.ty, token.content);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Scan `file_path` in batch mode: report a diagnostic for every scan failure, resynchronize on
/// the next line, and keep scanning so a single run surfaces every diagnostic.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    tracing::debug!(file = file_path, bytes = source.len(), "checking source unit");
    let mut scanner = Scanner::new(&source, file_path);
    let mut reported = 0usize;

    loop {
        match scanner.next_token() {
            Ok(token) if token.is_eof() => break,
            Ok(token) if token.is(TokenType::Error) => {
                let message = if token.content.is_empty() {
                    "unterminated string or comment".to_string()
                } else {
                    format!("unrecognized input: {}", token.content)
                };
                report(&scanner, message);
                reported += 1;
            }
            Ok(_) => {}
            Err(e) => {
                report(&scanner, e.to_string());
                reported += 1;
                // The bad token cannot be repaired; skip its line and keep scanning.
                scanner.read_line_after_error();
            }
        }
    }

    if reported == 0 {
        println!("{file_path}: ok");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{file_path}: {reported} error(s)");
        Ok(ExitCode::FAILURE)
    }
}

/// Render one diagnostic at the scanner's current token position.
fn report(scanner: &Scanner<'_>, message: String) {
    let start = scanner.start_line();
    let end = scanner.end_line();
    let context = ParsingContext::new(
        scanner.source_name(),
        start,
        end,
        scanner.error_column().unwrap_or(0),
        scanner.lines_range(start, end),
    );
    eprint!("{}", ParseError::new(context, message).render());
}
