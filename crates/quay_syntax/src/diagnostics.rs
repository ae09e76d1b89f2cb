//! Diagnostics for the Quay front end.
//!
//! Two failure classes exist: scan-time ([`ScanError`]: a malformed string escape) and
//! parse-time ([`ParseError`]: a token that does not fit the grammar). Both are fatal to the
//! current parse attempt and both surface as a [`ParseError`] carrying a
//! [`ParsingContext`]; a diagnostic is never raised without one.
//!
//! The human-facing text contract is `<message>[: <offending token text>]`, optionally followed
//! by a help block: either a flat `possible inputs are` listing, or a `your term is similar to`
//! suggestion with the corrected source line and a caret at the offending column (see
//! [`help_message`]).

use miette::Diagnostic;
use thiserror::Error;

use crate::context::ParsingContext;
use crate::suggest;

/// A fatal error raised while turning characters into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ScanError {
    /// A string literal used an escape the language does not define.
    #[error("malformed string: unrecognized escape `\\{escape}` on line {line}")]
    MalformedEscape { escape: char, line: usize },
}

/// A structured parse failure: a positioned message plus an optional rendered help block.
///
/// Construction goes through the parsing support layer (`ParserCore::fail` and friends), which
/// guarantees a reconstructed [`ParsingContext`] and formats the message per the text contract.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub context: ParsingContext,
    #[help]
    pub help: Option<String>,
}

impl ParseError {
    pub fn new(context: ParsingContext, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context,
            help: None,
        }
    }

    pub fn with_help(context: ParsingContext, message: impl Into<String>, help: String) -> Self {
        Self {
            message: message.into(),
            context,
            help: Some(help),
        }
    }

    /// Render the full human-facing diagnostic: header, numbered source excerpt with a caret at
    /// the offending column, and the help block when present.
    pub fn render(&self) -> String {
        let ctx = &self.context;
        let mut out = format!("{}:{}: error: {}\n", ctx.source_name, ctx.start_line, self.message);
        for line in ctx.numbered_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        if !ctx.code.is_empty() {
            let focus = ctx.focus_index();
            let prefix_len = format!("{}:", ctx.start_line + focus).len();
            out.push_str(&" ".repeat(prefix_len + ctx.column));
            out.push_str("^\n");
        }
        if let Some(help) = &self.help {
            out.push_str(help);
            out.push('\n');
        }
        out
    }
}

/// Build the help block for a failed assertion.
///
/// - A missing term (empty `term`) lists every legal input.
/// - A term with no vocabulary entry within edit distance [`suggest::MAX_SUGGEST_DISTANCE`]
///   also lists every legal input.
/// - A near miss proposes the close matches and re-renders the offending excerpt with the best
///   one substituted, caret-annotated at the exact column.
pub fn help_message(context: &ParsingContext, term: &str, vocabulary: &[&str]) -> String {
    if term.is_empty() {
        return format!(
            "You are missing a keyword. Possible inputs are:\n{}",
            vocabulary.join(", ")
        );
    }
    let near = suggest::similar_terms(term, vocabulary);
    if near.is_empty() {
        return format!(
            "The term did not match possible terms. Possible inputs are:\n{}",
            vocabulary.join(", ")
        );
    }

    let mut help = format!(
        "Your term is similar to what would be valid input: {}. Perhaps you meant:\n",
        near.join(", ")
    );
    if context.code.is_empty() {
        // Degraded context: the suggestion stands on its own, without an excerpt.
        help.push_str(near[0]);
        return help;
    }

    let focus = context.focus_index();
    for (i, line) in context.code.iter().enumerate() {
        let line_no = context.start_line + i;
        if i == focus {
            help.push_str(&format!("{line_no}:{}\n", splice(line, context.column, term.len(), near[0])));
        } else {
            help.push_str(&format!("{line_no}:{line}\n"));
        }
    }
    let prefix_len = format!("{}:", context.start_line + focus).len();
    help.push_str(&" ".repeat(prefix_len + context.column));
    help.push('^');
    help
}

/// Replace `removed` bytes of `line` at `column` with `replacement`. Degrades to the unchanged
/// line when the requested span does not fall on character boundaries or is out of range.
fn splice(line: &str, column: usize, removed: usize, replacement: &str) -> String {
    let Some(head) = line.get(..column) else {
        return line.to_string();
    };
    let tail = line.get(column + removed..).unwrap_or("");
    format!("{head}{replacement}{tail}")
}
