/// Diagnostic construction: context reconstruction, failure factories, scope heuristics.
///
/// Failing is part of the contract here: no `ParseError` leaves this module without a
/// [`ParsingContext`], and any active backup session is discarded before the error propagates,
/// so replay state never leaks into the failure path.
impl<'s> ParserCore<'s> {
    /// Snapshot the current parsing context from the scanner.
    pub fn context(&self) -> ParsingContext {
        let start = self.scanner.start_line();
        let end = self.scanner.end_line();
        ParsingContext::new(
            self.scanner.source_name(),
            start,
            end,
            self.scanner.error_column().unwrap_or(0),
            self.scanner.lines_range(start, end),
        )
    }

    /// Context for a failure in progress: read the rest of the offending line first (so the
    /// excerpt is complete and scanning could resume), then pick the most useful position.
    ///
    /// When the scanner has no usable column (typically because the current token is
    /// end-of-file), the context degrades to the end of the last line that has any text.
    fn context_during_error(&mut self) -> ParsingContext {
        let line_before = self.scanner.line();
        self.scanner.read_line_after_error();
        if line_before < self.scanner.line() {
            return self.context();
        }
        if self.scanner.error_column().is_none() {
            let line = line_before.min(self.scanner.line_count()).max(1);
            let Some(text) = self.scanner.line_text(line) else {
                return ParsingContext::degraded(self.scanner.source_name(), line);
            };
            let column = text.len();
            let code = vec![text.to_string()];
            return ParsingContext::new(self.scanner.source_name(), line, line, column, code);
        }
        self.context()
    }

    /// Convert a scanner failure into the one structured diagnostic shape. Scan errors carry
    /// the same contract as parse errors: position always included, backup never left open.
    fn scan_failure(&mut self, error: ScanError) -> ParseError {
        self.discard_backup();
        let context = self.context();
        ParseError::new(context, error.to_string())
    }

    /// Build a parse failure at the current token.
    ///
    /// The offending token's text, when present, is appended to the message. When the token has
    /// no text (a missing-term failure), the column is nudged one cell left so the caret points
    /// at the gap rather than at the delimiter after it.
    pub fn fail(&mut self, message: impl Into<String>) -> ParseError {
        self.discard_backup();
        let mut message = message.into();
        let mut context = self.context_during_error();
        if self.token.content.is_empty() {
            context.column = context.column.saturating_sub(1);
            return ParseError::new(context, message);
        }
        message = append_found_term(message, &self.token.content);
        ParseError::new(context, message)
    }

    /// Build a parse failure, proposing corrections from the flat list of `expected` terms.
    pub fn fail_expecting(&mut self, message: impl Into<String>, expected: &[&str]) -> ParseError {
        self.discard_backup();
        let mut message = message.into();
        let mut context = self.context_during_error();
        let term = self.token.content.clone();
        if term.is_empty() {
            context.column = context.column.saturating_sub(1);
        } else {
            message = append_found_term(message, &term);
        }
        let help = help_message(&context, &term, expected);
        ParseError::with_help(context, message, help)
    }

    /// Build a scope-aware parse failure: the suggestion vocabulary comes from the enclosing
    /// construct, and the column is re-anchored by a per-scope heuristic.
    ///
    /// The heuristics are best-effort text probes, not parsers of the surrounding construct;
    /// each degrades to the unmodified context when the text it looks for is absent.
    pub fn fail_in_scope(
        &mut self,
        message: impl Into<String>,
        scope_name: &str,
        scope: DeclScope,
    ) -> ParseError {
        self.discard_backup();
        let mut message = message.into();
        let context = self.context_during_error();
        let term = self.token.content.clone();
        if !term.is_empty() {
            message = append_found_term(message, &term);
        }
        let vocabulary = scopes::keywords_for_scope(scope);
        match scope {
            DeclScope::InputPort => {
                // Widen to the whole port declaration block; when its last line carries the
                // closing brace, anchor the column there (the failure is usually a field
                // missing just before it).
                let mut context = self.whole_scope_context(&context);
                if let Some(column) = context.code.last().and_then(|line| line.find('}')) {
                    context.column = column;
                }
                let help = help_message(&context, &term, vocabulary);
                ParseError::with_help(context, message, help)
            }
            DeclScope::Execution => {
                let context = self.whole_scope_context(&context);
                let help = help_message(&context, &term, vocabulary);
                ParseError::with_help(context, message, help)
            }
            DeclScope::Service => {
                if term.is_empty() && message.contains("unexpected term found inside service") {
                    // Empty service body that also lacks a closing brace: point at the opening
                    // brace of the declaration line instead of at end-of-file.
                    let mut context = self.whole_scope_context(&context);
                    context.code.truncate(1);
                    context.end_line = context.start_line;
                    if let Some(column) = context.code.first().and_then(|line| line.rfind('{')) {
                        context.column = column;
                    }
                    let message =
                        format!("service {scope_name} is empty and does not have an ending }}");
                    let help = help_message(&context, &term, vocabulary);
                    return ParseError::with_help(context, message, help);
                }
                let help = help_message(&context, &term, vocabulary);
                ParseError::with_help(context, message, help)
            }
            DeclScope::Import => {
                // Re-derive position and offending term from the import line itself: the term
                // after `from <module>` is the one that went wrong, and the column is where it
                // starts, counted without the separating spaces.
                let mut context = self.whole_scope_context(&context);
                let mut term = term;
                if let Some(first) = context.code.first() {
                    let parts: Vec<&str> = first.split_whitespace().collect();
                    if parts.len() >= 3 {
                        context.column = parts[0].len() + parts[1].len();
                        term = parts[2].to_string();
                    }
                }
                let help = help_message(&context, &term, vocabulary);
                ParseError::with_help(context, message, help)
            }
            DeclScope::Interface | DeclScope::Outer => {
                let help = help_message(&context, &term, vocabulary);
                ParseError::with_help(context, message, help)
            }
        }
    }

    /// Rebuild `context` widened to every line between the pinned start and end lines.
    fn whole_scope_context(&self, context: &ParsingContext) -> ParsingContext {
        let code = self.scanner.lines_range(context.start_line, context.end_line);
        ParsingContext::new(
            self.scanner.source_name(),
            context.start_line,
            context.end_line,
            context.column,
            code,
        )
    }
}

/// `<message>[: <offending token text>]`, with a fallback when the message is empty.
fn append_found_term(message: String, term: &str) -> String {
    if message.is_empty() {
        format!("found term: {term}")
    } else {
        format!("{message}: {term}")
    }
}
