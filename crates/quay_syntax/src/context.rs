//! Positional snapshots of source text, used to render diagnostics.

/// An immutable snapshot of where in the source a diagnostic points.
///
/// Lines are 1-based; `column` is a 0-based byte offset into the raw line. `code` holds the raw
/// text of lines `start_line..=end_line`, possibly fewer when the source had fewer lines, or
/// none at all when a context could not be reconstructed (a degraded context is still a valid
/// context; diagnostics must never fail to build one).
///
/// Grammar logic never consumes a `ParsingContext`; it exists purely for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingContext {
    pub source_name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub column: usize,
    pub code: Vec<String>,
}

impl ParsingContext {
    pub fn new(
        source_name: impl Into<String>,
        start_line: usize,
        end_line: usize,
        column: usize,
        code: Vec<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            start_line,
            end_line,
            column,
            code,
        }
    }

    /// A context with no excerpt, for when the implicated lines cannot be retrieved.
    pub fn degraded(source_name: impl Into<String>, line: usize) -> Self {
        Self::new(source_name, line, line, 0, Vec::new())
    }

    /// The excerpt lines rendered with their `line:` prefix.
    pub fn numbered_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.code
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}:{}", self.start_line + i, line))
    }

    /// Index into `code` of the line the column points into: the end line of the construct,
    /// clamped to the excerpt actually available.
    pub fn focus_index(&self) -> usize {
        self.code
            .len()
            .saturating_sub(1)
            .min(self.end_line.saturating_sub(self.start_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_lines_use_absolute_line_numbers() {
        let ctx = ParsingContext::new("f.qy", 4, 5, 0, vec!["a".into(), "b".into()]);
        let lines: Vec<String> = ctx.numbered_lines().collect();
        assert_eq!(lines, vec!["4:a".to_string(), "5:b".to_string()]);
    }

    #[test]
    fn test_focus_index_clamps_to_excerpt() {
        let ctx = ParsingContext::new("f.qy", 4, 6, 0, vec!["a".into(), "b".into()]);
        assert_eq!(ctx.focus_index(), 1);
        let ctx = ParsingContext::new("f.qy", 4, 4, 0, vec!["a".into()]);
        assert_eq!(ctx.focus_index(), 0);
        let ctx = ParsingContext::degraded("f.qy", 4);
        assert_eq!(ctx.focus_index(), 0);
    }
}
