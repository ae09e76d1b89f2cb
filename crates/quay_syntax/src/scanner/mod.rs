//! Scanner for the Quay language.
//!
//! Converts source text into a lazy stream of tokens, handling:
//! - Keywords and identifiers (keywords resolved against the `quay_core` registry)
//! - Integer and string literals (with backslash escapes)
//! - One- and two-character operators and punctuation
//! - Block and line comments (invisible to the token stream)
//!
//! The scanner also keeps the raw source lines and the position of the current token, so the
//! layer above can reconstruct a [`crate::context::ParsingContext`] when a parse fails.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (`TokenType`, `Token`)

pub mod tokens;

pub use tokens::{Token, TokenType, resolve_word};

use std::iter::Peekable;
use std::str::CharIndices;

use crate::diagnostics::ScanError;

/// State of the tokenizer between the first character of a token and its emission.
///
/// One variant per in-progress token shape; two-character operators get a variant for their
/// first character, comments get a variant per phase. Adding a new two-character operator means
/// adding one state here and one disambiguating branch in the scan loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Accumulating an identifier or keyword.
    Word,
    /// Accumulating an integer literal.
    Integer,
    /// Seen `-`: minus operator, or the sign of an integer literal.
    Minus,
    /// Inside a string literal.
    Str,
    /// Inside a string literal, immediately after a backslash.
    StrEscape,
    /// Seen `+`: plus, or the first half of `++`.
    Plus,
    /// Seen `=`: assignment, or the first half of `==`.
    Assign,
    /// Seen `<`.
    Less,
    /// Seen `>`.
    Greater,
    /// Seen `!`.
    Bang,
    /// Seen `/`: divide, or the start of a comment.
    Slash,
    /// Inside `/* ... */`.
    BlockComment,
    /// Inside `/* ... */`, immediately after a `*`.
    BlockCommentStar,
    /// Inside `// ...`.
    LineComment,
}

/// Scanner over one source unit.
///
/// Created once per source unit and exclusively owned by one parsing core for the lifetime of
/// one parse; the pair is not re-entrant and is never shared across parses. The whole source is
/// available up front, so scanning never blocks and the raw lines can be retained for
/// diagnostics.
pub struct Scanner<'a> {
    source_name: String,
    chars: Peekable<CharIndices<'a>>,
    /// Raw source lines; index 0 is line 1.
    lines: Vec<&'a str>,
    /// Byte offset just past the last consumed character.
    current_pos: usize,
    /// Current line, 1-based. Incremented when a LF is consumed.
    line: usize,
    /// Byte offset of the start of the current line.
    line_start: usize,
    /// First line of the current token (or of the construct pinned by the parser).
    start_line: usize,
    /// Last line of the current token (or of the construct pinned by the parser).
    end_line: usize,
    /// Column of the current token's first character, when known.
    token_start_col: Option<usize>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source unit.
    pub fn new(source: &'a str, source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            chars: source.char_indices().peekable(),
            lines: source.lines().collect(),
            current_pos: 0,
            line: 1,
            line_start: 0,
            start_line: 1,
            end_line: 1,
            token_start_col: None,
        }
    }

    // ========================================================================
    // Position surface
    // ========================================================================

    /// Current scan line, 1-based.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// First line of the current token. Pinnable via [`Self::set_start_line`] so the parser can
    /// widen a diagnostic to a whole multi-line construct; the pin lasts until the next token is
    /// scanned.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn set_start_line(&mut self, line: usize) {
        self.start_line = line;
    }

    /// Last line of the current token. Pinnable via [`Self::set_end_line`].
    pub fn end_line(&self) -> usize {
        self.end_line
    }

    pub fn set_end_line(&mut self, line: usize) {
        self.end_line = line;
    }

    /// Column (0-based byte offset into its line) of the current token's first character.
    /// `None` when there is no current token text to point at (e.g. at end of file).
    pub fn error_column(&self) -> Option<usize> {
        self.token_start_col
    }

    /// The raw text of a line, 1-based. `None` when out of range.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        line.checked_sub(1).and_then(|i| self.lines.get(i).copied())
    }

    /// Number of lines in the source unit.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The raw lines `start..=end`, 1-based, clamped to the source. Out-of-range requests
    /// degrade to an empty vector rather than failing.
    pub fn lines_range(&self, start: usize, end: usize) -> Vec<String> {
        if start == 0 || end < start {
            return Vec::new();
        }
        self.lines
            .iter()
            .skip(start - 1)
            .take(end - start + 1)
            .map(|l| (*l).to_string())
            .collect()
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start = self.current_pos;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Column of the next unconsumed character within the current line.
    fn column(&self) -> usize {
        self.current_pos - self.line_start
    }

    // ========================================================================
    // Tokenization
    // ========================================================================

    /// Produce the next token.
    ///
    /// Separators (space, tab, CR, LF) are skipped; LF advances the line counter. Once the
    /// input is exhausted every call returns an end-of-file token. Comments are invisible:
    /// scanning restarts after one so the caller only ever sees real tokens.
    ///
    /// ## Errors
    /// Returns [`ScanError`] for an unrecognized string escape. An unrecognized character, or a
    /// string/comment left open at end of input, yields an [`TokenType::Error`] token instead.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        loop {
            while let Some(c) = self.peek() {
                if is_separator(c) {
                    self.advance();
                } else {
                    break;
                }
            }
            self.start_line = self.line;
            let Some(first) = self.peek() else {
                self.token_start_col = None;
                self.end_line = self.line;
                return Ok(Token::eof());
            };
            self.token_start_col = Some(self.column());
            self.end_line = self.line;
            if let Some(token) = self.scan_token(first)? {
                self.end_line = self.line;
                return Ok(token);
            }
            // A comment was consumed; rescan for the next real token.
        }
    }

    /// Run the token state machine from `first`. Returns `Ok(None)` when the characters
    /// consumed turned out to be a comment.
    fn scan_token(&mut self, first: char) -> Result<Option<Token>, ScanError> {
        let mut buf = String::new();
        let mut state = match first {
            c if c.is_ascii_alphabetic() => ScanState::Word,
            c if c.is_ascii_digit() => ScanState::Integer,
            '"' => ScanState::Str,
            '+' => ScanState::Plus,
            '=' => ScanState::Assign,
            '<' => ScanState::Less,
            '>' => ScanState::Greater,
            '!' => ScanState::Bang,
            '/' => ScanState::Slash,
            '-' => ScanState::Minus,
            _ => {
                self.advance();
                let ty = match first {
                    '(' => TokenType::LParen,
                    ')' => TokenType::RParen,
                    '[' => TokenType::LSquare,
                    ']' => TokenType::RSquare,
                    '{' => TokenType::LCurly,
                    '}' => TokenType::RCurly,
                    '*' => TokenType::Asterisk,
                    '@' => TokenType::At,
                    ':' => TokenType::Colon,
                    ',' => TokenType::Comma,
                    ';' => TokenType::Sequence,
                    '|' => TokenType::Parallel,
                    other => return Ok(Some(Token::with_content(TokenType::Error, other.to_string()))),
                };
                return Ok(Some(Token::new(ty)));
            }
        };
        // The opening quote of a string is consumed but not buffered; every other first
        // character starts the token text.
        self.advance();
        if first != '"' {
            buf.push(first);
        }

        loop {
            match state {
                ScanState::Word => match self.peek() {
                    Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
                        buf.push(c);
                        self.advance();
                    }
                    _ => return Ok(Some(resolve_word(buf))),
                },
                ScanState::Integer => match self.peek() {
                    Some(c) if c.is_ascii_digit() => {
                        buf.push(c);
                        self.advance();
                    }
                    _ => return Ok(Some(Token::with_content(TokenType::Int, buf))),
                },
                ScanState::Minus => match self.peek() {
                    Some(c) if c.is_ascii_digit() => state = ScanState::Integer,
                    _ => return Ok(Some(Token::new(TokenType::Minus))),
                },
                ScanState::Str => match self.peek() {
                    None => return Ok(Some(Token::new(TokenType::Error))),
                    Some('"') => {
                        self.advance();
                        return Ok(Some(Token::with_content(TokenType::Str, buf)));
                    }
                    Some('\\') => {
                        self.advance();
                        state = ScanState::StrEscape;
                    }
                    Some(c) => {
                        buf.push(c);
                        self.advance();
                    }
                },
                ScanState::StrEscape => {
                    let Some(c) = self.peek() else {
                        return Ok(Some(Token::new(TokenType::Error)));
                    };
                    let escaped = match c {
                        '\\' => '\\',
                        'n' => '\n',
                        't' => '\t',
                        '"' => '"',
                        other => {
                            return Err(ScanError::MalformedEscape {
                                escape: other,
                                line: self.line,
                            });
                        }
                    };
                    buf.push(escaped);
                    self.advance();
                    state = ScanState::Str;
                }
                ScanState::Plus => {
                    let ty = if self.match_char('+') { TokenType::Choice } else { TokenType::Plus };
                    return Ok(Some(Token::new(ty)));
                }
                ScanState::Assign => {
                    let ty = if self.match_char('=') { TokenType::Equal } else { TokenType::Assign };
                    return Ok(Some(Token::new(ty)));
                }
                ScanState::Less => {
                    let ty = if self.match_char('=') { TokenType::LessOrEqual } else { TokenType::Langle };
                    return Ok(Some(Token::new(ty)));
                }
                ScanState::Greater => {
                    let ty = if self.match_char('=') {
                        TokenType::GreaterOrEqual
                    } else {
                        TokenType::Rangle
                    };
                    return Ok(Some(Token::new(ty)));
                }
                ScanState::Bang => {
                    let ty = if self.match_char('=') { TokenType::NotEqual } else { TokenType::Not };
                    return Ok(Some(Token::new(ty)));
                }
                ScanState::Slash => {
                    if self.match_char('*') {
                        state = ScanState::BlockComment;
                    } else if self.match_char('/') {
                        state = ScanState::LineComment;
                    } else {
                        return Ok(Some(Token::new(TokenType::Divide)));
                    }
                }
                ScanState::BlockComment => match self.advance() {
                    None => return Ok(Some(Token::new(TokenType::Error))),
                    Some('*') => state = ScanState::BlockCommentStar,
                    Some(_) => {}
                },
                ScanState::BlockCommentStar => match self.advance() {
                    None => return Ok(Some(Token::new(TokenType::Error))),
                    Some('/') => return Ok(None),
                    Some('*') => {}
                    Some(_) => state = ScanState::BlockComment,
                },
                ScanState::LineComment => match self.advance() {
                    None => return Ok(None),
                    Some('\n') => return Ok(None),
                    Some(_) => {}
                },
            }
        }
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    /// Discard the rest of the current line after a scan error, so the caller can resume
    /// scanning at the next line. Best-effort resynchronization: the bad token is not repaired.
    pub fn read_line_after_error(&mut self) {
        tracing::debug!(line = self.line, "skipping to end of line after scan error");
        while let Some(c) = self.advance() {
            if c == '\n' {
                break;
            }
        }
    }
}

/// Check if a character separates tokens.
fn is_separator(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

/// Convenience function to scan a whole source unit.
///
/// Drains the scanner to end of file; the returned stream ends with an `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn scan(source: &str, source_name: &str) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::new(source, source_name);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quay_core::lang::keywords::{self, KeywordId};

    fn kinds(source: &str) -> Vec<TokenType> {
        scan(source, "test.qy").unwrap().into_iter().map(|t| t.ty).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = scan(k.canonical, "test.qy")
                .unwrap_or_else(|e| panic!("scan({:?}) failed: {e}", k.canonical));
            assert_eq!(tokens.len(), 2, "expected keyword + EOF for {:?}, got {tokens:?}", k.id);
            assert_eq!(tokens[0].ty, TokenType::Keyword(k.id));
            assert_eq!(tokens[0].content, k.canonical);
            assert!(tokens[1].is_eof());
        }
    }

    #[test]
    fn test_keyword_requires_exact_boundary() {
        let tokens = scan("persistent1", "test.qy").unwrap();
        assert_eq!(tokens[0].ty, TokenType::Id);
        assert_eq!(tokens[0].content, "persistent1");

        let tokens = scan("persistent", "test.qy").unwrap();
        assert_eq!(tokens[0].ty, TokenType::Keyword(KeywordId::Persistent));
    }

    #[test]
    fn test_identifiers_allow_underscores_and_digits() {
        let tokens = scan("a_b9 _x", "test.qy").unwrap();
        assert_eq!(tokens[0].content, "a_b9");
        // A leading underscore is not a letter, so it is not an identifier start.
        assert_eq!(tokens[1].ty, TokenType::Error);
        assert_eq!(tokens[1].content, "_");
        assert_eq!(tokens[2].content, "x");
    }

    #[test]
    fn test_operators_and_punctuation() {
        let tokens = kinds("+ ++ = == < <= > >= ! != / * @ : , ; | ( ) [ ] { }");
        assert_eq!(
            tokens,
            vec![
                TokenType::Plus,
                TokenType::Choice,
                TokenType::Assign,
                TokenType::Equal,
                TokenType::Langle,
                TokenType::LessOrEqual,
                TokenType::Rangle,
                TokenType::GreaterOrEqual,
                TokenType::Not,
                TokenType::NotEqual,
                TokenType::Divide,
                TokenType::Asterisk,
                TokenType::At,
                TokenType::Colon,
                TokenType::Comma,
                TokenType::Sequence,
                TokenType::Parallel,
                TokenType::LParen,
                TokenType::RParen,
                TokenType::LSquare,
                TokenType::RSquare,
                TokenType::LCurly,
                TokenType::RCurly,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_adjacent_two_char_operators() {
        // No separators at all: every pair still splits deterministically.
        let tokens = kinds("a==b<=c++d");
        assert_eq!(
            tokens,
            vec![
                TokenType::Id,
                TokenType::Equal,
                TokenType::Id,
                TokenType::LessOrEqual,
                TokenType::Id,
                TokenType::Choice,
                TokenType::Id,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_minus_before_digit_is_a_negative_literal() {
        let tokens = scan("a -5 - 5", "test.qy").unwrap();
        assert_eq!(tokens[0].ty, TokenType::Id);
        assert_eq!(tokens[1].ty, TokenType::Int);
        assert_eq!(tokens[1].content, "-5");
        assert_eq!(tokens[2].ty, TokenType::Minus);
        assert_eq!(tokens[3].ty, TokenType::Int);
        assert_eq!(tokens[3].content, "5");
    }

    #[test]
    fn test_string_escapes_decode() {
        // The two-character escape sequence decodes to one literal newline character.
        let tokens = scan(r#""a\nb""#, "test.qy").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].ty, TokenType::Str);
        assert_eq!(tokens[0].content, "a\nb");

        let tokens = scan(r#""q\"t\tb\\e""#, "test.qy").unwrap();
        assert_eq!(tokens[0].content, "q\"t\tb\\e");
    }

    #[test]
    fn test_malformed_escape_is_fatal() {
        let err = scan(r#""bad \q escape""#, "test.qy").unwrap_err();
        assert_eq!(err, ScanError::MalformedEscape { escape: 'q', line: 1 });
    }

    #[test]
    fn test_unterminated_string_yields_error_token() {
        let tokens = scan("\"open", "test.qy").unwrap();
        assert_eq!(tokens[0].ty, TokenType::Error);
    }

    #[test]
    fn test_block_comment_is_invisible() {
        let tokens = scan("x /* + + + */ y", "test.qy").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].content, "x");
        assert_eq!(tokens[1].content, "y");
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_multiline_block_comment_advances_line_counter() {
        let mut scanner = Scanner::new("x /* a\nb\nc */ y", "test.qy");
        assert_eq!(scanner.next_token().unwrap().content, "x");
        let y = scanner.next_token().unwrap();
        assert_eq!(y.content, "y");
        assert_eq!(scanner.start_line(), 3);
        assert_eq!(scanner.line(), 3);
    }

    #[test]
    fn test_line_comment_runs_to_end_of_line() {
        let tokens = scan("x // y z\nw", "test.qy").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].content, "x");
        assert_eq!(tokens[1].content, "w");
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert_eq!(kinds("x // trailing"), vec![TokenType::Id, TokenType::Eof]);
        assert_eq!(kinds("/* all comment */"), vec![TokenType::Eof]);
        // An unterminated block comment cannot be recovered into a token.
        assert_eq!(kinds("/* open"), vec![TokenType::Error, TokenType::Eof]);
    }

    #[test]
    fn test_unknown_character_yields_error_token() {
        let tokens = scan("a $ b", "test.qy").unwrap();
        assert_eq!(tokens[0].ty, TokenType::Id);
        assert_eq!(tokens[1].ty, TokenType::Error);
        assert_eq!(tokens[1].content, "$");
        assert_eq!(tokens[2].ty, TokenType::Id);
    }

    #[test]
    fn test_eof_is_terminal() {
        let mut scanner = Scanner::new("x", "test.qy");
        assert_eq!(scanner.next_token().unwrap().content, "x");
        for _ in 0..3 {
            assert!(scanner.next_token().unwrap().is_eof());
        }
        assert_eq!(scanner.error_column(), None);
    }

    #[test]
    fn test_line_and_column_accounting() {
        let mut scanner = Scanner::new("\n\n  service", "test.qy");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.ty, TokenType::Keyword(KeywordId::Service));
        assert_eq!(scanner.start_line(), 3);
        assert_eq!(scanner.error_column(), Some(2));
    }

    #[test]
    fn test_read_line_after_error_resynchronizes() {
        let mut scanner = Scanner::new("\"a \\q\" rest\nnext", "test.qy");
        let err = scanner.next_token().unwrap_err();
        assert!(matches!(err, ScanError::MalformedEscape { escape: 'q', .. }));
        scanner.read_line_after_error();
        let token = scanner.next_token().unwrap();
        assert_eq!(token.content, "next");
        assert_eq!(scanner.start_line(), 2);
    }

    #[test]
    fn test_single_line_reconstruction() {
        // For a separator-delimited line with no comments or strings, the token texts plus the
        // separators reproduce the input byte for byte.
        let source = "a = ( b ++ -1 ) ; persistent";
        let tokens = scan(source, "test.qy").unwrap();
        let units: Vec<&str> = source.split(' ').collect();
        assert_eq!(tokens.len(), units.len() + 1, "one token per unit plus EOF");
        let rebuilt: Vec<String> = tokens[..tokens.len() - 1].iter().map(|t| t.text()).collect();
        assert_eq!(rebuilt.join(" "), source);
    }

    #[test]
    fn test_lines_range_clamps() {
        let scanner = Scanner::new("a\nb\nc", "test.qy");
        assert_eq!(scanner.lines_range(2, 3), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(scanner.lines_range(2, 99), vec!["b".to_string(), "c".to_string()]);
        assert!(scanner.lines_range(0, 2).is_empty());
        assert!(scanner.lines_range(5, 2).is_empty());
        assert_eq!(scanner.line_text(3), Some("c"));
        assert_eq!(scanner.line_text(4), None);
    }
}
