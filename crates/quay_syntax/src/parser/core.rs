/// Token pipeline: cursor, lookahead injection, and transactional backtracking.
///
/// A `ParserCore` owns exactly one [`Scanner`] for the lifetime of exactly one parse. The pair
/// is single-threaded, blocking, and **not re-entrant**: sharing one instance across logical
/// parses, or re-entering it from within its own call path, is a programming error rather than
/// a recoverable condition.
pub struct ParserCore<'s> {
    scanner: Scanner<'s>,
    /// The current token. Always valid: construction primes the first token.
    token: Token,
    /// Forward lookahead queue: tokens already produced but not yet consumed. Drained FIFO
    /// before the scanner is asked for fresh input.
    lookahead: VecDeque<Token>,
    /// The backup session, when one is active: every token advanced past is retained here so
    /// the whole sequence can be replayed on rollback. At most one session at a time.
    backup: Option<Vec<Token>>,
    /// Whether a newline boundary was crossed while acquiring the current token.
    met_newline: bool,
    /// Line on which the most recently scanned token started; drives `met_newline`.
    last_token_line: usize,
}

impl<'s> ParserCore<'s> {
    /// Wrap `scanner` and prime the first token, so the cursor is valid from construction on.
    ///
    /// ## Errors
    /// Fails if the very first token cannot be scanned.
    pub fn new(scanner: Scanner<'s>) -> Result<Self, ParseError> {
        let mut core = Self {
            scanner,
            token: Token::eof(),
            lookahead: VecDeque::new(),
            backup: None,
            met_newline: false,
            last_token_line: 1,
        };
        core.next_token()?;
        Ok(core)
    }

    /// The current token.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Pull the next token: from the lookahead queue when it has entries, from the scanner
    /// otherwise.
    fn read_token(&mut self) -> Result<(), ParseError> {
        if let Some(buffered) = self.lookahead.pop_front() {
            self.token = buffered;
            return Ok(());
        }
        match self.scanner.next_token() {
            Ok(token) => {
                self.met_newline = self.scanner.start_line() > self.last_token_line;
                self.last_token_line = self.scanner.start_line();
                self.token = token;
                Ok(())
            }
            Err(error) => Err(self.scan_failure(error)),
        }
    }

    /// Advance the cursor.
    ///
    /// When a backup session is active, the token advanced *to* is captured for possible
    /// replay. The newline flag is reset and re-derived from the scanner's line accounting; a
    /// token served from the lookahead queue never sets it.
    pub fn next_token(&mut self) -> Result<(), ParseError> {
        self.met_newline = false;
        self.read_token()?;
        if let Some(buffer) = self.backup.as_mut() {
            buffer.push(self.token.clone());
        }
        Ok(())
    }

    /// Advance the cursor, failing if it lands on end-of-file.
    pub fn next_token_or_fail_on_eof(&mut self) -> Result<(), ParseError> {
        self.next_token()?;
        if self.token.is_eof() {
            return Err(self.fail("unexpected end of file"));
        }
        Ok(())
    }

    /// Whether a newline boundary was crossed while acquiring the current token. Consulted by
    /// layout-sensitive grammar rules.
    pub fn has_met_newline(&self) -> bool {
        self.met_newline
    }

    // ========================================================================
    // Token injection
    // ========================================================================

    /// Append `token` to the lookahead queue. Injected tokens are served, in insertion order,
    /// before any token subsequently read from the scanner.
    pub fn add_token(&mut self, token: Token) {
        self.lookahead.push_back(token);
    }

    /// Append a whole sequence to the lookahead queue, preserving its order.
    pub fn add_tokens(&mut self, tokens: impl IntoIterator<Item = Token>) {
        self.lookahead.extend(tokens);
    }

    /// Splice `prefix` in front of the current token: the next advance serves `prefix`, the one
    /// after that serves the current token again. Used to un-consume a peeked token or inject a
    /// derived one without re-scanning characters.
    pub fn prepend_token(&mut self, prefix: Token) {
        self.lookahead.push_back(prefix);
        self.lookahead.push_back(self.token.clone());
    }

    // ========================================================================
    // Backtracking
    // ========================================================================

    /// Begin a backup session: the current token and every token advanced past from here on are
    /// retained for possible replay.
    ///
    /// ## Panics
    /// If a session is already active. Nested or concurrent sessions are undefined in this
    /// design and are rejected outright.
    pub fn start_backup(&mut self) {
        assert!(self.backup.is_none(), "a backup session is already active");
        self.backup = Some(vec![self.token.clone()]);
    }

    /// Abandon the speculation: re-inject the captured sequence into the lookahead queue and
    /// advance once, leaving the cursor on the token that was current when [`Self::start_backup`]
    /// was called. The caller can then retry a different grammar alternative over the identical
    /// tokens without re-scanning characters.
    pub fn recover_backup(&mut self) -> Result<(), ParseError> {
        if let Some(buffer) = self.backup.take() {
            if !buffer.is_empty() {
                tracing::debug!(replayed = buffer.len(), "rolling back speculative parse");
                self.lookahead.extend(buffer);
                self.next_token()?;
            }
        }
        Ok(())
    }

    /// Commit the speculation: end the session and drop the captured tokens.
    pub fn discard_backup(&mut self) {
        self.backup = None;
    }

    // ========================================================================
    // Position surface
    // ========================================================================

    /// Current scan line.
    pub fn line(&self) -> usize {
        self.scanner.line()
    }

    pub fn start_line(&self) -> usize {
        self.scanner.start_line()
    }

    /// Pin the first line of the construct under parse, widening subsequent diagnostics.
    pub fn set_start_line(&mut self, line: usize) {
        self.scanner.set_start_line(line);
    }

    pub fn end_line(&self) -> usize {
        self.scanner.end_line()
    }

    pub fn set_end_line(&mut self, line: usize) {
        self.scanner.set_end_line(line);
    }

    pub fn source_name(&self) -> &str {
        self.scanner.source_name()
    }

    /// Discard the rest of the offending line so scanning can resume on the next one. Used by
    /// batch tooling that wants several diagnostics from a single run.
    pub fn read_line_after_error(&mut self) {
        self.scanner.read_line_after_error();
    }
}
