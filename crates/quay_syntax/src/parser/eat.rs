/// Consumption combinators.
///
/// Grammar productions consume tokens exclusively through these. A mismatch never advances the
/// cursor and never panics: it builds a positioned [`ParseError`] and aborts the current
/// alternative through `Err`, which the caller propagates to the nearest backtracking boundary
/// or to the top level.
impl<'s> ParserCore<'s> {
    /// Fail unless the current token has type `ty`; the cursor does not move.
    ///
    /// When the expected type has a fixed spelling, it becomes the suggestion vocabulary, so a
    /// near-miss identifier produces a correction.
    pub fn assert_token(&mut self, ty: TokenType, message: &str) -> Result<(), ParseError> {
        if self.token.is_not(ty) {
            return Err(match ty.lexeme() {
                Some(lexeme) => self.fail_expecting(message, &[lexeme]),
                None => self.fail(message),
            });
        }
        Ok(())
    }

    /// Scope-aware variant of [`Self::assert_token`]: on failure, the diagnostic is tailored to
    /// the enclosing construct.
    pub fn assert_token_in_scope(
        &mut self,
        ty: TokenType,
        message: &str,
        scope_name: &str,
        scope: DeclScope,
    ) -> Result<(), ParseError> {
        if self.token.is_not(ty) {
            return Err(self.fail_in_scope(message, scope_name, scope));
        }
        Ok(())
    }

    /// Assert the current token's type, then advance.
    pub fn eat(&mut self, ty: TokenType, message: &str) -> Result<(), ParseError> {
        self.assert_token(ty, message)?;
        self.next_token()
    }

    /// Scope-aware variant of [`Self::eat`].
    pub fn eat_in_scope(
        &mut self,
        ty: TokenType,
        message: &str,
        scope_name: &str,
        scope: DeclScope,
    ) -> Result<(), ParseError> {
        self.assert_token_in_scope(ty, message, scope_name, scope)?;
        self.next_token()
    }

    /// Fail unless the current token can serve as a name: an identifier, or any keyword.
    /// Quay keywords are identifier-shaped and the grammar decides where they are reserved.
    pub fn assert_identifier(&mut self, message: &str) -> Result<(), ParseError> {
        if !self.token.is_identifier() {
            return Err(self.fail(message));
        }
        Ok(())
    }

    /// Assert the identifier class, advance, and return the name.
    pub fn eat_identifier(&mut self, message: &str) -> Result<String, ParseError> {
        self.assert_identifier(message)?;
        let name = self.token.content.clone();
        self.next_token()?;
        Ok(name)
    }

    /// Eat a context-sensitive keyword: an identifier token whose text is exactly `keyword`.
    /// Used for vocabulary that is only reserved in one position (protocol names, modifiers).
    pub fn eat_keyword(&mut self, keyword: &str, message: &str) -> Result<(), ParseError> {
        self.assert_token(TokenType::Id, message)?;
        if self.token.content != keyword {
            return Err(self.fail_expecting(message, &[keyword]));
        }
        self.next_token()
    }

    /// Advance past the current token only if its type is one of `types`; otherwise a no-op.
    /// Used for optional grammar particles such as trailing separators.
    pub fn maybe_eat(&mut self, types: &[TokenType]) -> Result<(), ParseError> {
        if types.iter().any(|ty| self.token.is(*ty)) {
            self.next_token()?;
        }
        Ok(())
    }
}
