//! Token types for the Quay scanner.
//!
//! The scanner uses a **registry-backed ID** for reserved words: `Keyword(KeywordId)` with the
//! stable id coming from `quay_core::lang::keywords`. Fixed symbols are their own variants, so
//! the whole lexical vocabulary is one closed enumeration.
//!
//! ## Notes
//! - Tokens are immutable values and carry no position; position is tracked by the owning
//!   [`super::Scanner`].
//! - Identifier, integer and string tokens carry their text in [`Token::content`]. Keyword
//!   tokens carry their spelling too, because keywords are identifier-shaped and may be accepted
//!   where the grammar wants a plain name.

use quay_core::lang::keywords::{self, KeywordId};

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A reserved word, identified by its registry id.
    Keyword(KeywordId),

    // ========== Single-character punctuation ==========
    Comma,
    LParen,
    RParen,
    LSquare,
    RSquare,
    LCurly,
    RCurly,
    Asterisk,
    At,
    Colon,
    /// `;`
    Sequence,
    /// `|`
    Parallel,

    // ========== Operators ==========
    Plus,
    /// `++`
    Choice,
    Minus,
    Divide,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `<`
    Langle,
    /// `>`
    Rangle,
    LessOrEqual,
    GreaterOrEqual,
    /// `!`
    Not,
    NotEqual,

    // ========== Variable-content categories ==========
    Id,
    Int,
    Str,

    // ========== Terminals ==========
    Eof,
    /// An unrecognized character, or a token left unterminated at end of input.
    Error,
}

impl TokenType {
    /// The fixed source spelling of this token type, when it has one.
    ///
    /// Variable-content categories (`Id`, `Int`, `Str`) and the terminals have no fixed
    /// spelling and return `None`.
    pub fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            TokenType::Keyword(id) => keywords::as_str(id),
            TokenType::Comma => ",",
            TokenType::LParen => "(",
            TokenType::RParen => ")",
            TokenType::LSquare => "[",
            TokenType::RSquare => "]",
            TokenType::LCurly => "{",
            TokenType::RCurly => "}",
            TokenType::Asterisk => "*",
            TokenType::At => "@",
            TokenType::Colon => ":",
            TokenType::Sequence => ";",
            TokenType::Parallel => "|",
            TokenType::Plus => "+",
            TokenType::Choice => "++",
            TokenType::Minus => "-",
            TokenType::Divide => "/",
            TokenType::Assign => "=",
            TokenType::Equal => "==",
            TokenType::Langle => "<",
            TokenType::Rangle => ">",
            TokenType::LessOrEqual => "<=",
            TokenType::GreaterOrEqual => ">=",
            TokenType::Not => "!",
            TokenType::NotEqual => "!=",
            TokenType::Id | TokenType::Int | TokenType::Str | TokenType::Eof | TokenType::Error => return None,
        })
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.lexeme() {
            Some(lexeme) => write!(f, "{lexeme}"),
            None => match self {
                TokenType::Id => write!(f, "identifier"),
                TokenType::Int => write!(f, "integer literal"),
                TokenType::Str => write!(f, "string literal"),
                TokenType::Eof => write!(f, "end of file"),
                TokenType::Error => write!(f, "error"),
                _ => unreachable!("every fixed token type has a lexeme"),
            },
        }
    }
}

/// A token: a [`TokenType`] tag plus the text payload for variable-content categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub ty: TokenType,
    pub content: String,
}

impl Token {
    /// A token with no text payload.
    pub fn new(ty: TokenType) -> Self {
        Self {
            ty,
            content: String::new(),
        }
    }

    /// A token carrying text.
    pub fn with_content(ty: TokenType, content: impl Into<String>) -> Self {
        Self {
            ty,
            content: content.into(),
        }
    }

    /// The end-of-file token.
    pub fn eof() -> Self {
        Self::new(TokenType::Eof)
    }

    pub fn is(&self, ty: TokenType) -> bool {
        self.ty == ty
    }

    pub fn is_not(&self, ty: TokenType) -> bool {
        self.ty != ty
    }

    pub fn is_eof(&self) -> bool {
        self.ty == TokenType::Eof
    }

    /// Whether this token can serve as a name.
    ///
    /// Every Quay keyword is identifier-shaped, so the identifier class covers plain identifiers
    /// and keyword tokens alike; the grammar decides where a reserved word is actually allowed.
    pub fn is_identifier(&self) -> bool {
        matches!(self.ty, TokenType::Id | TokenType::Keyword(_))
    }

    /// The source text this token stands for: the fixed lexeme for symbol and keyword tokens,
    /// the payload for identifiers and integers. String tokens are re-quoted without re-escaping,
    /// so the result is only byte-faithful for escape-free literals.
    pub fn text(&self) -> String {
        match self.ty {
            TokenType::Str => format!("\"{}\"", self.content),
            _ => match self.ty.lexeme() {
                Some(lexeme) => lexeme.to_string(),
                None => self.content.clone(),
            },
        }
    }
}

/// Resolve an accumulated word to a token: a keyword on exact registry match, otherwise an
/// identifier. Keyword tokens keep their spelling as content.
pub fn resolve_word(word: String) -> Token {
    match keywords::from_str(&word) {
        Some(id) => Token::with_content(TokenType::Keyword(id), word),
        None => Token::with_content(TokenType::Id, word),
    }
}
