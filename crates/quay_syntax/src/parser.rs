//! Parsing support layer for the Quay language.
//!
//! Grammar-specific parsers do not read the scanner directly: they drive a [`ParserCore`], which
//! presents a single-token-lookahead cursor with token injection, transactional backtracking,
//! and the eating combinators, and which turns every consumption failure into a positioned
//! [`ParseError`].
//!
//! ## Examples
//!
//! ```rust,no_run
//! use quay_syntax::parser::ParserCore;
//! use quay_syntax::scanner::{Scanner, TokenType};
//! use quay_core::lang::keywords::KeywordId;
//!
//! let scanner = Scanner::new("service Calculator { }", "calculator.qy");
//! let mut p = ParserCore::new(scanner).unwrap();
//! p.eat(TokenType::Keyword(KeywordId::Service), "expected service").unwrap();
//! let name = p.eat_identifier("expected service name").unwrap();
//! assert_eq!(name, "Calculator");
//! ```

use std::collections::VecDeque;

use quay_core::lang::scopes::{self, DeclScope};

use crate::context::ParsingContext;
use crate::diagnostics::{ParseError, ScanError, help_message};
use crate::scanner::{Scanner, Token, TokenType};

// NOTE: This module is split across multiple files using `include!` to keep all parsing-core
// methods in the same Rust module (preserving privacy + call patterns) while avoiding a single
// large source file.

include!("parser/core.rs");
include!("parser/eat.rs");
include!("parser/errors.rs");
include!("parser/tests.rs");
