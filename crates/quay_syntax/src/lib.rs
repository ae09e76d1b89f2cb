//! Syntax frontend for the Quay language: scanner, parsing support layer, diagnostics.
//!
//! Two layered components, consumed bottom-up by grammar-specific parsers:
//!
//! - [`scanner`] converts source text into a lazy, restartable stream of tokens, tracking line
//!   numbers and the raw source lines for later diagnostic reconstruction.
//! - [`parser`] wraps one scanner per parse and exposes a pull-based token cursor with lookahead
//!   injection, transactional backup/rollback, and the token-consumption combinators grammar
//!   productions are built from. It also owns diagnostic construction: a failed assertion becomes
//!   a positioned, human-readable [`diagnostics::ParseError`], with fuzzy-matched corrections
//!   where the enclosing construct has a known vocabulary.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no grammar productions, no syntax-tree types.
//! - Keyword identity and the diagnostic-scope vocabularies come from `quay_core::lang`.
//!
//! ## Examples
//! ```rust
//! use quay_syntax::scanner;
//!
//! let tokens = scanner::scan("service Calculator { }", "calculator.qy").unwrap();
//! assert_eq!(tokens.len(), 5); // service, Calculator, {, }, EOF
//! ```

pub mod context;
pub mod diagnostics;
pub mod parser;
pub mod scanner;
pub mod suggest;
