//! Quay language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords and the
//! per-scope vocabularies used by scope-aware diagnostics.
//!
//! The design goal is to avoid stringly-typed checks scattered across the front end. Callers work
//! with **stable IDs** (`KeywordId`, `DeclScope`) and look up spellings via registry tables.
//!
//! ## Examples
//! ```rust
//! use quay_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("service"), Some(KeywordId::Service));
//! assert_eq!(keywords::as_str(KeywordId::Service), "service");
//! ```

pub mod keywords;
pub mod scopes;
